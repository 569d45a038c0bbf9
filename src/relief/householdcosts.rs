use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Yearly household bills eligible for relief.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdCosts {
    electricity: Decimal,
    internet: Decimal,
    heating: Decimal
}

impl HouseholdCosts {
    pub fn new(electricity: Decimal, internet: Decimal, heating: Decimal) -> HouseholdCosts {
        HouseholdCosts { electricity, internet, heating }
    }

    pub fn electricity(&self) -> Decimal {
        self.electricity
    }

    pub fn internet(&self) -> Decimal {
        self.internet
    }

    pub fn heating(&self) -> Decimal {
        self.heating
    }

    pub fn total(&self) -> Decimal {
        self.electricity + self.internet + self.heating
    }
}
