use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefParameters {
    /// Share of the apportioned costs given back, 30%.
    #[serde(default = "default_relief_rate")]
    pub relief_rate: Decimal,
    /// Costs are apportioned per day of a 365-day year, also in leap years.
    #[serde(default = "default_days_divisor")]
    pub days_divisor: u32
}

fn default_relief_rate() -> Decimal {
    Decimal::new(30, 2)
}

fn default_days_divisor() -> u32 {
    365
}

impl Default for ReliefParameters {
    fn default() -> Self {
        ReliefParameters {
            relief_rate: default_relief_rate(),
            days_divisor: default_days_divisor()
        }
    }
}
