use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::relief::householdcosts::HouseholdCosts;

/// Answers collected across the questionnaire. `None` means not answered yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub worked_from_home: Option<bool>,
    pub electricity_cost: Option<Decimal>,
    pub internet_cost: Option<Decimal>,
    pub heating_cost: Option<Decimal>,
    pub remote_allowance: Option<Decimal>,
    pub working_days: Option<u32>,
}

/// A partial update: only the `Some` fields overwrite the snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormUpdate {
    pub worked_from_home: Option<bool>,
    pub electricity_cost: Option<Decimal>,
    pub internet_cost: Option<Decimal>,
    pub heating_cost: Option<Decimal>,
    pub remote_allowance: Option<Decimal>,
    pub working_days: Option<u32>,
}

impl FormData {
    pub fn apply(&self, update: &FormUpdate) -> FormData {
        FormData {
            worked_from_home: update.worked_from_home.or(self.worked_from_home),
            electricity_cost: update.electricity_cost.or(self.electricity_cost),
            internet_cost: update.internet_cost.or(self.internet_cost),
            heating_cost: update.heating_cost.or(self.heating_cost),
            remote_allowance: update.remote_allowance.or(self.remote_allowance),
            working_days: update.working_days.or(self.working_days),
        }
    }

    /// Costs with unanswered fields counted as zero.
    pub fn household_costs(&self) -> HouseholdCosts {
        HouseholdCosts::new(
            self.electricity_cost.unwrap_or_default(),
            self.internet_cost.unwrap_or_default(),
            self.heating_cost.unwrap_or_default(),
        )
    }
}

impl FormUpdate {
    pub fn worked_from_home(worked_from_home: bool) -> FormUpdate {
        FormUpdate { worked_from_home: Some(worked_from_home), ..Default::default() }
    }

    pub fn costs(costs: &HouseholdCosts) -> FormUpdate {
        FormUpdate {
            electricity_cost: Some(costs.electricity()),
            internet_cost: Some(costs.internet()),
            heating_cost: Some(costs.heating()),
            ..Default::default()
        }
    }

    pub fn remote_allowance(remote_allowance: Decimal) -> FormUpdate {
        FormUpdate { remote_allowance: Some(remote_allowance), ..Default::default() }
    }

    pub fn working_days(working_days: u32) -> FormUpdate {
        FormUpdate { working_days: Some(working_days), ..Default::default() }
    }
}
