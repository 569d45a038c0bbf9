use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vacation input: either a plain number of days or the concrete dates taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VacationDays {
    Count(u32),
    Dates(Vec<NaiveDate>)
}

impl Default for VacationDays {
    fn default() -> Self {
        VacationDays::Count(0)
    }
}

impl From<u32> for VacationDays {
    fn from(count: u32) -> Self {
        VacationDays::Count(count)
    }
}

impl From<Vec<NaiveDate>> for VacationDays {
    fn from(dates: Vec<NaiveDate>) -> Self {
        VacationDays::Dates(dates)
    }
}

impl From<&[NaiveDate]> for VacationDays {
    fn from(dates: &[NaiveDate]) -> Self {
        VacationDays::Dates(dates.to_vec())
    }
}
