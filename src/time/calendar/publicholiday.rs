use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An observed public holiday. `name` ends in " (Observed)" when the date was
/// moved off its nominal day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    name: String,
    date: NaiveDate
}

impl PublicHoliday {
    pub fn new(name: String, date: NaiveDate) -> PublicHoliday {
        PublicHoliday { name, date }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
