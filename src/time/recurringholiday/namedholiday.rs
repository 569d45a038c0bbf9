use std::sync::Arc;

use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::WeekendAdjustmentRule;
use crate::time::calendar::publicholiday::PublicHoliday;

const OBSERVED_SUFFIX: &str = " (Observed)";

/// A recurring holiday with its display name, an optional first year and the
/// weekend adjustment applied to its nominal date.
#[derive(Clone)]
pub struct NamedHoliday {
    name: String,
    rule: Arc<dyn RecurringHoliday>,
    first_year: Option<i32>,
    weekend_adjustment: WeekendAdjustmentRule
}

impl NamedHoliday {
    pub fn new(name: impl Into<String>, rule: Arc<dyn RecurringHoliday>) -> NamedHoliday {
        NamedHoliday {
            name: name.into(),
            rule,
            first_year: None,
            weekend_adjustment: WeekendAdjustmentRule::default()
        }
    }

    pub fn since(mut self, first_year: i32) -> NamedHoliday {
        self.first_year = Some(first_year);
        self
    }

    pub fn with_weekend_adjustment(mut self, weekend_adjustment: WeekendAdjustmentRule) -> NamedHoliday {
        self.weekend_adjustment = weekend_adjustment;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self, year: i32) -> bool {
        self.first_year.is_none_or(|first| year >= first)
    }

    pub fn nominal_date(&self, year: i32) -> Option<NaiveDate> {
        if !self.is_active(year) {
            return None;
        }
        self.rule.get_holiday(year)
    }

    pub fn observe(&self, year: i32) -> Option<PublicHoliday> {
        let nominal = self.nominal_date(year)?;
        let observed = self.weekend_adjustment.adjust(nominal);
        if observed == nominal {
            Some(PublicHoliday::new(self.name.clone(), nominal))
        } else {
            Some(PublicHoliday::new(format!("{}{}", self.name, OBSERVED_SUFFIX), observed))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
    use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_gate_excludes_earlier_years() {
        let brigid = NamedHoliday::new(
            "St. Brigid's Day",
            Arc::new(NthWeekdayHoliday::first(2, Weekday::Mon).unwrap())
        ).since(2023);
        assert!(brigid.observe(2022).is_none());
        let observed = brigid.observe(2023).unwrap();
        assert_eq!(observed.name(), "St. Brigid's Day");
        assert_eq!(observed.date(), date(2023, 2, 6));
    }

    #[test]
    fn shifted_holiday_is_renamed() {
        let new_year = NamedHoliday::new("New Year's Day", Arc::new(FixedDateHoliday::new(1, 1).unwrap()))
            .with_weekend_adjustment(WeekendAdjustmentRule::sunday_to_monday());
        let observed = new_year.observe(2023).unwrap();
        assert_eq!(observed.name(), "New Year's Day (Observed)");
        assert_eq!(observed.date(), date(2023, 1, 2));

        let unshifted = new_year.observe(2022).unwrap();
        assert_eq!(unshifted.name(), "New Year's Day");
        assert_eq!(unshifted.date(), date(2022, 1, 1));
    }
}
