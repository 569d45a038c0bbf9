use std::collections::HashSet;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use tracing::trace;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::publicholiday::PublicHoliday;
use crate::time::recurringholiday::namedholiday::NamedHoliday;

/// Weekend days as a bitmask, bit 0 = Monday .. bit 6 = Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }
}

#[derive(Clone)]
pub struct SimpleCalendar {
    name: String,
    weekends: WeekendMask,
    holidays: Vec<NamedHoliday>
}

impl SimpleCalendar {
    /// Creates a new SimpleCalendar.
    ///
    /// # Arguments
    /// * `name` - Calendar name, used as the configuration key
    /// * `weekends` - Set of weekdays that are considered weekends
    /// * `holidays` - Holiday rules, in output order
    pub fn new(
        name: impl Into<String>,
        weekends: HashSet<Weekday>,
        holidays: Vec<NamedHoliday>
    ) -> SimpleCalendar {
        SimpleCalendar {
            name: name.into(),
            weekends: WeekendMask::new(&weekends),
            holidays
        }
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    fn public_holidays(&self, year: i32) -> Vec<PublicHoliday> {
        let mut public_holidays = Vec::with_capacity(self.holidays.len());
        for holiday in self.holidays.iter() {
            match holiday.observe(year) {
                Some(observed) => public_holidays.push(observed),
                None => trace!(calendar = %self.name, holiday = holiday.name(), year, "no date this year"),
            }
        }
        public_holidays
    }
}
