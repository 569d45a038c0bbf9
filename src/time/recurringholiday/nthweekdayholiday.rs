use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    /// The first `weekday` of `month`, e.g. the June bank holiday.
    pub fn first(month: u32, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        NthWeekdayHoliday::new(month, 1, weekday)
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(
            year,
            self.month,
            self.weekday,
            self.n
        )
    }
}
