use chrono::{Datelike, NaiveDate};

use super::publicholiday::PublicHoliday;

pub trait HolidayCalendar: Send + Sync {
    fn name(&self) -> &str;

    fn is_weekend(&self, d: NaiveDate) -> bool;

    /// Observed public holidays of `year`, in the order the calendar defines
    /// them.
    fn public_holidays(&self, year: i32) -> Vec<PublicHoliday>;

    /// Matches on day of month and month against the holidays of `d`'s year.
    fn is_public_holiday(&self, d: NaiveDate) -> bool {
        self.public_holidays(d.year())
            .iter()
            .any(|h| h.date().day() == d.day() && h.date().month() == d.month())
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend(d) && !self.is_public_holiday(d)
    }
}
