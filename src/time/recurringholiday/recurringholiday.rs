use chrono::NaiveDate;


pub trait RecurringHoliday: Send + Sync {

    /// Nominal date of the holiday in `year`, before any weekend adjustment.
    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;
}
