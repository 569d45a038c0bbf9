use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let first_of_next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, self.month + 1, 1)?
        };

        // Days to step back from the first of next month to reach the weekday
        let current_weekday = first_of_next_month.weekday();
        let days_back = ((current_weekday.num_days_from_monday() as i32
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7) as u64;
        let days_back = if days_back == 0 { 7 } else { days_back };

        first_of_next_month.checked_sub_days(Days::new(days_back))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Last Monday of October as 31 - ((w + 6) mod 7), w = 0 for Sunday.
    fn last_october_monday_by_offset(year: i32) -> NaiveDate {
        let day31 = NaiveDate::from_ymd_opt(year, 10, 31).unwrap();
        let w = day31.weekday().num_days_from_sunday();
        NaiveDate::from_ymd_opt(year, 10, 31 - (w + 6) % 7).unwrap()
    }

    #[test]
    fn october_bank_holiday() {
        let october = LastWeekdayHoliday::new(10, Weekday::Mon).unwrap();
        assert_eq!(october.get_holiday(2024), NaiveDate::from_ymd_opt(2024, 10, 28));
        // October 31, 2022 is itself a Monday.
        assert_eq!(october.get_holiday(2022), NaiveDate::from_ymd_opt(2022, 10, 31));
    }

    #[test]
    fn december_rolls_over_year_boundary() {
        let december = LastWeekdayHoliday::new(12, Weekday::Fri).unwrap();
        assert_eq!(december.get_holiday(2024), NaiveDate::from_ymd_opt(2024, 12, 27));
    }

    #[test]
    fn agrees_with_day_offset_formula() {
        let october = LastWeekdayHoliday::new(10, Weekday::Mon).unwrap();
        for year in 1990..2060 {
            assert_eq!(october.get_holiday(year), Some(last_october_monday_by_offset(year)));
        }
    }
}
