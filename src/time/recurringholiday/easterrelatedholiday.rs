use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;

/// Where the date of Easter Sunday comes from.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum EasterSource {
    /// Anonymous Gregorian algorithm, valid for 1583..=4099.
    #[default]
    Gregorian,
    /// Fixed table covering 2021..=2024 only. Other years have no Easter.
    LookupTable
}

// Easter Sunday for the years the lookup table covers.
const EASTER_SUNDAY_TABLE: [(i32, u32, u32); 4] = [
    (2021, 4, 4),
    (2022, 4, 17),
    (2023, 4, 9),
    (2024, 3, 31)
];

#[derive(Clone)]
pub struct EasterRelatedHoliday {
    easter_source: EasterSource,
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(easter_source: EasterSource, shift_days: i32) -> Option<EasterRelatedHoliday> {
        // Keep the holiday within the same calendar year.
        if !(-80..=80).contains(&shift_days) {
            return None;
        }
        Some(EasterRelatedHoliday {
            easter_source,
            shift_days
        })
    }

    pub fn easter_monday(easter_source: EasterSource) -> EasterRelatedHoliday {
        EasterRelatedHoliday { easter_source, shift_days: 1 }
    }

    pub fn get_easter_day(&self, year: i32) -> Option<NaiveDate> {
        match self.easter_source {
            EasterSource::Gregorian => gregorian_easter(year),
            EasterSource::LookupTable => EASTER_SUNDAY_TABLE
                .iter()
                .find(|(y, _, _)| *y == year)
                .and_then(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        }
    }
}

fn gregorian_easter(year: i32) -> Option<NaiveDate> {
    if !(1583..=4099).contains(&year) {
        return None;
    }

    let g = year % 19;
    let c = year / 100;
    let c_div_4 = c / 4;
    let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let h_div_28 = h / 28;
    let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
    let p = i - j;

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let easter_day = self.get_easter_day(year)?;
        let shift = Days::new(self.shift_days.unsigned_abs() as u64);
        if self.shift_days >= 0 {
            easter_day.checked_add_days(shift)
        } else {
            easter_day.checked_sub_days(shift)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let rule = EasterRelatedHoliday::new(EasterSource::Gregorian, 0).unwrap();
        assert_eq!(rule.get_holiday(2000), Some(date(2000, 4, 23)));
        assert_eq!(rule.get_holiday(2019), Some(date(2019, 4, 21)));
        assert_eq!(rule.get_holiday(2025), Some(date(2025, 4, 20)));
        assert_eq!(rule.get_holiday(2038), Some(date(2038, 4, 25)));
        assert_eq!(rule.get_holiday(2285), Some(date(2285, 3, 22)));
    }

    #[test]
    fn easter_monday_2024_is_april_first() {
        let rule = EasterRelatedHoliday::easter_monday(EasterSource::Gregorian);
        assert_eq!(rule.get_holiday(2024), Some(date(2024, 4, 1)));
    }

    #[test]
    fn lookup_table_matches_algorithm_where_it_has_data() {
        let computed = EasterRelatedHoliday::easter_monday(EasterSource::Gregorian);
        let table = EasterRelatedHoliday::easter_monday(EasterSource::LookupTable);
        for year in 2021..=2024 {
            assert_eq!(table.get_holiday(year), computed.get_holiday(year), "year {year}");
        }
    }

    #[test]
    fn lookup_table_has_no_entry_outside_its_years() {
        let table = EasterRelatedHoliday::easter_monday(EasterSource::LookupTable);
        assert!(table.get_holiday(2020).is_none());
        assert!(table.get_holiday(2025).is_none());
    }

    #[test]
    fn algorithm_range_is_bounded() {
        let rule = EasterRelatedHoliday::easter_monday(EasterSource::Gregorian);
        assert!(rule.get_holiday(1582).is_none());
        assert!(rule.get_holiday(4100).is_none());
    }

    #[test]
    fn negative_shift_gives_good_friday() {
        let good_friday = EasterRelatedHoliday::new(EasterSource::Gregorian, -2).unwrap();
        assert_eq!(good_friday.get_holiday(2024), Some(date(2024, 3, 29)));
        assert!(EasterRelatedHoliday::new(EasterSource::Gregorian, 200).is_none());
    }
}
