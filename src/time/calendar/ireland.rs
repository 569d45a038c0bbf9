//! Public holidays of the Republic of Ireland.
//!
//! Holidays landing on a Sunday are observed on the following Monday, except
//! Easter Monday which never lands on one. Saturday holidays are not moved.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Weekday;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::publicholiday::PublicHoliday;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterRelatedHoliday,
    EasterSource
};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::namedholiday::NamedHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;

pub const IRELAND: &str = "Ireland";

pub const ST_BRIGIDS_DAY_FIRST_YEAR: i32 = 2023;

const FIXED_DATE_HOLIDAYS: [(&str, u32, u32); 4] = [
    ("New Year's Day", 1, 1),
    ("St. Patrick's Day", 3, 17),
    ("Christmas Day", 12, 25),
    ("St. Stephen's Day", 12, 26)
];

const FIRST_MONDAY_HOLIDAYS: [(&str, u32); 3] = [
    ("May Bank Holiday", 5),
    ("June Bank Holiday", 6),
    ("August Bank Holiday", 8)
];

fn first_monday(name: &str, month: u32) -> Option<NamedHoliday> {
    let rule = NthWeekdayHoliday::first(month, Weekday::Mon)?;
    Some(NamedHoliday::new(name, Arc::new(rule))
        .with_weekend_adjustment(WeekendAdjustmentRule::sunday_to_monday()))
}

/// Irish holiday rules, in output order: fixed dates, St. Brigid's Day,
/// Easter Monday, the May/June/August bank holidays, then October.
pub fn ireland_holidays(easter_source: EasterSource) -> Vec<NamedHoliday> {
    let sunday_to_monday = WeekendAdjustmentRule::sunday_to_monday();
    let mut holidays: Vec<NamedHoliday> = FIXED_DATE_HOLIDAYS
        .iter()
        .filter_map(|&(name, month, day)| {
            let rule = FixedDateHoliday::new(month, day)?;
            Some(NamedHoliday::new(name, Arc::new(rule)).with_weekend_adjustment(sunday_to_monday.clone()))
        })
        .collect();

    holidays.extend(
        first_monday("St. Brigid's Day", 2).map(|h| h.since(ST_BRIGIDS_DAY_FIRST_YEAR))
    );

    holidays.push(NamedHoliday::new(
        "Easter Monday",
        Arc::new(EasterRelatedHoliday::easter_monday(easter_source))
    ));

    holidays.extend(
        FIRST_MONDAY_HOLIDAYS
            .iter()
            .filter_map(|&(name, month)| first_monday(name, month))
    );

    holidays.extend(
        LastWeekdayHoliday::new(10, Weekday::Mon).map(|rule| {
            NamedHoliday::new("October Bank Holiday", Arc::new(rule))
                .with_weekend_adjustment(sunday_to_monday)
        })
    );

    holidays
}

pub fn ireland_calendar(easter_source: EasterSource) -> SimpleCalendar {
    let weekends: HashSet<Weekday> = [Weekday::Sat, Weekday::Sun].into_iter().collect();
    SimpleCalendar::new(IRELAND, weekends, ireland_holidays(easter_source))
}

/// Observed Irish public holidays of `year`, Easter from the Gregorian
/// algorithm.
pub fn get_public_holidays(year: i32) -> Vec<PublicHoliday> {
    ireland_calendar(EasterSource::Gregorian).public_holidays(year)
}
