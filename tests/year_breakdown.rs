use chrono::{Datelike, NaiveDate, Weekday};

use wfhrelief::breakdown::dayclassifier::DayClassifier;
use wfhrelief::breakdown::vacationdays::VacationDays;
use wfhrelief::breakdown::yearbreakdown::YearBreakdown;
use wfhrelief::time::calendar::ireland::ireland_calendar;
use wfhrelief::time::recurringholiday::easterrelatedholiday::EasterSource;
use wfhrelief::{get_public_holidays, get_total_days_in_year, get_year_breakdown};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn counts(breakdown: &YearBreakdown) -> (u32, u32, u32, u32, u32) {
    (
        breakdown.total_days(),
        breakdown.weekend_days(),
        breakdown.public_holidays(),
        breakdown.vacation_days(),
        breakdown.working_days(),
    )
}

#[test]
fn total_days() {
    assert_eq!(get_total_days_in_year(2024), 366);
    assert_eq!(get_total_days_in_year(2023), 365);
}

#[test]
fn known_years_without_vacation() {
    assert_eq!(counts(&get_year_breakdown(2021, 0)), (365, 104, 8, 0, 253));
    assert_eq!(counts(&get_year_breakdown(2022, 0)), (365, 105, 7, 0, 253));
    assert_eq!(counts(&get_year_breakdown(2023, 0)), (365, 105, 10, 0, 250));
    assert_eq!(counts(&get_year_breakdown(2024, 0)), (366, 104, 10, 0, 252));
}

#[test]
fn public_holiday_count_matches_weekday_holidays() {
    for year in 2021..=2030 {
        let mut weekday_holidays: Vec<NaiveDate> = get_public_holidays(year)
            .iter()
            .map(|h| h.date())
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .collect();
        weekday_holidays.sort();
        weekday_holidays.dedup();
        let breakdown = get_year_breakdown(year, 0);
        assert_eq!(breakdown.public_holidays() as usize, weekday_holidays.len(), "year {year}");
        assert_eq!(
            breakdown.working_days(),
            breakdown.total_days() - breakdown.weekend_days() - breakdown.public_holidays()
        );
    }
}

#[test]
fn one_more_vacation_day_is_one_less_working_day() {
    let base = get_year_breakdown(2024, 10);
    let more = get_year_breakdown(2024, 11);
    assert_eq!(more.working_days() + 1, base.working_days());
    assert_eq!(more.vacation_days(), base.vacation_days() + 1);
    assert_eq!(more.total_days(), base.total_days());
    assert_eq!(more.weekend_days(), base.weekend_days());
    assert_eq!(more.public_holidays(), base.public_holidays());
}

#[test]
fn vacation_on_weekend_or_holiday_is_not_counted() {
    let base = get_year_breakdown(2024, 0);
    // Saturday, Sunday, Easter Monday and New Year's Day.
    let dates = vec![date(2024, 1, 6), date(2024, 1, 7), date(2024, 4, 1), date(2024, 1, 1)];
    let breakdown = get_year_breakdown(2024, dates);
    assert_eq!(breakdown, base);
}

#[test]
fn vacation_dates_from_other_years_are_ignored() {
    let breakdown = get_year_breakdown(2024, vec![date(2023, 7, 3), date(2024, 7, 3)]);
    assert_eq!(breakdown.vacation_days(), 1);
}

#[test]
fn duplicated_vacation_dates_count_once() {
    let breakdown = get_year_breakdown(2024, vec![date(2024, 7, 3), date(2024, 7, 3)]);
    assert_eq!(breakdown.vacation_days(), 1);
    assert_eq!(breakdown.working_days(), 251);
}

#[test]
fn count_and_dates_agree() {
    // Ten consecutive working days in July 2024: Mon 8 .. Fri 19.
    let dates: Vec<NaiveDate> = (8..=19)
        .map(|d| date(2024, 7, d))
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect();
    assert_eq!(dates.len(), 10);
    assert_eq!(get_year_breakdown(2024, dates), get_year_breakdown(2024, 10));
}

#[test]
fn every_day_is_classified_once() {
    let calendar = ireland_calendar(EasterSource::Gregorian);
    let classifier = DayClassifier::new(&calendar);
    let days = classifier.days(2024, &[]);
    assert_eq!(days.len(), 366);
    assert_eq!(days.first().map(|(d, _)| *d), Some(date(2024, 1, 1)));
    assert_eq!(days.last().map(|(d, _)| *d), Some(date(2024, 12, 31)));
}

#[test]
fn lookup_table_source_loses_easter_monday_after_2024() {
    let calendar = ireland_calendar(EasterSource::LookupTable);
    let legacy = DayClassifier::new(&calendar).breakdown(2025, &VacationDays::default());
    let computed = get_year_breakdown(2025, 0);
    assert_eq!(legacy.public_holidays() + 1, computed.public_holidays());
    assert_eq!(legacy.working_days(), computed.working_days() + 1);
}

#[test]
fn repeated_queries_are_identical() {
    assert_eq!(get_year_breakdown(2023, 5), get_year_breakdown(2023, 5));
}
