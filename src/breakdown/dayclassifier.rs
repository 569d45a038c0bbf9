use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use super::daycategory::DayCategory;
use super::vacationdays::VacationDays;
use super::yearbreakdown::YearBreakdown;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::ireland::ireland_calendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::recurringholiday::easterrelatedholiday::EasterSource;

/// Sorts every day of a year into weekend, public holiday, vacation or
/// working day, in that order of precedence.
pub struct DayClassifier<'a> {
    calendar: &'a dyn HolidayCalendar
}

impl<'a> DayClassifier<'a> {
    pub fn new(calendar: &'a dyn HolidayCalendar) -> DayClassifier<'a> {
        DayClassifier { calendar }
    }

    // Holidays compare on (day, month) only.
    fn holiday_days(&self, year: i32) -> HashSet<(u32, u32)> {
        self.calendar
            .public_holidays(year)
            .iter()
            .map(|h| (h.date().day(), h.date().month()))
            .collect()
    }

    fn categorize(
        &self,
        d: NaiveDate,
        holiday_days: &HashSet<(u32, u32)>,
        vacation_dates: &HashSet<NaiveDate>
    ) -> DayCategory {
        if self.calendar.is_weekend(d) {
            DayCategory::Weekend
        } else if holiday_days.contains(&(d.day(), d.month())) {
            DayCategory::PublicHoliday
        } else if vacation_dates.contains(&d) {
            DayCategory::Vacation
        } else {
            DayCategory::Working
        }
    }

    /// Category of a single day, ignoring vacation.
    pub fn classify(&self, d: NaiveDate) -> DayCategory {
        self.categorize(d, &self.holiday_days(d.year()), &HashSet::new())
    }

    /// Every day of `year` with its category. Vacation dates outside `year`
    /// are ignored.
    pub fn days(&self, year: i32, vacation_dates: &[NaiveDate]) -> Vec<(NaiveDate, DayCategory)> {
        let Some(range) = RangeOfDates::whole_year(year) else {
            return Vec::new();
        };
        let holiday_days = self.holiday_days(year);
        let vacation_dates: HashSet<NaiveDate> = vacation_dates.iter().copied().collect();
        range
            .iter()
            .map(|d| (d, self.categorize(d, &holiday_days, &vacation_dates)))
            .collect()
    }

    /// Counts for `year`. Years outside chrono's `NaiveDate` range (about
    /// +/-262,000) have no days to classify and give an all-zero breakdown.
    pub fn breakdown(&self, year: i32, vacation: &VacationDays) -> YearBreakdown {
        if RangeOfDates::whole_year(year).is_none() {
            warn!(year, "year outside the supported date range");
            return YearBreakdown::tally(0, std::iter::empty());
        }
        let breakdown = match vacation {
            VacationDays::Dates(dates) => self.tally(year, dates),
            VacationDays::Count(count) => {
                let base = self.tally(year, &[]);
                let pool = base.potential_working_days();
                let count = if *count > pool {
                    warn!(year, requested = *count, available = pool, "vacation count clamped to available days");
                    pool
                } else {
                    *count
                };
                YearBreakdown::new(base.total_days(), base.weekend_days(), base.public_holidays(), count)
                    .unwrap_or(base)
            }
        };
        debug!(calendar = self.calendar.name(), year, ?breakdown, "year breakdown");
        breakdown
    }

    fn tally(&self, year: i32, vacation_dates: &[NaiveDate]) -> YearBreakdown {
        let days = self.days(year, vacation_dates);
        YearBreakdown::tally(days.len() as u32, days.into_iter().map(|(_, category)| category))
    }
}

/// Irish year breakdown with Easter from the Gregorian algorithm.
///
/// `total_days` agrees with [`get_total_days_in_year`](crate::get_total_days_in_year)
/// for every year chrono can represent; beyond that range every count is 0.
pub fn get_year_breakdown(year: i32, vacation: impl Into<VacationDays>) -> YearBreakdown {
    let calendar = ireland_calendar(EasterSource::Gregorian);
    DayClassifier::new(&calendar).breakdown(year, &vacation.into())
}
