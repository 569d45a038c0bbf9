//! End-to-end estimate: year breakdown, remote share of working days, relief.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::breakdown::dayclassifier::DayClassifier;
use crate::breakdown::remotedays::RemoteDaysPerWeek;
use crate::breakdown::vacationdays::VacationDays;
use crate::breakdown::yearbreakdown::YearBreakdown;
use crate::form::formdata::{FormData, FormUpdate};
use crate::relief::reliefcalculator::calculate_relief;
use crate::relief::reliefparameters::ReliefParameters;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::publicholiday::PublicHoliday;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliefEstimate {
    pub year: i32,
    pub breakdown: YearBreakdown,
    pub remote_days_per_week: RemoteDaysPerWeek,
    pub remote_working_days: u32,
    pub form: FormData,
    pub relief: Decimal,
}

#[derive(Clone)]
pub struct ReliefEstimator {
    calendar: Arc<dyn HolidayCalendar>,
    parameters: ReliefParameters
}

impl ReliefEstimator {
    pub fn new(calendar: Arc<dyn HolidayCalendar>, parameters: ReliefParameters) -> ReliefEstimator {
        ReliefEstimator { calendar, parameters }
    }

    pub fn public_holidays(&self, year: i32) -> Vec<PublicHoliday> {
        self.calendar.public_holidays(year)
    }

    pub fn breakdown(&self, year: i32, vacation: &VacationDays) -> YearBreakdown {
        DayClassifier::new(self.calendar.as_ref()).breakdown(year, vacation)
    }

    /// The remote working days replace whatever `working_days` the form held
    /// before the relief is computed.
    pub fn estimate(
        &self,
        year: i32,
        vacation: &VacationDays,
        remote_days: RemoteDaysPerWeek,
        form: &FormData
    ) -> ReliefEstimate {
        let breakdown = self.breakdown(year, vacation);
        let remote_working_days = remote_days.scale(breakdown.working_days());
        let form = form.apply(&FormUpdate::working_days(remote_working_days));
        let relief = calculate_relief(&form, &self.parameters);
        info!(year, remote_working_days, %relief, "relief estimated");
        ReliefEstimate {
            year,
            breakdown,
            remote_days_per_week: remote_days,
            remote_working_days,
            form,
            relief
        }
    }
}
