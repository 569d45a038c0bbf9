use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::estimate::ReliefEstimator;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::relief::reliefparameters::ReliefParameters;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarManager;
use crate::time::calendar::ireland::{IRELAND, ireland_calendar};
use crate::time::recurringholiday::easterrelatedholiday::EasterSource;

/// Years offered by the year selector, newest first.
pub const DEFAULT_SUPPORTED_YEARS: [i32; 4] = [2024, 2023, 2022, 2021];

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>,
    #[serde(default = "default_calendar_name")]
    default_calendar: String,
    #[serde(default)]
    relief: ReliefParameters,
    #[serde(default = "default_supported_years")]
    supported_years: Vec<i32>
}

fn default_calendar_name() -> String {
    IRELAND.to_owned()
}

fn default_supported_years() -> Vec<i32> {
    DEFAULT_SUPPORTED_YEARS.to_vec()
}

pub struct Configuration {
    holiday_calendar_manager: Manager<Arc<dyn HolidayCalendar>>,
    default_calendar: String,
    relief_parameters: ReliefParameters,
    supported_years: Vec<i32>
}

impl Configuration {
    /// Built-in setup: the Irish calendar with computed Easter, default relief
    /// parameters and the default year list.
    pub fn new() -> Configuration {
        let mut holiday_calendar_manager = HolidayCalendarManager::new();
        holiday_calendar_manager.insert(
            IRELAND.to_owned(),
            Arc::new(ireland_calendar(EasterSource::Gregorian))
        );
        Configuration {
            holiday_calendar_manager,
            default_calendar: default_calendar_name(),
            relief_parameters: ReliefParameters::default(),
            supported_years: default_supported_years()
        }
    }

    pub fn from_reader(file_path: &Path) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let configuration = Configuration::from_json_value(json_value)?;
        info!(path = %file_path.display(), calendars = ?configuration.holiday_calendar_manager.names(), "configuration loaded");
        Ok(configuration)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        let mut configuration = Configuration::new();
        configuration
            .holiday_calendar_manager
            .insert_obj_from_json_vec(&json_prop.holiday_calendar, &())?;
        // Fail early on a dangling default.
        configuration.holiday_calendar_manager.get(&json_prop.default_calendar)?;
        configuration.default_calendar = json_prop.default_calendar;
        configuration.relief_parameters = json_prop.relief;
        configuration.supported_years = json_prop.supported_years;
        Ok(configuration)
    }

    pub fn holiday_calendar_manager(&self) -> &Manager<Arc<dyn HolidayCalendar>> {
        &self.holiday_calendar_manager
    }

    pub fn default_calendar(&self) -> &str {
        &self.default_calendar
    }

    pub fn calendar(&self) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
        self.holiday_calendar_manager.get(&self.default_calendar)
    }

    pub fn relief_parameters(&self) -> &ReliefParameters {
        &self.relief_parameters
    }

    pub fn supported_years(&self) -> &[i32] {
        &self.supported_years
    }

    pub fn estimator(&self) -> Result<ReliefEstimator, ManagerError> {
        Ok(ReliefEstimator::new(self.calendar()?, self.relief_parameters))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
