use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::ireland::ireland_calendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterSource,
    EasterRelatedHoliday
};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::namedholiday::NamedHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    #[serde(default)]
    easter_source: EasterSource,
    shift_days: i32
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Option<Arc<dyn RecurringHoliday>>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(EasterRelatedHoliday::new(json_prop.easter_source, json_prop.shift_days)
        .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<Option<Arc<dyn RecurringHoliday>>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)
        .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(json: serde_json::Value) -> Result<Option<Arc<dyn RecurringHoliday>>, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)
        .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Option<Arc<dyn RecurringHoliday>>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    Ok(FixedDateHoliday::new(json_prop.month, json_prop.day)
        .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday
}

#[derive(Deserialize)]
struct NamedHolidayJsonProp {
    name: String,
    holiday_type: HolidayType,
    #[serde(default)]
    first_year: Option<i32>,
    #[serde(default)]
    weekend_adjustment_map: HashMap<Weekday, WeekendAdjustment>
}

fn get_named_holiday_from_json(json: serde_json::Value) -> Result<NamedHoliday, ManagerError> {
    let json_prop: NamedHolidayJsonProp = parse_json_value(json.clone())?;
    let rule = match json_prop.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json),
        HolidayType::FixedDate     => fixed_date_holiday_from_json(json),
        HolidayType::LastWeekday   => last_weekday_from_json(json),
        HolidayType::NthWeekday    => nth_weekday_from_json(json)
    }?.ok_or_else(|| ManagerError::InvalidHolidayRule(json_prop.name.clone()))?;

    let mut holiday = NamedHoliday::new(json_prop.name, rule)
        .with_weekend_adjustment(WeekendAdjustmentRule::new(&json_prop.weekend_adjustment_map));
    if let Some(first_year) = json_prop.first_year {
        holiday = holiday.since(first_year);
    }
    Ok(holiday)
}

#[derive(Deserialize)]
enum CalendarType {
    SimpleCalendar,
    Ireland
}

#[derive(Deserialize)]
struct CalendarTypedObject {
    calendar_type: CalendarType
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    name: String,
    weekends: HashSet<Weekday>,
    holidays: Vec<serde_json::Value>
}

#[derive(Deserialize)]
struct IrelandJsonProp {
    #[serde(default)]
    easter_source: EasterSource
}

pub fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<SimpleCalendar, ManagerError> {
    let calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let holidays = calendar_json
        .holidays
        .into_iter()
        .map(get_named_holiday_from_json)
        .collect::<Result<Vec<NamedHoliday>, ManagerError>>()?;
    Ok(SimpleCalendar::new(calendar_json.name, calendar_json.weekends, holidays))
}

fn get_holiday_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let typed_object: CalendarTypedObject = parse_json_value(json_value.clone())?;
    match typed_object.calendar_type {
        CalendarType::SimpleCalendar => Ok(Arc::new(get_simple_calendar_from_json(json_value)?)),
        CalendarType::Ireland => {
            let json_prop: IrelandJsonProp = parse_json_value(json_value)?;
            Ok(Arc::new(ireland_calendar(json_prop.easter_source)))
        }
    }
}

pub struct HolidayCalendarManager;

impl HolidayCalendarManager {
    pub fn new() -> Manager<Arc<dyn HolidayCalendar>> {
        Manager::new(get_holiday_calendar_from_json)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::manager::manager::IManager;

    #[test]
    fn builds_simple_calendar_from_json() {
        let mut manager = HolidayCalendarManager::new();
        manager.insert_obj_from_json(json!({
            "name": "Tiny",
            "calendar_type": "SimpleCalendar",
            "weekends": ["Sat", "Sun"],
            "holidays": [
                {
                    "name": "New Year's Day",
                    "holiday_type": "FixedDate",
                    "month": 1,
                    "day": 1,
                    "weekend_adjustment_map": {"Sun": "NextWeekday"}
                },
                {
                    "name": "Good Friday",
                    "holiday_type": "EasterRelated",
                    "shift_days": -2,
                    "first_year": 2024
                }
            ]
        }), &()).unwrap();

        let calendar = manager.get("Tiny").unwrap();
        let holidays = calendar.public_holidays(2023);
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name(), "New Year's Day (Observed)");
        assert_eq!(holidays[0].date(), NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(calendar.public_holidays(2024).len(), 2);
    }

    #[test]
    fn builtin_ireland_from_json() {
        let mut manager = HolidayCalendarManager::new();
        manager.insert_obj_from_json(json!({
            "name": "IE",
            "calendar_type": "Ireland",
            "easter_source": "LookupTable"
        }), &()).unwrap();
        let calendar = manager.get("IE").unwrap();
        assert_eq!(calendar.public_holidays(2024).len(), 10);
        assert_eq!(calendar.public_holidays(2030).len(), 9);
    }

    #[test]
    fn invalid_rule_names_the_holiday() {
        let result = get_simple_calendar_from_json(json!({
            "name": "Broken",
            "weekends": [],
            "holidays": [
                {"name": "Nowhere Day", "holiday_type": "NthWeekday", "month": 13, "n": 1, "weekday": "Mon"}
            ]
        }));
        match result {
            Err(ManagerError::InvalidHolidayRule(name)) => assert_eq!(name, "Nowhere Day"),
            _ => panic!("expected an invalid rule error"),
        }
    }
}
