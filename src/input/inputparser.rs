use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::inputerror::InputError;
use crate::breakdown::remotedays::RemoteDaysPerWeek;
use crate::breakdown::yearbreakdown::YearBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    VacationDays,
    RemoteDaysPerWeek,
    ElectricityCost,
    InternetCost,
    HeatingCost,
    RemoteAllowance
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputField::VacationDays => "vacation days",
            InputField::RemoteDaysPerWeek => "remote days per week",
            InputField::ElectricityCost => "electricity cost",
            InputField::InternetCost => "internet cost",
            InputField::HeatingCost => "heating cost",
            InputField::RemoteAllowance => "remote allowance",
        };
        write!(f, "{label}")
    }
}

const MAX_REMOTE_DAYS_PER_WEEK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Parses one raw text field. Blank input means zero.
pub fn parse_field(field: InputField, raw: &str) -> Result<Decimal, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| InputError::NotANumber { field, raw: raw.to_owned() })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(InputError::Negative { field });
    }

    match field {
        InputField::RemoteDaysPerWeek => Ok(value.min(MAX_REMOTE_DAYS_PER_WEEK)),
        InputField::VacationDays if !value.fract().is_zero() => Err(InputError::NotWholeNumber { field }),
        _ => Ok(value.normalize()),
    }
}

/// Vacation day count, capped at the days left after weekends and holidays.
pub fn parse_vacation_days(raw: &str, breakdown: &YearBreakdown) -> Result<u32, InputError> {
    let value = parse_field(InputField::VacationDays, raw)?;
    let pool = breakdown.potential_working_days();
    Ok(value.to_u32().map_or(pool, |days| days.min(pool)))
}

pub fn parse_remote_days(raw: &str) -> Result<RemoteDaysPerWeek, InputError> {
    parse_field(InputField::RemoteDaysPerWeek, raw).map(RemoteDaysPerWeek::new)
}

pub fn parse_year(raw: &str, supported_years: &[i32]) -> Result<i32, InputError> {
    let year = i32::from_str(raw.trim())
        .map_err(|_| InputError::InvalidYear { raw: raw.to_owned() })?;
    if supported_years.contains(&year) {
        Ok(year)
    } else {
        Err(InputError::UnsupportedYear { year })
    }
}
