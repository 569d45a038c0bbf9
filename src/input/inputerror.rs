use thiserror::Error;

use super::inputparser::InputField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} is not a number: '{raw}'")]
    NotANumber { field: InputField, raw: String },
    #[error("{field} cannot be negative")]
    Negative { field: InputField },
    #[error("{field} must be a whole number")]
    NotWholeNumber { field: InputField },
    #[error("'{raw}' is not a year")]
    InvalidYear { raw: String },
    #[error("year {year} is not one of the supported years")]
    UnsupportedYear { year: i32 },
}
