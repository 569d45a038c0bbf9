use serde::{Deserialize, Serialize};

/// The single bucket a calendar day is counted in. Variants are listed in
/// precedence order: a weekend that is also a holiday counts as weekend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCategory {
    Weekend,
    PublicHoliday,
    Vacation,
    Working
}
