use std::collections::HashMap;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Array-based weekend adjustment rule, indexed by weekday (0=Monday, 6=Sunday).
#[derive(Clone, Debug, Default)]
pub struct WeekendAdjustmentRule {
    // Signed day shift per weekday, None when that weekday is left alone
    rule: [Option<i8>; 7]
}

impl WeekendAdjustmentRule {
    /// Creates a new WeekendAdjustmentRule from a HashMap.
    ///
    /// When several consecutive weekdays are adjusted in the same direction
    /// the shift skips over all of them.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i8>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let mut to_weekday = weekday;
            let next_weekday = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut shift_days: i8 = 0;
            let one_day = adj as i8;

            while adjustment_map.get(&to_weekday).is_some_and(|a| *a != WeekendAdjustment::Unadjusted)
                && shift_days.abs() < 7 {
                to_weekday = next_weekday(&to_weekday);
                shift_days += one_day;
            }

            let idx = weekday.num_days_from_monday() as usize;
            rule[idx] = Some(shift_days);
        }

        WeekendAdjustmentRule { rule }
    }

    /// Sunday moves to Monday, every other day stays put.
    pub fn sunday_to_monday() -> WeekendAdjustmentRule {
        let mut adjustment_map = HashMap::new();
        adjustment_map.insert(Weekday::Sun, WeekendAdjustment::NextWeekday);
        WeekendAdjustmentRule::new(&adjustment_map)
    }

    /// Adjusts a date according to the weekend adjustment rules.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        let idx = d.weekday().num_days_from_monday() as usize;

        let shifted = match self.rule[idx] {
            Some(n) if n > 0 => d.checked_add_days(Days::new(n as u64)),
            Some(n) if n < 0 => d.checked_sub_days(Days::new(n.unsigned_abs() as u64)),
            _ => Some(d),
        };
        shifted.unwrap_or(d)
    }
}
