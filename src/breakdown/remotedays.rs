use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Days per week worked from home, between 0 and 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RemoteDaysPerWeek(Decimal);

const WORK_WEEK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

impl RemoteDaysPerWeek {
    /// Values outside `0..=5` are clamped into range.
    pub fn new(days: Decimal) -> RemoteDaysPerWeek {
        RemoteDaysPerWeek(days.clamp(Decimal::ZERO, WORK_WEEK))
    }

    pub fn full_week() -> RemoteDaysPerWeek {
        RemoteDaysPerWeek(WORK_WEEK)
    }

    pub fn days(&self) -> Decimal {
        self.0
    }

    pub fn ratio(&self) -> Decimal {
        self.0 / WORK_WEEK
    }

    /// Share of `working_days` spent at home, rounded half away from zero.
    pub fn scale(&self, working_days: u32) -> u32 {
        let scaled = (Decimal::from(working_days) * self.ratio())
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        scaled.to_u32().unwrap_or(working_days)
    }
}

impl Default for RemoteDaysPerWeek {
    fn default() -> Self {
        RemoteDaysPerWeek::full_week()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(days: &str) -> RemoteDaysPerWeek {
        RemoteDaysPerWeek::new(days.parse().unwrap())
    }

    #[test]
    fn full_week_keeps_every_day() {
        assert_eq!(RemoteDaysPerWeek::default().scale(252), 252);
    }

    #[test]
    fn zero_days_gives_zero() {
        assert_eq!(remote("0").scale(252), 0);
    }

    #[test]
    fn half_days_round_away_from_zero() {
        // 251 * 2.5 / 5 = 125.5
        assert_eq!(remote("2.5").scale(251), 126);
        // 252 * 3 / 5 = 151.2
        assert_eq!(remote("3").scale(252), 151);
        // 253 * 0.5 / 5 = 25.3
        assert_eq!(remote("0.5").scale(253), 25);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(remote("7").days(), Decimal::from(5));
        assert_eq!(remote("-1").days(), Decimal::ZERO);
    }
}
