use serde::Serialize;

use super::daycategory::DayCategory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBreakdown {
    total_days: u32,
    weekend_days: u32,
    public_holidays: u32,
    vacation_days: u32,
    working_days: u32
}

impl YearBreakdown {
    /// Builds a breakdown from the three excluded categories. Working days are
    /// whatever is left, so the parts always add up to `total_days`.
    ///
    /// Returns `None` when the excluded days exceed the year.
    pub fn new(total_days: u32, weekend_days: u32, public_holidays: u32, vacation_days: u32) -> Option<YearBreakdown> {
        let working_days = total_days
            .checked_sub(weekend_days)?
            .checked_sub(public_holidays)?
            .checked_sub(vacation_days)?;
        Some(YearBreakdown {
            total_days,
            weekend_days,
            public_holidays,
            vacation_days,
            working_days
        })
    }

    pub(crate) fn tally<I>(total_days: u32, categories: I) -> YearBreakdown
        where I: IntoIterator<Item = DayCategory> {
        let mut breakdown = YearBreakdown {
            total_days,
            weekend_days: 0,
            public_holidays: 0,
            vacation_days: 0,
            working_days: 0
        };
        for category in categories {
            match category {
                DayCategory::Weekend => breakdown.weekend_days += 1,
                DayCategory::PublicHoliday => breakdown.public_holidays += 1,
                DayCategory::Vacation => breakdown.vacation_days += 1,
                DayCategory::Working => breakdown.working_days += 1,
            }
        }
        breakdown
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn weekend_days(&self) -> u32 {
        self.weekend_days
    }

    pub fn public_holidays(&self) -> u32 {
        self.public_holidays
    }

    pub fn vacation_days(&self) -> u32 {
        self.vacation_days
    }

    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    /// Days that are neither weekend nor public holiday. A vacation count can
    /// never exceed this.
    pub fn potential_working_days(&self) -> u32 {
        self.total_days - self.weekend_days - self.public_holidays
    }

    pub fn is_consistent(&self) -> bool {
        self.weekend_days + self.public_holidays + self.vacation_days + self.working_days == self.total_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_days_are_the_remainder() {
        let breakdown = YearBreakdown::new(366, 104, 10, 20).unwrap();
        assert_eq!(breakdown.working_days(), 232);
        assert_eq!(breakdown.potential_working_days(), 252);
        assert!(breakdown.is_consistent());
    }

    #[test]
    fn too_many_excluded_days() {
        assert!(YearBreakdown::new(365, 105, 10, 251).is_none());
    }

    #[test]
    fn tally_counts_each_category() {
        let categories = [
            DayCategory::Weekend,
            DayCategory::Working,
            DayCategory::Working,
            DayCategory::PublicHoliday,
            DayCategory::Vacation,
        ];
        let breakdown = YearBreakdown::tally(5, categories);
        assert_eq!(breakdown, YearBreakdown::new(5, 1, 1, 1).unwrap());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let breakdown = YearBreakdown::new(365, 105, 10, 0).unwrap();
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["totalDays"], 365);
        assert_eq!(json["workingDays"], 250);
    }
}
