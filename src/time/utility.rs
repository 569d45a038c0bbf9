
#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}

#[inline]
pub const fn days_in_year (year: i32) -> u32 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

/// Number of days in `year`, 365 or 366.
pub fn get_total_days_in_year (year: i32) -> u32 {
    days_in_year(year)
}
