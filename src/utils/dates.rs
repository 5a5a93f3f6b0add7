use std::ops::Range;

use chrono::{Datelike, Months, NaiveDate};

/// Number of days in the given year: 366 on leap years, 365 otherwise.
pub(crate) fn year_length(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .expect("year out of supported date range")
        .ordinal()
}

/// Number of days in the given month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let first_this_month =
        NaiveDate::from_ymd_opt(year, month, 1).expect("invalid year or month");

    let first_next_month = first_this_month
        .checked_add_months(Months::new(1))
        .expect("month out of supported date range");

    (first_next_month - first_this_month)
        .num_days()
        .try_into()
        .expect("time not monotonic while comparing dates")
}

/// Zero-based day-of-year index range covered by the given month.
pub(crate) fn month_range(year: i32, month: u32) -> Range<usize> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("invalid year or month")
        .ordinal0() as usize;

    start..start + days_in_month(year, month) as usize
}
