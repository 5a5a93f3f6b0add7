use chrono::NaiveDate;

/// Errors reported by sheet operations.
#[derive(thiserror::Error, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Error {
    /// A serialized sheet is always exactly 48 bytes long.
    #[error("expected a 48 byte buffer, got {0} bytes")]
    InvalidLength(usize),
    /// Sign-ins are only accepted for dates inside the sheet's year.
    #[error("date {date} does not belong to sheet year {sheet_year}")]
    YearMismatch { sheet_year: i16, date: NaiveDate },
    /// Months are numbered from 1 to 12.
    #[error("month {0} is out of range 1..=12")]
    InvalidMonth(u32),
}
