use std::io;
use std::ops::Range;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use endian_codec::{i16_from_bytes, i16_to_bytes, ByteOrder};

use crate::day_set::{DaySet, DAY_SET_BYTES};
use crate::error::Error;
use crate::utils::dates;

/// Serialized size of a sheet: a 2-byte year followed by the day bits.
pub const SHEET_BYTES: usize = 2 + DAY_SET_BYTES;

/// A sign-in sheet for one calendar year, holding one bit per day.
///
/// The day storage always has the capacity of a leap year, so a sheet
/// serializes to [`SHEET_BYTES`] bytes whatever its year. The logical day
/// count (365 or 366) is derived from the year and bits past it are never
/// set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct YearlySheet {
    year: i16,
    days: DaySet,
}

impl YearlySheet {
    /// Create a sheet for the given year with every day unsigned.
    ///
    /// ```
    /// use sign_in_sheet::YearlySheet;
    ///
    /// let sheet = YearlySheet::new(2023);
    /// assert_eq!(sheet.signed_in_count(), 0);
    /// assert_eq!(sheet.not_signed_in_count(), 365);
    /// ```
    pub const fn new(year: i16) -> Self {
        Self { year, days: DaySet::new() }
    }

    /// The calendar year this sheet describes.
    pub const fn year(&self) -> i16 {
        self.year
    }

    /// Number of days in this sheet's year: 366 on leap years, 365 otherwise.
    ///
    /// ```
    /// use sign_in_sheet::YearlySheet;
    ///
    /// assert_eq!(YearlySheet::new(2023).year_length(), 365);
    /// assert_eq!(YearlySheet::new(2024).year_length(), 366);
    /// ```
    pub fn year_length(&self) -> u32 {
        dates::year_length(self.year.into())
    }

    // --
    // -- Serialization
    // --

    /// Rebuild a sheet from the fixed 48-byte layout: bytes `[0, 2)` hold the
    /// little-endian year and bytes `[2, 48)` the day bits, day index `i`
    /// sitting at bit `i % 8` of byte `2 + i / 8`.
    ///
    /// Bits past the year's last day are cleared on load, so a malformed
    /// buffer cannot skew counts or round-trip garbage.
    pub fn from_array(bytes: [u8; SHEET_BYTES]) -> Self {
        let year = i16_from_bytes([bytes[0], bytes[1]], ByteOrder::Little);

        let mut day_bytes = [0; DAY_SET_BYTES];
        day_bytes.copy_from_slice(&bytes[2..]);
        let mut days = DaySet::from_bytes(day_bytes);

        #[cfg(feature = "log")]
        let loaded = days.count();

        days.truncate(dates::year_length(year.into()) as usize);

        #[cfg(feature = "log")]
        if days.count() != loaded {
            log::warn!(
                "ignoring {} sign-in bits past the last day of {year}",
                loaded - days.count(),
            );
        }

        Self { year, days }
    }

    /// Rebuild a sheet from a serialized buffer.
    ///
    /// ```
    /// use sign_in_sheet::{Error, YearlySheet};
    ///
    /// let sheet = YearlySheet::new(2023);
    /// assert_eq!(YearlySheet::from_bytes(&sheet.to_bytes()), Ok(sheet));
    /// assert_eq!(YearlySheet::from_bytes(&[0; 47]), Err(Error::InvalidLength(47)));
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; SHEET_BYTES] = bytes
            .try_into()
            .map_err(|_| Error::InvalidLength(bytes.len()))?;

        Ok(Self::from_array(bytes))
    }

    /// Serialize this sheet into the fixed 48-byte layout.
    ///
    /// ```
    /// use sign_in_sheet::YearlySheet;
    ///
    /// let bytes = YearlySheet::new(2023).to_bytes();
    /// assert_eq!(bytes[..2], [0xe7, 0x07]); // 2023 as little-endian i16
    /// assert!(bytes[2..].iter().all(|&byte| byte == 0));
    /// ```
    pub fn to_bytes(&self) -> [u8; SHEET_BYTES] {
        let mut bytes = [0; SHEET_BYTES];
        bytes[..2].copy_from_slice(&i16_to_bytes(self.year, ByteOrder::Little));
        bytes[2..].copy_from_slice(self.days.as_bytes());
        bytes
    }

    /// Serialize this sheet into a writer.
    pub fn serialize(&self, mut writer: impl io::Write) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Deserialize a sheet from a reader.
    ///
    /// ```
    /// use sign_in_sheet::YearlySheet;
    ///
    /// let sheet = YearlySheet::new(2024);
    ///
    /// let mut buf = Vec::new();
    /// sheet.serialize(&mut buf).unwrap();
    ///
    /// let copy = YearlySheet::deserialize(buf.as_slice()).unwrap();
    /// assert_eq!(copy, sheet);
    /// ```
    pub fn deserialize(mut reader: impl io::Read) -> io::Result<Self> {
        let mut buf = [0; SHEET_BYTES];
        reader.read_exact(&mut buf)?;
        Ok(Self::from_array(buf))
    }

    // --
    // -- Sign-in and queries
    // --

    /// Mark the given date as signed in. Signing the same day twice is a
    /// no-op.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use sign_in_sheet::YearlySheet;
    ///
    /// let mut sheet = YearlySheet::new(2023);
    /// let date = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
    ///
    /// sheet.sign_in(date).unwrap();
    /// assert!(sheet.is_signed_in(date));
    ///
    /// let next_year = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// assert!(sheet.sign_in(next_year).is_err());
    /// ```
    pub fn sign_in(&mut self, date: NaiveDate) -> Result<(), Error> {
        if date.year() != i32::from(self.year) {
            return Err(Error::YearMismatch { sheet_year: self.year, date });
        }

        self.days.insert(date.ordinal0() as usize);
        Ok(())
    }

    /// Sign in at the current local date.
    pub fn sign_in_today(&mut self) -> Result<(), Error> {
        self.sign_in(chrono::Local::now().date_naive())
    }

    /// Check whether the given date is signed in.
    ///
    /// A date outside of the sheet's year is plainly not signed in, it is
    /// not an error. Only mutations are strict about the year.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use sign_in_sheet::YearlySheet;
    ///
    /// let mut sheet = YearlySheet::new(2023);
    /// sheet.sign_in(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()).unwrap();
    ///
    /// assert!(sheet.is_signed_in(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    /// assert!(!sheet.is_signed_in(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    /// ```
    pub fn is_signed_in(&self, date: NaiveDate) -> bool {
        date.year() == i32::from(self.year) && self.days.contains(date.ordinal0() as usize)
    }

    /// Check whether the date of the given date-time is signed in.
    pub fn is_signed_in_at(&self, date_time: NaiveDateTime) -> bool {
        self.is_signed_in(date_time.date())
    }

    // --
    // -- Counting
    // --

    /// Number of signed-in days over the whole year.
    pub fn signed_in_count(&self) -> u32 {
        self.days.count()
    }

    /// Number of days of the year with no sign-in.
    pub fn not_signed_in_count(&self) -> u32 {
        self.year_length() - self.days.count()
    }

    /// Number of signed-in days in the given month.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use sign_in_sheet::{Error, YearlySheet};
    ///
    /// let mut sheet = YearlySheet::new(2023);
    /// sheet.sign_in(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()).unwrap();
    ///
    /// assert_eq!(sheet.signed_in_count_in_month(3), Ok(1));
    /// assert_eq!(sheet.signed_in_count_in_month(4), Ok(0));
    /// assert_eq!(sheet.signed_in_count_in_month(13), Err(Error::InvalidMonth(13)));
    /// ```
    pub fn signed_in_count_in_month(&self, month: u32) -> Result<u32, Error> {
        Ok(self.days.count_range(self.month_range(month)?))
    }

    /// Number of days of the given month with no sign-in.
    ///
    /// ```
    /// use sign_in_sheet::YearlySheet;
    ///
    /// assert_eq!(YearlySheet::new(2023).not_signed_in_count_in_month(2), Ok(28));
    /// assert_eq!(YearlySheet::new(2024).not_signed_in_count_in_month(2), Ok(29));
    /// ```
    pub fn not_signed_in_count_in_month(&self, month: u32) -> Result<u32, Error> {
        let signed = self.signed_in_count_in_month(month)?;
        Ok(dates::days_in_month(self.year.into(), month) - signed)
    }

    // --
    // -- Listing
    // --

    /// Iterate over the signed-in days of the year, in ascending order.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use sign_in_sheet::YearlySheet;
    ///
    /// let mut sheet = YearlySheet::new(2023);
    /// let date = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
    /// sheet.sign_in(date).unwrap();
    ///
    /// let days: Vec<_> = sheet.signed_in_days().collect();
    /// assert_eq!(days, [date]);
    /// ```
    pub fn signed_in_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|day| self.date_of(day))
    }

    /// Iterate over the days of the year with no sign-in, in ascending order.
    pub fn not_signed_in_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter_absent_range(0..self.year_length() as usize)
            .map(|day| self.date_of(day))
    }

    /// Iterate over the signed-in days of the given month, in ascending
    /// order.
    pub fn signed_in_days_in_month(
        &self,
        month: u32,
    ) -> Result<impl Iterator<Item = NaiveDate> + '_, Error> {
        Ok(self
            .days
            .iter_range(self.month_range(month)?)
            .map(|day| self.date_of(day)))
    }

    /// Iterate over the days of the given month with no sign-in, in ascending
    /// order.
    pub fn not_signed_in_days_in_month(
        &self,
        month: u32,
    ) -> Result<impl Iterator<Item = NaiveDate> + '_, Error> {
        Ok(self
            .days
            .iter_absent_range(self.month_range(month)?)
            .map(|day| self.date_of(day)))
    }

    /// Signed-in days of the year as date-times at midnight.
    pub fn signed_in_date_times(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.signed_in_days().map(at_midnight)
    }

    /// Days of the year with no sign-in, as date-times at midnight.
    pub fn not_signed_in_date_times(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.not_signed_in_days().map(at_midnight)
    }

    /// Signed-in days of the given month as date-times at midnight.
    pub fn signed_in_date_times_in_month(
        &self,
        month: u32,
    ) -> Result<impl Iterator<Item = NaiveDateTime> + '_, Error> {
        Ok(self.signed_in_days_in_month(month)?.map(at_midnight))
    }

    /// Days of the given month with no sign-in, as date-times at midnight.
    pub fn not_signed_in_date_times_in_month(
        &self,
        month: u32,
    ) -> Result<impl Iterator<Item = NaiveDateTime> + '_, Error> {
        Ok(self.not_signed_in_days_in_month(month)?.map(at_midnight))
    }

    // --
    // -- Internals
    // --

    /// Zero-based day index range covered by a month of the sheet's year.
    fn month_range(&self, month: u32) -> Result<Range<usize>, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }

        Ok(dates::month_range(self.year.into(), month))
    }

    fn date_of(&self, day: usize) -> NaiveDate {
        NaiveDate::from_yo_opt(self.year.into(), day as u32 + 1)
            .expect("invalid day loaded from sheet")
    }
}

fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
