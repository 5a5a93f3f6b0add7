use std::fmt;
use std::ops::Range;

/// Number of bytes backing a [`DaySet`], enough for the 366 days of a leap
/// year.
pub const DAY_SET_BYTES: usize = 46;

/// Highest number of days a set can hold.
pub const MAX_DAYS: usize = 366;

/// A fixed-capacity set of zero-based day-of-year indexes, packed one bit per
/// day.
///
/// The backing array never grows or shrinks, so the serialized form keeps a
/// constant size whatever the year looks like. Bit `i % 8` of byte `i / 8`
/// holds day index `i`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DaySet([u8; DAY_SET_BYTES]);

impl DaySet {
    /// Create a new set that does not include any day.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let days = DaySet::new();
    /// assert_eq!(days.count(), 0);
    /// ```
    pub const fn new() -> Self {
        Self([0; DAY_SET_BYTES])
    }

    /// Build a set from its raw backing bytes.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut bytes = [0; 46];
    /// bytes[0] = 0b0000_0101;
    ///
    /// let days = DaySet::from_bytes(bytes);
    /// assert!(days.contains(0));
    /// assert!(!days.contains(1));
    /// assert!(days.contains(2));
    /// ```
    pub const fn from_bytes(bytes: [u8; DAY_SET_BYTES]) -> Self {
        Self(bytes)
    }

    /// The raw backing bytes of this set.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(9);
    /// assert_eq!(days.as_bytes()[1], 0b0000_0010);
    /// ```
    pub const fn as_bytes(&self) -> &[u8; DAY_SET_BYTES] {
        &self.0
    }

    /// Include a day in this set.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(73);
    /// days.insert(73);
    /// days.insert(2);
    /// assert_eq!(days.count(), 2);
    /// ```
    pub fn insert(&mut self, day: usize) {
        assert!(day < MAX_DAYS);
        self.0[day / 8] |= 1 << (day % 8);
    }

    /// Check if this set includes the given day.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(73);
    ///
    /// assert!(days.contains(73));
    /// assert!(!days.contains(74));
    /// ```
    pub fn contains(&self, day: usize) -> bool {
        assert!(day < MAX_DAYS);
        self.0[day / 8] & (1 << (day % 8)) != 0
    }

    /// Count days included in this set.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(0);
    /// days.insert(364);
    /// assert_eq!(days.count(), 2);
    /// ```
    pub fn count(&self) -> u32 {
        self.0.iter().map(|byte| byte.count_ones()).sum()
    }

    /// Count days of `range` included in this set.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(3);
    /// days.insert(40);
    /// days.insert(64);
    ///
    /// assert_eq!(days.count_range(0..41), 2);
    /// assert_eq!(days.count_range(4..64), 1);
    /// ```
    pub fn count_range(&self, range: Range<usize>) -> u32 {
        self.iter_range(range).count() as u32
    }

    /// Iterate over the days included in this set, in ascending order.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(73);
    /// days.insert(2);
    ///
    /// let indexes: Vec<_> = days.iter().collect();
    /// assert_eq!(indexes, [2, 73]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().flat_map(|(i, &byte)| {
            let mut val = byte;

            std::iter::from_fn(move || {
                if val != 0 {
                    let bit = val.trailing_zeros() as usize;
                    val ^= 1 << bit;
                    Some(8 * i + bit)
                } else {
                    None
                }
            })
        })
    }

    /// Iterate over the days of `range` included in this set, in ascending
    /// order.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(59);
    /// days.insert(89);
    /// days.insert(90);
    ///
    /// let indexes: Vec<_> = days.iter_range(59..90).collect();
    /// assert_eq!(indexes, [59, 89]);
    /// ```
    pub fn iter_range(&self, range: Range<usize>) -> impl Iterator<Item = usize> {
        let set = *self;
        range.filter(move |&day| set.contains(day))
    }

    /// Iterate over the days of `range` missing from this set, in ascending
    /// order.
    ///
    /// Days outside of `range` are never reported, so complementing a month
    /// or a year cannot leak indexes past its last day.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(1);
    /// days.insert(2);
    ///
    /// let indexes: Vec<_> = days.iter_absent_range(0..4).collect();
    /// assert_eq!(indexes, [0, 3]);
    /// ```
    pub fn iter_absent_range(&self, range: Range<usize>) -> impl Iterator<Item = usize> {
        let set = *self;
        range.filter(move |&day| !set.contains(day))
    }

    /// Remove every day at index `len` or above.
    ///
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::from_bytes([0xff; 46]);
    /// days.truncate(365);
    /// assert_eq!(days.count(), 365);
    /// assert!(days.contains(364));
    /// assert!(!days.contains(365));
    /// ```
    pub fn truncate(&mut self, len: usize) {
        assert!(len <= MAX_DAYS);

        for (i, byte) in self.0.iter_mut().enumerate() {
            let first = 8 * i;

            if first >= len {
                *byte = 0;
            } else if first + 8 > len {
                *byte &= (1u8 << (len - first)) - 1;
            }
        }
    }
}

impl fmt::Debug for DaySet {
    /// ```
    /// use sign_in_sheet::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(73);
    /// days.insert(2);
    /// assert_eq!(format!("{days:?}"), "{2, 73}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
