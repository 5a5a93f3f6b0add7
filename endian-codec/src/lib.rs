#![doc = include_str!("../README.md")]

/// Byte order used when encoding or decoding fixed-width integers.
///
/// Defaults to [`ByteOrder::Little`], the order of the sheet wire format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Encode a signed 16-bit integer into a byte array.
///
/// ```
/// use endian_codec::{i16_to_bytes, ByteOrder};
///
/// assert_eq!(i16_to_bytes(2023, ByteOrder::Little), [0xe7, 0x07]);
/// assert_eq!(i16_to_bytes(2023, ByteOrder::Big), [0x07, 0xe7]);
/// assert_eq!(i16_to_bytes(-1, ByteOrder::Little), [0xff, 0xff]);
/// ```
pub const fn i16_to_bytes(value: i16, order: ByteOrder) -> [u8; 2] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
    }
}

/// Decode a signed 16-bit integer from a byte array.
///
/// ```
/// use endian_codec::{i16_from_bytes, i16_to_bytes, ByteOrder};
///
/// assert_eq!(i16_from_bytes([0xe7, 0x07], ByteOrder::Little), 2023);
/// assert_eq!(i16_from_bytes([0x07, 0xe7], ByteOrder::Big), 2023);
///
/// let order = ByteOrder::default();
/// assert_eq!(i16_from_bytes(i16_to_bytes(-12345, order), order), -12345);
/// ```
pub const fn i16_from_bytes(bytes: [u8; 2], order: ByteOrder) -> i16 {
    match order {
        ByteOrder::Little => i16::from_le_bytes(bytes),
        ByteOrder::Big => i16::from_be_bytes(bytes),
    }
}

/// Encode a signed 64-bit integer into a byte array.
///
/// ```
/// use endian_codec::{i64_to_bytes, ByteOrder};
///
/// let little = i64_to_bytes(1 << 40, ByteOrder::Little);
/// let mut big = i64_to_bytes(1 << 40, ByteOrder::Big);
/// big.reverse();
///
/// assert_eq!(little, big);
/// assert_eq!(little, [0, 0, 0, 0, 0, 1, 0, 0]);
/// ```
pub const fn i64_to_bytes(value: i64, order: ByteOrder) -> [u8; 8] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
    }
}

/// Decode a signed 64-bit integer from a byte array.
///
/// ```
/// use endian_codec::{i64_from_bytes, i64_to_bytes, ByteOrder};
///
/// for order in [ByteOrder::Little, ByteOrder::Big] {
///     for value in [0, 1, -1, i64::MIN, i64::MAX] {
///         assert_eq!(i64_from_bytes(i64_to_bytes(value, order), order), value);
///     }
/// }
/// ```
pub const fn i64_from_bytes(bytes: [u8; 8], order: ByteOrder) -> i64 {
    match order {
        ByteOrder::Little => i64::from_le_bytes(bytes),
        ByteOrder::Big => i64::from_be_bytes(bytes),
    }
}
