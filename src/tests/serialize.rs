use crate::{date, Error, YearlySheet, SHEET_BYTES};

#[test]
fn byte_layout_is_stable() {
    let mut sheet = YearlySheet::new(2023);
    sheet.sign_in(date!("2023-01-01")).unwrap();
    sheet.sign_in(date!("2023-01-04")).unwrap();
    sheet.sign_in(date!("2023-01-09")).unwrap();

    let bytes = sheet.to_bytes();

    // 2023 = 0x07e7, least significant byte first
    assert_eq!(bytes[..2], [0xe7, 0x07]);

    // Jan 1st and Jan 4th are day indexes 0 and 3 of the first byte
    assert_eq!(bytes[2], 0b0000_1001);

    // Jan 9th is day index 8, first bit of the second byte
    assert_eq!(bytes[3], 0b0000_0001);

    assert!(bytes[4..].iter().all(|&byte| byte == 0));
}

#[test]
fn round_trip_through_bytes() {
    let mut sheet = YearlySheet::new(2024);

    for date in ["2024-01-01", "2024-02-29", "2024-08-08", "2024-12-31"] {
        sheet.sign_in(date!(date)).unwrap();
    }

    let bytes = sheet.to_bytes();
    assert_eq!(bytes.len(), SHEET_BYTES);

    let copy = YearlySheet::from_bytes(&bytes).unwrap();
    assert_eq!(copy, sheet);
    assert_eq!(copy.year(), 2024);
    assert_eq!(copy.signed_in_count(), 4);
}

#[test]
fn negative_years_round_trip() {
    let sheet = YearlySheet::new(-753);
    let copy = YearlySheet::from_bytes(&sheet.to_bytes()).unwrap();
    assert_eq!(copy.year(), -753);
}

#[test]
fn wrong_length_is_rejected() {
    assert_eq!(YearlySheet::from_bytes(&[]), Err(Error::InvalidLength(0)));
    assert_eq!(YearlySheet::from_bytes(&[0; 47]), Err(Error::InvalidLength(47)));
    assert_eq!(YearlySheet::from_bytes(&[0; 49]), Err(Error::InvalidLength(49)));
}

#[test]
fn stray_bits_are_masked_on_load() {
    // year 2023 followed by every single day bit set, including the bits
    // past day 365 that no operation could ever have produced
    let mut bytes = [0xff; SHEET_BYTES];
    bytes[0] = 0xe7;
    bytes[1] = 0x07;

    let sheet = YearlySheet::from_bytes(&bytes).unwrap();

    assert_eq!(sheet.signed_in_count(), 365);
    assert_eq!(sheet.not_signed_in_count(), 0);
    assert!(sheet.is_signed_in(date!("2023-12-31")));

    // masking happens on load, so the sheet now round-trips cleanly
    let clean = sheet.to_bytes();
    assert_eq!(clean[SHEET_BYTES - 1], 0b0001_1111);
    assert_eq!(YearlySheet::from_bytes(&clean).unwrap(), sheet);
}

#[test]
fn reader_writer_round_trip() {
    let mut sheet = YearlySheet::new(2023);
    sheet.sign_in(date!("2023-03-15")).unwrap();

    let mut buf = Vec::new();
    sheet.serialize(&mut buf).unwrap();
    assert_eq!(buf.len(), SHEET_BYTES);
    assert_eq!(buf, sheet.to_bytes());

    let copy = YearlySheet::deserialize(buf.as_slice()).unwrap();
    assert_eq!(copy, sheet);
}

#[test]
fn truncated_reader_fails() {
    assert!(YearlySheet::deserialize([0; 47].as_slice()).is_err());
}
