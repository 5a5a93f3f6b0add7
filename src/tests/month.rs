use crate::utils::dates;
use crate::{date, datetime, Error, YearlySheet};

#[test]
fn monthly_counts_follow_the_calendar() {
    let mut sheet = YearlySheet::new(2023);

    sheet.sign_in(date!("2023-03-01")).unwrap();
    sheet.sign_in(date!("2023-03-15")).unwrap();
    sheet.sign_in(date!("2023-03-31")).unwrap();
    sheet.sign_in(date!("2023-04-01")).unwrap();

    assert_eq!(sheet.signed_in_count_in_month(3), Ok(3));
    assert_eq!(sheet.not_signed_in_count_in_month(3), Ok(28));
    assert_eq!(sheet.signed_in_count_in_month(4), Ok(1));
    assert_eq!(sheet.not_signed_in_count_in_month(4), Ok(29));
    assert_eq!(sheet.signed_in_count_in_month(5), Ok(0));
}

#[test]
fn february_follows_leap_years() {
    let mut leap = YearlySheet::new(2024);
    leap.sign_in(date!("2024-02-29")).unwrap();

    assert_eq!(leap.signed_in_count_in_month(2), Ok(1));
    assert_eq!(leap.not_signed_in_count_in_month(2), Ok(28));

    let plain = YearlySheet::new(2023);
    assert_eq!(plain.not_signed_in_count_in_month(2), Ok(28));

    let days: Vec<_> = leap.signed_in_days_in_month(2).unwrap().collect();
    assert_eq!(days, [date!("2024-02-29")]);
}

#[test]
fn every_month_partitions_its_days() {
    let mut sheet = YearlySheet::new(2024);

    for date in ["2024-01-31", "2024-02-29", "2024-06-01", "2024-12-31"] {
        sheet.sign_in(date!(date)).unwrap();
    }

    for month in 1..=12 {
        let signed = sheet.signed_in_count_in_month(month).unwrap();
        let missed = sheet.not_signed_in_count_in_month(month).unwrap();
        assert_eq!(signed + missed, dates::days_in_month(2024, month));
    }
}

#[test]
fn month_lists_stay_in_bounds() {
    let mut sheet = YearlySheet::new(2023);

    sheet.sign_in(date!("2023-03-31")).unwrap();
    sheet.sign_in(date!("2023-04-01")).unwrap();

    let march: Vec<_> = sheet.signed_in_days_in_month(3).unwrap().collect();
    assert_eq!(march, [date!("2023-03-31")]);

    let missed_april: Vec<_> = sheet.not_signed_in_days_in_month(4).unwrap().collect();
    assert_eq!(missed_april.len(), 29);
    assert_eq!(missed_april.first(), Some(&date!("2023-04-02")));
    assert_eq!(missed_april.last(), Some(&date!("2023-04-30")));
}

#[test]
fn out_of_range_months_fail_fast() {
    let sheet = YearlySheet::new(2023);

    assert_eq!(sheet.signed_in_count_in_month(0), Err(Error::InvalidMonth(0)));
    assert_eq!(sheet.not_signed_in_count_in_month(13), Err(Error::InvalidMonth(13)));
    assert!(sheet.signed_in_days_in_month(13).is_err());
    assert!(sheet.not_signed_in_days_in_month(0).is_err());
    assert!(sheet.signed_in_date_times_in_month(42).is_err());
    assert!(sheet.not_signed_in_date_times_in_month(42).is_err());
}

#[test]
fn month_date_time_views_land_at_midnight() {
    let mut sheet = YearlySheet::new(2023);
    sheet.sign_in(date!("2023-12-25")).unwrap();

    let times: Vec<_> = sheet.signed_in_date_times_in_month(12).unwrap().collect();
    assert_eq!(times, [datetime!("2023-12-25 00:00")]);

    let missed: Vec<_> = sheet.not_signed_in_date_times_in_month(12).unwrap().collect();
    assert_eq!(missed.len(), 30);
    assert_eq!(missed.first(), Some(&datetime!("2023-12-01 00:00")));
}
