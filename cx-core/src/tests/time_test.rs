use assertables::*;

use super::*;
use crate::time::*;

#[rstest]
#[case("08:30", (8, 30))]
#[case("8:05", (8, 5))]
#[case("00:00", (0, 0))]
#[case(" 23:59 ", (23, 59))]
fn test_parse_time_of_day(#[case] input: &str, #[case] expected: (u32, u32)) {
    assert_eq!(parse_time_of_day(input).unwrap(), expected);
}

#[rstest]
#[case::hours_out_of_range("24:00")]
#[case::minutes_out_of_range("12:60")]
#[case::missing_minutes("12")]
#[case::garbage("noon")]
fn test_parse_time_of_day_invalid(#[case] input: &str) {
    assert_err!(parse_time_of_day(input));
}

#[rstest]
#[case("UTC+02", "+02:00")]
#[case("UTC-0530", "-05:30")]
#[case("UTC+05:30", "+05:30")]
#[case("UTC", "+00:00")]
#[case("UTC-7", "-07:00")]
fn test_utc_offset_from_time_zone(#[case] tz: &str, #[case] expected: &str) {
    assert_eq!(utc_offset_from_time_zone(tz).unwrap(), expected);
}

#[rstest]
#[case::not_utc("GMT+01")]
#[case::too_far("UTC+15")]
#[case::bad_minutes("UTC+01:75")]
fn test_utc_offset_from_time_zone_invalid(#[case] tz: &str) {
    assert_err!(utc_offset_from_time_zone(tz));
}

#[rstest]
#[case("+02:00", "UTC+02")]
#[case("-05:30", "UTC-05:30")]
#[case("+00:00", "UTC+00")]
#[case("+14:00", "UTC+14")]
fn test_time_zone_from_utc_offset(#[case] offset: &str, #[case] expected: &str) {
    assert_eq!(time_zone_from_utc_offset(offset).unwrap(), expected);
}

#[rstest]
#[case::missing_sign("02:00")]
#[case::hours_out_of_range("+99:99")]
#[case::too_far("-15:00")]
#[case::bad_minutes("+05:60")]
fn test_time_zone_from_utc_offset_invalid(#[case] offset: &str) {
    assert_err!(time_zone_from_utc_offset(offset));
}

#[rstest]
fn test_millis() {
    assert_eq!(to_millis(1, 2, 3), 3_723_000);
    assert_eq!(from_millis(3_723_000).unwrap(), (1, 2, 3));
    assert_eq!(from_millis(1_500).unwrap(), (0, 0, 1));
}

#[rstest]
fn test_from_millis_too_long() {
    let err = from_millis(u64::MAX).unwrap_err();
    assert_contains!(err.to_string(), "too long");
}
