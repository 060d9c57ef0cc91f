use firelist::utils::datetime;

#[test]
fn test_now_ms_is_recent() {
    let before = chrono::Utc::now().timestamp_millis();
    let now = datetime::now_ms();
    let after = chrono::Utc::now().timestamp_millis();
    assert!(now >= before);
    assert!(now <= after);
}

#[test]
fn test_format_ms_known_value() {
    // 2023-11-14 22:13:20 UTC
    assert_eq!(datetime::format_ms(1700000000000), "2023-11-14 22:13:20");
}

#[test]
fn test_ms_to_datetime_round_trip() {
    let dt = datetime::ms_to_datetime(1700000000000).unwrap();
    assert_eq!(dt.timestamp_millis(), 1700000000000);
}

#[test]
fn test_format_ms_out_of_range_falls_back_to_raw() {
    assert_eq!(datetime::format_ms(i64::MAX), i64::MAX.to_string());
}
