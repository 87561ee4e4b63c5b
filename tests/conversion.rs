use std::collections::HashMap;

use chrono::{Duration, Utc};
use currency_detect::{ConvertError, CurrencyRegistry, RateTable, convert, detect};

fn usd_table() -> RateTable {
    let rates = HashMap::from([
        ("SEK".to_string(), 10.5),
        ("EUR".to_string(), 0.92),
        ("JPY".to_string(), 150.0),
    ]);
    RateTable::new("USD", rates, Utc::now())
}

#[test]
fn test_detect_then_convert() {
    let registry = CurrencyRegistry::default_set();
    let table = usd_table();

    let detected = detect(registry, "$ 123").unwrap();
    let converted = convert(detected.amount, &detected.currency, &table, "SEK").unwrap();
    assert_eq!(converted.amount, 1291.5);
    assert_eq!(converted.to_string(), "1291.50 SEK");
}

#[test]
fn test_round_trip_within_display_rounding() {
    let table = usd_table();
    let amount = 1234.56;

    let there = convert(amount, "EUR", &table, "SEK").unwrap();
    let back = convert(there.amount, "SEK", &table, "EUR").unwrap();
    assert!(
        (back.amount - amount).abs() <= 0.01,
        "round trip drifted: {} -> {} -> {}",
        amount,
        there.amount,
        back.amount
    );
}

#[test]
fn test_unknown_currency_is_caller_visible() {
    let table = usd_table();
    let err = convert(10.0, "GBP", &table, "SEK").unwrap_err();
    assert_eq!(err, ConvertError::UnknownCurrency("GBP".to_string()));

    // Fallback to a default rate is caller policy, not core behavior
    let amount = convert(10.0, "GBP", &table, "SEK")
        .map(|c| c.amount)
        .unwrap_or(10.0 * 10.5);
    assert_eq!(amount, 105.0);
}

#[test]
fn test_rate_table_deserializes_from_api_shape() {
    let table: RateTable =
        serde_json::from_str(r#"{"base": "USD", "rates": {"SEK": 10.5, "EUR": 0.92}}"#).unwrap();
    assert_eq!(table.base, "USD");
    assert_eq!(table.rates["SEK"], 10.5);
    // Missing timestamp defaults to deserialization time
    assert!(!table.is_stale(Duration::hours(1), Utc::now()));

    let dated: RateTable = serde_json::from_str(
        r#"{"base": "USD", "rates": {"SEK": 10.5}, "fetched_at": "2026-08-25T00:00:00Z"}"#,
    )
    .unwrap();
    assert!(dated.is_stale(Duration::hours(1), Utc::now()));
}

#[test]
fn test_rate_table_codes_extend_detection() {
    let table: RateTable =
        serde_json::from_str(r#"{"base": "EUR", "rates": {"CZK": 24.6, "SEK": 11.2}}"#).unwrap();
    let registry = CurrencyRegistry::default_set().with_additional_codes(table.currency_codes());

    let detected = detect(&registry, "250 CZK").unwrap();
    assert_eq!(detected.currency, "CZK");

    let converted = convert(detected.amount, &detected.currency, &table, "SEK").unwrap();
    assert_eq!(converted.amount, (250.0_f64 / 24.6 * 11.2 * 100.0).round() / 100.0);
}
