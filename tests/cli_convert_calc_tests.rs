//! End-to-end tests for `utilkit convert` and `utilkit calc` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Converters
// ============================================================================

#[test]
fn test_temperature_boiling_point() {
    let output = run(&["convert", "temperature", "100", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["fahrenheit"], 212.0);
    assert_eq!(json["kelvin"], 373.15);
}

#[test]
fn test_temperature_absolute_zero_is_valid() {
    let output = run(&["convert", "temperature", "0", "--from", "kelvin", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["celsius"], -273.15);
}

#[test]
fn test_temperature_below_absolute_zero() {
    let output = run(&["convert", "temperature", "-300"]);
    let err = failure(&output, 1);
    assert!(err.contains("absolute zero"), "stderr: {err}");
}

#[test]
fn test_unit_conversion() {
    let output = run(&["convert", "unit", "12", "--quantity", "length", "--from", "inch", "--to", "FT"]);
    assert!(success(&output).starts_with("12 in = "));

    let output = run(&["convert", "unit", "1", "--quantity", "length", "--from", "mi", "--to", "km", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["from"], "mi");
    assert!((json["result"].as_f64().unwrap() - 1.609_344).abs() < 1e-9);
}

#[test]
fn test_unknown_unit_is_invalid_option() {
    let output = run(&["convert", "unit", "1", "--quantity", "mass", "--from", "kg", "--to", "parsec"]);
    let err = failure(&output, 1);
    assert!(err.contains("Invalid option"), "stderr: {err}");
}

#[test]
fn test_units_listing() {
    let output = run(&["convert", "units", "data"]);
    let out = success(&output);
    assert!(out.starts_with("data:"));
    assert!(out.contains("mib"));
}

#[test]
fn test_timestamp_from_unix() {
    let output = run(&["convert", "timestamp", "1700000000", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["rfc3339"], "2023-11-14T22:13:20Z");
    assert_eq!(json["iso_date"], "2023-11-14");
    assert_eq!(json["weekday"], "Tuesday");
    assert_eq!(json["unix_milliseconds"], 1_700_000_000_000_i64);
}

#[test]
fn test_timestamp_milliseconds_auto_detected() {
    let output = run(&["convert", "timestamp", "1700000000000", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["unix_seconds"], 1_700_000_000_i64);
}

#[test]
fn test_timestamp_to_unix() {
    let output = run(&["convert", "timestamp", "--to-unix", "2024-01-01", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["unix_seconds"], 1_704_067_200_i64);
}

#[test]
fn test_timestamp_year_range() {
    let output = run(&["convert", "timestamp", "253402300799", "--unit", "seconds", "--json"]);
    assert_eq!(success_json(&output)["iso_date"], "9999-12-31");

    let output = run(&["convert", "timestamp", "300000000000000"]);
    let err = failure(&output, 1);
    assert!(err.contains("out of range"), "stderr: {err}");

    let output = run(&["convert", "timestamp", "-62200000000", "--unit", "seconds"]);
    failure(&output, 1);
}

#[test]
fn test_timestamp_rejects_garbage() {
    let output = run(&["convert", "timestamp", "yesterday"]);
    failure(&output, 1);
}

// ============================================================================
// Calculators
// ============================================================================

#[test]
fn test_bmi_metric() {
    let output = run(&["calc", "bmi", "--weight", "70", "--height", "175", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["bmi"], 22.9);
    assert_eq!(json["category"], "normal");
}

#[test]
fn test_bmi_rejects_zero_height() {
    let output = run(&["calc", "bmi", "--weight", "70", "--height", "0"]);
    failure(&output, 1);
}

#[test]
fn test_percent_modes() {
    let output = run(&["calc", "percent", "20", "150"]);
    assert_eq!(success(&output).trim_end(), "20% of 150 = 30");

    let output = run(&["calc", "percent", "--mode", "change", "50", "75", "--json"]);
    assert_eq!(success_json(&output)["result"], 50.0);

    let output = run(&["calc", "percent", "--mode", "ratio", "5", "0"]);
    failure(&output, 1);
}

#[test]
fn test_age_with_reference_date() {
    let output = run(&["calc", "age", "1990-05-15", "--on", "2024-03-10", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["years"], 33);
    assert_eq!(json["months"], 9);
    assert_eq!(json["days"], 24);
}

#[test]
fn test_age_birth_after_reference() {
    let output = run(&["calc", "age", "2030-01-01", "--on", "2024-01-01"]);
    failure(&output, 1);
}

#[test]
fn test_age_bad_date_format() {
    let output = run(&["calc", "age", "15/05/1990"]);
    failure(&output, 1);
}

#[test]
fn test_tip_split() {
    let output = run(&["calc", "tip", "100", "--percent", "15", "--people", "4", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["total"], 115.0);
    assert_eq!(json["total_per_person"], 28.75);
}

#[test]
fn test_loan_payment() {
    let output = run(&["calc", "loan", "200000", "--rate", "6", "--months", "360"]);
    let out = success(&output);
    assert!(out.contains("Monthly payment: 1199.10"), "stdout: {out}");
}

#[test]
fn test_loan_zero_rate() {
    let output = run(&["calc", "loan", "1200", "--rate", "0", "--months", "12", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["monthly_payment"], 100.0);
    assert_eq!(json["total_interest"], 0.0);
}
