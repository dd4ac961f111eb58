//! End-to-end tests for `utilkit encode` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_base64_encode_and_decode() {
    let output = run(&["encode", "base64", "hello"]);
    assert_eq!(success(&output).trim_end(), "aGVsbG8=");

    let output = run(&["encode", "base64", "--decode", "aGVsbG8="]);
    assert_eq!(success(&output).trim_end(), "hello");
}

#[test]
fn test_base64_url_safe_json() {
    let output = run(&["encode", "base64", "--variant", "url-safe", "??>", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["mode"], "encode");
    assert_eq!(json["variant"], "url-safe");
    assert_eq!(json["result"], "Pz8-");
}

#[test]
fn test_base64_invalid_input() {
    let output = run(&["encode", "base64", "--decode", "not base64!"]);
    let err = failure(&output, 1);
    assert!(err.contains("Malformed input"), "stderr: {err}");
}

#[test]
fn test_hash_single_algorithm() {
    let output = run(&["encode", "hash", "--algorithm", "sha256", "abc"]);
    assert_eq!(
        success(&output).trim_end(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_hash_all_algorithms_json() {
    let output = run(&["encode", "hash", "abc", "--json"]);
    let json = success_json(&output);
    let digests = json.as_array().expect("digests array");
    assert_eq!(digests.len(), 3);
    assert_eq!(digests[0]["algorithm"], "sha256");
    assert_eq!(digests[2]["algorithm"], "sha512");
}

#[test]
fn test_hash_table_is_aligned() {
    let output = run(&["encode", "hash", "abc"]);
    let out = success(&output);
    assert!(out.lines().next().unwrap().starts_with("sha256   ba7816bf"));
}

#[test]
fn test_number_base_decimal_to_binary() {
    let output = run(&["encode", "base", "42"]);
    let out = success(&output);
    assert!(out.contains("Binary:      101010"), "stdout: {out}");
    assert!(out.contains("Hexadecimal: 2A"), "stdout: {out}");
}

#[test]
fn test_number_base_custom_target_json() {
    let output = run(&["encode", "base", "ff", "--from", "16", "--to", "36", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["decimal"], "255");
    assert_eq!(json["custom"][0], 36);
}

#[test]
fn test_number_base_invalid_digit() {
    let output = run(&["encode", "base", "102", "--from", "2"]);
    failure(&output, 1);
}
