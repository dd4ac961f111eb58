//! End-to-end tests for `utilkit config` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let output = run(&["config", "show"]);
    let out = success(&output);
    assert!(out.contains("utilkit Configuration"), "stdout: {out}");
    assert!(out.contains("Theme Mode: auto"), "stdout: {out}");
}

#[test]
fn test_config_show_json() {
    let dir = temp_config_dir();
    let output = run_in(&["config", "show", "--json"], dir.path());
    let json = success_json(&output);

    assert_eq!(json["ui"]["language"], "en");
    assert_eq!(json["tools"]["password_length"], 16);
    assert_eq!(json["tools"]["pomodoro"]["work_minutes"], 25);
    assert!(json["data_dir"].as_str().unwrap().ends_with("data"));
    assert!(json["config_file"]
        .as_str()
        .unwrap()
        .ends_with("config.toml"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_requires_an_option() {
    let output = run(&["config", "set"]);
    let err = failure(&output, 1);
    assert!(err.contains("At least one configuration option"), "stderr: {err}");
}

#[test]
fn test_config_set_persists() {
    let dir = temp_config_dir();
    let output = run_in(
        &[
            "config",
            "set",
            "--theme-mode",
            "light",
            "--language",
            "pt-BR",
            "--password-length",
            "32",
        ],
        dir.path(),
    );
    assert!(success(&output).contains("Configuration updated successfully."));

    let json = success_json(&run_in(&["config", "show", "--json"], dir.path()));
    assert_eq!(json["ui"]["theme_mode"], "Light");
    assert_eq!(json["ui"]["language"], "pt-BR");
    assert_eq!(json["tools"]["password_length"], 32);

    let password = success(&run_in(&["generate", "password"], dir.path()));
    assert_eq!(password.trim_end().chars().count(), 32);
}

#[test]
fn test_config_set_rejects_short_password_length() {
    let dir = temp_config_dir();
    let output = run_in(&["config", "set", "--password-length", "2"], dir.path());
    failure(&output, 1);
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_bad_theme_mode() {
    let dir = temp_config_dir();
    let output = run_in(&["config", "set", "--theme-mode", "sepia"], dir.path());
    failure(&output, 1);
}

#[test]
fn test_config_set_rejects_bad_language() {
    let dir = temp_config_dir();
    let output = run_in(&["config", "set", "--language", "English"], dir.path());
    failure(&output, 1);
}

#[test]
fn test_config_set_data_dir_moves_storage() {
    let dir = temp_config_dir();
    let data = dir.path().join("elsewhere");
    success(&run_in(
        &["config", "set", "--data-dir", data.to_str().unwrap()],
        dir.path(),
    ));
    assert!(data.is_dir());

    success(&run_in(&["todo", "add", "Relocated"], dir.path()));
    assert!(data.join("storage.json").exists());
    assert!(!dir.path().join("data").join("storage.json").exists());
}

// ============================================================================
// Path and Error Tests
// ============================================================================

#[test]
fn test_config_path_honors_override() {
    let dir = temp_config_dir();
    let output = run_in(&["config", "path"], dir.path());
    let out = success(&output);
    assert_eq!(
        std::path::PathBuf::from(out.trim_end()),
        dir.path().join("config.toml")
    );
}

#[test]
fn test_unparsable_config_is_io_error() {
    let dir = temp_config_dir();
    std::fs::write(dir.path().join("config.toml"), "[ui\nbroken").unwrap();
    let output = run_in(&["config", "show"], dir.path());
    failure(&output, 2);
}
