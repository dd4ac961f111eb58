//! End-to-end tests for `utilkit favorites`, `utilkit theme` and `utilkit language`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_favorites_are_persisted_in_order() {
    let dir = temp_config_dir();
    success(&run_in(&["favorites", "add", "uuid-generator"], dir.path()));
    success(&run_in(&["favorites", "add", "base64"], dir.path()));

    let storage = read_storage(dir.path());
    assert_eq!(storage["favorites"], serde_json::json!(["uuid-generator", "base64"]));

    let json = success_json(&run_in(&["favorites", "list", "--json"], dir.path()));
    assert_eq!(json, serde_json::json!(["uuid-generator", "base64"]));
}

#[test]
fn test_favorite_add_twice_is_reported() {
    let dir = temp_config_dir();
    success(&run_in(&["favorites", "add", "base64"], dir.path()));
    let output = run_in(&["favorites", "add", "base64", "--json"], dir.path());
    let json = success_json(&output);
    assert_eq!(json["favorite"], true);
    assert_eq!(json["changed"], false);
}

#[test]
fn test_favorite_toggle_and_remove() {
    let dir = temp_config_dir();
    let json = success_json(&run_in(&["favorites", "toggle", "todo-list", "--json"], dir.path()));
    assert_eq!(json["favorite"], true);

    let output = run_in(&["favorites", "remove", "todo-list"], dir.path());
    assert!(success(&output).contains("Removed 'todo-list' from favorites."));
    assert_eq!(read_storage(dir.path())["favorites"], serde_json::json!([]));
}

#[test]
fn test_unknown_favorite_is_validation_error() {
    let dir = temp_config_dir();
    let output = run_in(&["favorites", "add", "flux-capacitor"], dir.path());
    let err = failure(&output, 1);
    assert!(err.contains("Unknown tool id"), "stderr: {err}");
    assert!(!dir.path().join("data").join("storage.json").exists());
}

#[test]
fn test_favorites_empty_list() {
    let output = run(&["favorites", "list"]);
    assert!(success(&output).contains("No favorites yet."));
}

// ============================================================================
// Theme and Language
// ============================================================================

#[test]
fn test_theme_from_config_then_stored() {
    let dir = temp_config_dir();
    std::fs::write(dir.path().join("config.toml"), "[ui]\ntheme_mode = \"Light\"\n").unwrap();

    let json = success_json(&run_in(&["theme", "--json"], dir.path()));
    assert_eq!(json["theme"], "light");
    assert_eq!(json["source"], "config");

    let output = run_in(&["theme", "toggle"], dir.path());
    assert!(success(&output).contains("Theme set to dark."));
    assert_eq!(read_storage(dir.path())["theme"], "dark");

    let json = success_json(&run_in(&["theme", "show", "--json"], dir.path()));
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["source"], "stored");
}

#[test]
fn test_theme_set() {
    let dir = temp_config_dir();
    success(&run_in(&["theme", "set", "light"], dir.path()));
    assert_eq!(read_storage(dir.path())["theme"], "light");
}

#[test]
fn test_language_set_and_show() {
    let dir = temp_config_dir();
    let json = success_json(&run_in(&["language", "--json"], dir.path()));
    assert_eq!(json["language"], "en");
    assert_eq!(json["source"], "config");

    let output = run_in(&["language", "set", "pt-BR"], dir.path());
    assert!(success(&output).contains("Language set to pt-BR."));
    assert_eq!(read_storage(dir.path())["language"], "pt-BR");
}

#[test]
fn test_language_invalid_code() {
    let dir = temp_config_dir();
    let output = run_in(&["language", "set", "English"], dir.path());
    failure(&output, 1);
    assert!(!dir.path().join("data").join("storage.json").exists());
}
