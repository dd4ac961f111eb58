//! End-to-end tests for `utilkit todo` commands.

mod fixtures;
use fixtures::*;

fn todos_in_storage(config_dir: &std::path::Path) -> Vec<serde_json::Value> {
    read_storage(config_dir)["todos"]
        .as_array()
        .cloned()
        .unwrap_or_default()
}

#[test]
fn test_add_toggle_delete_is_persisted() {
    let dir = temp_config_dir();

    let output = run_in(&["todo", "add", "Buy milk", "--json"], dir.path());
    let item = success_json(&output);
    let id = item["id"].as_str().unwrap().to_string();

    let todos = todos_in_storage(dir.path());
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["text"], "Buy milk");
    assert_eq!(todos[0]["completed"], false);

    let output = run_in(&["todo", "toggle", &id[..8]], dir.path());
    assert!(success(&output).contains("Completed: Buy milk"));
    assert_eq!(todos_in_storage(dir.path())[0]["completed"], true);

    let output = run_in(&["todo", "delete", &id], dir.path());
    assert!(success(&output).contains("Deleted: Buy milk"));
    assert!(todos_in_storage(dir.path())
        .iter()
        .all(|t| t["text"] != "Buy milk"));
}

#[test]
fn test_empty_text_is_rejected_and_not_persisted() {
    let dir = temp_config_dir();
    let output = run_in(&["todo", "add", "   "], dir.path());
    failure(&output, 1);
    assert!(!dir.path().join("data").join("storage.json").exists());
}

#[test]
fn test_unknown_id_is_validation_error() {
    let dir = temp_config_dir();
    success(&run_in(&["todo", "add", "Something"], dir.path()));
    let before = read_storage(dir.path());

    let output = run_in(&["todo", "toggle", "ffffffff"], dir.path());
    failure(&output, 1);
    assert_eq!(read_storage(dir.path()), before);
}

#[test]
fn test_short_prefix_is_rejected() {
    let dir = temp_config_dir();
    let item = success_json(&run_in(&["todo", "add", "Task", "--json"], dir.path()));
    let id = item["id"].as_str().unwrap();

    let output = run_in(&["todo", "delete", &id[..2]], dir.path());
    failure(&output, 1);
    assert_eq!(todos_in_storage(dir.path()).len(), 1);
}

#[test]
fn test_list_filter_and_sort() {
    let dir = temp_config_dir();
    success(&run_in(&["todo", "add", "low one", "--priority", "low"], dir.path()));
    let high = success_json(&run_in(
        &["todo", "add", "high one", "--priority", "high", "--category", "work", "--json"],
        dir.path(),
    ));
    success(&run_in(&["todo", "toggle", high["id"].as_str().unwrap()], dir.path()));

    let json = success_json(&run_in(&["todo", "list", "--sort", "priority", "--json"], dir.path()));
    let texts: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["high one", "low one"]);

    let json = success_json(&run_in(&["todo", "list", "--filter", "active", "--json"], dir.path()));
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["text"], "low one");

    let json = success_json(&run_in(&["todo", "list", "--category", "work", "--json"], dir.path()));
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn test_edit_and_clear_due() {
    let dir = temp_config_dir();
    let item = success_json(&run_in(
        &["todo", "add", "Pay rent", "--due", "2020-01-01", "--json"],
        dir.path(),
    ));
    let id = item["id"].as_str().unwrap();
    assert_eq!(item["due_date"], "2020-01-01");

    let stats = success_json(&run_in(&["todo", "stats", "--json"], dir.path()));
    assert_eq!(stats["overdue"], 1);

    success(&run_in(&["todo", "edit", id, "--text", "Pay rent now", "--clear-due"], dir.path()));
    let todos = todos_in_storage(dir.path());
    assert_eq!(todos[0]["text"], "Pay rent now");
    assert!(todos[0]["due_date"].is_null());
}

#[test]
fn test_edit_without_changes() {
    let dir = temp_config_dir();
    let item = success_json(&run_in(&["todo", "add", "Task", "--json"], dir.path()));
    let output = run_in(&["todo", "edit", item["id"].as_str().unwrap()], dir.path());
    failure(&output, 1);
}

#[test]
fn test_bad_due_date() {
    let output = run(&["todo", "add", "Task", "--due", "tomorrow"]);
    failure(&output, 1);
}

#[test]
fn test_clear_completed_and_stats() {
    let dir = temp_config_dir();
    let done = success_json(&run_in(&["todo", "add", "done", "--json"], dir.path()));
    success(&run_in(&["todo", "add", "open"], dir.path()));
    success(&run_in(&["todo", "toggle", done["id"].as_str().unwrap()], dir.path()));

    let stats = success_json(&run_in(&["todo", "stats", "--json"], dir.path()));
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["completed"], 1);

    let output = run_in(&["todo", "clear-completed"], dir.path());
    assert!(success(&output).contains("Removed 1 completed item(s)."));

    let todos = todos_in_storage(dir.path());
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["text"], "open");
}

#[test]
fn test_corrupt_storage_is_io_error_and_untouched() {
    let dir = temp_config_dir();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("storage.json"), "[1, 2, 3]").unwrap();

    let output = run_in(&["todo", "add", "Task"], dir.path());
    failure(&output, 2);
    assert_eq!(
        std::fs::read_to_string(data.join("storage.json")).unwrap(),
        "[1, 2, 3]"
    );
}
