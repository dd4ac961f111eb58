//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // not every test binary uses every helper

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use utilkit::services::image::{write_png, RgbaImage};

/// Path to the utilkit binary
pub fn utilkit_bin() -> String {
    env!("CARGO_BIN_EXE_utilkit").to_string()
}

/// Fresh configuration directory; config file and store live inside it.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to share state between commands in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(utilkit_bin());
    cmd.env("UTILKIT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs utilkit in `config_dir` and returns its output.
pub fn run_in(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs utilkit with a throwaway config directory.
pub fn run(args: &[&str]) -> Output {
    let dir = temp_config_dir();
    run_in(args, dir.path())
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Asserts exit code 0 and returns stdout.
pub fn success(output: &Output) -> String {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
    stdout(output)
}

/// Asserts exit code 0 and parses stdout as JSON.
pub fn success_json(output: &Output) -> serde_json::Value {
    let out = success(output);
    serde_json::from_str(&out).expect("Should parse JSON output")
}

/// Asserts the given exit code and an `Error:` line on stderr.
pub fn failure(output: &Output, code: i32) -> String {
    assert_eq!(
        output.status.code(),
        Some(code),
        "Unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
    let err = stderr(output);
    assert!(err.contains("Error:"), "stderr should carry an error: {err}");
    err
}

/// Parsed `storage.json` in the default data directory of `config_dir`.
pub fn read_storage(config_dir: &Path) -> serde_json::Value {
    let path = config_dir.join("data").join("storage.json");
    let content = std::fs::read_to_string(&path).expect("storage.json should exist");
    serde_json::from_str(&content).expect("storage.json should be valid JSON")
}

/// Writes a PNG filled with the given colors in equal horizontal bands.
pub fn write_banded_png(path: &Path, bands: &[[u8; 3]], width: u32, band_height: u32) {
    let height = band_height * bands.len() as u32;
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for band in bands {
        for _ in 0..(width * band_height) {
            pixels.extend_from_slice(&[band[0], band[1], band[2], 255]);
        }
    }
    write_png(
        path,
        &RgbaImage {
            width,
            height,
            pixels,
        },
    )
    .expect("Failed to write test PNG");
}

/// Runs utilkit with `input` piped to stdin.
pub fn run_with_stdin(args: &[&str], input: &str) -> Output {
    use std::io::Write;
    use std::process::Stdio;

    let dir = temp_config_dir();
    let mut child = isolated_command(args, dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for command")
}
