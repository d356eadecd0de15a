//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use chrono::{TimeZone, Utc};
use palettesmith::models::SavedPalette;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the palettesmith binary.
pub fn palettesmith_bin() -> &'static str {
    env!("CARGO_BIN_EXE_palettesmith")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration
/// between them within one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(palettesmith_bin());
    cmd.env("PALETTESMITH_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command against a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Stdout of a finished command as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON output: {e}\nstdout: {}\nstderr: {}",
            stdout(output),
            stderr(output)
        )
    })
}

/// Asserts the exit code, printing stderr on mismatch.
pub fn assert_exit_code(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "unexpected exit code.\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Builds a public gallery row created on `2025-01-{day}`.
pub fn saved_palette(id: &str, name: &str, colors: &[&str], day: u32, likes: u32) -> SavedPalette {
    SavedPalette {
        id: id.to_string(),
        name: name.to_string(),
        colors: colors.iter().map(|c| (*c).to_string()).collect(),
        created_at: Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap(),
        likes,
        copied_count: 0,
        exported_count: 0,
        is_public: true,
        tags: Vec::new(),
    }
}

/// A small gallery mixing light, dark, popular and private rows.
pub fn sample_gallery() -> Vec<SavedPalette> {
    let mut private = saved_palette("4", "Secret Sunset", &["#ff7e5f", "#feb47b"], 20, 99);
    private.is_public = false;

    vec![
        saved_palette("1", "Lime Harmony", &["#d5d86e", "#f0f4c3", "#fffde7"], 3, 5),
        saved_palette("2", "Midnight Ocean", &["#0b132b", "#1c2541", "#3a506b"], 10, 42),
        saved_palette("3", "Forest Floor", &["#2d6a4f", "#40916c", "#1b4332"], 7, 12),
        private,
        saved_palette("5", "Paper Lime", &["#ffffff", "#eeeeee"], 1, 0),
    ]
}

/// Writes gallery rows to a temp JSON file.
///
/// Returns the path and the temp dir guard (keep it alive for the test).
pub fn write_gallery_file(rows: &[SavedPalette]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gallery.json");
    let json = serde_json::to_string_pretty(rows).expect("Failed to serialize gallery");
    fs::write(&path, json).expect("Failed to write gallery file");
    (path, temp_dir)
}
