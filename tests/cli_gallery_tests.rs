//! End-to-end tests for `palettesmith gallery`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn names(json: &serde_json::Value) -> Vec<String> {
    json["palettes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_gallery_recent_skips_private_rows() {
    let (path, _temp) = write_gallery_file(&sample_gallery());
    let output = run(&["gallery", "--file", path.to_str().unwrap(), "--json"]);
    assert_exit_code(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["total"], 5);
    assert_eq!(json["matched"], 4);
    assert_eq!(
        names(&json),
        ["Midnight Ocean", "Forest Floor", "Lime Harmony", "Paper Lime"]
    );
}

#[test]
fn test_gallery_popular_sort_and_limit() {
    let (path, _temp) = write_gallery_file(&sample_gallery());
    let output = run(&[
        "gallery",
        "-f",
        path.to_str().unwrap(),
        "--sort",
        "popular",
        "--limit",
        "2",
        "--json",
    ]);
    assert_exit_code(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(names(&json), ["Midnight Ocean", "Forest Floor"]);
    // The limit trims the page, not the match count
    assert_eq!(json["matched"], 4);
    assert_eq!(json["total"], 5);
}

#[test]
fn test_gallery_search_and_brightness() {
    let (path, _temp) = write_gallery_file(&sample_gallery());

    let output = run(&["gallery", "-f", path.to_str().unwrap(), "--search", "LIME", "--json"]);
    assert_exit_code(&output, 0);
    assert_eq!(names(&stdout_json(&output)), ["Lime Harmony", "Paper Lime"]);

    let output = run(&["gallery", "-f", path.to_str().unwrap(), "--filter", "dark", "--json"]);
    assert_exit_code(&output, 0);
    assert_eq!(names(&stdout_json(&output)), ["Midnight Ocean", "Forest Floor"]);
}

#[test]
fn test_gallery_human_readable() {
    let (path, _temp) = write_gallery_file(&sample_gallery());
    let output = run(&["gallery", "-f", path.to_str().unwrap(), "--filter", "light"]);
    assert_exit_code(&output, 0);

    let stdout = stdout(&output);
    assert!(stdout.contains("Lime Harmony"));
    assert!(stdout.contains("#d5d86e #f0f4c3 #fffde7"));
    assert!(stdout.contains("2 shown, 2 of 5 palettes match"));
}

#[test]
fn test_gallery_human_readable_limited() {
    let (path, _temp) = write_gallery_file(&sample_gallery());
    let output = run(&["gallery", "-f", path.to_str().unwrap(), "--limit", "1"]);
    assert_exit_code(&output, 0);
    assert!(stdout(&output).contains("1 shown, 4 of 5 palettes match"));
}

#[test]
fn test_gallery_no_matches() {
    let (path, _temp) = write_gallery_file(&sample_gallery());
    let output = run(&["gallery", "-f", path.to_str().unwrap(), "--search", "zebra"]);
    assert_exit_code(&output, 0);
    assert!(stdout(&output).contains("No palettes match."));
}

#[test]
fn test_gallery_wrapped_file_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("wrapped.json");
    let rows = serde_json::to_value(sample_gallery()).unwrap();
    fs::write(&path, serde_json::json!({ "palettes": rows }).to_string()).unwrap();

    let output = run(&["gallery", "-f", path.to_str().unwrap(), "--json"]);
    assert_exit_code(&output, 0);
    assert_eq!(stdout_json(&output)["total"], 5);
}

#[test]
fn test_gallery_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.json");
    let output = run(&["gallery", "-f", path.to_str().unwrap()]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_gallery_invalid_filter() {
    let (path, _temp) = write_gallery_file(&sample_gallery());
    let output = run(&["gallery", "-f", path.to_str().unwrap(), "--filter", "grey"]);
    assert_exit_code(&output, 2);
}
