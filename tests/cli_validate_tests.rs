//! End-to-end tests for `palettesmith validate`.

mod fixtures;
use fixtures::*;

#[test]
fn test_validate_all_valid() {
    let output = run(&["validate", "#abc", "#ABCDEF", "#d5d86e"]);
    assert_exit_code(&output, 0);

    let stdout = stdout(&output);
    assert!(stdout.contains("✓ #abc"));
    assert!(stdout.contains("✓ #ABCDEF"));
}

#[test]
fn test_validate_reports_invalid_entries() {
    let output = run(&["validate", "#abc", "abcdef", "#abcd"]);
    assert_exit_code(&output, 1);

    let stdout = stdout(&output);
    assert!(stdout.contains("✓ #abc"));
    assert!(stdout.contains("✗ abcdef"));
    assert!(stdout.contains("✗ #abcd"));
    assert!(stderr(&output).contains("2 of 3 colors are invalid"));
}

#[test]
fn test_validate_json() {
    let output = run(&["validate", "#abcdef", "#abcdeg", "--json"]);
    assert_exit_code(&output, 1);

    let json = stdout_json(&output);
    assert_eq!(json["valid"], false);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["input"], "#abcdef");
    assert_eq!(results[0]["valid"], true);
    assert_eq!(results[1]["valid"], false);
}

#[test]
fn test_validate_requires_input() {
    let output = run(&["validate"]);
    assert_exit_code(&output, 2);
}
