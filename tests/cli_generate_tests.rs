//! End-to-end tests for `palettesmith generate`.

mod fixtures;
use fixtures::*;

#[test]
fn test_generate_human_readable() {
    let output = run(&["generate", "#d5d86e"]);
    assert_exit_code(&output, 0);

    let stdout = stdout(&output);
    assert!(stdout.contains("Seed #d5d86e (complementary harmony, lightness)"));
    assert!(stdout.contains("Primary (#d5d86e)"));
    assert!(stdout.contains("Secondary (#716ed8)"));
    assert!(stdout.contains("Tertiary (#79cd7b)"));
    assert!(stdout.contains(" 50  #f9faeb  light"));
    assert!(stdout.contains("900  #27280b  dark"));
}

#[test]
fn test_generate_json_schema() {
    let output = run(&["generate", "d5d86e", "--json"]);
    assert_exit_code(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["seed"], "#d5d86e");
    assert_eq!(json["harmony"], "complementary");
    assert_eq!(json["strategy"], "lightness");
    assert_eq!(json["base"]["secondary"], "#716ed8");

    for role in ["primary", "secondary", "tertiary"] {
        let ramp = json["palette"][role].as_array().expect("ramp array");
        assert_eq!(ramp.len(), 10, "{role}");
        assert_eq!(ramp[0]["name"], "50");
        assert_eq!(ramp[9]["name"], "900");
    }
    assert_eq!(json["palette"]["primary"][5]["hex"], "#c5c936");
}

#[test]
fn test_generate_modes() {
    let output = run(&["generate", "#d5d86e", "--mode", "triadic", "--json"]);
    assert_exit_code(&output, 0);
    let json = stdout_json(&output);
    assert_eq!(json["harmony"], "triadic");
    assert_eq!(json["base"]["secondary"], "#6ed5d8");
    assert_eq!(json["base"]["tertiary"], "#d86ed5");

    let output = run(&["generate", "#d5d86e", "-m", "analogous", "--json"]);
    assert_exit_code(&output, 0);
    let json = stdout_json(&output);
    assert_eq!(json["base"]["secondary"], "#a0d86e");
    assert_eq!(json["base"]["tertiary"], "#d8a66e");
}

#[test]
fn test_generate_disabled_companions() {
    let output = run(&["generate", "#d5d86e", "--no-secondary", "--no-tertiary", "--json"]);
    assert_exit_code(&output, 0);

    let json = stdout_json(&output);
    assert!(json["base"]["secondary"].is_null());
    assert!(json["base"]["tertiary"].is_null());
    assert!(json["palette"]["secondary"].as_array().unwrap().is_empty());
    assert!(json["palette"]["tertiary"].as_array().unwrap().is_empty());
}

#[test]
fn test_generate_manual_defaults() {
    let output = run(&["generate", "#d5d86e", "--manual", "--json"]);
    assert_exit_code(&output, 0);

    let json = stdout_json(&output);
    assert!(json["harmony"].is_null());
    assert_eq!(json["base"]["secondary"], "#10b981");
    assert_eq!(json["base"]["tertiary"], "#f59e0b");
}

#[test]
fn test_generate_manual_color_implies_manual() {
    let output = run(&["generate", "#d5d86e", "--secondary", "#f00", "--json"]);
    assert_exit_code(&output, 0);

    let json = stdout_json(&output);
    assert!(json["harmony"].is_null());
    assert_eq!(json["base"]["secondary"], "#ff0000");
    assert_eq!(json["palette"]["secondary"][5]["hex"], "#ff0000");
}

#[test]
fn test_generate_import_list() {
    let output = run(&["generate", "--import", "d5d86e,#10b981", "--json"]);
    assert_exit_code(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["seed"], "#d5d86e");
    assert_eq!(json["base"]["secondary"], "#10b981");
    assert!(json["base"]["tertiary"].is_null());
}

#[test]
fn test_generate_import_conflicts_with_harmony_flags() {
    for extra in [
        &["--mode", "triadic"][..],
        &["--manual"],
        &["--secondary", "#ff0000"],
        &["--tertiary", "#00ff00"],
    ] {
        let mut args = vec!["generate", "--import", "d5d86e,#10b981"];
        args.extend_from_slice(extra);
        let output = run(&args);
        assert_exit_code(&output, 2);
        assert!(stderr(&output).contains("cannot be used with"), "{extra:?}");
    }
}

#[test]
fn test_generate_brightness_strategy() {
    let output = run(&["generate", "#808080", "--strategy", "brightness", "--json"]);
    assert_exit_code(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "brightness");
    // 500 sits on the midpoint factor of 1.0
    assert_eq!(json["palette"]["primary"][5]["hex"], "#808080");
}

#[test]
fn test_generate_without_seed_uses_default() {
    let output = run(&["generate", "--json"]);
    assert_exit_code(&output, 0);
    assert_eq!(stdout_json(&output)["seed"], "#d5d86e");
}

#[test]
fn test_generate_invalid_seed() {
    let output = run(&["generate", "#12345"]);
    assert_exit_code(&output, 1);
    assert!(stderr(&output).contains("Invalid color format"));
}

#[test]
fn test_generate_mode_conflicts_with_manual() {
    let output = run(&["generate", "#d5d86e", "--mode", "triadic", "--manual"]);
    assert_exit_code(&output, 2);
}
