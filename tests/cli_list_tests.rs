//! End-to-end tests for `buttonverse list`.

use serde_json::Value;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn run_json(args: &[&str], config_dir: &std::path::Path) -> Value {
    let output = isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
}

#[test]
fn test_list_builtin_json() {
    let config_dir = TempDir::new().unwrap();
    let result = run_json(&["list", "--json", "--limit", "3"], config_dir.path());

    assert_eq!(result["total"], 3138);
    let styles = result["styles"].as_array().unwrap();
    assert_eq!(styles.len(), 3);
    assert_eq!(styles[0]["id"], "grad-sunset");
    assert_eq!(styles[0]["category"], "gradient");
}

#[test]
fn test_list_custom_catalog() {
    let config_dir = config_dir_with_small_catalog();
    let result = run_json(&["list", "--json"], config_dir.path());

    assert_eq!(result["total"], 13);
    let styles = result["styles"].as_array().unwrap();
    assert_eq!(styles[0]["id"], "grad-test");
    assert_eq!(styles[1]["id"], "gen-0-Blue-Sharp");
    assert_eq!(styles[1]["name"], "Blue Solid Standard");
}

#[test]
fn test_list_filter_by_category() {
    let config_dir = config_dir_with_small_catalog();
    let result = run_json(&["list", "--json", "--category", "link"], config_dir.path());

    let styles = result["styles"].as_array().unwrap();
    assert_eq!(styles.len(), 2);
    assert!(styles.iter().all(|s| s["category"] == "link"));
    assert!(styles.iter().all(|s| s["tags"][2] == "smooth"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let config_dir = config_dir_with_small_catalog();
    let lower = run_json(&["list", "--json", "--search", "red solid standard pill"], config_dir.path());
    let upper = run_json(&["list", "--json", "--search", "RED SOLID Standard PILL"], config_dir.path());

    assert_eq!(lower, upper);
    assert_eq!(lower["total"], 1);
    assert_eq!(lower["styles"][0]["id"], "gen-0-Red-Pill");
}

#[test]
fn test_list_category_and_search_combined() {
    let config_dir = config_dir_with_small_catalog();
    let result = run_json(
        &["list", "--json", "--category", "Primary", "--search", "circle"],
        config_dir.path(),
    );

    assert_eq!(result["total"], 2);
    for style in result["styles"].as_array().unwrap() {
        let classes = style["classes"].as_str().unwrap();
        assert!(classes.contains("p-0"));
        assert!(!classes.contains("px-6"));
    }
}

#[test]
fn test_list_no_matches_human() {
    let config_dir = config_dir_with_small_catalog();
    let output = isolated_command(&["list", "--search", "zebra"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No styles found"));
}

#[test]
fn test_list_human_readable() {
    let config_dir = config_dir_with_small_catalog();
    let output = isolated_command(&["list", "--category", "gradient"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("grad-test"));
    assert!(stdout.contains("Test Gradient"));
    assert!(stdout.contains("Showing 1 of 1 styles"));
}

#[test]
fn test_list_unknown_category() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["list", "--category", "tertiary"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown category"));
}

#[test]
fn test_list_missing_catalog_file_is_io_error() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[catalog]\npath = \"/nonexistent/catalog.json\"\n",
    )
    .unwrap();

    let output = isolated_command(&["list"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_help_shows_description() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["--help"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(buttonverse::branding::APP_DESCRIPTION));
}
