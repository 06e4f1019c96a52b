//! Shared test fixtures for E2E CLI and web tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use buttonverse::models::{Category, StyleRecord};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the buttonverse binary.
pub fn buttonverse_bin() -> &'static str {
    env!("CARGO_BIN_EXE_buttonverse")
}

/// Creates a Command with an isolated config directory and no API key in the
/// environment. Pass the same directory to share config between commands.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(buttonverse_bin());
    cmd.env("BUTTONVERSE_CONFIG_DIR", config_dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("RUST_LOG")
        .args(args);
    cmd
}

/// Small catalog with one palette template, one link template and one special.
///
/// Builds 1 special + 2 colors x 5 shapes + 2 colors x 1 shape = 13 records.
pub const SMALL_CATALOG: &str = r#"{
  "version": "1",
  "palette": [
    { "name": "Blue", "bg": "bg-blue-600", "bg_light": "bg-blue-100", "hover": "hover:bg-blue-700",
      "border": "border-blue-600", "text": "text-blue-600", "text_dark": "text-blue-900",
      "ring": "ring-blue-400", "from": "from-blue-600", "to": "to-blue-400", "glow": "500" },
    { "name": "Red", "bg": "bg-red-600", "bg_light": "bg-red-100", "hover": "hover:bg-red-700",
      "border": "border-red-600", "text": "text-red-600", "text_dark": "text-red-900",
      "ring": "ring-red-400", "from": "from-red-600", "to": "to-red-400", "glow": "500" }
  ],
  "templates": [
    { "name": "Solid Standard", "category": "primary", "base_classes": "px-6 py-2.5 font-semibold text-white",
      "colors": { "palette": { "pattern": "{bg} {hover}" } } },
    { "name": "Classic Link", "category": "link", "base_classes": "px-0 py-0 font-medium hover:underline",
      "colors": { "palette": { "pattern": "{text}" } } }
  ],
  "specials": [
    { "id": "grad-test", "name": "Test Gradient", "category": "gradient",
      "classes": "px-6 py-3 rounded-lg bg-gradient-to-r from-orange-500 to-pink-500", "tags": ["test", "orange"] }
  ]
}"#;

/// Writes [`SMALL_CATALOG`] into `dir` and returns its path.
pub fn write_small_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(&path, SMALL_CATALOG).expect("Failed to write catalog");
    path
}

/// Creates a temp config directory whose config points at [`SMALL_CATALOG`].
pub fn config_dir_with_small_catalog() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = write_small_catalog(temp_dir.path());
    let config = format!("[catalog]\npath = {:?}\n", catalog.to_string_lossy());
    fs::write(temp_dir.path().join("config.toml"), config).expect("Failed to write config");
    temp_dir
}

/// A generated record as a mock generator would return it.
pub fn ai_record(name: &str) -> StyleRecord {
    StyleRecord {
        id: format!("ai-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        category: Category::AiGenerated,
        classes: "px-5 py-2 bg-black text-white hover:shadow-lg".to_string(),
        tags: vec!["ai".to_string(), "generated".to_string(), "custom".to_string()],
    }
}
