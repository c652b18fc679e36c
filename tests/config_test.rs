//! Tests for settings loading and precedence

use std::fs;

use tempfile::TempDir;

use rsbst::config::{global_config_path, Settings, SettingsError};
use rsbst::util::testing::init_test_setup;
use rsbst::DeleteStrategy;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("rsbst.toml");
    fs::write(&path, contents).expect("write config file");
    path
}

#[test]
fn given_full_file_when_loading_then_overrides_defaults() {
    // Arrange
    init_test_setup();
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(
        &dir,
        r#"
default_strategy = "successor"
prompt = "bst>"
"#,
    );

    // Act
    let settings = Settings::load_from(&path).expect("load settings");

    // Assert
    assert_eq!(settings.default_strategy, DeleteStrategy::Successor);
    assert_eq!(settings.prompt, "bst>");
}

#[test]
fn given_partial_file_when_loading_then_missing_fields_keep_defaults() {
    // Arrange
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(&dir, "prompt = \"mini>\"\n");

    // Act
    let settings = Settings::load_from(&path).expect("load settings");

    // Assert
    assert_eq!(settings.prompt, "mini>");
    assert_eq!(settings.default_strategy, Settings::default().default_strategy);
}

#[test]
fn given_rendered_settings_when_loading_back_then_round_trips() {
    // Arrange
    let dir = TempDir::new().expect("create temp dir");
    let written = Settings {
        default_strategy: DeleteStrategy::Successor,
        prompt: "loop>".to_string(),
    };
    let path = write_config(&dir, &written.to_toml().expect("render settings"));

    // Act
    let loaded = Settings::load_from(&path).expect("load settings");

    // Assert
    assert_eq!(loaded, written);
}

#[test]
fn given_missing_file_when_loading_then_reports_load_error() {
    // Arrange
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nope.toml");

    // Act
    let result = Settings::load_from(&path);

    // Assert
    assert!(matches!(result, Err(SettingsError::Load(_))));
}

#[test]
fn given_unknown_strategy_when_loading_then_reports_load_error() {
    // Arrange
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(&dir, "default_strategy = \"midpoint\"\n");

    // Act
    let result = Settings::load_from(&path);

    // Assert
    assert!(matches!(result, Err(SettingsError::Load(_))));
}

#[test]
fn given_platform_dirs_when_resolving_path_then_file_named_after_crate() {
    // Act
    let path = global_config_path();

    // Assert: only the file name is portable across machines
    if let Some(path) = path {
        assert!(path.ends_with("rsbst.toml"));
    }
}
