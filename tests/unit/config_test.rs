//! Tests for configuration loading

use std::fs;
use std::path::PathBuf;

use labelgrade::config::{Config, ConfigError, DEFAULT_API_BASE_URL, default_config_toml};
use tempfile::TempDir;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.workers, 0);
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.image.timeout_secs, 30);
    assert!(config.policy.is_permitted_label("construction_sign"));
}

#[test]
fn test_config_load_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
workers = 2

[policy]
permitted_labels = ["car", "truck"]
occlusion_issues = ["75%", "100%"]

[policy.grades]
gold_at = 0.95

[image]
output_dir = "out"
"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.workers, 2);
    assert!(config.policy.is_permitted_label("truck"));
    assert!(!config.policy.is_occlusion_issue("50%"));
    assert!((config.policy.grades.gold_at - 0.95).abs() < f64::EPSILON);
    assert!((config.policy.grades.silver_at - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.image.output_dir, PathBuf::from("out"));
    assert_eq!(config.image.timeout_secs, 30);
}

#[test]
fn test_config_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_config_parse_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[policy\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}

// =============================================================================
// WRITING
// =============================================================================

#[test]
fn test_write_default_creates_parents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/labelgrade/config.toml");

    Config::write_default(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, default_config_toml());
    assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
}

#[test]
fn test_default_config_mentions_every_section() {
    let content = default_config_toml();
    for section in ["[policy]", "[policy.tiers]", "[policy.grades]", "[image]", "[api]"] {
        assert!(content.contains(section), "missing {section}");
    }
}
