//! Unit tests for settings loading and validation.

use rubberband::settings::{AdditivePolicy, EngineSettings, default_settings_path};
use rubberband::SettingsError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let settings = EngineSettings::default();
    assert!(settings.auto_scroll.enabled);
    assert_eq!(settings.auto_scroll.edge_size, 50.0);
    assert_eq!(settings.auto_scroll.max_speed, 15.0);
    assert_eq!(settings.additive_policy, AdditivePolicy::PreserveBaseline);
    assert!(settings.select_on_item_click);
    assert!(settings.primary_button_only);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_partial_json_fills_defaults() {
    let settings = EngineSettings::from_json(
        r#"{ "additive_policy": "rectangle_authoritative", "auto_scroll": { "max_speed": 30.0 } }"#,
    )
    .unwrap();

    assert_eq!(settings.additive_policy, AdditivePolicy::RectangleAuthoritative);
    assert_eq!(settings.auto_scroll.max_speed, 30.0);
    assert_eq!(settings.auto_scroll.edge_size, 50.0);
    assert!(settings.auto_scroll.enabled);
}

#[test]
fn test_empty_object_is_default() {
    let settings = EngineSettings::from_json("{}").unwrap();
    assert_eq!(settings, EngineSettings::default());
}

#[test]
fn test_zero_edge_size_rejected() {
    let result = EngineSettings::from_json(r#"{ "auto_scroll": { "edge_size": 0.0 } }"#);
    assert!(matches!(result, Err(SettingsError::Invalid(_))));
}

#[test]
fn test_negative_speed_rejected() {
    let result = EngineSettings::from_json(r#"{ "auto_scroll": { "max_speed": -1.0 } }"#);
    assert!(matches!(result, Err(SettingsError::Invalid(_))));
}

#[test]
fn test_malformed_json_is_json_error() {
    let result = EngineSettings::from_json("{ not json");
    assert!(matches!(result, Err(SettingsError::Json(_))));
}

#[test]
fn test_unknown_policy_is_json_error() {
    let result = EngineSettings::from_json(r#"{ "additive_policy": "sometimes" }"#);
    assert!(matches!(result, Err(SettingsError::Json(_))));
}

#[test]
fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("settings.json");

    let mut settings = EngineSettings::default();
    settings.auto_scroll.enabled = false;
    settings.primary_button_only = false;
    settings.save_to(&path).unwrap();

    let loaded = EngineSettings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = EngineSettings::load_from(&temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_load_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, r#"{ "auto_scroll": { "edge_size": -5.0 } }"#).unwrap();

    assert!(EngineSettings::load_from(&path).is_err());
}

#[test]
fn test_default_settings_path_shape() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("rubberband/settings.json"));
    }
}

#[test]
fn test_error_messages() {
    let err = SettingsError::from("edge too small");
    assert_eq!(err.to_string(), "Invalid setting: edge too small");
}
