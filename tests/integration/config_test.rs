use std::fs;

use systune::core::config::{Config, ConfigStore, Theme};
use tempfile::TempDir;

#[test]
fn test_missing_file_is_empty_config() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::load_from(dir.path().join("config.json"));

    let cfg = store.get();
    assert!(!cfg.onboarding_complete);
    assert!(cfg.username.is_empty());
    assert_eq!(cfg.theme, Theme::Dark);
    assert!(cfg.calendar_events.is_empty());
}

#[test]
fn test_malformed_file_is_empty_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "]]]] definitely not json").unwrap();

    let store = ConfigStore::load_from(&path);
    assert_eq!(store.get(), &Config::default());
}

#[test]
fn test_save_load_roundtrip_all_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut store = ConfigStore::load_from(&path);
    store.mutate(|c| {
        c.onboarding_complete = true;
        c.username = "marta".to_string();
        c.theme = Theme::Light;
        c.user_notes = "line one\nline two".to_string();
        c.calendar_events
            .insert("2026-08-28".to_string(), "ship release".to_string());
        c.calendar_events
            .insert("2026-12-24".to_string(), "family dinner".to_string());
    });

    let reloaded = ConfigStore::load_from(&path);
    assert_eq!(reloaded.get(), store.get());
}

#[test]
fn test_theme_is_serialized_lowercase() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut store = ConfigStore::load_from(&path);
    store.mutate(|c| c.theme = Theme::Light);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"light\""));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"username": "sol"}"#).unwrap();

    let store = ConfigStore::load_from(&path);
    let cfg = store.get();
    assert_eq!(cfg.username, "sol");
    assert!(!cfg.onboarding_complete);
    assert!(cfg.user_notes.is_empty());
}

#[test]
fn test_unknown_keys_are_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"username": "sol", "legacy_field": 42}"#).unwrap();

    let store = ConfigStore::load_from(&path);
    assert_eq!(store.get().username, "sol");
}
