//! Persisted application configuration.
//!
//! A single JSON object in the working directory holds the onboarding
//! flag, username, theme choice, free-text notes and per-date calendar
//! notes. A missing or corrupt file is equivalent to an empty config;
//! write failures are logged and the in-memory state stays authoritative
//! for the running session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub user_notes: String,
    /// Calendar notes keyed by ISO-8601 date (YYYY-MM-DD)
    #[serde(default)]
    pub calendar_events: BTreeMap<String, String>,
}

/// Owned handle to the persisted configuration.
///
/// Constructed once at startup and passed to each page that needs it,
/// so there is a single source of truth instead of ad-hoc reloads.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Load from the default location (config.json in the working directory).
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from an explicit path. Missing or unparseable files yield
    /// the default config; this never fails.
    pub fn load_from<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let config = read_config(&path);
        Self { path, config }
    }

    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Apply a mutation and persist the result in one step.
    ///
    /// Write failures are logged; the mutated in-memory config remains
    /// the source of truth either way.
    pub fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        f(&mut self.config);
        self.save();
    }

    /// Serialize the current config and overwrite the persisted file.
    pub fn save(&self) {
        if let Err(e) = write_config(&self.path, &self.config) {
            log::warn!("failed to persist config to {:?}: {}", self.path, e);
        }
    }
}

fn read_config(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("config file {:?} is not valid JSON ({}), starting empty", path, e);
            Config::default()
        }),
        Err(e) => {
            log::warn!("could not read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Write via a sibling temp file and rename, so an interrupted write
/// never leaves a truncated config behind.
fn write_config(path: &Path, config: &Config) -> crate::Result<()> {
    let data = serde_json::to_string_pretty(config)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::load_from(dir.path().join("config.json"));
        assert_eq!(store.get(), &Config::default());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = ConfigStore::load_from(&path);
        assert_eq!(store.get(), &Config::default());
    }

    #[test]
    fn mutate_persists_and_roundtrips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut store = ConfigStore::load_from(&path);
        store.mutate(|c| {
            c.onboarding_complete = true;
            c.username = "ada".to_string();
            c.theme = Theme::Light;
            c.user_notes = "remember the milk".to_string();
            c.calendar_events
                .insert("2026-01-15".to_string(), "dentist".to_string());
        });

        let reloaded = ConfigStore::load_from(&path);
        let cfg = reloaded.get();
        assert!(cfg.onboarding_complete);
        assert_eq!(cfg.username, "ada");
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.user_notes, "remember the milk");
        assert_eq!(
            cfg.calendar_events.get("2026-01-15").map(String::as_str),
            Some("dentist")
        );
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut store = ConfigStore::load_from(&path);
        store.mutate(|c| c.username = "x".to_string());

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
