// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences, kept in a `settings.toml` file.
//!
//! This is the runtime's analog of the browser's persisted language
//! entry: a single small key-value file read at startup and rewritten on
//! every explicit language switch or forced downgrade.

use crate::error::Result;
use crate::i18n::catalog::LanguageCode;
use crate::i18n::store::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LinguaPage";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Last explicitly chosen (or downgraded) language code.
    pub language: Option<String>,
    /// Overrides the reduced-motion media preference for the reveal
    /// animation; unset means "follow the environment".
    #[serde(default)]
    pub reduced_motion: Option<bool>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// [`PreferenceStore`] backed by the settings file.
///
/// Write failures are reported and swallowed: losing a preference write
/// must not take down the language pipeline.
#[derive(Debug, Clone, Default)]
pub struct ConfigPreferences {
    /// Explicit file location; `None` uses the platform config directory.
    path: Option<PathBuf>,
}

impl ConfigPreferences {
    pub fn new() -> Self {
        Self { path: None }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn load_config(&self) -> Config {
        let loaded = match &self.path {
            Some(path) => load_from_path(path),
            None => load(),
        };
        loaded.unwrap_or_default()
    }
}

impl PreferenceStore for ConfigPreferences {
    fn stored_language(&self) -> Option<LanguageCode> {
        self.load_config()
            .language
            .and_then(|code| code.parse().ok())
    }

    fn store_language(&self, code: LanguageCode) {
        let mut config = self.load_config();
        config.language = Some(code.as_str().to_string());
        let saved = match &self.path {
            Some(path) => save_to_path(&config, path),
            None => save(&config),
        };
        if let Err(err) = saved {
            eprintln!("Failed to persist language preference: {}", err);
        }
    }
}
