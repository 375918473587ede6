/// User settings persisted between runs
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/ab-compare/settings.json
/// - macOS: ~/Library/Application Support/ab-compare/settings.json
/// - Windows: %APPDATA%\ab-compare\settings.json

use std::fs;
use std::path::{Path, PathBuf};

use iced::Theme;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const APP_DIR: &str = "ab-compare";
const CONFIG_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeChoice,
    /// Open the file picker where the previous variant was picked from
    pub remember_last_directory: bool,
    pub last_directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            remember_last_directory: true,
            last_directory: None,
        }
    }
}

impl Config {
    /// Record the directory of a picked file. Returns true if the config changed.
    pub fn remember_pick(&mut self, picked: &Path) -> bool {
        if !self.remember_last_directory {
            return false;
        }
        let parent = picked.parent().map(Path::to_path_buf);
        if parent.is_none() || parent == self.last_directory {
            return false;
        }
        self.last_directory = parent;
        true
    }

    /// Directory the picker should start in, if any
    pub fn start_directory(&self) -> Option<PathBuf> {
        if self.remember_last_directory {
            self.last_directory.clone()
        } else {
            None
        }
    }
}

/// Get the path where the settings file should be stored
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Read settings from `path`; unparseable content yields the defaults
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
