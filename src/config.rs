use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::collection::DEFAULT_CALORIE_THRESHOLD;

/// Directory holding the project-local configuration
pub const CONFIG_DIR: &str = ".recipebook";

/// recipebook configuration loaded from config.toml and environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recipes: RecipesConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipesConfig {
    pub calorie_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Append logs to this file instead of stderr (empty = stderr)
    pub file: String,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            calorie_threshold: DEFAULT_CALORIE_THRESHOLD,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from the first config.toml found and environment
    /// variables. Environment variables take precedence over file values.
    ///
    /// Search order: `explicit`, `.recipebook/config.toml`, then the user
    /// config directory. Defaults apply when no file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load a config file without applying environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from a variable lookup (env vars in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("RECIPEBOOK_CALORIE_THRESHOLD") {
            if let Ok(n) = val.trim().parse() {
                self.recipes.calorie_threshold = n;
            }
        }

        if let Some(val) = lookup("RECIPEBOOK_COLOR") {
            self.display.color = val.to_lowercase() == "true";
        }

        if let Some(val) = lookup("RECIPEBOOK_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Some(val) = lookup("RECIPEBOOK_LOG_FILE") {
            self.logging.file = val;
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Path of the log file, if logging to a file is configured
    pub fn log_file(&self) -> Option<PathBuf> {
        let file = self.logging.file.trim();
        (!file.is_empty()).then(|| PathBuf::from(file))
    }
}

/// Project-local config file path
pub fn local_config_path() -> PathBuf {
    Path::new(CONFIG_DIR).join("config.toml")
}

/// Per-user config file path, e.g. `~/.config/recipebook/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recipebook").join("config.toml"))
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = local_config_path();
    if local.exists() {
        return Some(local);
    }

    user_config_path().filter(|path| path.exists())
}
