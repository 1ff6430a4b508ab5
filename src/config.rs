//! Configuration module for loadr
//!
//! Manages application configuration: where table-definition documents live,
//! which data-file extensions the browser lists, and the preview/cache
//! limits. Configuration is stored in the user's config directory; an absent
//! file means pure defaults and is never an error at browse time. CLI flags
//! override file values.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_extensions() -> Vec<String> {
    vec!["tsv".into(), "csv".into(), "txt".into()]
}

const fn default_preview_lines() -> usize {
    10
}

const fn default_preview_line_bytes() -> usize {
    200
}

const fn default_cache_capacity() -> usize {
    100
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoadrConfig {
    /// Directory holding table-definition documents
    ///
    /// Defaults to `tables/` next to the config file when unset.
    #[serde(default)]
    pub table_config_dir: Option<PathBuf>,

    /// Accepted data-file extensions (lowercase, without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Include hidden entries by default
    #[serde(default)]
    pub show_hidden: bool,

    /// Maximum preview content lines
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,

    /// Maximum bytes shown per preview line
    #[serde(default = "default_preview_line_bytes")]
    pub preview_line_bytes: usize,

    /// Maximum number of cached directory listings
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for LoadrConfig {
    fn default() -> Self {
        Self {
            table_config_dir: None,
            extensions: default_extensions(),
            show_hidden: false,
            preview_lines: default_preview_lines(),
            preview_line_bytes: default_preview_line_bytes(),
            cache_capacity: default_cache_capacity(),
            quiet: false,
        }
    }
}

impl LoadrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("loadr").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// An absent file yields the defaults without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an existing config file cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The table-definition directory this configuration points at
    ///
    /// Falls back to `tables/` beside the config file when unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn table_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.table_config_dir {
            return Ok(dir.clone());
        }
        let config_path = Self::config_path()?;
        let base = config_path
            .parent()
            .map_or_else(|| PathBuf::from("."), std::path::Path::to_path_buf);
        Ok(base.join("tables"))
    }
}
