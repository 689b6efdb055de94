//! Configuration system for termquill.
//!
//! This module provides the configuration structure for termquill with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments in `main`.
//!
//! # Example
//!
//! ```
//! use termquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "green");
//! assert_eq!(config.completion_columns, 4);
//!
//! // Create custom configuration
//! let custom = Config {
//!     theme: "amber".to_string(),
//!     show_welcome: false,
//!     ..Config::default()
//! };
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::shell::ShellSettings;

/// Directory name used under the config and data directories.
const APP_DIR: &str = "termquill";

/// Configuration for the termquill application.
///
/// # Fields
///
/// * `theme` - Built-in theme name (default: "green")
/// * `storage_dir` - Directory holding stored files (default: `<data dir>/termquill/files`)
/// * `scrollback_limit` - Maximum transcript lines kept (default: 1000)
/// * `completion_columns` - Entries per row in completion listings (default: 4)
/// * `completion_column_width` - Padded width of each listed entry (default: 20)
/// * `show_welcome` - Print the banner on startup (default: true)
/// * `log_level` - Log filter used when `TERMQUILL_LOG` is unset (default: "info")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Directory holding stored files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Maximum transcript lines kept
    #[serde(default = "default_scrollback_limit")]
    pub scrollback_limit: usize,

    /// Entries per row when listing completion matches
    #[serde(default = "default_completion_columns")]
    pub completion_columns: usize,

    /// Padded width of each listed completion match
    #[serde(default = "default_completion_column_width")]
    pub completion_column_width: usize,

    /// Print the welcome banner on startup
    #[serde(default = "default_show_welcome")]
    pub show_welcome: bool,

    /// Default log filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    crate::theme::DEFAULT_THEME.to_string()
}

fn default_scrollback_limit() -> usize {
    1000
}

fn default_completion_columns() -> usize {
    4
}

fn default_completion_column_width() -> usize {
    20
}

fn default_show_welcome() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            storage_dir: None,
            scrollback_limit: default_scrollback_limit(),
            completion_columns: default_completion_columns(),
            completion_column_width: default_completion_column_width(),
            show_welcome: default_show_welcome(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/termquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push(APP_DIR);
            path.push("config.toml");
            path
        })
    }

    /// Returns the per-user data directory, `<data dir>/termquill`.
    pub fn data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|path| path.join(APP_DIR))
    }

    /// Returns the log file location inside [`data_dir`](Self::data_dir).
    pub fn log_path() -> Option<PathBuf> {
        Self::data_dir().map(|path| path.join("termquill.log"))
    }

    /// Resolves the directory used for file storage.
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| Self::data_dir().map(|path| path.join("files")))
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// is missing or unparsable.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    /// Settings handed to the shell.
    pub fn shell_settings(&self) -> ShellSettings {
        ShellSettings {
            theme: self.theme.clone(),
            scrollback_limit: self.scrollback_limit,
            completion_columns: self.completion_columns.max(1),
            completion_column_width: self.completion_column_width,
        }
    }
}
