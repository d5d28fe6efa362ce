//! User configuration.
//!
//! Stored as TOML at `<config dir>/playbar/config.toml`, or wherever
//! `PLAYBAR_CONFIG` points. Every field has a default, so a missing file or
//! a partial file both load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::player::ControlsConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PLAYBAR_CONFIG";

/// Errors from loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub controls: ControlsSection,
    pub player: PlayerSection,
    pub theme: ThemeSection,
    pub share: ShareSection,
}

/// `[controls]`: control bar behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsSection {
    /// Show elapsed/total time and the seek track
    pub show_seek_time: bool,
    /// Seconds moved by the arrow keys
    pub seek_step_secs: f64,
    /// Start the player unmuted
    pub start_with_sound: bool,
}

impl Default for ControlsSection {
    fn default() -> Self {
        Self {
            show_seek_time: true,
            seek_step_secs: 5.0,
            start_with_sound: false,
        }
    }
}

impl ControlsSection {
    pub fn controls_config(&self) -> ControlsConfig {
        ControlsConfig::new(self.show_seek_time)
    }
}

/// `[player]`: the terminal player loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSection {
    /// Redraw and media clock interval in milliseconds
    pub tick_ms: u64,
    /// Length of the simulated clip when none is given
    pub default_duration_secs: f64,
}

impl Default for PlayerSection {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            default_duration_secs: 90.0,
        }
    }
}

/// `[theme]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// One of "default", "classic", "ocean"
    pub name: String,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
        }
    }
}

/// `[share]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareSection {
    /// Title used when `share` is run without `--title`
    pub default_title: String,
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("playbar").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render as pretty TOML, as `config show` prints it.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
