//! User configuration
//!
//! Stored as JSON at `<config_dir>/vtheme/config.json`. Every field has a
//! default, so an empty object (or no file at all) is a valid configuration.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VthemeError};
use crate::view::theme::ThemeMode;

/// Environment variable that overrides `default_mode`
pub const MODE_ENV_VAR: &str = "VTHEME_MODE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Theme mode used when none is given on the command line
    pub default_mode: ThemeMode,

    /// Palette name or path to a palette JSON file (None = built-in palette for the mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

impl Config {
    /// Read a config file. A missing file yields the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(VthemeError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|source| VthemeError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply an override for `default_mode` (the value of [`MODE_ENV_VAR`]).
    pub fn with_mode_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.default_mode = value
                .parse()
                .map_err(|_| VthemeError::Config(format!("{}={:?} is not a theme mode", MODE_ENV_VAR, value)))?;
        }
        Ok(self)
    }
}

#[cfg(feature = "runtime")]
impl Config {
    /// `<config_dir>/vtheme/config.json`
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vtheme").join("config.json"))
    }

    /// Load the user config and apply the environment override.
    pub fn load() -> Result<Self> {
        let config = match Self::default_path() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let env_mode = std::env::var(MODE_ENV_VAR).ok();
        config.with_mode_override(env_mode.as_deref())
    }
}
