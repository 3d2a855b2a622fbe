//! Runtime configuration.
//!
//! Loaded from a JSON file once at startup and validated before any core
//! logic runs; everything downstream assumes a well-formed config.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::save::{Endianness, FieldSpec};

/// Window-title substring that identifies the game by default.
pub const DEFAULT_WINDOW_MARKER: &str = "I Wanna Kill The Kamilia 3";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord application (client) ID.
    pub client_id: String,

    /// Folder checked for a `<custom_icon_key>.png` at startup.
    pub icon_folder: PathBuf,
    pub custom_icon_key: String,
    pub default_icon_key: String,

    /// Save file holding the crystal counter.
    pub save_crystals_path: PathBuf,
    pub crystal_offset: u64,
    pub crystal_size: usize,
    pub crystal_endian: Endianness,
    pub crystal_divisor: u64,

    /// Poll interval in seconds; fractional values are allowed.
    pub update_interval: f64,

    /// Window-title substring identifying the game. Defaults so config
    /// files written for older builds keep working.
    #[serde(default = "default_window_marker")]
    pub window_marker: String,
}

fn default_window_marker() -> String {
    DEFAULT_WINDOW_MARKER.to_string()
}

impl Config {
    /// Load and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(Error::Config("'client_id' must not be empty".to_string()));
        }
        if self.crystal_size == 0 {
            return Err(Error::Config(
                "'crystal_size' must be greater than zero".to_string(),
            ));
        }
        if self.crystal_size > 8 {
            return Err(Error::Config(
                "'crystal_size' must be at most 8 bytes".to_string(),
            ));
        }
        if self.crystal_divisor == 0 {
            return Err(Error::Config("'crystal_divisor' must not be zero".to_string()));
        }
        if !self.update_interval.is_finite() || self.update_interval <= 0.0 {
            return Err(Error::Config(
                "'update_interval' must be a positive number of seconds".to_string(),
            ));
        }
        if self.window_marker.is_empty() {
            return Err(Error::Config("'window_marker' must not be empty".to_string()));
        }
        Ok(())
    }

    /// Decoder parameters for the crystal counter field.
    pub fn crystal_field(&self) -> FieldSpec {
        FieldSpec {
            offset: self.crystal_offset,
            length: self.crystal_size,
            endian: self.crystal_endian,
            divisor: self.crystal_divisor,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.update_interval)
    }
}
