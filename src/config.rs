//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the moon-config.toml file.
//! It provides the observer location and display options used by the terminal report.

use crate::observer::{CoordinateError, GeoCoordinate};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "moon-config.toml";

/// Errors raised while reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("config IO: {0}")]
    Io(#[from] io::Error),

    /// TOML syntax or schema mismatch
    #[error("invalid config format: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered back to TOML
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Observer latitude/longitude out of range
    #[error("invalid observer location: {0}")]
    Coordinate(#[from] CoordinateError),
}

/// Application configuration loaded from moon-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Observer location
    pub observer: ObserverConfig,
    /// Terminal display options
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the Moon is observed from
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObserverConfig {
    /// Human-readable place name for the report header
    pub name: String,
    /// Degrees, north positive
    pub latitude: f64,
    /// Degrees, east positive
    pub longitude: f64,
}

/// Display and visualization configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the illumination bar in characters
    pub bar_width: usize,
    /// Print the photography tip under the phase description
    pub show_photography_note: bool,
    /// Number of days listed by `--calendar`
    pub calendar_days: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            bar_width: 20,
            show_photography_note: true,
            calendar_days: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            observer: ObserverConfig {
                name: "Greenwich, UK".to_string(),
                latitude: 51.4779,
                longitude: -0.0015,
            },
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from moon-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load_from_path(&path) {
            Ok(config) => {
                info!("Loaded configuration for observer: {}", config.observer.name);
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("No config file found, using default observer (Greenwich, UK)");
                Self::default()
            }
            Err(e) => {
                warn!("{}", e);
                warn!("Using default observer (Greenwich, UK)");
                Self::default()
            }
        }
    }

    /// Load and validate configuration, reporting every failure to the caller
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.observer_coordinate()?;
        Ok(config)
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Validated observer location
    pub fn observer_coordinate(&self) -> Result<GeoCoordinate, CoordinateError> {
        GeoCoordinate::new(self.observer.latitude, self.observer.longitude)
    }
}
