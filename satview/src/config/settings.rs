//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;
use std::time::Duration;

use super::LoaderConfig;
use crate::coord::GeoPosition;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Tile provider endpoint and credentials
    pub provider: ProviderSettings,
    /// Initial map position
    pub map: MapSettings,
    /// Tile loader behavior
    pub loader: LoaderSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Provider configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// API host, without scheme
    pub host: String,
    /// Tileset identifier, e.g. `mapbox.satellite`
    pub tileset: String,
    /// Image format suffix, e.g. `jpg90`
    pub format: String,
    /// Access token appended to every request
    pub access_token: Option<String>,
}

/// Initial view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl MapSettings {
    pub fn center(&self) -> GeoPosition {
        GeoPosition::new(self.latitude, self.longitude)
    }
}

/// Loader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderSettings {
    /// Per-request timeout in seconds. 0 disables the timeout.
    pub request_timeout: u64,
    /// Capacity of the completion channel
    pub channel_capacity: usize,
}

impl LoaderSettings {
    pub fn to_loader_config(&self) -> LoaderConfig {
        let timeout =
            (self.request_timeout > 0).then(|| Duration::from_secs(self.request_timeout));
        LoaderConfig::new()
            .with_request_timeout(timeout)
            .with_channel_capacity(self.channel_capacity)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
