//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;
use crate::provider::{DEFAULT_FORMAT, DEFAULT_HOST, DEFAULT_TILESET};

/// Initial latitude (Arkhangelsk region).
pub const DEFAULT_LATITUDE: f64 = 62.779147;

/// Initial longitude.
pub const DEFAULT_LONGITUDE: f64 = 40.334442;

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 15;

/// Default request timeout in seconds. 0 means no timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 0;

/// Default capacity of the loader completion channel.
///
/// One fetch is in flight at a time, so any capacity of at least 1 works.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 4;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "satview.log";

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = config_directory();

        Self {
            provider: ProviderSettings {
                host: DEFAULT_HOST.to_string(),
                tileset: DEFAULT_TILESET.to_string(),
                format: DEFAULT_FORMAT.to_string(),
                access_token: None,
            },
            map: MapSettings {
                latitude: DEFAULT_LATITUDE,
                longitude: DEFAULT_LONGITUDE,
                zoom: DEFAULT_ZOOM,
            },
            loader: LoaderSettings {
                request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
                channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            },
            logging: LoggingSettings {
                file: config_dir.join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
