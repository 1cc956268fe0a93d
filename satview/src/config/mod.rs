//! Configuration for satview components.
//!
//! User settings live in an INI file at `~/.satview/config.ini`. Missing
//! files and missing keys fall back to defaults; invalid values are errors.
//!
//! # Example
//!
//! ```
//! use satview::config::{ConfigFile, LoaderConfig};
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.map.zoom, 15);
//!
//! let loader: LoaderConfig = config.loader.to_loader_config();
//! assert_eq!(loader.request_timeout(), None);
//! ```

mod defaults;
mod file;
mod loader;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_CHANNEL_CAPACITY, DEFAULT_LATITUDE, DEFAULT_LOG_FILE_NAME, DEFAULT_LONGITUDE,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_ZOOM,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use loader::LoaderConfig;
pub use settings::{ConfigFile, LoaderSettings, LoggingSettings, MapSettings, ProviderSettings};
