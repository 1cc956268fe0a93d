//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let access_token = config.provider.access_token.as_deref().unwrap_or("");

    format!(
        r#"[provider]
; Tile server host (HTTPS is always used)
host = {}
; Tileset identifier
tileset = {}
; Image format suffix: jpg90 is JPEG at 90% quality
format = {}
; Access token sent with every tile request
; Get one at: https://www.mapbox.com/
access_token = {}

[map]
; Initial map center in degrees
latitude = {}
longitude = {}
; Initial zoom level (0-19)
zoom = {}

[loader]
; Seconds before a tile request is abandoned and the tile marked failed.
; 0 disables the timeout: a hung request then blocks loading of the
; remaining tiles until it completes.
request_timeout = {}
; Capacity of the completion channel between the fetch task and the map
channel_capacity = {}

[logging]
; Log file location, truncated at each start
file = {}
"#,
        config.provider.host,
        config.provider.tileset,
        config.provider.format,
        access_token,
        config.map.latitude,
        config.map.longitude,
        config.map.zoom,
        config.loader.request_timeout,
        config.loader.channel_capacity,
        path_to_string(&config.logging.file),
    )
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::super::settings::ConfigFile;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.provider.access_token = Some("pk.test".to_string());
        config.map.latitude = -33.8688;
        config.map.longitude = 151.2093;
        config.map.zoom = 11;
        config.loader.request_timeout = 15;
        config.logging.file = temp_dir.path().join("satview.log");

        config.save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_written_file_is_commented() {
        let content = super::to_config_string(&ConfigFile::default());
        assert!(content.contains("[provider]"));
        assert!(content.contains("host = api.mapbox.com"));
        assert!(content.contains("format = jpg90"));
        assert!(content.contains("zoom = 15"));
        assert!(content.contains("; 0 disables the timeout"));
    }
}
