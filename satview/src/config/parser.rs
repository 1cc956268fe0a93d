//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use std::str::FromStr;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::coord::{MAX_ZOOM, MIN_ZOOM};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [provider] section
    if let Some(section) = ini.section(Some("provider")) {
        if let Some(v) = section.get("host") {
            config.provider.host = non_empty("provider", "host", v)?;
        }
        if let Some(v) = section.get("tileset") {
            config.provider.tileset = non_empty("provider", "tileset", v)?;
        }
        if let Some(v) = section.get("format") {
            config.provider.format = non_empty("provider", "format", v)?;
        }
        if let Some(v) = section.get("access_token") {
            let v = v.trim();
            if !v.is_empty() {
                config.provider.access_token = Some(v.to_string());
            }
        }
    }

    // [map] section
    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("latitude") {
            let lat: f64 = parse_value("map", "latitude", v, "must be a number (degrees)")?;
            if lat.is_nan() || lat.abs() >= 90.0 {
                return Err(invalid("map", "latitude", v, "must be strictly between -90 and 90"));
            }
            config.map.latitude = lat;
        }
        if let Some(v) = section.get("longitude") {
            let lon: f64 = parse_value("map", "longitude", v, "must be a number (degrees)")?;
            if !(-180.0..=180.0).contains(&lon) {
                return Err(invalid("map", "longitude", v, "must be between -180 and 180"));
            }
            config.map.longitude = lon;
        }
        if let Some(v) = section.get("zoom") {
            let reason = format!("must be an integer between {} and {}", MIN_ZOOM, MAX_ZOOM);
            let zoom: u8 = parse_value("map", "zoom", v, &reason)?;
            if zoom > MAX_ZOOM {
                return Err(invalid("map", "zoom", v, &reason));
            }
            config.map.zoom = zoom;
        }
    }

    // [loader] section
    if let Some(section) = ini.section(Some("loader")) {
        if let Some(v) = section.get("request_timeout") {
            config.loader.request_timeout = parse_value(
                "loader",
                "request_timeout",
                v,
                "must be a non-negative integer (seconds, 0 = no timeout)",
            )?;
        }
        if let Some(v) = section.get("channel_capacity") {
            let capacity: usize =
                parse_value("loader", "channel_capacity", v, "must be a positive integer")?;
            if capacity == 0 {
                return Err(invalid(
                    "loader",
                    "channel_capacity",
                    v,
                    "must be a positive integer",
                ));
            }
            config.loader.channel_capacity = capacity;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_value<T: FromStr>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, reason))
}

fn non_empty(section: &str, key: &str, value: &str) -> Result<String, ConfigFileError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(invalid(section, key, value, "must not be empty"));
    }
    Ok(v.to_string())
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
