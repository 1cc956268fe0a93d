//! Configuration CLI commands.
//!
//! Provides `config path` and `config show`.

use clap::Subcommand;
use satview::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration (defaults when no file exists)
    Show,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
    }
}

fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

fn run_show() -> Result<(), CliError> {
    let path = config_file_path();
    let config = ConfigFile::load()?;

    println!("Configuration Settings");
    println!("======================");
    if !path.exists() {
        println!("(no file at {}, showing defaults)", path.display());
    }
    println!();

    for (section, entries) in sections(&config) {
        println!("[{}]", section);
        for (key, value) in entries {
            if value.is_empty() {
                println!("  {} = (not set)", key);
            } else {
                println!("  {} = {}", key, value);
            }
        }
        println!();
    }

    Ok(())
}

/// Settings grouped by INI section, in file order.
fn sections(config: &ConfigFile) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
    let token = match &config.provider.access_token {
        Some(token) => mask(token),
        None => String::new(),
    };
    vec![
        (
            "provider",
            vec![
                ("host", config.provider.host.clone()),
                ("tileset", config.provider.tileset.clone()),
                ("format", config.provider.format.clone()),
                ("access_token", token),
            ],
        ),
        (
            "map",
            vec![
                ("latitude", config.map.latitude.to_string()),
                ("longitude", config.map.longitude.to_string()),
                ("zoom", config.map.zoom.to_string()),
            ],
        ),
        (
            "loader",
            vec![
                ("request_timeout", config.loader.request_timeout.to_string()),
                ("channel_capacity", config.loader.channel_capacity.to_string()),
            ],
        ),
        (
            "logging",
            vec![("file", config.logging.file.display().to_string())],
        ),
    ]
}

/// Keeps the first four characters of a token.
fn mask(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{}…", visible)
}
