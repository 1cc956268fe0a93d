//! CLI runner for common setup.
//!
//! Loads the config file and installs logging before a command does any work.

use std::io::IsTerminal;
use std::path::Path;

use satview::config::ConfigFile;
use satview::logging::{init_logging, split_log_path, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Keeps logging alive for the lifetime of a command.
pub struct CliRunner {
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Loads config (defaults if the file is missing) and starts logging.
    ///
    /// Log events go to stdout as well when stdout is not a terminal, so
    /// piped runs keep a transcript while interactive runs stay readable.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let stdout_enabled = !std::io::stdout().is_terminal();

        let logging_guard = init_logging(&log_dir, &log_file, stdout_enabled, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn log_path(&self) -> &Path {
        self.logging_guard.log_path()
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("satview v{}", satview::VERSION);
        info!("satview CLI: {} command", command);
    }
}
