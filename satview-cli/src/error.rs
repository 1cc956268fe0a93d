//! CLI error handling with user-friendly messages.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error and
//! exits with code 1.

use std::fmt;
use std::path::PathBuf;
use std::process;

use satview::config::ConfigFileError;
use satview::coord::CoordError;
use satview::provider::ProviderError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read or written
    ConfigFile(ConfigFileError),
    /// No access token in arguments or config
    MissingToken,
    /// Invalid position or zoom
    Coord(CoordError),
    /// Failed to create the HTTP client
    Provider(ProviderError),
    /// Failed to start the async runtime
    Runtime(std::io::Error),
    /// Failed to write an output file
    FileWrite { path: PathBuf, error: String },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::MissingToken = self {
            eprintln!();
            eprintln!("Tiles are fetched from a MapBox-compatible tile service. Either:");
            eprintln!("  1. pass --access-token <TOKEN>, or");
            eprintln!("  2. set access_token in the [provider] section of config.ini");
            eprintln!("     (run 'satview init' to create it)");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::MissingToken => write!(f, "No access token configured"),
            CliError::Coord(e) => write!(f, "{}", e),
            CliError::Provider(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Coord(e) => Some(e),
            CliError::Provider(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coord(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::Provider(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CliError::MissingToken.to_string(), "No access token configured");
        let e = CliError::from(CoordError::InvalidZoom(22));
        assert!(e.to_string().contains("22"));
        let e = CliError::FileWrite {
            path: PathBuf::from("/tmp/out.png"),
            error: "disk full".to_string(),
        };
        assert_eq!(e.to_string(), "Failed to write file '/tmp/out.png': disk full");
    }
}
