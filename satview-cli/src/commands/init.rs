//! Init command - create the default configuration file.

use satview::config::ConfigFile;

use crate::error::CliError;

pub fn run() -> Result<(), CliError> {
    let (path, created) = ConfigFile::ensure_exists()?;

    if created {
        println!("Created configuration file: {}", path.display());
        println!();
        println!("Set access_token in the [provider] section before running 'satview run'.");
    } else {
        println!("Configuration file already exists: {}", path.display());
    }

    Ok(())
}
