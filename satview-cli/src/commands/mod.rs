//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration inspection (path, show)
//! - [`init`] - Configuration initialization
//! - [`locate`] - Position to tile conversion
//! - [`run`] - Load the tile window around a position

pub mod config;
pub mod init;
pub mod locate;
pub mod run;
