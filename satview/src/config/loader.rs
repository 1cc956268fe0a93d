//! Tile loader configuration.

use std::time::Duration;

use super::defaults::DEFAULT_CHANNEL_CAPACITY;

/// Configuration for the tile loader and its HTTP transport.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use satview::config::LoaderConfig;
///
/// // Defaults: no timeout, small completion channel
/// let config = LoaderConfig::default();
/// assert_eq!(config.request_timeout(), None);
/// assert_eq!(config.channel_capacity(), 4);
///
/// let config = LoaderConfig::new()
///     .with_request_timeout(Some(Duration::from_secs(10)))
///     .with_channel_capacity(1);
/// assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Per-request timeout, `None` for no timeout
    request_timeout: Option<Duration>,
    /// Capacity of the completion channel
    channel_capacity: usize,
}

impl LoaderConfig {
    /// Create a new loader configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout.
    ///
    /// A timed-out request completes its slot as failed. Default: none.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the completion channel capacity. Values below 1 are raised to 1.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            request_timeout: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
