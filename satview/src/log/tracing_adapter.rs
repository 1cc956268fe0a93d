//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger implementation that delegates to the `tracing` crate.
///
/// Events are emitted under the `satview` target so they can be filtered
/// with `RUST_LOG=satview=debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "satview", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "satview", "{}", args),
            LogLevel::Info => tracing::info!(target: "satview", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "satview", "{}", args),
            LogLevel::Error => tracing::error!(target: "satview", "{}", args),
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Trace => tracing::enabled!(target: "satview", tracing::Level::TRACE),
            LogLevel::Debug => tracing::enabled!(target: "satview", tracing::Level::DEBUG),
            LogLevel::Info => tracing::enabled!(target: "satview", tracing::Level::INFO),
            LogLevel::Warn => tracing::enabled!(target: "satview", tracing::Level::WARN),
            LogLevel::Error => tracing::enabled!(target: "satview", tracing::Level::ERROR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        let logger: Box<dyn Logger> = Box::new(TracingLogger::new());
        crate::log_info!(logger, "no subscriber installed");
        crate::log_trace!(logger, "still fine");
    }
}
