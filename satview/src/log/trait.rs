//! The `Logger` trait and the `log_*!` macros built on it.

use std::fmt::{self, Arguments};

/// Severity of a log record, ordered from chattiest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Sink for the messages a [`MapView`](crate::view::MapView) emits while it
/// loads tiles and manages markers.
///
/// Shared as `Arc<dyn Logger>` between the view and whoever created it, so
/// implementations must be `Send + Sync`.
pub trait Logger: Send + Sync {
    /// Records one message.
    fn log(&self, level: LogLevel, args: Arguments<'_>);

    /// Whether a record at `level` would be kept.
    ///
    /// The macros check this first and skip formatting when it is false.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }
}

/// Logs at an explicit [`LogLevel`] through anything that dereferences to a
/// [`Logger`] (`Arc<dyn Logger>`, `Box<dyn Logger>`, `&dyn Logger`, ...).
///
/// The trait does not need to be in scope at the call site.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        let level: $crate::log::LogLevel = $level;
        if $crate::log::Logger::enabled(&**logger, level) {
            $crate::log::Logger::log(&**logger, level, format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::LogLevel::Error, $($arg)*)
    };
}
