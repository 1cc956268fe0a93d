//! Logging abstraction layer.
//!
//! Long-lived components such as [`MapView`](crate::view::MapView) log
//! through an injected `Arc<dyn Logger>` instead of calling `tracing`
//! directly, so tests can silence or capture their output.
//!
//! - [`TracingLogger`]: production adapter that forwards to `tracing`
//! - [`NoOpLogger`]: discards everything
//! - [`MemoryLogger`]: keeps every record in memory for assertions
//!
//! ```
//! use satview::log::{Logger, MemoryLogger};
//! use satview::log_info;
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemoryLogger::new());
//! let logger: Arc<dyn Logger> = memory.clone();
//! log_info!(logger, "Grid fully loaded ({} tiles)", 81);
//! assert!(memory.contains("fully loaded"));
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
