//! Tracing setup and the injected logging capability.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Logging capability handed to command handlers.
pub mod logging;

pub use logging::{Logger, TracingLogger};
