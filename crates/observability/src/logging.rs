//! Logging capability.
//!
//! Command handlers receive an `Arc<dyn Logger>` instead of calling the
//! `tracing` macros directly, so tests can inject a recording implementation.
//! Implementations must not block and must not fail.

/// Fire-and-forget sink for command outcomes.
pub trait Logger: Send + Sync {
    /// A failed invocation (business or unexpected).
    fn error(&self, message: &str);

    /// A successful invocation.
    fn verbose(&self, message: &str);
}

/// [`Logger`] backed by the process-wide `tracing` subscriber.
///
/// `error` maps to `ERROR`, `verbose` to `DEBUG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!(target: "hireboard::command", "{message}");
    }

    fn verbose(&self, message: &str) {
        tracing::debug!(target: "hireboard::command", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn tracing_logger_is_usable_as_a_trait_object() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        logger.error("boom");
        logger.verbose("done");
    }
}
