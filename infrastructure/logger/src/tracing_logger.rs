use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target attached to every event emitted through [`TracingLogger`].
pub const LOG_TARGET: &str = "chat_completion";

/// [`Logger`] adapter that forwards messages to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
