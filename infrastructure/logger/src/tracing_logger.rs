use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under a fixed target, so
/// `RUST_LOG=storefront=debug` isolates them from framework output.
pub struct TracingLogger;

const TARGET: &str = "storefront";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
