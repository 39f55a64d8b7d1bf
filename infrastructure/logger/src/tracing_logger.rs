use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target attached to every event, so `RUST_LOG=site_config=debug` selects
/// loader output without the rest of the process.
const TARGET: &str = "site_config";

/// [`Logger`] adapter forwarding to `tracing`.
///
/// Holds no state; the installed subscriber decides formatting and where
/// events go. Without a subscriber every call is a no-op.
pub struct TracingLogger;

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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_accept_messages_without_subscriber() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        logger.info("Loading site configuration (strict policy)");
        logger.warn("Missing configuration keys defaulted to empty: VITE_FORMSPREE_ID");
        logger.error("Missing configuration keys: VITE_SITE_URL");
        logger.debug("Configuration key site.description is empty");
    }
}
