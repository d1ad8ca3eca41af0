//! Progress log adapter - Implements ProgressLogPort on top of `tracing`

use application::ports::{LogLevel, ProgressLogPort};
use tracing::{debug, error, info, warn};

/// Forwards progress lines to the `poiscout::progress` tracing target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgressLog;

impl TracingProgressLog {
    /// Create a new progress log
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProgressLogPort for TracingProgressLog {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!(target: "poiscout::progress", "{message}"),
            LogLevel::Info => info!(target: "poiscout::progress", "{message}"),
            LogLevel::Warn => warn!(target: "poiscout::progress", "{message}"),
            LogLevel::Error => error!(target: "poiscout::progress", "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_every_level_without_subscriber() {
        let log = TracingProgressLog::new();
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            log.log(level, "NextPageFetch[0] https://serpapi.com/search?start=20");
        }
    }
}
