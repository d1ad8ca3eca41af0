//! Progress log port
//!
//! Operator-facing progress lines emitted by the batch driver.

use std::fmt;

#[cfg(test)]
use mockall::automock;

/// Severity of a progress line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal progress
    Info,
    /// Something unexpected that does not stop the batch
    Warn,
    /// The batch is about to abort
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Port for reporting batch progress
#[cfg_attr(test, automock)]
pub trait ProgressLogPort: Send + Sync {
    /// Record one progress line
    fn log(&self, level: LogLevel, message: &str);
}
