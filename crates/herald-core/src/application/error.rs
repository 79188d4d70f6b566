//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the engine over the ports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The sink rejected a write.
    #[error("sink write failed: {reason}")]
    SinkWrite { reason: String },

    /// A progress interval of zero can never emit; it is a configuration
    /// mistake, raised immediately rather than silently ticking forever.
    #[error("progress interval must be at least 1")]
    InvalidInterval,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SinkWrite { reason } => vec![
                format!("The output destination failed: {}", reason),
                "Check that stdout is still writable".into(),
            ],
            Self::InvalidInterval => vec![
                "Progress intervals are 1-based".into(),
                "Use interval=1 to emit every tick".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SinkWrite { .. } => ErrorCategory::Internal,
            Self::InvalidInterval => ErrorCategory::Configuration,
        }
    }
}
