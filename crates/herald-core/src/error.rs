//! Unified error handling for Herald Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Herald Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// herald-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeraldError {
    /// Errors from the domain layer (bad template/mode/length input).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl HeraldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Herald".into(),
                "Please report it at: https://github.com/herald-cli/herald/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type HeraldResult<T> = Result<T, HeraldError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> HeraldResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> HeraldResult<T> {
        self.map_err(|e| HeraldError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_category() {
        let err: HeraldError = DomainError::PresetNotFound { name: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn application_errors_keep_their_category() {
        let err: HeraldError = ApplicationError::InvalidInterval.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let wrapped = io.context("writing banner");
        assert!(matches!(wrapped, Err(HeraldError::Internal { .. })));
        let msg = wrapped.unwrap_err().to_string();
        assert!(msg.contains("writing banner"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn suggestions_pass_through_from_the_inner_error() {
        let err: HeraldError = DomainError::UnknownJustification {
            value: "diagonal".into(),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("left")));
    }
}
