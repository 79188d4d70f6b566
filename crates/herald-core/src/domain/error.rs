// ============================================================================
// domain/error.rs - DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to hand to the CLI layer)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Invalid configuration (raised at the call that supplied the bad value)
    // ========================================================================
    #[error("unknown preset '{name}'")]
    PresetNotFound { name: String },

    #[error("unknown justification '{value}'")]
    UnknownJustification { value: String },

    #[error("unknown message kind '{value}'")]
    UnknownMessageKind { value: String },

    #[error("unknown timestamp format '{value}'")]
    UnknownTimestampFormat { value: String },

    #[error("invalid length '{value}': not a non-negative integer")]
    InvalidLength { value: String },

    // ========================================================================
    // Construction errors (programming mistakes, not runtime data errors)
    // ========================================================================
    #[error("justifier '{justifier}' does not implement its justify step")]
    JustifyNotImplemented { justifier: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PresetNotFound { name } => vec![
                format!("'{}' is not a known template preset", name),
                "Available presets: title, hr (alias: double_line), wtf".into(),
            ],
            Self::UnknownJustification { value } => vec![
                format!("'{}' is not a justification mode", value),
                "Use one of: left, center, right".into(),
            ],
            Self::UnknownMessageKind { value } => vec![
                format!("'{}' is not a message kind", value),
                "Use one of: plain, debug, info, success, warn, error".into(),
            ],
            Self::UnknownTimestampFormat { value } => vec![
                format!("'{}' is not a timestamp format", value),
                "Use one of: compact, verbose".into(),
            ],
            Self::InvalidLength { value } => vec![
                format!("'{}' could not be read as a column count", value),
                "Pass a non-negative integer, e.g. --columns 80".into(),
            ],
            Self::JustifyNotImplemented { justifier } => vec![
                format!("'{}' was constructed without a justify step", justifier),
                "This is a bug in the embedding code, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PresetNotFound { .. } => ErrorCategory::NotFound,
            Self::UnknownJustification { .. }
            | Self::UnknownMessageKind { .. }
            | Self::UnknownTimestampFormat { .. }
            | Self::InvalidLength { .. } => ErrorCategory::Validation,
            Self::JustifyNotImplemented { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_not_found_names_the_key() {
        let err = DomainError::PresetNotFound { name: "wat".into() };
        assert!(err.to_string().contains("wat"));
        assert!(err.suggestions().iter().any(|s| s.contains("title")));
    }

    #[test]
    fn categories_are_stable() {
        assert_eq!(
            DomainError::PresetNotFound { name: "x".into() }.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::UnknownJustification { value: "x".into() }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::JustifyNotImplemented {
                justifier: "x".into()
            }
            .category(),
            ErrorCategory::Internal
        );
    }
}
