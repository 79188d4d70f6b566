//! Application layer for Herald.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Announcer, Stopwatch)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rendering logic itself. All banner and prefix rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{Announcer, DEFAULT_COLUMNS, Stopwatch};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, TextSink};

pub use error::ApplicationError;
