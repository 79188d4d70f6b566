//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `herald-adapters` crate provides implementations.

use chrono::{DateTime, Local};

use crate::error::HeraldResult;

/// Port for the single text destination.
///
/// Implemented by:
/// - `herald_adapters::sink::TermSink` (production, terminal)
/// - `herald_adapters::sink::MemorySink` (testing, in-memory buffer)
///
/// ## Design Notes
///
/// - One line per call; the sink owns line termination
/// - `Send + Sync` so an announcer can live in threaded hosts
/// - No flush/close lifecycle — every write is complete when it returns
#[cfg_attr(test, mockall::automock)]
pub trait TextSink: Send + Sync {
    /// Write one line to the destination.
    fn write_line(&self, line: &str) -> HeraldResult<()>;
}

/// Port for wall-clock access.
///
/// Implemented by:
/// - `herald_adapters::clock::SystemClock` (production)
/// - `herald_adapters::clock::FixedClock` (testing, programmed instants)
///
/// The core never reads ambient time directly; elapsed-time footers and
/// progress timestamps are deterministic under a test clock.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// The current wall-clock instant.
    fn now(&self) -> DateTime<Local>;
}
