//! Infrastructure adapters for Herald.
//!
//! This crate implements the ports defined in
//! `herald-core::application::ports`. It contains all external dependencies
//! and I/O operations: the core never touches a terminal or a clock
//! directly.

pub mod clock;
pub mod sink;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use sink::{MemorySink, TermSink};
