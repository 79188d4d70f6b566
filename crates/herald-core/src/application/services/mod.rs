//! Application services.

pub mod announcer;
pub mod stopwatch;

pub use announcer::{Announcer, DEFAULT_COLUMNS};
pub use stopwatch::Stopwatch;
