//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `herald-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `TextSink`: the single text destination
//!   - `Clock`: wall-clock readings for timestamps and elapsed time
//!
//! - **Driving (Input) Ports**: Called by the external world, implemented by
//!   the application (the CLI drives [`crate::application::Announcer`]
//!   directly)

pub mod output;

pub use output::{Clock, TextSink};
