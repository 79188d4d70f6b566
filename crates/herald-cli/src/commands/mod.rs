//! Command handlers.
//!
//! Each submodule owns one subcommand's `execute` function.  Handlers wire
//! the production adapters (terminal sink, system clock) into the core's
//! `Announcer` — product output always goes through the sink port, while
//! CLI chatter goes through the `OutputManager`.

pub mod banner;
pub mod completions;
pub mod config;
pub mod hr;
pub mod say;

use herald_adapters::{SystemClock, TermSink};
use herald_core::application::Announcer;

use crate::config::AppConfig;

/// Build the production announcer for a command invocation.
fn announcer(config: &AppConfig, columns: usize) -> Announcer {
    Announcer::new(Box::new(TermSink::stdout()), Box::new(SystemClock::new()))
        .with_columns(columns)
        .with_timestamp_format(config.timestamp)
}
