//! Terminal sink: the production text destination.

use console::Term;
use tracing::trace;

use herald_core::application::{ApplicationError, ports::TextSink};
use herald_core::error::HeraldResult;

/// Writes lines through a [`console::Term`] handle.
///
/// `console` already deals with the platform differences (Windows console
/// vs. ANSI, piped vs. attached), so this adapter stays a thin shim: one
/// `write_line` per call, failures surfaced as
/// [`ApplicationError::SinkWrite`].
#[derive(Debug, Clone)]
pub struct TermSink {
    term: Term,
}

impl TermSink {
    /// Sink attached to stdout.
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Sink attached to stderr — for hosts that keep stdout machine-readable.
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl TextSink for TermSink {
    fn write_line(&self, line: &str) -> HeraldResult<()> {
        trace!(len = line.len(), "terminal write");
        self.term
            .write_line(line)
            .map_err(|e| ApplicationError::SinkWrite {
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
