//! In-memory sink adapter for testing.

use std::sync::{Arc, RwLock};

use herald_core::application::{ApplicationError, ports::TextSink};
use herald_core::error::HeraldResult;

/// In-memory sink for testing.
///
/// Clones share the underlying buffer, so a test can hand one clone to an
/// `Announcer` and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far (testing helper).
    pub fn lines(&self) -> Vec<String> {
        self.inner.read().map(|l| l.clone()).unwrap_or_default()
    }

    /// The most recently written line, if any.
    pub fn last(&self) -> Option<String> {
        self.inner.read().ok().and_then(|l| l.last().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().map(|l| l.is_empty()).unwrap_or(true)
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.inner.write() {
            lines.clear();
        }
    }
}

impl TextSink for MemorySink {
    fn write_line(&self, line: &str) -> HeraldResult<()> {
        let mut lines = self.inner.write().map_err(|_| ApplicationError::SinkWrite {
            reason: "sink buffer lock poisoned".into(),
        })?;
        lines.push(line.to_string());
        Ok(())
    }
}
