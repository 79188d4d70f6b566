//! Announcer service - the orchestration layer over the banner engine.
//!
//! This service coordinates the whole "say something readable" workflow:
//! 1. Render a string (prefixed line, banner, or progress tick)
//! 2. Write it through the [`TextSink`] port
//! 3. Hand the rendered string back to the caller
//!
//! It owns no policy the domain doesn't already define: banners come from
//! [`BannerGenerator`], prefixes from [`MessageKind`], timestamps from the
//! [`Clock`] port formatted per [`TimestampFormat`].

use tracing::{debug, instrument};

use crate::{
    application::{
        error::ApplicationError,
        ports::{Clock, TextSink},
        services::stopwatch::Stopwatch,
    },
    domain::{BannerGenerator, Justification, MessageKind, TimestampFormat},
    error::HeraldResult,
};

/// Default banner width — the one configuration constant the whole system
/// shares.
pub const DEFAULT_COLUMNS: usize = 80;

/// Writes status lines, banner pairs, and throttled progress ticks.
///
/// Adapters are injected at construction:
///
/// ```rust,no_run
/// use herald_core::application::Announcer;
/// # use herald_core::application::ports::{TextSink, Clock};
/// # fn adapters() -> (Box<dyn TextSink>, Box<dyn Clock>) { unimplemented!() }
///
/// let (sink, clock) = adapters(); // impl TextSink, impl Clock
/// let announcer = Announcer::new(sink, clock).with_columns(100);
/// announcer.header(Some("ingest")).unwrap();
/// ```
pub struct Announcer {
    sink: Box<dyn TextSink>,
    clock: Box<dyn Clock>,
    columns: usize,
    timestamp_format: TimestampFormat,
}

impl Announcer {
    /// Create an announcer with the given adapters and default settings
    /// (80 columns, compact timestamps).
    pub fn new(sink: Box<dyn TextSink>, clock: Box<dyn Clock>) -> Self {
        Self {
            sink,
            clock,
            columns: DEFAULT_COLUMNS,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Override the banner width.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Override the progress timestamp format.
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    // ── Lines ─────────────────────────────────────────────────────────────

    /// Write one status line: the kind's prefix, then the text.
    ///
    /// Returns the rendered line so hosts can reuse it (logs, captures).
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn line(&self, text: &str, kind: MessageKind) -> HeraldResult<String> {
        let line = format!("{}{}", kind.prefix(), text);
        self.sink.write_line(&line)?;
        Ok(line)
    }

    /// Like [`line`](Self::line), with the announcer's timestamp leading.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn timestamped_line(&self, text: &str, kind: MessageKind) -> HeraldResult<String> {
        let timestamp = self.timestamp();
        let line = format!("{timestamp} {}{}", kind.prefix(), text);
        self.sink.write_line(&line)?;
        Ok(line)
    }

    fn timestamp(&self) -> String {
        self.clock
            .now()
            .format(self.timestamp_format.format_str())
            .to_string()
    }

    // ── Banners ───────────────────────────────────────────────────────────

    /// Write one banner at the announcer's column width.
    #[instrument(skip_all, fields(justify = %justify))]
    pub fn banner(&self, text: Option<&str>, justify: Justification) -> HeraldResult<String> {
        let line = BannerGenerator::generate(text, self.columns, justify);
        self.sink.write_line(&line)?;
        Ok(line)
    }

    /// Write a left-justified banner opening a section.
    pub fn header(&self, text: Option<&str>) -> HeraldResult<String> {
        self.banner(text, Justification::Left)
    }

    /// Write a left-justified banner closing a section.
    pub fn footer(&self, text: &str) -> HeraldResult<String> {
        self.banner(Some(text), Justification::Left)
    }

    /// Run `work` between a header and a timed footer.
    ///
    /// The footer reports elapsed seconds to four decimal places and is
    /// written whether or not `work` succeeded — pass a closure returning a
    /// `Result` and the value comes back untouched for the caller to `?`.
    #[instrument(skip_all)]
    pub fn with_block<T, F>(&self, title: Option<&str>, work: F) -> HeraldResult<T>
    where
        F: FnOnce() -> T,
    {
        self.header(title)?;
        let stopwatch = Stopwatch::started_at(self.clock.now());

        let value = work();

        let elapsed = stopwatch.elapsed_seconds(self.clock.now());
        self.footer(&format!("done ({elapsed:.4}s)"))?;
        debug!(elapsed, "block finished");
        Ok(value)
    }

    // ── Progress ──────────────────────────────────────────────────────────

    /// Emit a timestamped progress line every `interval` ticks.
    ///
    /// Returns `Ok(Some(line))` when `index` is a multiple of `interval`,
    /// `Ok(None)` on throttled ticks. An interval of zero is an
    /// [`ApplicationError::InvalidInterval`] — raised immediately, not
    /// silently swallowed.
    pub fn progress(
        &self,
        index: u64,
        interval: u64,
        message: Option<&str>,
    ) -> HeraldResult<Option<String>> {
        if interval == 0 {
            return Err(ApplicationError::InvalidInterval.into());
        }
        if index % interval != 0 {
            return Ok(None);
        }

        let timestamp = self.timestamp();
        let line = match message {
            Some(message) => format!("{timestamp} i={index} {message}"),
            None => format!("{timestamp} i={index}"),
        };
        self.sink.write_line(&line)?;
        Ok(Some(line))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
