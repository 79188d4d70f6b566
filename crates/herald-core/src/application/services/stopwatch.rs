//! Elapsed-time measurement against an injected clock.

use chrono::{DateTime, Local};

/// A captured start instant.
///
/// The stopwatch never reads time itself — both the start and the "now" of
/// an elapsed query come from the caller (ultimately the `Clock` port), so
/// timing is deterministic in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    start: DateTime<Local>,
}

impl Stopwatch {
    /// Start a stopwatch at the given instant.
    pub fn started_at(start: DateTime<Local>) -> Self {
        Self { start }
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    /// Seconds elapsed between the start and `now`.
    ///
    /// Sub-microsecond resolution is not preserved; a `now` before the start
    /// yields a negative value rather than panicking (the clock port makes
    /// no monotonicity promise).
    pub fn elapsed_seconds(&self, now: DateTime<Local>) -> f64 {
        let delta = now.signed_duration_since(self.start);
        match delta.num_microseconds() {
            Some(us) => us as f64 / 1_000_000.0,
            // Overflowed i64 microseconds: fall back to millisecond precision.
            None => delta.num_milliseconds() as f64 / 1_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 7, h, m, s).unwrap()
    }

    #[test]
    fn elapsed_whole_seconds() {
        let sw = Stopwatch::started_at(at(12, 0, 0));
        assert_eq!(sw.elapsed_seconds(at(12, 0, 5)), 5.0);
    }

    #[test]
    fn elapsed_fractional_seconds() {
        let start = at(12, 0, 0);
        let sw = Stopwatch::started_at(start);
        let now = start + chrono::Duration::milliseconds(1_500);
        assert_eq!(sw.elapsed_seconds(now), 1.5);
    }

    #[test]
    fn elapsed_zero_at_start() {
        let start = at(9, 30, 0);
        assert_eq!(Stopwatch::started_at(start).elapsed_seconds(start), 0.0);
    }

    #[test]
    fn clock_going_backwards_yields_negative() {
        let sw = Stopwatch::started_at(at(12, 0, 10));
        assert!(sw.elapsed_seconds(at(12, 0, 0)) < 0.0);
    }
}
