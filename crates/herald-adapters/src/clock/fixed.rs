//! Fixed clock adapter for testing.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};

use herald_core::application::ports::Clock;

/// Returns a programmed sequence of instants, repeating the last one once
/// the sequence is exhausted.
///
/// Deterministic stopwatch and progress-timestamp tests inject one of these
/// instead of [`super::SystemClock`].
#[derive(Debug, Clone)]
pub struct FixedClock {
    instants: Arc<Mutex<Vec<DateTime<Local>>>>,
}

impl FixedClock {
    /// A clock frozen at a single instant.
    pub fn at(instant: DateTime<Local>) -> Self {
        Self::sequence(vec![instant])
    }

    /// A clock stepping through `instants` in order.
    ///
    /// The final instant repeats forever, so a sequence shorter than the
    /// number of reads never panics.
    pub fn sequence(instants: Vec<DateTime<Local>>) -> Self {
        assert!(
            !instants.is_empty(),
            "FixedClock needs at least one instant"
        );
        Self {
            instants: Arc::new(Mutex::new(instants)),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        let mut instants = self.instants.lock().expect("fixed clock lock poisoned");
        if instants.len() > 1 {
            instants.remove(0)
        } else {
            instants[0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_seconds(s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 7, 12, 0, s).unwrap()
    }

    #[test]
    fn frozen_clock_repeats() {
        let clock = FixedClock::at(at_seconds(0));
        assert_eq!(clock.now(), at_seconds(0));
        assert_eq!(clock.now(), at_seconds(0));
    }

    #[test]
    fn sequence_steps_then_repeats_last() {
        let clock = FixedClock::sequence(vec![at_seconds(0), at_seconds(5)]);
        assert_eq!(clock.now(), at_seconds(0));
        assert_eq!(clock.now(), at_seconds(5));
        assert_eq!(clock.now(), at_seconds(5));
    }

    #[test]
    #[should_panic]
    fn empty_sequence_is_rejected() {
        let _ = FixedClock::sequence(Vec::new());
    }
}
