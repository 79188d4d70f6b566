//! Integration tests: the core announcer driven through these adapters.

use chrono::{Local, TimeZone};

use herald_adapters::{FixedClock, MemorySink};
use herald_core::prelude::*;

fn noon() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

#[test]
fn announcer_writes_through_the_memory_sink() {
    let sink = MemorySink::new();
    let announcer = Announcer::new(Box::new(sink.clone()), Box::new(FixedClock::at(noon())))
        .with_columns(20);

    announcer.header(Some("load")).unwrap();
    announcer.line("4 shards", MessageKind::Info).unwrap();

    assert_eq!(sink.lines(), ["= load =============", " -- 4 shards"]);
}

#[test]
fn fixed_clock_makes_timed_footers_deterministic() {
    let sink = MemorySink::new();
    let start = noon();
    let end = start + chrono::Duration::milliseconds(750);
    let announcer = Announcer::new(
        Box::new(sink.clone()),
        Box::new(FixedClock::sequence(vec![start, end])),
    )
    .with_columns(30);

    announcer.with_block(Some("sync"), || ()).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("= done (0.7500s) ="));
}

#[test]
fn progress_timestamps_come_from_the_injected_clock() {
    let sink = MemorySink::new();
    let announcer = Announcer::new(Box::new(sink.clone()), Box::new(FixedClock::at(noon())));

    let line = announcer.progress(20, 10, Some("rows")).unwrap().unwrap();
    assert_eq!(line, "[20260807120000] i=20 rows");
    assert_eq!(sink.last().as_deref(), Some(line.as_str()));
}
