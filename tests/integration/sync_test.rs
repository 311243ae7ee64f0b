//! Engine behavior driven through the public API, parser included.

use std::time::{Duration, Instant};

use subsync::srt;
use subsync::sync::SyncEngine;

use crate::helpers::SAMPLE_SRT;

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn parsed_file_drives_expected_transitions() {
    let outcome = srt::parse_str(SAMPLE_SRT);
    let mut engine = SyncEngine::new(outcome.table);
    let t = Instant::now();
    engine.start(t);

    // Before the first cue
    assert!(engine.tick(at(t, 500)).is_none());

    // Inside cue 0 (1s..4s)
    let ev = engine.tick(at(t, 2_000)).expect("first cue becomes active");
    assert_eq!(ev.current, Some(0));
    let cue = engine.cue(0).unwrap();
    assert_eq!(cue.text, "Hello, welcome to the movie.");

    // In the gap between cue 0 and cue 1
    let ev = engine.tick(at(t, 4_500)).expect("cue goes away");
    assert_eq!(ev.previous, Some(0));
    assert_eq!(ev.current, None);

    // Inside cue 1 (5.5s..8.2s)
    let ev = engine.tick(at(t, 6_000)).expect("second cue becomes active");
    assert_eq!(ev.current, Some(1));

    // Still inside: no event on the next tick
    assert!(engine.tick(at(t, 6_100)).is_none());
}

#[test]
fn offset_adjustment_shifts_the_whole_timeline() {
    let outcome = srt::parse_str(SAMPLE_SRT);
    let mut engine = SyncEngine::new(outcome.table);
    let t = Instant::now();
    engine.start(t);

    // At 500ms nothing is active; +1000ms offset lands inside cue 0
    assert!(engine.tick(at(t, 500)).is_none());
    engine.adjust_offset(1_000);
    let ev = engine.tick(at(t, 500)).expect("offset moved us into the cue");
    assert_eq!(ev.current, Some(0));
    assert_eq!(ev.elapsed_ms, 1_500);

    // Undoing the adjustment moves us back out
    engine.adjust_offset(-1_000);
    let ev = engine.tick(at(t, 500)).expect("offset moved us back out");
    assert_eq!(ev.current, None);
}

#[test]
fn stopped_engine_never_reports() {
    let outcome = srt::parse_str(SAMPLE_SRT);
    let mut engine = SyncEngine::new(outcome.table);
    let t = Instant::now();

    for ms in [0u64, 1_000, 2_000, 60_000] {
        assert!(engine.tick(at(t, ms)).is_none());
    }

    engine.start(t);
    assert!(engine.tick(at(t, 2_000)).is_some());
    engine.pause();
    assert!(engine.tick(at(t, 2_100)).is_none());
}

#[test]
fn word_context_flows_from_event_to_vocabulary_tuple() {
    let outcome = srt::parse_str(SAMPLE_SRT);
    let mut engine = SyncEngine::new(outcome.table);
    let t = Instant::now();
    engine.start(t);

    let ev = engine.tick(at(t, 6_000)).expect("cue 1 active");
    let cue = engine.cue(ev.current.unwrap()).unwrap();

    // Second line of the cue, first word: "It"
    let ctx = cue.word_context(5).unwrap();
    assert_eq!(ctx.word, "It");
    assert_eq!(ctx.text, "This is the second subtitle.\nIt has two lines.");
    assert_eq!(ctx.start_ms, 5_500);
}

#[test]
fn empty_file_yields_quiet_engine() {
    let outcome = srt::parse_str("");
    let mut engine = SyncEngine::new(outcome.table);
    let t = Instant::now();
    engine.start(t);

    for ms in [0u64, 100, 10_000] {
        assert!(engine.tick(at(t, ms)).is_none());
    }
}
