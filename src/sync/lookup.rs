//! Active-cue resolution over a sorted cue table.

use crate::srt::CueTable;

/// Find the active cue at `at_ms`, if any.
///
/// A lower-bound binary search over `start_ms` locates the last cue that
/// has already begun, then a backward scan resolves overlaps. Tie-break
/// policy (documented design decision, pinned by tests): among all cues
/// containing `at_ms`, the one with the latest `start_ms` wins; among
/// equal starts, the lowest index. With non-overlapping cues the scan
/// stops after a single extra comparison.
///
/// Negative times match nothing ("before any subtitle").
pub fn find_active_cue(table: &CueTable, at_ms: i64) -> Option<usize> {
    if at_ms < 0 || table.is_empty() {
        return None;
    }

    // Index of the first cue with start_ms > at_ms.
    let upper = table.cues().partition_point(|c| c.start_ms <= at_ms);

    let mut best: Option<usize> = None;
    let mut best_start = i64::MIN;

    for i in (0..upper).rev() {
        let cue = &table[i];
        if best.is_some() && cue.start_ms < best_start {
            // Everything further back starts even earlier and cannot win.
            break;
        }
        // start_ms <= at_ms holds for all i < upper.
        if cue.end_ms >= at_ms {
            best = Some(i);
            best_start = cue.start_ms;
        }
    }

    best
}
