//! The sync engine state machine.

use std::time::Instant;

use crate::srt::{Cue, CueTable};
use crate::sync::lookup::find_active_cue;

/// Reported when the active cue changes between ticks.
///
/// Indices refer into the engine's cue table (`SyncEngine::cue`). `None`
/// on either side means "no cue displayed". Emitting only transitions
/// lets the renderer redraw on change instead of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueChangeEvent {
    pub previous: Option<usize>,
    pub current: Option<usize>,
    /// Adjusted elapsed time at which the change was observed.
    pub elapsed_ms: i64,
}

/// Playback progress snapshot for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub elapsed_ms: i64,
    pub adjusted_ms: i64,
    pub total_ms: i64,
    pub offset_ms: i64,
    pub running: bool,
}

impl Progress {
    /// Format a millisecond value as MM:SS (clamped at zero).
    pub fn format_mmss(ms: i64) -> String {
        let total_seconds = (ms / 1_000).max(0);
        format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
    }
}

/// Tracks wall-clock playback against a cue table with a user offset.
///
/// Two states, Stopped (initial) and Running. All operations are total:
/// there are no illegal transitions and `tick` never fails. The engine is
/// the sole owner of its state; callers sharing it across threads must
/// serialize access themselves.
///
/// The adjusted elapsed time is recomputed fresh on every tick from the
/// anchor instant, the caller's `now`, and the offset. It is never
/// accumulated incrementally, so there is no drift.
#[derive(Debug)]
pub struct SyncEngine {
    table: CueTable,
    running: bool,
    anchor: Option<Instant>,
    offset_ms: i64,
    last_active: Option<usize>,
}

impl SyncEngine {
    pub fn new(table: CueTable) -> Self {
        SyncEngine {
            table,
            running: false,
            anchor: None,
            offset_ms: 0,
            last_active: None,
        }
    }

    pub fn table(&self) -> &CueTable {
        &self.table
    }

    /// Swap in a new cue table (file reload). The offset survives, the
    /// last reported cue does not.
    pub fn replace_table(&mut self, table: CueTable) {
        self.table = table;
        self.last_active = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }

    /// Start playback, anchoring "elapsed = 0" at `now`.
    ///
    /// Pressing start while already running re-anchors and discards the
    /// elapsed progress: repeated presses are the supported manual resync
    /// gesture, not an error.
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.anchor = Some(now);
        tracing::debug!(offset_ms = self.offset_ms, "playback started");
    }

    /// Stop playback. Elapsed progress is discarded; a subsequent
    /// `start` re-anchors from zero. The offset is untouched.
    pub fn pause(&mut self) {
        self.running = false;
        self.anchor = None;
        tracing::debug!("playback paused");
    }

    /// Convenience play/pause toggle.
    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Return to the beginning: Stopped, elapsed zeroed, last reported
    /// cue cleared. The offset survives reset.
    pub fn reset(&mut self) {
        self.running = false;
        self.anchor = None;
        self.last_active = None;
        tracing::debug!("playback reset");
    }

    /// Shift the offset by a signed delta. Unbounded; a negative total
    /// pushes the effective timeline before the anchor.
    pub fn adjust_offset(&mut self, delta_ms: i64) {
        self.offset_ms = self.offset_ms.saturating_add(delta_ms);
    }

    /// Set the offset to an absolute value.
    pub fn set_offset(&mut self, offset_ms: i64) {
        self.offset_ms = offset_ms;
    }

    /// Wall-clock milliseconds since the anchor, or 0 while stopped.
    pub fn elapsed_ms(&self, now: Instant) -> i64 {
        match self.anchor {
            Some(anchor) if self.running => {
                // saturating_duration_since covers now < anchor
                now.saturating_duration_since(anchor).as_millis() as i64
            }
            _ => 0,
        }
    }

    /// The single value used for all cue lookups: elapsed plus offset.
    /// May be negative, which matches no cue.
    pub fn adjusted_ms(&self, now: Instant) -> i64 {
        self.elapsed_ms(now).saturating_add(self.offset_ms)
    }

    /// Advance one tick. Returns a change event when the active cue
    /// resolution differs from the previous tick, `None` otherwise.
    /// Always `None` while stopped.
    pub fn tick(&mut self, now: Instant) -> Option<CueChangeEvent> {
        if !self.running {
            return None;
        }

        let elapsed_ms = self.adjusted_ms(now);
        let current = find_active_cue(&self.table, elapsed_ms);

        if current == self.last_active {
            return None;
        }

        let previous = std::mem::replace(&mut self.last_active, current);
        Some(CueChangeEvent {
            previous,
            current,
            elapsed_ms,
        })
    }

    /// The cue that would be displayed at `now`, without mutating change
    /// detection state.
    pub fn active_cue(&self, now: Instant) -> Option<&Cue> {
        if !self.running {
            return None;
        }
        find_active_cue(&self.table, self.adjusted_ms(now)).and_then(|i| self.table.get(i))
    }

    /// Look up a cue by the index carried in a change event.
    pub fn cue(&self, index: usize) -> Option<&Cue> {
        self.table.get(index)
    }

    /// Snapshot for the status display.
    pub fn progress(&self, now: Instant) -> Progress {
        Progress {
            elapsed_ms: self.elapsed_ms(now),
            adjusted_ms: self.adjusted_ms(now),
            total_ms: self.table.total_ms(),
            offset_ms: self.offset_ms,
            running: self.running,
        }
    }

    /// Cues around the current adjusted time, for preview listings.
    pub fn nearby_cues(&self, now: Instant, count: usize) -> &[Cue] {
        if self.table.is_empty() || count == 0 {
            return &[];
        }
        let at = self.adjusted_ms(now);
        let pos = self.table.cues().partition_point(|c| c.start_ms <= at);
        let closest = pos.saturating_sub(1);
        let start = closest.saturating_sub(count / 2);
        let end = (start + count).min(self.table.len());
        &self.table.cues()[start..end]
    }
}
