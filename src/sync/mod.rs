//! Subtitle sync engine
//!
//! Maps a continuously advancing wall clock plus a user-adjustable offset
//! to "which cue, if any, is active now" and exposes discrete transition
//! events.
//!
//! # Architecture
//!
//! - `engine`: the `SyncEngine` state machine (Stopped/Running, anchor
//!   instant, signed millisecond offset, change detection)
//! - `lookup`: active-cue resolution over the sorted table (lower-bound
//!   binary search plus a bounded backward scan for overlap ties)
//!
//! The engine is driven externally: one owner calls `tick` on a fixed
//! period and forwards discrete user commands. No operation blocks,
//! suspends, or fails; ticking an empty table or a negative adjusted time
//! simply resolves to no active cue.

mod engine;
mod lookup;

pub use engine::{CueChangeEvent, Progress, SyncEngine};
pub use lookup::find_active_cue;
