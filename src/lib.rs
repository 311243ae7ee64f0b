//! subsync - subtitle sync companion for an external video player
//!
//! Displays time-coded subtitle cues in sync with a video playing in any
//! external player, using manual offset correction instead of a player
//! integration: press start when the movie begins, nudge the offset until
//! the lines match, click words to save them for vocabulary review.
//!
//! The crate is organized around two core components plus collaborators:
//!
//! - [`srt`]: tolerant SRT parser producing an immutable, time-ordered
//!   cue table (with encoding fallback and skip diagnostics)
//! - [`sync`]: the sync engine mapping wall clock + offset to the active
//!   cue and emitting discrete change events
//! - [`vocab`]: word + context + timestamp persistence
//! - [`player`]: terminal driver loop ticking the engine
//! - [`config`]: TOML configuration

pub mod config;
pub mod player;
pub mod srt;
pub mod sync;
pub mod vocab;

pub use config::Config;
