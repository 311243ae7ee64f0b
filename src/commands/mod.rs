//! CLI subcommand handlers.

pub mod config;
pub mod inspect;
pub mod play;
pub mod vocab;
