//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod copy;
pub mod format_time;
pub mod play;
pub mod share;
pub mod strip_accents;
