//! Terminal front-end for the control bar.
//!
//! Hosts a simulated clip in a ratatui/crossterm screen with mouse capture,
//! so the bar can be clicked and dragged like its browser counterpart.

pub mod app;
pub mod ui;

pub use app::{PlayerApp, PlayerOptions};
