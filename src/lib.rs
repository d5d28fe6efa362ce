//! playbar: a media player control bar.
//!
//! The core is [`player::PlaybackController`], which mirrors a media
//! element's play state and position, turns track clicks and drags into
//! seeks and forwards sound changes to its parent. Around it sit the video
//! time formatter, share link builders, accent stripping, clipboard copy
//! and a terminal front-end.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod events;
pub mod logging;
pub mod media;
pub mod player;
pub mod share;
pub mod text;
pub mod theme;
pub mod time;
pub mod tui;

pub use config::Config;
pub use time::format_video_time;
