//! Rendering components for the control bar.
//!
//! Layout is computed once per frame and shared between drawing and mouse
//! hit testing.

mod control_bar;
mod layout;
mod progress;

pub use control_bar::{ControlBar, PAUSE_ICON, PLAY_ICON, SOUND_OFF_ICON, SOUND_ON_ICON};
pub use layout::{BarTarget, ControlBarLayout, SeekLayout, BUTTON_WIDTH, TIME_LABEL_WIDTH};
pub use progress::{build_progress_bar_chars, render_progress_track};
