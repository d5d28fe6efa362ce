//! Media control bar
//!
//! Play/pause toggle, seek track with elapsed and total time, and sound
//! toggle, driving an externally owned media element.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: UI state and shared types (PlaybackUiState, DragState, InputResult)
//! - `document`: host-wide pointer events and the text-selection flag
//! - `seek`: track geometry and fraction/time conversion
//! - `controller`: PlaybackController, the listener wiring and commands
//! - `input/`: keyboard and mouse routing, click containment
//! - `render/`: layout, progress track and the ControlBar widget
//!
//! # Usage
//!
//! ```
//! use playbar::media::{MediaRef, SimulatedMedia};
//! use playbar::player::{ControlsConfig, Document, PlaybackController};
//!
//! let media = MediaRef::with_media(SimulatedMedia::new(90.0));
//! let mut controller = PlaybackController::new(media, Document::new(), ControlsConfig::new(true));
//! controller.mount();
//! controller.toggle_play();
//! assert!(controller.ui_state().is_playing);
//! ```

pub mod controller;
pub mod document;
pub mod input;
pub mod render;
pub mod seek;
pub mod state;

pub use controller::{ControlBarView, PlaybackController, SeekView};
pub use document::{Document, PointerEvent, PointerPhase};
pub use input::{handle_event, handle_key_event, Propagation, Surface, SurfaceClick};
pub use render::{BarTarget, ControlBar, ControlBarLayout};
pub use seek::TrackBounds;
pub use state::{ControlsConfig, DragState, InputResult, PlaybackUiState, PointerKind};
