//! Player state management
//!
//! Contains the UI-side playback state owned by the controller and the
//! small shared types used across player modules.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the host
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Toggle the host's fullscreen surface
    ToggleFullscreen,
    /// Exit the player
    Quit,
}

/// What the control bar shows about playback.
///
/// Derived from media events; never the source of truth for actual
/// playback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackUiState {
    /// Last known playback position in seconds
    pub current_position: f64,
    /// Whether the play/pause toggle shows "playing"
    pub is_playing: bool,
}

/// Input device that started an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Whether a press on the progress track is being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A press on the track is active; movement of this kind seeks.
    Dragging(PointerKind),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// Options set by the parent that hosts the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlsConfig {
    /// Show elapsed time, the seek track and total duration.
    ///
    /// Hidden unless the parent asks for it.
    pub show_seek_time: bool,
}

impl ControlsConfig {
    pub fn new(show_seek_time: bool) -> Self {
        Self { show_seek_time }
    }
}
