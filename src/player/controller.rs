//! Playback controller for the control bar.
//!
//! Mirrors an externally owned media element into [`PlaybackUiState`],
//! turns track presses and drags into seeks, and forwards play/pause and
//! sound changes back to the element.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::events::Subscription;
use crate::media::{known_duration, MediaEvent, MediaRef};
use crate::player::document::{Document, PointerEvent, PointerPhase};
use crate::player::seek::{fraction_to_time, progress_percent, TrackBounds};
use crate::player::state::{ControlsConfig, DragState, PlaybackUiState, PointerKind};
use crate::time::format_video_time;

/// State read and written by event listeners.
#[derive(Debug, Default)]
struct Shared {
    ui: Cell<PlaybackUiState>,
    drag: Cell<DragState>,
    track: Cell<Option<TrackBounds>>,
}

impl Shared {
    fn set_playing(&self, playing: bool) {
        let mut ui = self.ui.get();
        ui.is_playing = playing;
        self.ui.set(ui);
    }

    fn set_position(&self, position: f64) {
        let mut ui = self.ui.get();
        ui.current_position = position;
        self.ui.set(ui);
    }

    fn apply_media_event(&self, event: &MediaEvent) {
        match *event {
            MediaEvent::Play => self.set_playing(true),
            MediaEvent::Pause => self.set_playing(false),
            MediaEvent::TimeUpdate { position } => self.set_position(position),
        }
    }
}

/// Seek the media to the track position under `x`.
///
/// Returns the applied time, or `None` when there is no track, no media or
/// no usable duration.
fn seek_to_pointer(shared: &Shared, media: &MediaRef, x: f64) -> Option<f64> {
    let fraction = shared.track.get()?.fraction_at(x)?;
    let time = fraction_to_time(fraction, media.duration()?)?;
    media.update(|m| m.set_position(time))?;
    shared.set_position(time);
    tracing::trace!(time, fraction, "seek");
    Some(time)
}

/// Everything the control bar needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlBarView {
    pub is_playing: bool,
    pub is_sound_on: bool,
    /// Present when the parent enabled the seek region.
    pub seek: Option<SeekView>,
}

/// Time labels and progress for the seek region.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekView {
    pub elapsed: String,
    pub total: String,
    /// Played share of the duration, `0..=100`.
    pub progress_percent: f64,
}

/// Drives a media element from control bar input.
///
/// Listeners are registered by [`mount`](Self::mount) and removed by
/// [`unmount`](Self::unmount) or on drop.
pub struct PlaybackController {
    media: MediaRef,
    document: Document,
    config: ControlsConfig,
    shared: Rc<Shared>,
    is_sound_on: Option<bool>,
    on_toggle_sound: Option<Box<dyn FnMut()>>,
    media_subscriptions: Vec<Subscription>,
    document_subscriptions: Vec<Subscription>,
}

impl PlaybackController {
    /// Create an unmounted controller for `media` inside `document`.
    pub fn new(media: MediaRef, document: Document, config: ControlsConfig) -> Self {
        Self {
            media,
            document,
            config,
            shared: Rc::new(Shared::default()),
            is_sound_on: None,
            on_toggle_sound: None,
            media_subscriptions: Vec::new(),
            document_subscriptions: Vec::new(),
        }
    }

    /// Set the callback used to ask the parent to flip its sound flag.
    pub fn with_sound_toggle(mut self, on_toggle: impl FnMut() + 'static) -> Self {
        self.on_toggle_sound = Some(Box::new(on_toggle));
        self
    }

    /// Register media and document listeners.
    ///
    /// Calling it again only fills in what is missing, e.g. media listeners
    /// once the element has been attached.
    pub fn mount(&mut self) {
        if self.document_subscriptions.is_empty() {
            self.subscribe_document();
        }
        if self.media_subscriptions.is_empty() {
            self.subscribe_media();
        }
        if let Some(on) = self.is_sound_on {
            self.media.update(|m| m.set_muted(!on));
        }
    }

    /// Drop media listeners and subscribe to whatever element is attached now.
    pub fn reconnect_media(&mut self) {
        self.media_subscriptions.clear();
        self.subscribe_media();
        if let Some(on) = self.is_sound_on {
            self.media.update(|m| m.set_muted(!on));
        }
    }

    /// Remove every listener and end any drag in progress.
    pub fn unmount(&mut self) {
        self.media_subscriptions.clear();
        self.document_subscriptions.clear();
        self.end_drag();
    }

    pub fn is_mounted(&self) -> bool {
        !self.document_subscriptions.is_empty()
    }

    /// Whether media events are being observed.
    pub fn is_observing_media(&self) -> bool {
        !self.media_subscriptions.is_empty()
    }

    fn subscribe_media(&mut self) {
        let Some(events) = self.media.events() else {
            tracing::debug!("media not attached, skipping media listeners");
            return;
        };
        let shared = Rc::clone(&self.shared);
        self.media_subscriptions
            .push(events.subscribe(move |event| shared.apply_media_event(event)));
    }

    fn subscribe_document(&mut self) {
        let shared = Rc::clone(&self.shared);
        let media = self.media.clone();
        let document = self.document.clone();
        let sub = self.document.on_pointer(move |event: &PointerEvent| match event.phase {
            PointerPhase::Move => {
                if shared.drag.get() == DragState::Dragging(event.kind) {
                    seek_to_pointer(&shared, &media, event.x);
                }
            }
            PointerPhase::Release => {
                if shared.drag.get().is_dragging() {
                    shared.drag.set(DragState::Idle);
                    document.set_user_select(true);
                    tracing::trace!("drag ended");
                }
            }
            PointerPhase::Press => {}
        });
        self.document_subscriptions.push(sub);
    }

    fn end_drag(&self) {
        if self.shared.drag.get().is_dragging() {
            self.shared.drag.set(DragState::Idle);
            self.document.set_user_select(true);
        }
    }

    /// Flip between playing and paused.
    ///
    /// The UI state changes first; the element's own play/pause events then
    /// correct it if the command was refused.
    pub fn toggle_play(&mut self) {
        if self.shared.ui.get().is_playing {
            self.shared.set_playing(false);
            self.media.update(|m| m.pause());
        } else {
            self.shared.set_playing(true);
            self.media.update(|m| m.play());
        }
    }

    /// Where the progress track currently is, or `None` when not drawn.
    pub fn set_track_bounds(&mut self, bounds: Option<TrackBounds>) {
        self.shared.track.set(bounds);
    }

    pub fn track_bounds(&self) -> Option<TrackBounds> {
        self.shared.track.get()
    }

    /// Begin tracking a press on the progress track.
    ///
    /// Text selection is disabled until the matching release.
    pub fn press_track(&mut self, kind: PointerKind) {
        if self.shared.track.get().is_none() {
            return;
        }
        self.shared.drag.set(DragState::Dragging(kind));
        self.document.set_user_select(false);
        tracing::trace!(?kind, "drag started");
    }

    /// Seek to the track position under `x`, as a click on the track does.
    pub fn click_track(&mut self, x: f64) -> Option<f64> {
        seek_to_pointer(&self.shared, &self.media, x)
    }

    /// Seek to an absolute time, clamped to the known duration.
    pub fn seek_to(&mut self, seconds: f64) -> Option<f64> {
        let duration = known_duration(self.media.duration()?)?;
        if seconds.is_nan() {
            return None;
        }
        let time = seconds.clamp(0.0, duration);
        self.media.update(|m| m.set_position(time))?;
        self.shared.set_position(time);
        Some(time)
    }

    /// Seek relative to the displayed position.
    pub fn seek_by(&mut self, delta: f64) -> Option<f64> {
        self.seek_to(self.shared.ui.get().current_position + delta)
    }

    /// Mirror the parent's sound flag onto the element when it changes.
    pub fn set_sound_on(&mut self, on: bool) {
        if self.is_sound_on == Some(on) {
            return;
        }
        self.is_sound_on = Some(on);
        self.media.update(|m| m.set_muted(!on));
    }

    /// Ask the parent to flip its sound flag.
    pub fn request_sound_toggle(&mut self) {
        match self.on_toggle_sound.as_mut() {
            Some(toggle) => toggle(),
            None => tracing::debug!("no sound toggle handler registered"),
        }
    }

    pub fn ui_state(&self) -> PlaybackUiState {
        self.shared.ui.get()
    }

    pub fn drag_state(&self) -> DragState {
        self.shared.drag.get()
    }

    pub fn config(&self) -> ControlsConfig {
        self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn media(&self) -> &MediaRef {
        &self.media
    }

    /// Snapshot of what to draw.
    pub fn view(&self) -> ControlBarView {
        let ui = self.shared.ui.get();
        let seek = self.config.show_seek_time.then(|| {
            let duration = self.media.duration().unwrap_or(f64::NAN);
            SeekView {
                elapsed: format_video_time(ui.current_position),
                total: format_video_time(duration),
                progress_percent: progress_percent(ui.current_position, duration),
            }
        });

        ControlBarView {
            is_playing: ui.is_playing,
            is_sound_on: self.is_sound_on.unwrap_or(false),
            seek,
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("media", &self.media)
            .field("config", &self.config)
            .field("ui", &self.shared.ui.get())
            .field("drag", &self.shared.drag.get())
            .field("is_sound_on", &self.is_sound_on)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
