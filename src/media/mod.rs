//! Media element abstraction.
//!
//! The control bar never owns the media it drives. It holds a [`MediaRef`],
//! a shared slot the host fills once the element exists, and treats an
//! empty slot as "nothing to do".

mod simulated;

pub use simulated::SimulatedMedia;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::events::EventBus;

/// Events emitted by a media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback started or resumed.
    Play,
    /// Playback paused, stopped at the end, or a play request was rejected.
    Pause,
    /// The playback position changed.
    ///
    /// Carries the position so listeners never need to re-borrow the
    /// element while it is emitting.
    TimeUpdate { position: f64 },
}

/// A playable media resource.
///
/// Mirrors the subset of an HTML media element the control bar relies on.
pub trait MediaHandle {
    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Seek to `seconds`.
    fn set_position(&mut self, seconds: f64);

    /// Total duration in seconds, or NaN while metadata is unknown.
    fn duration(&self) -> f64;

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Whether the element is currently paused.
    fn paused(&self) -> bool;

    /// Request playback. The element may reject it and emit
    /// [`MediaEvent::Pause`].
    fn play(&mut self);

    fn pause(&mut self);

    /// The element's event stream.
    fn events(&self) -> &EventBus<MediaEvent>;

    /// Advance a host-clocked element by `elapsed`.
    ///
    /// Elements that keep their own clock ignore this.
    fn advance(&mut self, _elapsed: Duration) {}
}

/// Shared, possibly empty reference to a media element.
///
/// Clones point at the same slot. All accessors return `None` (or do
/// nothing) when the slot is empty or the element is already borrowed by
/// the caller further up the stack.
#[derive(Clone, Default)]
pub struct MediaRef {
    slot: Rc<RefCell<Option<Box<dyn MediaHandle>>>>,
}

impl MediaRef {
    /// Create an empty reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reference that already holds `media`.
    pub fn with_media(media: impl MediaHandle + 'static) -> Self {
        let media_ref = Self::new();
        media_ref.attach(media);
        media_ref
    }

    /// Put `media` in the slot, returning the previous element.
    pub fn attach(&self, media: impl MediaHandle + 'static) -> Option<Box<dyn MediaHandle>> {
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => slot.replace(Box::new(media)),
            Err(_) => {
                tracing::warn!("media slot busy, attach ignored");
                None
            }
        }
    }

    /// Empty the slot, returning the element it held.
    pub fn detach(&self) -> Option<Box<dyn MediaHandle>> {
        self.slot.try_borrow_mut().ok().and_then(|mut slot| slot.take())
    }

    pub fn is_attached(&self) -> bool {
        self.slot
            .try_borrow()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Run `f` against the element, if present.
    pub fn read<R>(&self, f: impl FnOnce(&dyn MediaHandle) -> R) -> Option<R> {
        let slot = self.slot.try_borrow().ok()?;
        slot.as_deref().map(|media| f(media))
    }

    /// Run `f` against the element mutably, if present.
    pub fn update<R>(&self, f: impl FnOnce(&mut dyn MediaHandle) -> R) -> Option<R> {
        let mut slot = self.slot.try_borrow_mut().ok()?;
        match slot.as_deref_mut() {
            Some(media) => Some(f(media)),
            None => {
                tracing::trace!("media not attached, command skipped");
                None
            }
        }
    }

    pub fn position(&self) -> Option<f64> {
        self.read(|m| m.position())
    }

    /// Duration, or `None` when no element is attached.
    ///
    /// An attached element with unknown metadata still yields `Some(NaN)`.
    pub fn duration(&self) -> Option<f64> {
        self.read(|m| m.duration())
    }

    pub fn muted(&self) -> Option<bool> {
        self.read(|m| m.muted())
    }

    /// Clone of the element's event bus, for subscribing.
    pub fn events(&self) -> Option<EventBus<MediaEvent>> {
        self.read(|m| m.events().clone())
    }
}

impl fmt::Debug for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaRef")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// A duration that can be used to turn a seek fraction into a time.
pub fn known_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}
