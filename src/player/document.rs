//! Host-wide pointer surface.
//!
//! Movement and release are observed here rather than on the progress
//! track, so a drag keeps working after the pointer leaves the track.

use std::cell::Cell;
use std::rc::Rc;

use crate::events::{EventBus, Subscription};
use crate::player::state::PointerKind;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

/// A pointer or touch event in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { kind, phase, x, y }
    }
}

/// The document the control bar lives in.
///
/// Clones share the same listeners and text-selection flag.
#[derive(Debug, Clone)]
pub struct Document {
    pointer: EventBus<PointerEvent>,
    user_select: Rc<Cell<bool>>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            pointer: EventBus::new(),
            user_select: Rc::new(Cell::new(true)),
        }
    }

    /// Listen for every pointer event delivered to the document.
    #[must_use = "dropping the subscription immediately removes the listener"]
    pub fn on_pointer(&self, listener: impl Fn(&PointerEvent) + 'static) -> Subscription {
        self.pointer.subscribe(listener)
    }

    /// Deliver a pointer event to document listeners.
    pub fn dispatch_pointer(&self, event: PointerEvent) {
        self.pointer.emit(&event);
    }

    pub fn pointer_listener_count(&self) -> usize {
        self.pointer.listener_count()
    }

    /// Whether text selection is currently allowed.
    pub fn user_select(&self) -> bool {
        self.user_select.get()
    }

    pub fn set_user_select(&self, enabled: bool) {
        self.user_select.set(enabled);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
