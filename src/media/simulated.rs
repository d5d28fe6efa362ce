//! Clock-driven media element.
//!
//! Stands in for a real decoder: position advances only when the host calls
//! [`MediaHandle::advance`], which makes it deterministic under test.

use std::time::Duration;

use super::{known_duration, MediaEvent, MediaHandle};
use crate::events::EventBus;

/// A media element with no content, only a timeline.
#[derive(Debug)]
pub struct SimulatedMedia {
    position: f64,
    duration: f64,
    muted: bool,
    paused: bool,
    autoplay_blocked: bool,
    events: EventBus<MediaEvent>,
}

impl SimulatedMedia {
    /// Create a paused, muted element of the given duration.
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration,
            muted: true,
            paused: true,
            autoplay_blocked: false,
            events: EventBus::new(),
        }
    }

    /// Create an element whose metadata has not loaded yet.
    pub fn with_unknown_duration() -> Self {
        Self::new(f64::NAN)
    }

    /// Reject every play request, as a browser does for blocked autoplay.
    pub fn block_autoplay(mut self, blocked: bool) -> Self {
        self.autoplay_blocked = blocked;
        self
    }

    /// Set the duration once metadata becomes available.
    ///
    /// A position past the new duration is pulled back to it and reported.
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = duration;
        if let Some(duration) = known_duration(duration) {
            if self.position > duration {
                self.move_to(duration);
            }
        }
    }

    fn move_to(&mut self, position: f64) {
        self.position = position;
        self.events.emit(&MediaEvent::TimeUpdate { position });
    }

    fn at_end(&self) -> bool {
        known_duration(self.duration).is_some_and(|d| self.position >= d)
    }
}

impl MediaHandle for SimulatedMedia {
    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, seconds: f64) {
        if seconds.is_nan() {
            return;
        }
        let upper = known_duration(self.duration).unwrap_or(f64::MAX);
        self.move_to(seconds.clamp(0.0, upper));
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        if self.autoplay_blocked {
            tracing::debug!("play request rejected");
            self.paused = true;
            self.events.emit(&MediaEvent::Pause);
            return;
        }
        if !self.paused {
            return;
        }
        if self.at_end() {
            self.move_to(0.0);
        }
        self.paused = false;
        self.events.emit(&MediaEvent::Play);
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.events.emit(&MediaEvent::Pause);
    }

    fn events(&self) -> &EventBus<MediaEvent> {
        &self.events
    }

    fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }
        self.position += elapsed.as_secs_f64();
        let ended = self.at_end();
        if let Some(duration) = known_duration(self.duration) {
            self.position = self.position.min(duration);
        }
        self.events.emit(&MediaEvent::TimeUpdate {
            position: self.position,
        });
        if ended {
            self.paused = true;
            self.events.emit(&MediaEvent::Pause);
        }
    }
}
