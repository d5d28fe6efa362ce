//! Input handling for the control bar.
//!
//! Dispatches crossterm events to the keyboard handler or the mouse
//! surface and returns control flow signals to the host loop.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::{Propagation, Surface, SurfaceClick};

use crossterm::event::Event;

use crate::player::controller::PlaybackController;
use crate::player::render::ControlBarLayout;
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
///
/// Resize and focus events are left to the host.
pub fn handle_event(
    event: Event,
    surface: &mut Surface,
    controller: &mut PlaybackController,
    layout: &ControlBarLayout,
    seek_step: f64,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, controller, seek_step),
        Event::Mouse(mouse) => {
            surface.handle_mouse_event(mouse, controller, layout);
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
