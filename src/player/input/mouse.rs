//! Mouse input handling for the control bar.
//!
//! Presses go to the element under the pointer; movement and release go to
//! the document so a drag that leaves the track still ends. Clicks inside
//! the bar stop there and never reach the surface behind it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::events::{EventBus, Subscription};
use crate::player::controller::PlaybackController;
use crate::player::document::{PointerEvent, PointerPhase};
use crate::player::render::{BarTarget, ControlBarLayout};
use crate::player::state::PointerKind;

/// Whether an input event may be handled by the surface behind the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Handled by the control bar.
    Stopped,
    /// Not for the control bar.
    Bubbled,
}

/// A completed click outside the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceClick {
    pub column: u16,
    pub row: u16,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    target: BarTarget,
    column: u16,
}

/// The area hosting the control bar, e.g. the video surface.
///
/// Routes pointer input to the bar and delivers clicks that land outside
/// it to listeners registered with [`Surface::on_click`].
#[derive(Debug, Default)]
pub struct Surface {
    clicks: EventBus<SurfaceClick>,
    pressed: Option<Press>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click handler on the surface itself.
    #[must_use = "dropping the subscription immediately removes the listener"]
    pub fn on_click(&self, listener: impl Fn(&SurfaceClick) + 'static) -> Subscription {
        self.clicks.subscribe(listener)
    }

    /// Translate a crossterm mouse event.
    ///
    /// Only the left button is handled; everything else bubbles.
    pub fn handle_mouse_event(
        &mut self,
        mouse: MouseEvent,
        controller: &mut PlaybackController,
        layout: &ControlBarLayout,
    ) -> Propagation {
        let phase = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerPhase::Press,
            MouseEventKind::Drag(MouseButton::Left) => PointerPhase::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerPhase::Release,
            _ => return Propagation::Bubbled,
        };
        self.handle_pointer(
            PointerKind::Mouse,
            phase,
            mouse.column,
            mouse.row,
            controller,
            layout,
        )
    }

    /// Handle one pointer or touch event at a cell position.
    pub fn handle_pointer(
        &mut self,
        kind: PointerKind,
        phase: PointerPhase,
        column: u16,
        row: u16,
        controller: &mut PlaybackController,
        layout: &ControlBarLayout,
    ) -> Propagation {
        let target = layout.hit_test(column, row);
        let event = PointerEvent::new(kind, phase, f64::from(column), f64::from(row));

        match phase {
            PointerPhase::Press => {
                self.pressed = Some(Press { target, column });
                if target == BarTarget::Track {
                    controller.press_track(kind);
                }
                if target.is_inside_bar() {
                    Propagation::Stopped
                } else {
                    Propagation::Bubbled
                }
            }
            PointerPhase::Move => {
                let dragging = controller.drag_state().is_dragging();
                controller.document().dispatch_pointer(event);
                if dragging {
                    Propagation::Stopped
                } else {
                    Propagation::Bubbled
                }
            }
            PointerPhase::Release => {
                controller.document().dispatch_pointer(event);
                let Some(press) = self.pressed.take() else {
                    return Propagation::Bubbled;
                };
                let same_spot = press.target != BarTarget::Track || press.column == column;
                if press.target == target && same_spot {
                    self.click(target, column, row, controller)
                } else if press.target.is_inside_bar() || target.is_inside_bar() {
                    Propagation::Stopped
                } else {
                    Propagation::Bubbled
                }
            }
        }
    }

    fn click(
        &self,
        target: BarTarget,
        column: u16,
        row: u16,
        controller: &mut PlaybackController,
    ) -> Propagation {
        match target {
            BarTarget::PlayButton => controller.toggle_play(),
            BarTarget::Track => {
                controller.click_track(f64::from(column));
            }
            BarTarget::SoundButton => controller.request_sound_toggle(),
            BarTarget::Bar => {}
            BarTarget::Outside => {
                self.clicks.emit(&SurfaceClick { column, row });
                return Propagation::Bubbled;
            }
        }
        Propagation::Stopped
    }
}
