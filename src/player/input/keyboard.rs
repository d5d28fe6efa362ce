//! Keyboard input handling for the control bar.
//!
//! Handles playback shortcuts: play/pause, sound, seeking and quitting.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::controller::PlaybackController;
use crate::player::state::InputResult;

/// Handle a keyboard event.
///
/// # Arguments
/// * `key` - The crossterm key event
/// * `controller` - Controller receiving playback commands
/// * `seek_step` - Seconds moved by the arrow keys
pub fn handle_key_event(
    key: KeyEvent,
    controller: &mut PlaybackController,
    seek_step: f64,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback controls ===
        KeyCode::Char(' ') | KeyCode::Char('k') => {
            controller.toggle_play();
            InputResult::Continue
        }
        KeyCode::Char('m') => {
            controller.request_sound_toggle();
            InputResult::Continue
        }
        KeyCode::Char('f') => InputResult::ToggleFullscreen,

        // === Seeking ===
        KeyCode::Left => {
            controller.seek_by(-seek_step);
            InputResult::Continue
        }
        KeyCode::Right => {
            controller.seek_by(seek_step);
            InputResult::Continue
        }
        KeyCode::Home => {
            controller.seek_to(0.0);
            InputResult::Continue
        }
        KeyCode::End => {
            controller.seek_to(f64::INFINITY);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaRef, SimulatedMedia};
    use crate::player::document::Document;
    use crate::player::state::ControlsConfig;

    fn controller(duration: f64) -> (PlaybackController, MediaRef) {
        let media = MediaRef::with_media(SimulatedMedia::new(duration));
        let mut controller =
            PlaybackController::new(media.clone(), Document::new(), ControlsConfig::new(true));
        controller.mount();
        (controller, media)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_toggles_playback() {
        let (mut c, media) = controller(60.0);
        assert_eq!(handle_key_event(press(KeyCode::Char(' ')), &mut c, 5.0), InputResult::Continue);
        assert!(c.ui_state().is_playing);
        assert_eq!(media.read(|m| m.paused()), Some(false));
    }

    #[test]
    fn arrows_seek_by_step() {
        let (mut c, media) = controller(60.0);
        handle_key_event(press(KeyCode::Right), &mut c, 5.0);
        handle_key_event(press(KeyCode::Right), &mut c, 5.0);
        assert_eq!(media.position(), Some(10.0));

        handle_key_event(press(KeyCode::Left), &mut c, 5.0);
        assert_eq!(media.position(), Some(5.0));
    }

    #[test]
    fn home_and_end_jump() {
        let (mut c, media) = controller(60.0);
        handle_key_event(press(KeyCode::End), &mut c, 5.0);
        assert_eq!(media.position(), Some(60.0));
        handle_key_event(press(KeyCode::Home), &mut c, 5.0);
        assert_eq!(media.position(), Some(0.0));
    }

    #[test]
    fn quit_keys() {
        let (mut c, _media) = controller(60.0);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut c, 5.0), InputResult::Quit);
        assert_eq!(handle_key_event(press(KeyCode::Esc), &mut c, 5.0), InputResult::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut c, 5.0), InputResult::Quit);
    }

    #[test]
    fn f_requests_fullscreen() {
        let (mut c, _media) = controller(60.0);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('f')), &mut c, 5.0),
            InputResult::ToggleFullscreen
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let (mut c, _media) = controller(60.0);
        let mut key = press(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        handle_key_event(key, &mut c, 5.0);
        assert!(!c.ui_state().is_playing);
    }
}
