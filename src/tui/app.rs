//! Terminal player host.
//!
//! Owns the simulated media element, the sound flag and the fullscreen
//! flag, and drives a [`PlaybackController`] from crossterm input.

use std::cell::Cell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};

use super::ui::render_player;
use crate::events::Subscription;
use crate::media::{MediaRef, SimulatedMedia};
use crate::player::{
    handle_event, ControlBarLayout, ControlsConfig, Document, InputResult, PlaybackController,
    Surface,
};
use crate::theme::Theme;
use crate::time::format_video_time;

/// Settings for one player session.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Clip length; `None` simulates an unknown duration.
    pub duration: Option<f64>,
    pub block_autoplay: bool,
    pub start_with_sound: bool,
    pub controls: ControlsConfig,
    /// Seconds moved by the arrow keys.
    pub seek_step: f64,
    pub tick: Duration,
    pub theme: Theme,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            duration: Some(90.0),
            block_autoplay: false,
            start_with_sound: false,
            controls: ControlsConfig::new(true),
            seek_step: 5.0,
            tick: Duration::from_millis(250),
            theme: Theme::default(),
        }
    }
}

/// The terminal player: a video surface with a control bar.
pub struct PlayerApp {
    controller: PlaybackController,
    surface: Surface,
    sound_on: Rc<Cell<bool>>,
    fullscreen: Rc<Cell<bool>>,
    layout: ControlBarLayout,
    title: String,
    seek_step: f64,
    tick: Duration,
    theme: Theme,
    _surface_click: Subscription,
}

impl PlayerApp {
    pub fn new(options: PlayerOptions) -> Self {
        let media = match options.duration {
            Some(duration) => SimulatedMedia::new(duration),
            None => SimulatedMedia::with_unknown_duration(),
        }
        .block_autoplay(options.block_autoplay);
        let media = MediaRef::with_media(media);

        let sound_on = Rc::new(Cell::new(options.start_with_sound));
        let toggle = Rc::clone(&sound_on);
        let mut controller = PlaybackController::new(media, Document::new(), options.controls)
            .with_sound_toggle(move || toggle.set(!toggle.get()));
        controller.mount();
        controller.set_sound_on(sound_on.get());

        let surface = Surface::new();
        let fullscreen = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fullscreen);
        let surface_click = surface.on_click(move |_| flag.set(!flag.get()));

        let title = match options.duration {
            Some(duration) => format!("Simulated clip ({})", format_video_time(duration)),
            None => "Live stream".to_string(),
        };

        Self {
            controller,
            surface,
            sound_on,
            fullscreen,
            layout: ControlBarLayout::compute(Rect::default(), false),
            title,
            seek_step: options.seek_step,
            tick: options.tick,
            theme: options.theme,
            _surface_click: surface_click,
        }
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    pub fn is_sound_on(&self) -> bool {
        self.sound_on.get()
    }

    /// Layout of the last drawn control bar.
    pub fn layout(&self) -> ControlBarLayout {
        self.layout
    }

    /// Draw one frame and remember the bar layout for hit testing.
    pub fn draw(&mut self, frame: &mut Frame) {
        let view = self.controller.view();
        self.layout = render_player(
            frame,
            &view,
            &self.title,
            self.fullscreen.get(),
            &self.theme,
        );
        self.controller.set_track_bounds(self.layout.track_bounds());
    }

    /// Route one terminal event. Returns `Quit` when the loop should stop.
    pub fn handle_event(&mut self, event: Event) -> InputResult {
        let result = handle_event(
            event,
            &mut self.surface,
            &mut self.controller,
            &self.layout,
            self.seek_step,
        );
        if result == InputResult::ToggleFullscreen {
            self.fullscreen.set(!self.fullscreen.get());
        }
        self.sync_sound();
        result
    }

    /// Advance the media clock.
    pub fn advance(&mut self, elapsed: Duration) {
        self.controller.media().update(|m| m.advance(elapsed));
    }

    fn sync_sound(&mut self) {
        self.controller.set_sound_on(self.sound_on.get());
    }

    /// Run the player in the current terminal until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::enter()?;
        let result = self.event_loop(&mut session.terminal);
        session.leave()?;
        result
    }

    #[cfg(not(tarpaulin_include))]
    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? && self.handle_event(event::read()?) == InputResult::Quit {
                tracing::debug!("quit requested");
                return Ok(());
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= self.tick {
                self.advance(elapsed);
                last_tick = Instant::now();
            }
        }
    }
}

/// Raw mode, alternate screen and mouse capture, undone on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalSession {
    #[cfg(not(tarpaulin_include))]
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}
