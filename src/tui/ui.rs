//! Screen layout and drawing for the terminal player.
//!
//! The frame is split into a video surface with the control bar on its
//! bottom row, plus a footer of key hints outside fullscreen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::player::{ControlBar, ControlBarLayout, ControlBarView};
use crate::theme::Theme;

/// Key hints shown in the footer.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "play/pause"),
    ("←/→", "seek"),
    ("m", "sound"),
    ("f", "fullscreen"),
    ("q", "quit"),
];

/// Areas of one player frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScreen {
    /// The whole video surface, including its border.
    pub video: Rect,
    /// Row holding the control bar.
    pub bar: Rect,
    /// Key hints, hidden in fullscreen.
    pub footer: Option<Rect>,
}

impl PlayerScreen {
    pub fn compute(area: Rect, fullscreen: bool) -> Self {
        let (video, footer) = if fullscreen || area.height < 4 {
            (area, None)
        } else {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            (rows[0], Some(rows[1]))
        };

        let inner = if fullscreen {
            video
        } else {
            Block::default().borders(Borders::ALL).inner(video)
        };
        let bar = Rect::new(
            inner.x,
            inner.bottom().saturating_sub(1),
            inner.width,
            inner.height.min(1),
        );

        Self { video, bar, footer }
    }
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Draw the player and return the bar layout used, for hit testing.
pub fn render_player(
    frame: &mut Frame,
    view: &ControlBarView,
    title: &str,
    fullscreen: bool,
    theme: &Theme,
) -> ControlBarLayout {
    let screen = PlayerScreen::compute(frame.area(), fullscreen);

    let block = if fullscreen {
        Block::default()
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(Span::styled(format!(" {} ", title), theme.accent_bold_style()))
    };
    let surface = block.inner(screen.video);
    frame.render_widget(block, screen.video);

    let picture = Rect::new(
        surface.x,
        surface.y,
        surface.width,
        surface.height.saturating_sub(1),
    );
    let status = if view.is_playing { "Playing" } else { "Paused" };
    frame.render_widget(
        Paragraph::new(status)
            .style(theme.text_secondary_style())
            .alignment(Alignment::Center),
        centered_rect(60, 30, picture),
    );

    let layout = ControlBarLayout::compute(screen.bar, view.seek.is_some());
    frame.render_widget(ControlBar::new(view, layout, theme), screen.bar);

    if let Some(footer) = screen.footer {
        render_footer(frame, footer, FOOTER_KEYS, theme);
    }

    layout
}

/// Render a centered footer with keybinding hints.
///
/// Example: `&[("q", "quit"), ("f", "fullscreen")]` renders as
/// `"q: quit | f: fullscreen"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Each key uses the accent color, descriptions the secondary color, and
/// entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
