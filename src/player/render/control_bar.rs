//! Control bar widget.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use super::layout::ControlBarLayout;
use super::progress::render_progress_track;
use crate::player::controller::ControlBarView;
use crate::theme::Theme;

pub const PLAY_ICON: &str = "▶";
pub const PAUSE_ICON: &str = "⏸";
pub const SOUND_ON_ICON: &str = "🔊";
pub const SOUND_OFF_ICON: &str = "🔇";

/// Draws a [`ControlBarView`] using a precomputed layout.
///
/// The same [`ControlBarLayout`] must be used for mouse hit testing so
/// clicks land on what is drawn.
#[derive(Debug, Clone)]
pub struct ControlBar<'a> {
    view: &'a ControlBarView,
    layout: ControlBarLayout,
    theme: &'a Theme,
}

impl<'a> ControlBar<'a> {
    pub fn new(view: &'a ControlBarView, layout: ControlBarLayout, theme: &'a Theme) -> Self {
        Self {
            view,
            layout,
            theme,
        }
    }
}

fn render_button(buf: &mut Buffer, area: Rect, icon: &str, theme: &Theme) {
    Paragraph::new(Line::from(icon))
        .style(theme.button_style())
        .alignment(Alignment::Center)
        .render(area, buf);
}

impl Widget for ControlBar<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let layout = self.layout;
        let theme = self.theme;
        if layout.bar.is_empty() {
            return;
        }

        buf.set_style(layout.bar, theme.bar_style());

        let play_icon = if self.view.is_playing {
            PAUSE_ICON
        } else {
            PLAY_ICON
        };
        render_button(buf, layout.play_button, play_icon, theme);

        if let (Some(seek_layout), Some(seek)) = (layout.seek, self.view.seek.as_ref()) {
            Paragraph::new(seek.elapsed.as_str())
                .style(theme.text_style())
                .alignment(Alignment::Right)
                .render(seek_layout.elapsed, buf);
            render_progress_track(buf, seek_layout.track, seek.progress_percent, theme);
            Paragraph::new(seek.total.as_str())
                .style(theme.text_style())
                .alignment(Alignment::Left)
                .render(seek_layout.total, buf);
        }

        let sound_icon = if self.view.is_sound_on {
            SOUND_ON_ICON
        } else {
            SOUND_OFF_ICON
        };
        render_button(buf, layout.sound_button, sound_icon, theme);
    }
}
