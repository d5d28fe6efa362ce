//! Progress track rendering.
//!
//! Draws the played part of the track, the playhead and the remainder.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::theme::Theme;

/// Played portion of the track.
pub const FILLED: char = '━';
/// Unplayed portion of the track.
pub const EMPTY: char = '─';
/// Current position.
pub const PLAYHEAD: char = '●';

/// Build the track characters for a given progress.
///
/// # Arguments
/// * `bar_width` - Width of the track in cells
/// * `progress_percent` - Played share of the duration, `0..=100`
///
/// # Returns
/// A tuple of (bar_chars, filled_count). The playhead sits on the first
/// unplayed cell and disappears once the track is full.
pub fn build_progress_bar_chars(bar_width: usize, progress_percent: f64) -> (Vec<char>, usize) {
    let progress = if progress_percent.is_finite() {
        (progress_percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec![EMPTY; bar_width];
    for cell in bar.iter_mut().take(filled) {
        *cell = FILLED;
    }
    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    (bar, filled)
}

/// Draw the track into `area` (first row only).
pub fn render_progress_track(buf: &mut Buffer, area: Rect, progress_percent: f64, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let (bar, filled) = build_progress_bar_chars(area.width as usize, progress_percent);

    for (i, c) in bar.into_iter().enumerate() {
        let style = if i < filled {
            theme.accent_style()
        } else if i == filled {
            theme.text_style()
        } else {
            theme.text_secondary_style()
        };
        let x = area.x + i as u16;
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_char(c).set_style(style);
        }
    }
}
