//! Seek geometry: pointer position on the progress track to media time.

use ratatui::layout::Rect;

use crate::media::known_duration;

/// Horizontal extent of the progress track in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub left: f64,
    pub width: f64,
}

impl TrackBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Bounds for a track drawn in terminal cells.
    ///
    /// Pointer x is a column index, so the first cell maps to 0% and the
    /// last cell to 100%.
    pub fn from_cells(track: Rect) -> Self {
        let span = track.width.saturating_sub(1).max(1);
        Self::new(f64::from(track.x), f64::from(span))
    }

    /// Fraction of the track at `x`, clamped to `[0, 1]`.
    ///
    /// `None` for a degenerate track or a non-finite coordinate.
    pub fn fraction_at(&self, x: f64) -> Option<f64> {
        if !(self.width.is_finite() && self.width > 0.0) || !x.is_finite() {
            return None;
        }
        Some(((x - self.left) / self.width).clamp(0.0, 1.0))
    }
}

/// Convert a track fraction to a media time.
///
/// `None` while the duration is unknown, zero or not finite.
pub fn fraction_to_time(fraction: f64, duration: f64) -> Option<f64> {
    let duration = known_duration(duration)?;
    Some(fraction.clamp(0.0, 1.0) * duration)
}

/// Share of the duration already played, as a percentage in `[0, 100]`.
///
/// Zero while the duration is unknown.
pub fn progress_percent(position: f64, duration: f64) -> f64 {
    match known_duration(duration) {
        Some(duration) if position.is_finite() => (position * 100.0 / duration).clamp(0.0, 100.0),
        _ => 0.0,
    }
}
