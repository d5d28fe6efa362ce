//! Control bar layout and hit testing.
//!
//! The bar is a single terminal row:
//!
//! ```text
//! [▶]  0:05 ━━━━━━●──────────── 1:02:03  [🔇]
//! ```
//!
//! Positions are computed by hand so mouse hit testing and drawing always
//! agree on where the track is.

use ratatui::layout::{Position, Rect};

use crate::player::seek::TrackBounds;

/// Width of each toggle button, in cells.
pub const BUTTON_WIDTH: u16 = 4;
/// Width reserved for a time label, wide enough for `H:MM:SS`.
pub const TIME_LABEL_WIDTH: u16 = 8;
/// Blank cells between neighbouring elements.
const GAP: u16 = 1;

/// What sits under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTarget {
    PlayButton,
    Track,
    SoundButton,
    /// Inside the bar but not on an interactive element.
    Bar,
    /// Outside the bar.
    Outside,
}

impl BarTarget {
    pub fn is_inside_bar(&self) -> bool {
        !matches!(self, BarTarget::Outside)
    }
}

/// Areas of the seek region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekLayout {
    pub elapsed: Rect,
    pub track: Rect,
    pub total: Rect,
}

/// Where each control bar element is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBarLayout {
    pub bar: Rect,
    pub play_button: Rect,
    pub sound_button: Rect,
    /// `None` when the seek region is hidden or there is no room for it.
    pub seek: Option<SeekLayout>,
}

impl ControlBarLayout {
    /// Lay out the bar on the first row of `area`.
    pub fn compute(area: Rect, show_seek_time: bool) -> Self {
        let bar = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let button_width = BUTTON_WIDTH.min(bar.width / 2);

        let play_button = Rect::new(bar.x, bar.y, button_width, bar.height);
        let sound_button = Rect::new(
            bar.right().saturating_sub(button_width),
            bar.y,
            button_width,
            bar.height,
        );

        let seek = show_seek_time
            .then(|| Self::seek_region(bar, play_button, sound_button))
            .flatten();

        Self {
            bar,
            play_button,
            sound_button,
            seek,
        }
    }

    fn seek_region(bar: Rect, play: Rect, sound: Rect) -> Option<SeekLayout> {
        let start = play.right() + GAP;
        let end = sound.x.saturating_sub(GAP);
        let needed = 2 * TIME_LABEL_WIDTH + 2 * GAP + 1;
        if end <= start || end - start < needed {
            return None;
        }

        let elapsed = Rect::new(start, bar.y, TIME_LABEL_WIDTH, bar.height);
        let total = Rect::new(end - TIME_LABEL_WIDTH, bar.y, TIME_LABEL_WIDTH, bar.height);
        let track_x = elapsed.right() + GAP;
        let track = Rect::new(
            track_x,
            bar.y,
            total.x.saturating_sub(GAP) - track_x,
            bar.height,
        );

        Some(SeekLayout {
            elapsed,
            track,
            total,
        })
    }

    /// Track geometry for seeking, if the track is drawn.
    pub fn track_bounds(&self) -> Option<TrackBounds> {
        self.seek.map(|seek| TrackBounds::from_cells(seek.track))
    }

    /// Find the element at a cell position.
    pub fn hit_test(&self, column: u16, row: u16) -> BarTarget {
        let pos = Position::new(column, row);
        if !self.bar.contains(pos) {
            BarTarget::Outside
        } else if self.play_button.contains(pos) {
            BarTarget::PlayButton
        } else if self.sound_button.contains(pos) {
            BarTarget::SoundButton
        } else if self.seek.is_some_and(|seek| seek.track.contains(pos)) {
            BarTarget::Track
        } else {
            BarTarget::Bar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_sit_at_both_ends() {
        let layout = ControlBarLayout::compute(Rect::new(0, 10, 80, 1), true);
        assert_eq!(layout.play_button, Rect::new(0, 10, 4, 1));
        assert_eq!(layout.sound_button, Rect::new(76, 10, 4, 1));
    }

    #[test]
    fn track_fills_the_middle() {
        let layout = ControlBarLayout::compute(Rect::new(0, 0, 80, 1), true);
        let seek = layout.seek.unwrap();
        assert_eq!(seek.elapsed, Rect::new(5, 0, 8, 1));
        assert_eq!(seek.track, Rect::new(14, 0, 52, 1));
        assert_eq!(seek.total, Rect::new(67, 0, 8, 1));
    }

    #[test]
    fn seek_region_hidden_when_disabled() {
        let layout = ControlBarLayout::compute(Rect::new(0, 0, 80, 1), false);
        assert!(layout.seek.is_none());
        assert!(layout.track_bounds().is_none());
    }

    #[test]
    fn seek_region_dropped_when_too_narrow() {
        let layout = ControlBarLayout::compute(Rect::new(0, 0, 20, 1), true);
        assert!(layout.seek.is_none());
    }

    #[test]
    fn tiny_area_does_not_panic() {
        for width in 0..12 {
            let layout = ControlBarLayout::compute(Rect::new(0, 0, width, 1), true);
            let _ = layout.hit_test(0, 0);
        }
        let empty = ControlBarLayout::compute(Rect::new(0, 0, 40, 0), true);
        assert_eq!(empty.hit_test(0, 0), BarTarget::Outside);
    }

    #[test]
    fn hit_test_finds_elements() {
        let layout = ControlBarLayout::compute(Rect::new(0, 5, 80, 1), true);
        assert_eq!(layout.hit_test(1, 5), BarTarget::PlayButton);
        assert_eq!(layout.hit_test(78, 5), BarTarget::SoundButton);
        assert_eq!(layout.hit_test(30, 5), BarTarget::Track);
        assert_eq!(layout.hit_test(7, 5), BarTarget::Bar);
        assert_eq!(layout.hit_test(30, 4), BarTarget::Outside);
        assert!(!BarTarget::Outside.is_inside_bar());
        assert!(BarTarget::Bar.is_inside_bar());
    }

    #[test]
    fn track_bounds_cover_track_cells() {
        let layout = ControlBarLayout::compute(Rect::new(0, 0, 80, 1), true);
        let bounds = layout.track_bounds().unwrap();
        assert_eq!(bounds.left, 14.0);
        assert_eq!(bounds.width, 51.0);
    }
}
