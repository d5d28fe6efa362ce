//! Integration tests for the control bar: controller, input routing and rendering

use std::cell::Cell;
use std::rc::Rc;

use playbar::media::{MediaHandle, MediaRef, SimulatedMedia};
use playbar::player::{
    ControlBar, ControlBarLayout, ControlsConfig, Document, PlaybackController, PointerEvent,
    PointerKind, PointerPhase, Propagation, Surface, TrackBounds,
};
use playbar::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

fn mounted(media: &MediaRef, document: &Document) -> PlaybackController {
    let mut controller =
        PlaybackController::new(media.clone(), document.clone(), ControlsConfig::new(true));
    controller.mount();
    controller
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

#[test]
fn seeking_by_percent_sets_matching_time() {
    let media = MediaRef::with_media(SimulatedMedia::new(200.0));
    let document = Document::new();
    let mut controller = mounted(&media, &document);
    controller.set_track_bounds(Some(TrackBounds::new(0.0, 100.0)));

    for percent in [0.0, 12.5, 50.0, 99.0, 100.0] {
        let time = controller.click_track(percent).unwrap();
        assert!((time - percent / 100.0 * 200.0).abs() < 1e-9);
        assert_eq!(media.position(), Some(time));
        assert_eq!(controller.ui_state().current_position, time);
    }
}

#[test]
fn mount_and_unmount_are_symmetric() {
    let media = MediaRef::with_media(SimulatedMedia::new(60.0));
    let document = Document::new();
    let media_events = media.events().unwrap();

    let mut controller =
        PlaybackController::new(media.clone(), document.clone(), ControlsConfig::new(true));
    assert_eq!(media_events.listener_count(), 0);
    assert_eq!(document.pointer_listener_count(), 0);

    controller.mount();
    controller.mount();
    assert_eq!(media_events.listener_count(), 1);
    assert_eq!(document.pointer_listener_count(), 1);

    controller.unmount();
    assert_eq!(media_events.listener_count(), 0);
    assert_eq!(document.pointer_listener_count(), 0);

    controller.mount();
    drop(controller);
    assert_eq!(media_events.listener_count(), 0);
    assert_eq!(document.pointer_listener_count(), 0);
}

#[test]
fn external_pause_reconciles_play_state() {
    let media = MediaRef::with_media(SimulatedMedia::new(60.0));
    let document = Document::new();
    let mut controller = mounted(&media, &document);

    controller.toggle_play();
    assert!(controller.ui_state().is_playing);
    assert_eq!(media.read(|m| m.paused()), Some(false));

    media.update(|m| m.pause());
    assert!(!controller.ui_state().is_playing);
}

#[test]
fn touch_drag_ends_when_released_anywhere() {
    let media = MediaRef::with_media(SimulatedMedia::new(100.0));
    let document = Document::new();
    let mut controller = mounted(&media, &document);
    controller.set_track_bounds(Some(TrackBounds::new(10.0, 100.0)));

    controller.press_track(PointerKind::Touch);
    assert!(!document.user_select());

    document.dispatch_pointer(PointerEvent::new(PointerKind::Touch, PointerPhase::Move, 60.0, 0.0));
    assert_eq!(media.position(), Some(50.0));

    // Mouse movement does not move a touch drag.
    document.dispatch_pointer(PointerEvent::new(PointerKind::Mouse, PointerPhase::Move, 90.0, 0.0));
    assert_eq!(media.position(), Some(50.0));

    document.dispatch_pointer(PointerEvent::new(
        PointerKind::Touch,
        PointerPhase::Release,
        500.0,
        400.0,
    ));
    assert!(!controller.drag_state().is_dragging());
    assert!(document.user_select());

    document.dispatch_pointer(PointerEvent::new(PointerKind::Touch, PointerPhase::Move, 20.0, 0.0));
    assert_eq!(media.position(), Some(50.0));
}

#[test]
fn media_attached_after_mount_is_observed_on_reconnect() {
    let media = MediaRef::new();
    let document = Document::new();
    let mut controller = mounted(&media, &document);
    assert!(!controller.is_observing_media());

    controller.toggle_play();
    assert!(controller.ui_state().is_playing);

    media.attach(SimulatedMedia::new(30.0));
    controller.reconnect_media();
    assert!(controller.is_observing_media());

    media.update(|m| m.set_position(12.0));
    assert_eq!(controller.ui_state().current_position, 12.0);
}

#[test]
fn surface_clicks_only_bubble_from_outside_the_bar() {
    let media = MediaRef::with_media(SimulatedMedia::new(60.0));
    let document = Document::new();
    let mut controller = mounted(&media, &document);
    let layout = ControlBarLayout::compute(Rect::new(0, 9, 60, 1), true);
    controller.set_track_bounds(layout.track_bounds());

    let mut surface = Surface::new();
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let _sub = surface.on_click(move |_| counter.set(counter.get() + 1));

    let mut tap = |column: u16, row: u16| {
        surface.handle_pointer(PointerKind::Touch, PointerPhase::Press, column, row, &mut controller, &layout);
        surface.handle_pointer(PointerKind::Touch, PointerPhase::Release, column, row, &mut controller, &layout)
    };

    assert_eq!(tap(0, 9), Propagation::Stopped);
    assert_eq!(tap(30, 9), Propagation::Stopped);
    assert_eq!(tap(59, 9), Propagation::Stopped);
    assert_eq!(clicks.get(), 0);

    assert_eq!(tap(30, 2), Propagation::Bubbled);
    assert_eq!(clicks.get(), 1);
}

#[test]
fn unknown_duration_renders_zero_times() {
    let media = MediaRef::with_media(SimulatedMedia::with_unknown_duration());
    let document = Document::new();
    let controller = mounted(&media, &document);

    let view = controller.view();
    let seek = view.seek.as_ref().unwrap();
    assert_eq!(seek.elapsed, "0:00");
    assert_eq!(seek.total, "0:00");
    assert_eq!(seek.progress_percent, 0.0);

    let area = Rect::new(0, 0, 60, 1);
    let mut buf = Buffer::empty(area);
    ControlBar::new(&view, ControlBarLayout::compute(area, true), &Theme::default())
        .render(area, &mut buf);

    assert_eq!(row_text(&buf, 0).matches("0:00").count(), 2);
}

#[test]
fn hidden_seek_time_renders_buttons_only() {
    let media = MediaRef::with_media(SimulatedMedia::new(60.0));
    let mut controller =
        PlaybackController::new(media, Document::new(), ControlsConfig::default());
    controller.mount();

    let view = controller.view();
    assert!(view.seek.is_none());

    let area = Rect::new(0, 0, 40, 1);
    let layout = ControlBarLayout::compute(area, view.seek.is_some());
    assert!(layout.track_bounds().is_none());

    let mut buf = Buffer::empty(area);
    ControlBar::new(&view, layout, &Theme::default()).render(area, &mut buf);
    assert!(!row_text(&buf, 0).contains("0:00"));
}

#[test]
fn replaying_a_finished_clip_shows_the_start() {
    let media = MediaRef::with_media(SimulatedMedia::new(3.0));
    let document = Document::new();
    let mut controller = mounted(&media, &document);

    controller.toggle_play();
    media.update(|m| m.advance(std::time::Duration::from_secs(5)));
    assert!(!controller.ui_state().is_playing);
    assert_eq!(controller.ui_state().current_position, 3.0);

    controller.toggle_play();

    assert!(controller.ui_state().is_playing);
    assert_eq!(media.position(), Some(0.0));
    assert_eq!(controller.view().seek.unwrap().elapsed, "0:00");
}
