//! Integration test: a host driving one editor session
//!
//! Simulates the upward interface end to end: pointer events resolve
//! through the view transform and hit-testing into pattern mutations,
//! mutations mark the scheduler dirty, and frames render from the latest
//! state.

use ganxet_canvas::{
    export_as_image, ring_segment_at, ChartRenderer, DragAction, DragDebouncer,
    EditorInputBindings, FrameScheduler,
};
use ganxet_core::{DrawCommand, Modifiers, Point, PointerEvent, ScrollDelta};
use ganxet_pattern::{PatternState, StitchId, StitchRegistry};
use std::time::{Duration, Instant};

const W: f32 = 800.0;
const H: f32 = 600.0;

fn click(
    renderer: &ChartRenderer,
    state: &mut PatternState,
    event: PointerEvent,
    stitch: &str,
) -> bool {
    let local = renderer
        .view()
        .screen_to_local(Point::new(event.x, event.y), renderer.surface().logical());
    match ring_segment_at(state, local) {
        Some(hit) => {
            state.set_stitch_at(hit.ring, hit.segment, StitchId::new(stitch));
            true
        }
        None => false,
    }
}

#[test]
fn click_paints_the_segment_under_the_pointer() {
    let renderer = ChartRenderer::new(W, H, 1.0);
    let mut state = PatternState::new();

    // Slightly right of center: ring 0, and with 8 segments the first one.
    let event = PointerEvent::at(W / 2.0 + 30.0, H / 2.0 + 5.0);
    assert!(click(&renderer, &mut state, event, "punt_alt"));

    let painted = state.rings()[0]
        .points
        .iter()
        .filter(|p| p.as_ref().map(StitchId::as_str) == Some("punt_alt"))
        .count();
    assert_eq!(painted, 1);
}

#[test]
fn click_outside_the_pattern_changes_nothing() {
    let renderer = ChartRenderer::new(W, H, 1.0);
    let mut state = PatternState::new();
    let before = state.history_len();

    let event = PointerEvent::at(5.0, 5.0);
    assert!(!click(&renderer, &mut state, event, "punt_alt"));
    assert_eq!(state.history_len(), before);
}

#[test]
fn mutate_render_undo_cycle() {
    let mut renderer = ChartRenderer::new(W, H, 1.0);
    let mut scheduler = FrameScheduler::new();
    let mut state = PatternState::new();

    let event = PointerEvent::at(W / 2.0 + 30.0, H / 2.0 + 5.0);
    click(&renderer, &mut state, event, "punt_alt");
    scheduler.mark_dirty();
    scheduler.mark_dirty(); // a second trigger coalesces

    assert!(scheduler.take_frame());
    let frame = renderer.render(&state, None);
    assert!(frame
        .commands
        .iter()
        .any(|c| matches!(c, DrawCommand::DrawText { text, .. } if text == "▲")));

    assert!(state.undo());
    scheduler.mark_dirty();
    assert!(scheduler.take_frame());
    let frame = renderer.render(&state, None);
    assert!(!frame
        .commands
        .iter()
        .any(|c| matches!(c, DrawCommand::DrawText { text, .. } if text == "▲")));
}

#[test]
fn wheel_zoom_and_shift_drag_pan() {
    let mut renderer = ChartRenderer::new(W, H, 1.0);
    let state = PatternState::new();
    let bindings = EditorInputBindings::default();

    // Wheel up zooms in.
    let scroll = ScrollDelta { dx: 0.0, dy: -3.0 };
    let step = if scroll.dy < 0.0 { 0.1 } else { -0.1 };
    renderer.view_mut().adjust_zoom(step);
    assert!(renderer.view().target_scale > 1.0);

    // Shift-drag pans instead of painting.
    let held = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
    assert_eq!(bindings.resolve(held), DragAction::Pan);
    renderer.view_mut().pan_by(25.0, 0.0);

    for _ in 0..100 {
        renderer.render(&state, None);
    }
    assert!(renderer.view().is_settled());
    assert!((renderer.view().offset.x - 25.0).abs() < 0.5);
    // Pan and zoom never rebuilt the static layer.
    assert_eq!(renderer.static_rebuilds(), 1);
}

#[test]
fn debounced_drag_paints_at_most_once_per_interval() {
    let renderer = ChartRenderer::new(W, H, 1.0);
    let mut state = PatternState::new();
    let mut debouncer = DragDebouncer::new(Duration::from_millis(16));
    let t0 = Instant::now();

    let mut handled = 0;
    for i in 0..10 {
        let now = t0 + Duration::from_millis(i * 4);
        if debouncer.accept_at(now) {
            let event = PointerEvent::at(W / 2.0 + 30.0, H / 2.0 + 5.0);
            click(&renderer, &mut state, event, "punt_baix");
            handled += 1;
        }
    }
    // 10 moves over 36ms at a 16ms interval: 3 handled (0, 16, 32).
    assert_eq!(handled, 3);
}

#[test]
fn export_matches_live_pattern_but_not_live_view() {
    let mut renderer = ChartRenderer::new(W, H, 1.0);
    let mut state = PatternState::new();
    state.set_stitch_at(0, 4, StitchId::new("punt_mig"));

    // Distort the live view heavily.
    renderer.view_mut().adjust_zoom(1.5);
    renderer.view_mut().pan_by(200.0, 100.0);
    for _ in 0..50 {
        renderer.render(&state, None);
    }

    let registry = StitchRegistry::default();
    let image = export_as_image(&state, &registry, "patro").unwrap();
    // The exported glyphs are at base size: no inverse-scale shrink.
    let glyph_sizes: Vec<f32> = image
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::DrawText { style, .. } => Some(style.size),
            _ => None,
        })
        .collect();
    assert!(glyph_sizes.iter().any(|s| (*s - 20.0).abs() < 1e-6));
}
