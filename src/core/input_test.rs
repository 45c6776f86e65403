use super::*;

fn view_at_origin() -> ViewState {
    let mut view = ViewState::default();
    view.position = [0.0, 0.0];
    view
}

const VIEWPORT: [f32; 2] = [1000.0, 1000.0];

#[test]
fn starts_released_with_no_anchor() {
    let tracker = PointerTracker::new();
    assert_eq!(tracker.button, ButtonState::Released);
    assert!(tracker.last_pos.is_none());
}

#[test]
fn button_transitions_follow_press_and_release() {
    let mut tracker = PointerTracker::new();
    tracker.on_primary_button(true);
    assert_eq!(tracker.button, ButtonState::Pressed);
    tracker.on_primary_button(false);
    assert_eq!(tracker.button, ButtonState::Released);
}

#[test]
fn moves_while_released_do_not_pan() {
    let mut tracker = PointerTracker::new();
    let mut view = view_at_origin();
    tracker.on_pointer_move([100.0, 100.0], VIEWPORT, &mut view);
    tracker.on_pointer_move([300.0, 250.0], VIEWPORT, &mut view);
    assert_eq!(view.position, [0.0, 0.0]);
}

#[test]
fn drag_pans_by_the_move_delta() {
    let mut tracker = PointerTracker::new();
    let mut view = view_at_origin();
    tracker.on_pointer_move([100.0, 100.0], VIEWPORT, &mut view);
    tracker.on_primary_button(true);
    tracker.on_pointer_move([200.0, 100.0], VIEWPORT, &mut view);
    // dx=100px → 100/1000*2 = 0.2 NDC
    assert_eq!(view.position[0], 0.2);
    assert_eq!(view.position[1], 0.0);
}

#[test]
fn release_stops_panning() {
    let mut tracker = PointerTracker::new();
    let mut view = view_at_origin();
    tracker.on_pointer_move([100.0, 100.0], VIEWPORT, &mut view);
    tracker.on_primary_button(true);
    tracker.on_pointer_move([150.0, 100.0], VIEWPORT, &mut view);
    tracker.on_primary_button(false);
    let after_release = view.position;
    tracker.on_pointer_move([500.0, 500.0], VIEWPORT, &mut view);
    assert_eq!(view.position, after_release);
}

#[test]
fn first_move_with_no_anchor_applies_no_pan() {
    let mut tracker = PointerTracker::new();
    let mut view = view_at_origin();
    // 按下后第一次 move 没有前一位置可比，只建立锚点
    tracker.on_primary_button(true);
    tracker.on_pointer_move([400.0, 400.0], VIEWPORT, &mut view);
    assert_eq!(view.position, [0.0, 0.0]);
}

#[test]
fn pointer_gone_clears_the_anchor() {
    let mut tracker = PointerTracker::new();
    let mut view = view_at_origin();
    tracker.on_primary_button(true);
    tracker.on_pointer_move([100.0, 100.0], VIEWPORT, &mut view);
    tracker.on_pointer_gone();
    tracker.on_pointer_move([900.0, 900.0], VIEWPORT, &mut view);
    // 离开再回来：这一跳不算拖拽
    assert_eq!(view.position, [0.0, 0.0]);
    tracker.on_pointer_move([910.0, 900.0], VIEWPORT, &mut view);
    assert!(view.position[0] > 0.0);
}

#[test]
fn scroll_zooms_in_both_button_states() {
    let mut tracker = PointerTracker::new();
    let mut view = ViewState::default();
    tracker.on_scroll([0.0, -2.0], &mut view);
    assert!((view.scale - 0.9).abs() < 1e-6);

    tracker.on_primary_button(true);
    tracker.on_scroll([0.0, 2.0], &mut view);
    assert!((view.scale - 1.0).abs() < 1e-6);
}

#[test]
fn horizontal_scroll_is_ignored() {
    let mut tracker = PointerTracker::new();
    let mut view = ViewState::default();
    tracker.on_scroll([5.0, 0.0], &mut view);
    assert_eq!(view.scale, 1.0);
}

#[test]
fn wheel_unit_conversions_use_line_ticks() {
    assert_eq!(points_to_ticks(50.0), 1.0);
    assert_eq!(points_to_ticks(-25.0), -0.5);
    assert_eq!(pages_to_ticks(1.0), 10.0);
}
