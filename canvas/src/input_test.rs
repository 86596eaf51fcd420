#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Some(Button::Primary));
    assert_eq!(Button::from_dom(1), Some(Button::Middle));
    assert_eq!(Button::from_dom(2), Some(Button::Secondary));
    assert_eq!(Button::from_dom(3), None);
    assert_eq!(Button::from_dom(-1), None);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert_eq!(state, InputState::Idle);
    assert!(!state.is_dragging());
}

#[test]
fn begin_drag_captures_anchor_and_pan() {
    let mut state = InputState::Idle;
    let cam = Camera { pan_x: 4.0, pan_y: -2.0, zoom: 1.5 };
    state.begin_drag(pt(10.0, 20.0), &cam);
    assert_eq!(state, InputState::Panning(DragState { anchor_screen: pt(10.0, 20.0), anchor_pan: pt(4.0, -2.0) }));
}

#[test]
fn drag_scenario_from_origin() {
    let mut state = InputState::Idle;
    let mut cam = Camera::default();
    state.begin_drag(pt(100.0, 100.0), &cam);
    assert!(state.update_drag(pt(130.0, 145.0), &mut cam));
    assert_eq!(cam.pan(), pt(30.0, 45.0));
}

#[test]
fn drag_is_relative_to_anchor_not_previous_move() {
    let mut state = InputState::Idle;
    let mut cam = Camera { pan_x: 10.0, pan_y: 10.0, zoom: 1.0 };
    state.begin_drag(pt(0.0, 0.0), &cam);
    state.update_drag(pt(5.0, 5.0), &mut cam);
    state.update_drag(pt(8.0, -2.0), &mut cam);
    assert_eq!(cam.pan(), pt(18.0, 8.0));
}

#[test]
fn drag_ignores_zoom() {
    let mut state = InputState::Idle;
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.5 };
    state.begin_drag(pt(50.0, 50.0), &cam);
    state.update_drag(pt(60.0, 40.0), &mut cam);
    assert_eq!(cam.pan(), pt(10.0, -10.0));
    assert_eq!(cam.zoom, 2.5);
}

#[test]
fn update_without_drag_is_noop() {
    let state = InputState::Idle;
    let mut cam = Camera { pan_x: 3.0, pan_y: 3.0, zoom: 1.0 };
    assert!(!state.update_drag(pt(100.0, 100.0), &mut cam));
    assert_eq!(cam.pan(), pt(3.0, 3.0));
}

#[test]
fn end_drag_is_idempotent() {
    let mut state = InputState::Idle;
    state.begin_drag(pt(0.0, 0.0), &Camera::default());
    assert!(state.end_drag());
    assert!(!state.end_drag());
    assert_eq!(state, InputState::Idle);
}

#[test]
fn end_drag_freezes_pan() {
    let mut state = InputState::Idle;
    let mut cam = Camera::default();
    state.begin_drag(pt(0.0, 0.0), &cam);
    state.update_drag(pt(7.0, 9.0), &mut cam);
    state.end_drag();
    state.update_drag(pt(500.0, 500.0), &mut cam);
    assert_eq!(cam.pan(), pt(7.0, 9.0));
}
