use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert_eq!(state.name(), "idle");
}

#[test]
fn idle_has_no_preview() {
    assert!(InputState::Idle.preview().is_none());
}

#[test]
fn stretching_exposes_preview() {
    let preview = Triangle::collapsed(pt(4.0, 4.0), "#2ECC40");
    let state = InputState::Stretching { start: pt(4.0, 4.0), preview: preview.clone() };
    assert!(!state.is_idle());
    assert_eq!(state.preview(), Some(&preview));
    assert_eq!(state.name(), "stretching");
}

#[test]
fn dragging_has_no_preview() {
    let state = InputState::Dragging { index: 2, offset: pt(1.0, -1.0) };
    assert!(!state.is_idle());
    assert!(state.preview().is_none());
    assert_eq!(state.name(), "dragging");
}

#[test]
fn clone_preserves_gesture_context() {
    let state = InputState::Dragging { index: 5, offset: pt(3.0, 4.0) };
    let copy = state.clone();
    assert!(matches!(copy, InputState::Dragging { index: 5, offset } if offset == pt(3.0, 4.0)));
}
