use loot::input::{ActionMap, InputEvent, InputSource, InputState, KeyCode, MouseButton};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Action {
    Save,
    Paint,
}

// ── InputState ───────────────────────────────────────────────────────────────

#[test]
fn key_press_is_reported_once_while_held() {
    let mut input = InputState::new();
    input.key_down(KeyCode::KeyS);
    input.key_down(KeyCode::KeyS); // key repeat
    assert_eq!(input.drain_events(), vec![InputEvent::KeyPress { key: KeyCode::KeyS }]);
    assert!(input.is_key_held(KeyCode::KeyS));
    assert!(input.is_key_pressed(KeyCode::KeyS));
}

#[test]
fn clear_frame_state_keeps_held_keys_and_pending_events() {
    let mut input = InputState::new();
    input.key_down(KeyCode::ArrowUp);
    input.clear_frame_state();
    assert!(input.is_key_held(KeyCode::ArrowUp));
    assert!(!input.is_key_pressed(KeyCode::ArrowUp));
    assert_eq!(input.events.len(), 1);
}

#[test]
fn mouse_events_carry_cursor_position() {
    let mut input = InputState::new();
    input.mouse_moved(12.0, 34.0);
    input.mouse_down(MouseButton::Left);
    input.mouse_up(MouseButton::Left);
    assert_eq!(
        input.drain_events(),
        vec![
            InputEvent::MousePress { x: 12.0, y: 34.0, button: MouseButton::Left },
            InputEvent::MouseRelease { x: 12.0, y: 34.0, button: MouseButton::Left },
        ]
    );
}

#[test]
fn motion_without_buttons_is_not_a_drag() {
    let mut input = InputState::new();
    input.mouse_moved(5.0, 5.0);
    input.mouse_moved(6.0, 7.0);
    assert!(input.drain_events().is_empty());
    assert_eq!(input.mouse_pos, [6.0, 7.0]);
}

#[test]
fn drag_reports_delta_and_held_buttons() {
    let mut input = InputState::new();
    input.mouse_moved(10.0, 10.0);
    input.mouse_down(MouseButton::Right);
    input.drain_events();

    input.mouse_moved(13.0, 6.0);
    assert_eq!(
        input.drain_events(),
        vec![InputEvent::MouseDrag {
            x: 13.0,
            y: 6.0,
            dx: 3.0,
            dy: -4.0,
            buttons: vec![MouseButton::Right],
        }]
    );
}

#[test]
fn scroll_and_resize_are_queued_in_order() {
    let mut input = InputState::new();
    input.mouse_moved(1.0, 2.0);
    input.scrolled(0.0, -1.0);
    input.resized(640, 480);
    assert_eq!(
        input.drain_events(),
        vec![
            InputEvent::MouseScroll { x: 1.0, y: 2.0, scroll_x: 0.0, scroll_y: -1.0 },
            InputEvent::Resize { width: 640, height: 480 },
        ]
    );
    assert_eq!(input.mouse_wheel, -1.0);
}

// ── ActionMap ────────────────────────────────────────────────────────────────

#[test]
fn action_map_matches_any_bound_source() {
    let mut actions = ActionMap::new();
    actions.bind(Action::Paint, InputSource::Mouse(MouseButton::Left));
    actions.bind(Action::Paint, InputSource::Key(KeyCode::Space));
    actions.bind(Action::Save, InputSource::Key(KeyCode::KeyS));

    let mut input = InputState::new();
    input.key_down(KeyCode::Space);
    assert!(actions.is_pressed(Action::Paint, &input));
    assert!(actions.is_held(Action::Paint, &input));
    assert!(!actions.is_held(Action::Save, &input));

    input.clear_frame_state();
    input.key_up(KeyCode::Space);
    assert!(actions.is_released(Action::Paint, &input));
    assert!(!actions.is_held(Action::Paint, &input));
}

#[test]
fn unbound_action_is_never_active() {
    let actions: ActionMap<Action> = ActionMap::default();
    let mut input = InputState::new();
    input.key_down(KeyCode::KeyS);
    assert!(!actions.is_pressed(Action::Save, &input));
}
