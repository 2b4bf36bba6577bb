use glam::Vec2;

use loot::hero::{Facing, HERO_SPEED, Hero, HeroControls, Move};
use loot::input::{InputSource, InputState, KeyCode};

// ── Hero::move_by ────────────────────────────────────────────────────────────

#[test]
fn new_hero_faces_right_on_frame_six() {
    let hero = Hero::default();
    assert_eq!(hero.facing, Facing::Right);
    assert_eq!(hero.frame(), 6);
    assert!(!hero.running);
}

#[test]
fn moving_offsets_position() {
    let mut hero = Hero::new(Vec2::new(10.0, 20.0));
    hero.move_by(3.0, -4.0, 0.0);
    assert_eq!(hero.position, Vec2::new(13.0, 16.0));
    assert!(hero.running);
}

#[test]
fn each_direction_selects_its_row() {
    let cases = [
        (-1.0, 0.0, Facing::Left, 0),
        (0.0, 1.0, Facing::Down, 3),
        (1.0, 0.0, Facing::Right, 6),
        (0.0, -1.0, Facing::Up, 9),
    ];
    for (dx, dy, facing, first_frame) in cases {
        let mut hero = Hero::default();
        hero.move_by(dx, dy, 0.0);
        assert_eq!(hero.facing, facing);
        assert_eq!(hero.frame(), first_frame, "frame for {facing:?} at t=0");
    }
}

#[test]
fn vertical_movement_overrides_horizontal_facing() {
    let mut hero = Hero::default();
    hero.move_by(-1.0, -1.0, 0.0);
    assert_eq!(hero.facing, Facing::Up);
    hero.move_by(1.0, 1.0, 0.0);
    assert_eq!(hero.facing, Facing::Down);
}

#[test]
fn walk_cycle_advances_five_times_per_second() {
    let mut hero = Hero::default();
    // 5 frames per second → one step every 0.2 s, cycling over 3 frames.
    let frames: Vec<u32> = [0.0, 0.2, 0.4, 0.6]
        .iter()
        .map(|&t| {
            hero.move_by(1.0, 0.0, t + 0.01);
            hero.frame()
        })
        .collect();
    assert_eq!(frames, vec![6, 7, 8, 6]);
}

#[test]
fn standing_still_keeps_last_frame_and_facing() {
    let mut hero = Hero::default();
    hero.move_by(0.0, 1.0, 0.25);
    let frame = hero.frame();
    hero.move_by(0.0, 0.0, 10.0);
    assert!(!hero.running);
    assert_eq!(hero.frame(), frame);
    assert_eq!(hero.facing, Facing::Down);
}

// ── HeroControls ─────────────────────────────────────────────────────────────

fn held(keys: &[KeyCode]) -> InputState {
    let mut input = InputState::new();
    for &k in keys {
        input.key_down(k);
    }
    input
}

#[test]
fn no_keys_no_movement() {
    let controls = HeroControls::arrows();
    assert_eq!(controls.offset(&InputState::new(), 0.1), (0.0, 0.0));
}

#[test]
fn arrow_keys_move_at_hero_speed() {
    let controls = HeroControls::arrows();
    let dt = 0.5;
    let (dx, dy) = controls.offset(&held(&[KeyCode::ArrowRight, KeyCode::ArrowUp]), dt);
    assert!((dx - HERO_SPEED * dt).abs() < 1e-6);
    assert!((dy + HERO_SPEED * dt).abs() < 1e-6, "up moves toward the top of the window");
}

#[test]
fn opposite_keys_cancel() {
    let controls = HeroControls::arrows();
    let (dx, dy) = controls.offset(&held(&[KeyCode::ArrowLeft, KeyCode::ArrowRight]), 1.0);
    assert_eq!((dx, dy), (0.0, 0.0));
}

#[test]
fn extra_bindings_work_alongside_arrows() {
    let mut controls = HeroControls::arrows();
    controls.bind(Move::Down, InputSource::Key(KeyCode::KeyS));
    let (_, dy) = controls.offset(&held(&[KeyCode::KeyS]), 1.0);
    assert_eq!(dy, HERO_SPEED);
}
