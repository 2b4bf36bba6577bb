use glam::Vec2;

use loot::config::EditorConfig;
use loot::editor::{Brush, EditorCommand, LevelEditor, SHEET_CELLS};
use loot::input::{InputEvent, KeyCode, MouseButton};
use loot::tilemap::TileMap;

fn editor() -> LevelEditor {
    LevelEditor::new(TileMap::new("art/tiles.png", 16, 16, SHEET_CELLS))
}

fn press(x: f32, y: f32, button: MouseButton) -> InputEvent {
    InputEvent::MousePress { x, y, button }
}

fn scroll(scroll_y: f32) -> InputEvent {
    InputEvent::MouseScroll { x: 0.0, y: 0.0, scroll_x: 0.0, scroll_y }
}

// ── painting ─────────────────────────────────────────────────────────────────

#[test]
fn left_click_alone_does_not_paint() {
    let mut ed = editor();
    ed.brush.pick(7);
    ed.handle_event(&press(40.0, 5.0, MouseButton::Left));
    assert!(ed.map.is_empty());
}

#[test]
fn left_drag_paints_every_tile_crossed() {
    let mut ed = editor();
    ed.brush.pick(9);
    for x in [5.0, 40.0, 80.0] {
        let cmd = ed.handle_event(&InputEvent::MouseDrag {
            x,
            y: 5.0,
            dx: 35.0,
            dy: 0.0,
            buttons: vec![MouseButton::Left],
        });
        assert_eq!(cmd, EditorCommand::None);
    }
    let painted: Vec<(i32, u32)> = ed.map.tiles().map(|t| (t.x, t.tex())).collect();
    assert_eq!(painted, vec![(0, 9), (1, 9), (2, 9)]);
}

#[test]
fn drag_with_any_button_paints() {
    for button in [MouseButton::Right, MouseButton::Middle] {
        let mut ed = editor();
        ed.handle_event(&scroll(1.0));
        ed.handle_event(&scroll(1.0));
        ed.handle_event(&InputEvent::MouseDrag {
            x: 5.0,
            y: 5.0,
            dx: 1.0,
            dy: 0.0,
            buttons: vec![button],
        });
        assert_eq!(ed.map.get(0, 0).map(|t| t.tex()), Some(2), "drag with {button:?}");
    }
}

// ── brush ────────────────────────────────────────────────────────────────────

#[test]
fn right_click_picks_texture_under_cursor() {
    let mut ed = editor();
    ed.map.paint(100.0, 100.0, 42);
    ed.handle_event(&press(100.0, 100.0, MouseButton::Right));
    assert_eq!(ed.brush.index(), 42);
}

#[test]
fn right_click_on_empty_cell_creates_blank_tile() {
    let mut ed = editor();
    ed.brush.pick(5);
    ed.handle_event(&press(0.0, 0.0, MouseButton::Right));
    assert_eq!(ed.brush.index(), 0);
    assert_eq!(ed.map.len(), 1);
}

#[test]
fn scrolling_wraps_around_the_sheet() {
    let mut ed = editor();
    ed.handle_event(&scroll(-1.0));
    assert_eq!(ed.brush.index(), SHEET_CELLS - 1);
    ed.handle_event(&scroll(3.0));
    assert_eq!(ed.brush.index(), 0, "one step per event regardless of magnitude");
}

#[test]
fn brush_ignores_zero_scroll() {
    let mut brush = Brush::new(4);
    brush.scroll(0.0);
    assert_eq!(brush.index(), 0);
    brush.pick(6);
    assert_eq!(brush.index(), 2);
}

// ── commands and layout ──────────────────────────────────────────────────────

#[test]
fn keys_map_to_commands() {
    let mut ed = editor();
    assert_eq!(ed.handle_event(&InputEvent::KeyPress { key: KeyCode::KeyS }), EditorCommand::Save);
    assert_eq!(ed.handle_event(&InputEvent::KeyPress { key: KeyCode::Escape }), EditorCommand::Quit);
    assert_eq!(ed.handle_event(&InputEvent::KeyPress { key: KeyCode::KeyA }), EditorCommand::None);
    assert_eq!(ed.handle_event(&InputEvent::KeyRelease { key: KeyCode::KeyS }), EditorCommand::None);
}

#[test]
fn resize_anchors_brush_preview_top_right() {
    let mut ed = editor();
    ed.brush_size = Vec2::new(32.0, 32.0);
    ed.handle_event(&InputEvent::Resize { width: 800, height: 600 });
    assert_eq!(ed.brush_pos, Vec2::new(768.0, 0.0));
}

// ── files ────────────────────────────────────────────────────────────────────

#[test]
fn open_missing_level_starts_empty_map_from_config() {
    let config = EditorConfig {
        tiles_image: "custom.png".into(),
        map_width: 20,
        map_height: 12,
        ..EditorConfig::default()
    };
    let path = std::env::temp_dir().join(format!("loot-{}-missing-level.json", std::process::id()));
    std::fs::remove_file(&path).ok();

    let ed = LevelEditor::open(&path, &config);
    assert!(ed.map.is_empty());
    assert_eq!(ed.map.image, "custom.png");
    assert_eq!((ed.map.width, ed.map.height), (20, 12));
}

#[test]
fn save_then_open_restores_level() {
    let path = std::env::temp_dir().join(format!("loot-{}-editor-level.json", std::process::id()));
    let mut ed = editor();
    ed.map.paint(33.0, 65.0, 0);
    ed.map.paint(0.0, 0.0, 17);
    ed.save(&path).unwrap();

    let reopened = LevelEditor::open(&path, &EditorConfig::default());
    std::fs::remove_file(&path).ok();
    assert_eq!(reopened.map, ed.map);
}

#[test]
fn open_malformed_level_starts_fresh_and_leaves_file_alone() {
    let config = EditorConfig {
        tiles_image: "fallback.png".into(),
        map_width: 24,
        map_height: 8,
        ..EditorConfig::default()
    };
    let path = std::env::temp_dir().join(format!("loot-{}-broken-level.json", std::process::id()));
    let garbage = b"{\"width\": 16, \"tiles\": [{\"x\": oops";
    std::fs::write(&path, garbage).unwrap();

    let ed = LevelEditor::open(&path, &config);
    let on_disk = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(ed.map.is_empty());
    assert_eq!(ed.map.image, "fallback.png");
    assert_eq!((ed.map.width, ed.map.height), (24, 8));
    assert_eq!(on_disk, garbage.to_vec());
}
