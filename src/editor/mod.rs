//! The level editor scene: paint tiles by dragging the mouse, walk the hero
//! with the arrow keys, save the map with `S`.

pub mod brush;

use std::path::Path;

use glam::Vec2;

use crate::config::EditorConfig;
use crate::engine::Engine;
use crate::hero::{HERO_COLS, HERO_ROWS, HERO_SCALE, Hero, HeroControls};
use crate::image_grid::SpriteSheet;
use crate::input::{InputEvent, KeyCode, MouseButton};
use crate::scene::{ActorStatus, Actors, Scene, SceneAction, run_actors};
use crate::tilemap::{SHEET_COLS, SHEET_ROWS, TILE_SIZE, TileMap};

pub use brush::Brush;

/// Number of cells in a tile sheet.
pub const SHEET_CELLS: u32 = SHEET_ROWS * SHEET_COLS;

/// What the editor asks its host to do after an input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    None,
    Save,
    Quit,
}

/// Editing state with no GPU resources attached.
#[derive(Clone, Debug)]
pub struct LevelEditor {
    pub map: TileMap,
    pub brush: Brush,
    pub hero: Hero,
    /// Top-left corner of the brush preview, in window pixels.
    pub brush_pos: Vec2,
    /// On-screen size of the brush preview.
    pub brush_size: Vec2,
}

impl LevelEditor {
    pub fn new(map: TileMap) -> Self {
        let brush = Brush::new(map.cells());
        Self {
            map,
            brush,
            hero: Hero::default(),
            brush_pos: Vec2::ZERO,
            brush_size: Vec2::splat(TILE_SIZE as f32),
        }
    }

    /// Load the level at `path`, or start a fresh map from `config`.
    ///
    /// A missing file is the normal first-run case.  An unreadable or
    /// malformed file is reported and left untouched until the next save.
    pub fn open(path: &Path, config: &EditorConfig) -> Self {
        let map = match TileMap::load_file(path, SHEET_CELLS) {
            Ok(map) => {
                log::info!("loaded {} tiles from {}", map.len(), path.display());
                map
            }
            Err(e) => {
                if e.is_not_found() {
                    log::info!("no level at {}, starting a new one", path.display());
                } else {
                    log::error!("{e}; starting a new level");
                }
                TileMap::new(config.tiles_image.clone(), config.map_width, config.map_height, SHEET_CELLS)
            }
        };
        Self::new(map)
    }

    pub fn save(&self, path: &Path) -> Result<(), crate::error::LootError> {
        self.map.save(path)?;
        log::info!("Saved {} ({} tiles)", path.display(), self.map.len());
        Ok(())
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> EditorCommand {
        match event {
            InputEvent::MousePress { x, y, button: MouseButton::Right } => {
                let tex = self.map.tile_at(*x, *y).tex();
                self.brush.pick(tex);
            }
            // Any held button paints.
            InputEvent::MouseDrag { x, y, .. } => {
                self.map.paint(*x, *y, self.brush.index());
            }
            InputEvent::MouseScroll { scroll_y, .. } => self.brush.scroll(*scroll_y),
            InputEvent::KeyPress { key: KeyCode::KeyS } => return EditorCommand::Save,
            InputEvent::KeyPress { key: KeyCode::Escape } => return EditorCommand::Quit,
            InputEvent::Resize { width, .. } => {
                // Top-right corner.
                self.brush_pos = Vec2::new(*width as f32 - self.brush_size.x, 0.0);
            }
            _ => {}
        }
        EditorCommand::None
    }
}

/// The editor as a [`Scene`]: owns the sprite sheets and the hero actor.
pub struct LevelEditorScene {
    config: EditorConfig,
    editor: Option<LevelEditor>,
    controls: HeroControls,
    tiles: Option<SpriteSheet>,
    hero_sheet: Option<SpriteSheet>,
    actors: Actors<Self, Engine>,
}

impl LevelEditorScene {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            editor: None,
            controls: HeroControls::arrows(),
            tiles: None,
            hero_sheet: None,
            actors: Actors::new(),
        }
    }

    fn actors_slot(scene: &mut Self) -> &mut Actors<Self, Engine> {
        &mut scene.actors
    }

    /// Hero actor: steer with the held arrow keys.
    fn move_hero(&mut self, engine: &mut Engine, dt: f32) -> ActorStatus {
        let Some(editor) = self.editor.as_mut() else { return ActorStatus::Done };
        let (dx, dy) = self.controls.offset(&engine.input, dt);
        editor.hero.move_by(dx, dy, engine.elapsed());
        ActorStatus::Continue
    }
}

impl Scene for LevelEditorScene {
    fn on_init(&mut self, engine: &mut Engine) {
        let mut editor = LevelEditor::open(&self.config.level_path, &self.config);

        let tiles = match engine.load_sprite_sheet(&editor.map.image, SHEET_ROWS, SHEET_COLS) {
            Ok(sheet) => sheet,
            Err(e) => {
                log::error!("cannot load tile sheet: {e}");
                engine.request_quit();
                return;
            }
        };
        let hero_sheet = match engine.load_sprite_sheet(&self.config.hero_image, HERO_ROWS, HERO_COLS) {
            Ok(sheet) => sheet,
            Err(e) => {
                log::error!("cannot load hero sheet: {e}");
                engine.request_quit();
                return;
            }
        };

        editor.brush = Brush::new(tiles.len());
        editor.brush_size = Vec2::new(tiles.grid.cell_w as f32, tiles.grid.cell_h as f32);

        self.editor = Some(editor);
        self.tiles = Some(tiles);
        self.hero_sheet = Some(hero_sheet);
        self.actors.add(Self::move_hero);
    }

    fn on_event(&mut self, _engine: &mut Engine, event: &InputEvent) -> SceneAction {
        let Some(editor) = self.editor.as_mut() else { return SceneAction::None };
        match editor.handle_event(event) {
            EditorCommand::None => {}
            EditorCommand::Save => {
                if let Err(e) = editor.save(&self.config.level_path) {
                    log::error!("save failed: {e}");
                }
            }
            EditorCommand::Quit => return SceneAction::Quit,
        }
        SceneAction::None
    }

    fn tick(&mut self, engine: &mut Engine, dt: f32) {
        run_actors(self, engine, dt, Self::actors_slot);
    }

    fn has_actors(&self) -> bool {
        !self.actors.is_empty()
    }

    fn draw(&mut self, engine: &mut Engine) {
        let (Some(editor), Some(tiles), Some(hero_sheet)) =
            (self.editor.as_ref(), self.tiles.as_ref(), self.hero_sheet.as_ref())
        else {
            return;
        };

        for tile in editor.map.tiles() {
            let (x, y) = tile.screen_pos();
            engine.draw_sprite(tiles, tile.tex(), x, y, 1.0);
        }

        engine.draw_sprite(tiles, editor.brush.index(), editor.brush_pos.x, editor.brush_pos.y, 1.0);

        let hero = &editor.hero;
        engine.draw_sprite(hero_sheet, hero.frame(), hero.position.x, hero.position.y, HERO_SCALE);
    }
}
