//! Coordinate-keyed tile storage and its flat JSON form.
//!
//! A [`TileMap`] maps grid coordinates to [`Tile`]s.  Each tile shows one
//! cell of the map's tile sheet, identified by its texture index.  Tiles are
//! created lazily the first time a position is touched, so the map is sparse
//! and unbounded; `width`/`height` are recorded but never enforced.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LootError;

/// Edge length of a tile on screen, in pixels.
pub const TILE_SIZE: u32 = 32;
/// Tile sheets are sliced into this many rows and columns.
pub const SHEET_ROWS: u32 = 16;
pub const SHEET_COLS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    tex: u32,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, tex: 0 }
    }

    pub fn tex(&self) -> u32 {
        self.tex
    }

    /// Set the texture index, wrapped into `0..cells`.
    ///
    /// Negative values wrap from the end: with 256 cells, `-1` becomes 255.
    pub fn set_tex(&mut self, n: i64, cells: u32) {
        self.tex = n.rem_euclid(cells.max(1) as i64) as u32;
    }

    /// Window-pixel position of the tile's top-left corner.
    pub fn screen_pos(&self) -> (f32, f32) {
        let size = TILE_SIZE as f32;
        (self.x as f32 * size, self.y as f32 * size)
    }
}

/// Serialised tile as stored in a level file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileData {
    pub x: i32,
    pub y: i32,
    pub tex: i64,
}

/// Serialised map as stored in a level file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMapData {
    pub width: u32,
    pub height: u32,
    pub image: String,
    pub tiles: Vec<TileData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    pub width: u32,
    pub height: u32,
    /// Path of the tile sheet image.
    pub image: String,
    /// Number of cells in the tile sheet; texture indices wrap at this.
    cells: u32,
    tiles: BTreeMap<(i32, i32), Tile>,
}

impl TileMap {
    pub fn new(image: impl Into<String>, width: u32, height: u32, cells: u32) -> Self {
        Self {
            width,
            height,
            image: image.into(),
            cells: cells.max(1),
            tiles: BTreeMap::new(),
        }
    }

    pub fn cells(&self) -> u32 {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in `(x, y)` order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tiles.get(&(x, y))
    }

    /// Grid coordinate containing window pixel `(px, py)`.
    pub fn grid_pos(px: f32, py: f32) -> (i32, i32) {
        let size = TILE_SIZE as f32;
        ((px / size).floor() as i32, (py / size).floor() as i32)
    }

    /// The tile under window pixel `(px, py)`, created with texture 0 if absent.
    pub fn tile_at(&mut self, px: f32, py: f32) -> &mut Tile {
        let (x, y) = Self::grid_pos(px, py);
        self.tiles.entry((x, y)).or_insert_with(|| Tile::new(x, y))
    }

    /// Set the texture of the tile under `(px, py)`, creating it if needed.
    pub fn paint(&mut self, px: f32, py: f32, tex: u32) {
        let cells = self.cells;
        self.tile_at(px, py).set_tex(tex as i64, cells);
    }

    pub fn dump(&self) -> TileMapData {
        TileMapData {
            width: self.width,
            height: self.height,
            image: self.image.clone(),
            tiles: self
                .tiles
                .values()
                .map(|t| TileData { x: t.x, y: t.y, tex: t.tex as i64 })
                .collect(),
        }
    }

    /// Rebuild a map from its serialised form; textures are wrapped into range.
    pub fn load(data: TileMapData, cells: u32) -> Self {
        let mut map = Self::new(data.image, data.width, data.height, cells);
        for td in data.tiles {
            let mut tile = Tile::new(td.x, td.y);
            tile.set_tex(td.tex, map.cells);
            map.tiles.insert((tile.x, tile.y), tile);
        }
        map
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LootError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| LootError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.dump()).map_err(|e| LootError::json(path, e))?;
        writer.flush().map_err(|e| LootError::io(path, e))
    }

    pub fn load_file(path: impl AsRef<Path>, cells: u32) -> Result<Self, LootError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LootError::io(path, e))?;
        let data: TileMapData = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| LootError::json(path, e))?;
        Ok(Self::load(data, cells))
    }
}
