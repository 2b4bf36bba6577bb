use crate::error::LootError;
use crate::renderer::TextureId;

/// One cell of an [`ImageGrid`]: pixel rectangle plus normalised UVs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    /// Top-left pixel coordinate inside the source image.
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

/// Slices an image into `rows × cols` equally sized cells.
///
/// Cells are indexed row-major starting at the top-left corner, so index
/// `r * cols + c` is row `r`, column `c`.  Any pixels left over by the
/// integer division on the right or bottom edge are never sampled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageGrid {
    pub image_w: u32,
    pub image_h: u32,
    pub rows: u32,
    pub cols: u32,
    pub cell_w: u32,
    pub cell_h: u32,
}

impl ImageGrid {
    pub fn new(image_w: u32, image_h: u32, rows: u32, cols: u32) -> Result<Self, LootError> {
        if rows == 0 || cols == 0 || rows > image_h || cols > image_w {
            return Err(LootError::InvalidGrid { image_w, image_h, rows, cols });
        }
        Ok(Self {
            image_w,
            image_h,
            rows,
            cols,
            cell_w: image_w / cols,
            cell_h: image_h / rows,
        })
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> u32 {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cell at `index`, or `None` past the end of the grid.
    pub fn cell(&self, index: u32) -> Option<Cell> {
        if index >= self.len() {
            return None;
        }
        let col = index % self.cols;
        let row = index / self.cols;
        let x = col * self.cell_w;
        let y = row * self.cell_h;

        let total_w = self.image_w as f32;
        let total_h = self.image_h as f32;
        let uv_min = [x as f32 / total_w, y as f32 / total_h];
        let uv_max = [
            (x + self.cell_w) as f32 / total_w,
            (y + self.cell_h) as f32 / total_h,
        ];

        Some(Cell { x, y, width: self.cell_w, height: self.cell_h, uv_min, uv_max })
    }
}

/// A texture on the GPU together with the grid it is sliced into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    pub texture: TextureId,
    pub grid: ImageGrid,
}

impl SpriteSheet {
    pub fn len(&self) -> u32 {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}
