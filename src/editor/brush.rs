/// The tile texture painted by the mouse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Brush {
    index: u32,
    /// Number of cells in the tile sheet.
    cells: u32,
}

impl Brush {
    pub fn new(cells: u32) -> Self {
        Self { index: 0, cells: cells.max(1) }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Step the brush by one cell per wheel notch direction, wrapping around
    /// the sheet.  Only the sign of `scroll_y` matters.
    pub fn scroll(&mut self, scroll_y: f32) {
        let step: i64 = if scroll_y > 0.0 {
            1
        } else if scroll_y < 0.0 {
            -1
        } else {
            0
        };
        self.index = (self.index as i64 + step).rem_euclid(self.cells as i64) as u32;
    }

    /// Take the texture of an existing tile.
    pub fn pick(&mut self, tex: u32) {
        self.index = tex % self.cells;
    }
}
