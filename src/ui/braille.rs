//! Braille pixel canvas for sub-cell terminal rendering.
//! Each terminal cell holds a 2x4 grid of Braille dots, giving 2x the
//! horizontal and 4x the vertical resolution of plain cells.

// Bit index for each dot, indexed as [dot_y][dot_x].
// Braille dot layout:   1 4
//                       2 5
//                       3 6
//                       7 8
const DOT_BITS: [[u8; 2]; 4] = [[0, 3], [1, 4], [2, 5], [6, 7]];

pub struct BrailleCanvas {
    width: usize,  // width in terminal cells
    height: usize, // height in terminal cells
    cells: Vec<u8>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Set a dot at pixel coordinates; out-of-canvas pixels are dropped
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;
        if cell_x >= self.width || cell_y >= self.height {
            return;
        }
        let bit = DOT_BITS[pixel_y % 4][pixel_x % 2];
        self.cells[cell_y * self.width + cell_x] |= 1 << bit;
    }

    /// Fill a pixel rectangle
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..y + height {
            for px in x..x + width {
                self.set_pixel(px, py);
            }
        }
    }

    /// Vertical dashed line at pixel column `x` from `y0` to `y1` exclusive,
    /// alternating `dash` lit pixels with `gap` dark ones
    pub fn draw_dashed_vline(&mut self, x: usize, y0: usize, y1: usize, dash: usize, gap: usize) {
        let period = dash + gap;
        if period == 0 {
            return;
        }
        for y in y0..y1 {
            if (y - y0) % period < dash {
                self.set_pixel(x, y);
            }
        }
    }

    /// True when the cell has no dots set
    pub fn is_empty(&self, cell_x: usize, cell_y: usize) -> bool {
        if cell_x >= self.width || cell_y >= self.height {
            return true;
        }
        self.cells[cell_y * self.width + cell_x] == 0
    }

    /// Braille character for a cell: U+2800 plus the dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }
        let pattern = self.cells[cell_y * self.width + cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }
}
