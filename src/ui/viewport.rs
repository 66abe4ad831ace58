/// Maps the virtual playfield onto the terminal's Braille pixel grid.
///
/// The playfield keeps its aspect ratio (16:9 with default config) and is
/// letterboxed in the center of the terminal; rebuilt on every resize.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    x_px: f32,
    y_px: f32,
    w_px: f32,
    h_px: f32,
    field_width: f32,
    field_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, field_width: f32, field_height: f32) -> Self {
        let pixel_w = (cols.max(1) as f32) * 2.0;
        let pixel_h = (rows.max(1) as f32) * 4.0;
        let aspect = field_width / field_height;

        let mut w = pixel_w;
        let mut h = pixel_h;
        if w / h > aspect {
            w = h * aspect;
        } else {
            h = w / aspect;
        }

        Self {
            x_px: (pixel_w - w) / 2.0,
            y_px: (pixel_h - h) / 2.0,
            w_px: w,
            h_px: h,
            field_width,
            field_height,
        }
    }

    pub fn field_size(&self) -> (f32, f32) {
        (self.field_width, self.field_height)
    }

    pub fn scale_x(&self) -> f32 {
        self.w_px / self.field_width
    }

    pub fn scale_y(&self) -> f32 {
        self.h_px / self.field_height
    }

    /// Field coordinates to absolute Braille pixel coordinates
    pub fn to_pixel(&self, field_x: f32, field_y: f32) -> (usize, usize) {
        let px = self.x_px + field_x * self.scale_x();
        let py = self.y_px + field_y * self.scale_y();
        (px.max(0.0) as usize, py.max(0.0) as usize)
    }

    /// Pixel row range covered by the playfield
    pub fn pixel_y_range(&self) -> (usize, usize) {
        (self.y_px as usize, (self.y_px + self.h_px) as usize)
    }

    /// Terminal cell row of the playfield's top edge
    pub fn top_row(&self) -> u16 {
        (self.y_px / 4.0) as u16
    }

    /// Map a pointer cell row to field-space y (the cell's vertical center),
    /// clamped into the field
    pub fn pointer_to_field_y(&self, row: u16) -> f32 {
        let py = row as f32 * 4.0 + 2.0;
        ((py - self.y_px) / self.scale_y()).clamp(0.0, self.field_height)
    }
}
