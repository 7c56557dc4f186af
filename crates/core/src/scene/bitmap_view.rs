//! Rasterize a bit-packed bitmap to the center of the screen.

use tui_canvas_types::Glyph;

use crate::bitmap::Bitmap;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::scene::Scene;

/// Static viewer for a monochrome bitmap: one block glyph per set bit,
/// centered in the viewport (clipped when the image is larger).
pub struct BitmapView {
    bitmap: Bitmap,
}

impl BitmapView {
    pub fn new(bitmap: Bitmap) -> Self {
        Self { bitmap }
    }
}

impl Scene for BitmapView {
    fn update(&mut self) {
        // Static scene.
    }

    fn draw(&self, fb: &mut FrameBuffer) {
        fb.clear();
        let off_x = (fb.width() as i32 - self.bitmap.width() as i32) / 2;
        let off_y = (fb.height() as i32 - self.bitmap.height() as i32) / 2;
        let cell = Cell::glyph(Glyph::Block, CellStyle::default());
        for y in 0..self.bitmap.height() {
            for x in 0..self.bitmap.width() {
                if self.bitmap.bit(x, y) {
                    fb.set(off_x + x as i32, off_y + y as i32, cell);
                }
            }
        }
        fb.put_str(0, 0, "Press 'q' to exit.", CellStyle::default());
    }
}
