//! Palette-cycling color band.
//!
//! Nothing in this scene ever moves: every frame paints the same checker
//! glyph through the same pairing per column, and one palette tick per
//! frame slides the blue ramp underneath. The scroll is entirely a color
//! table effect.

use tui_canvas_types::{Glyph, Point, CHANNEL_MAX, CHANNEL_START, PALETTE_CAPACITY};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::palette::Palette;
use crate::raster::{draw_rect, RectGlyphs};
use crate::scene::Scene;

/// Rows of the color band.
const BAND_HEIGHT: i32 = 50;

/// A band of checkered columns, one palette pairing per column, framed by
/// a box outline.
pub struct Colorscroll {
    palette: Palette,
}

impl Colorscroll {
    pub fn new() -> Self {
        Self {
            palette: Palette::ramp(PALETTE_CAPACITY, CHANNEL_START, CHANNEL_MAX),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for Colorscroll {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for Colorscroll {
    fn update(&mut self) {
        self.palette.tick();
    }

    fn draw(&self, fb: &mut FrameBuffer) {
        fb.clear();
        for x in 0..self.palette.len() as i32 {
            let cell = Cell::glyph(Glyph::Checker, self.palette.style(x as usize));
            for y in 0..BAND_HEIGHT {
                fb.set(x, y, cell);
            }
        }
        draw_rect(
            fb,
            Point::new(0, 0),
            self.palette.len() as i32,
            BAND_HEIGHT,
            &RectGlyphs::LINES,
            CellStyle::default(),
        );
        fb.put_str(4, 0, " Press ESC to exit. ", CellStyle::default());
    }
}
