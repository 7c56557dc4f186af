//! Sierpinski triangle demo.
//!
//! Two fractals drawn side by side, the right one with deeper recursion.
//! The scene is static; redrawing it every frame costs nothing after the
//! presenter diffs the identical framebuffers.

use tui_canvas_types::{Glyph, Point};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::raster::draw_triangle_fractal;
use crate::scene::Scene;

const MSG1: &str = "Sierpinski triangle";
const MSG2: &str = "Hit 'q' to exit";

#[derive(Debug, Clone, Copy)]
struct Triangle {
    apex: Point,
    left: Point,
    right: Point,
    depth: u32,
}

/// A pair of Sierpinski triangles sized to the viewport.
pub struct Sierpinski {
    triangles: [Triangle; 2],
    width: i32,
}

impl Sierpinski {
    /// Lay the two triangles out across the viewport: each takes just
    /// under half the width, base on the bottom row, apex centered.
    pub fn new(width: u16, height: u16) -> Self {
        let width = i32::from(width.max(8));
        let height = i32::from(height.max(8));
        let half = width / 2;
        let base_y = height - 1;

        let left = Triangle {
            apex: Point::new(half / 2, 0),
            left: Point::new(1, base_y),
            right: Point::new(half - 2, base_y),
            depth: 4,
        };
        let right = Triangle {
            apex: Point::new(half + half / 2, 0),
            left: Point::new(half + 1, base_y),
            right: Point::new(width - 2, base_y),
            depth: 7,
        };

        Self {
            triangles: [left, right],
            width,
        }
    }
}

impl Scene for Sierpinski {
    fn update(&mut self) {
        // Static scene.
    }

    fn draw(&self, fb: &mut FrameBuffer) {
        fb.clear();
        let cell = Cell::glyph(Glyph::Diamond, CellStyle::default());
        for t in &self.triangles {
            draw_triangle_fractal(fb, t.apex, t.left, t.right, t.depth, cell);
        }
        let style = CellStyle::default();
        fb.put_str(self.width / 2 - MSG1.len() as i32 / 2, 1, MSG1, style);
        fb.put_str(self.width / 2 - MSG2.len() as i32 / 2, 4, MSG2, style);
    }
}
