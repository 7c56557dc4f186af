//! Integer-only drawing primitives over a framebuffer.
//!
//! The line walker is a plotter-style algorithm, not textbook Bresenham:
//! the dominant axis advances every step, and the minor axis advances
//! whenever a repeated subtraction of the minor delta from an error term
//! crosses zero. The tie-breaking this produces differs from canonical
//! Bresenham at exact 45 degrees and must be kept as-is.

use tui_canvas_types::{Glyph, Point};

use crate::fb::{Cell, CellStyle, FrameBuffer};

/// Draw a straight discrete approximation of the segment `p0..=p1`.
///
/// Both endpoints are painted; the path is 8-connected and visits exactly
/// `max(|dx|, |dy|) + 1` cells. The error term starts at the dominant
/// delta, is re-armed by adding the dominant delta whenever it drops to
/// zero or below (advancing the minor axis first), and loses the minor
/// delta after every painted cell.
pub fn draw_line(fb: &mut FrameBuffer, p0: Point, p1: Point, cell: Cell) {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    let sx = (p1.x - p0.x).signum();
    let sy = (p1.y - p0.y).signum();

    let mut x = p0.x;
    let mut y = p0.y;

    if dx >= dy {
        let mut dec = dx;
        for _ in 0..=dx {
            if dec <= 0 {
                dec += dx;
                y += sy;
            }
            fb.set(x, y, cell);
            dec -= dy;
            x += sx;
        }
    } else {
        let mut dec = dy;
        for _ in 0..=dy {
            if dec <= 0 {
                dec += dy;
                x += sx;
            }
            fb.set(x, y, cell);
            dec -= dx;
            y += sy;
        }
    }
}

/// Glyph selection for [`draw_rect`]: edges plus the four corners
/// (upper-left, upper-right, lower-left, lower-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectGlyphs {
    pub h: Glyph,
    pub v: Glyph,
    pub corners: [Glyph; 4],
}

impl RectGlyphs {
    /// The box-drawing set used by the demo frames.
    pub const LINES: RectGlyphs = RectGlyphs {
        h: Glyph::HLine,
        v: Glyph::VLine,
        corners: [
            Glyph::UpperLeft,
            Glyph::UpperRight,
            Glyph::LowerLeft,
            Glyph::LowerRight,
        ],
    };
}

/// Draw an axis-aligned rectangle outline.
///
/// A no-op when `width` or `height` is not positive. Each corner glyph is
/// written exactly once; the edge loops stop short of the corner cells.
pub fn draw_rect(
    fb: &mut FrameBuffer,
    origin: Point,
    width: i32,
    height: i32,
    glyphs: &RectGlyphs,
    style: CellStyle,
) {
    if width <= 0 || height <= 0 {
        return;
    }

    let right = origin.x + width - 1;
    let bottom = origin.y + height - 1;

    let h = Cell::glyph(glyphs.h, style);
    let v = Cell::glyph(glyphs.v, style);

    for x in origin.x + 1..right {
        fb.set(x, origin.y, h);
        fb.set(x, bottom, h);
    }
    for y in origin.y + 1..bottom {
        fb.set(origin.x, y, v);
        fb.set(right, y, v);
    }

    fb.set(origin.x, origin.y, Cell::glyph(glyphs.corners[0], style));
    fb.set(right, origin.y, Cell::glyph(glyphs.corners[1], style));
    fb.set(origin.x, bottom, Cell::glyph(glyphs.corners[2], style));
    fb.set(right, bottom, Cell::glyph(glyphs.corners[3], style));
}

/// Recursively draw a Sierpinski triangle with apex `a` and base corners
/// `b` (left) and `c` (right).
///
/// Children are drawn strictly before the perimeter of the current
/// triangle, so each perimeter lands on top of the finer structure beneath
/// it exactly once per recursion level. `depth` 0 draws nothing.
pub fn draw_triangle_fractal(
    fb: &mut FrameBuffer,
    a: Point,
    b: Point,
    c: Point,
    depth: u32,
    cell: Cell,
) {
    if depth == 0 {
        return;
    }

    // Midpoints use truncating division, taken from the far vertex toward
    // the apex on x and from the apex toward the base on y; flipping either
    // direction shifts odd-sized triangles by a cell.
    let ab = Point::new(b.x + (a.x - b.x) / 2, a.y + (b.y - a.y) / 2);
    let ac = Point::new(a.x + (c.x - a.x) / 2, a.y + (c.y - a.y) / 2);
    let base = Point::new(a.x, b.y);

    draw_triangle_fractal(fb, ab, b, base, depth - 1, cell);
    draw_triangle_fractal(fb, ac, base, c, depth - 1, cell);
    draw_triangle_fractal(fb, a, ab, ac, depth - 1, cell);

    draw_line(fb, a, b, cell);
    draw_line(fb, b, c, cell);
    draw_line(fb, c, a, cell);
}
