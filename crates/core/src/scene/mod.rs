//! Scene models for the demos.
//!
//! A scene owns everything it animates (star layers, palette state,
//! fractal parameters) and exposes the two halves of a frame: a state
//! step and a draw step. Scenes never touch the terminal; they only write
//! cells into a framebuffer, which keeps every demo unit-testable.

pub mod bitmap_view;
pub mod fractal;
pub mod scroll;
pub mod starfield;

pub use bitmap_view::BitmapView;
pub use fractal::Sierpinski;
pub use scroll::Colorscroll;
pub use starfield::Starfield;

use crate::fb::FrameBuffer;

/// One animated demo, driven by the render loop once per frame:
/// `update` then `draw`.
pub trait Scene {
    /// Advance the animation one step. Runs exactly once per rendered
    /// frame so animation speed tracks the paced frame rate.
    fn update(&mut self);

    /// Render the current state into `fb`. Responsible for erasing the
    /// previous frame's content.
    fn draw(&self, fb: &mut FrameBuffer);
}
