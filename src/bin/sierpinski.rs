//! Sierpinski triangles on the terminal screen.
//!
//! Two fractals at different recursion depths, redrawn under the same
//! paced loop as the animated demos (the diff presenter makes the static
//! frames free).

use anyhow::Result;

use tui_canvas::core::scene::Sierpinski;
use tui_canvas::engine::{self, LoopConfig};
use tui_canvas::term::TerminalRenderer;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let (width, height) = TerminalRenderer::size();
    let mut scene = Sierpinski::new(width, height);
    let result = engine::run(&mut scene, &mut term, LoopConfig::default());

    let _ = term.exit();
    result
}
