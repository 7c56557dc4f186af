//! Palette-cycling scroll effect.
//!
//! Modifies the color table every frame to scroll a blue ramp through a
//! static band of checker glyphs.

use anyhow::Result;

use tui_canvas::core::scene::Colorscroll;
use tui_canvas::engine::{self, LoopConfig};
use tui_canvas::term::{Capabilities, TerminalRenderer};

fn main() -> Result<()> {
    Capabilities::detect().require_palette()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut scene = Colorscroll::new();
    let result = engine::run(&mut scene, &mut term, LoopConfig::default());

    let _ = term.exit();
    result
}
