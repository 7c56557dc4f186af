//! Rasterize a binary PBM (P4) file to the terminal.
//!
//! Usage: `bitmap <path>`. One block glyph per set bit, centered.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};

use tui_canvas::core::scene::BitmapView;
use tui_canvas::core::Bitmap;
use tui_canvas::engine::{self, LoopConfig};
use tui_canvas::term::TerminalRenderer;

fn main() -> Result<()> {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: bitmap <file.pbm>"),
    };

    let bytes = fs::read(&path).with_context(|| format!("cannot read {}", path))?;
    let bitmap = Bitmap::parse_pbm(&bytes).with_context(|| format!("cannot parse {}", path))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut scene = BitmapView::new(bitmap);
    let result = engine::run(&mut scene, &mut term, LoopConfig::default());

    let _ = term.exit();
    result
}
