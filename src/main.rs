//! Moving star field (default binary).
//!
//! Three layers of stars drift at different speeds over a black sky; the
//! pacer keeps the drift rate identical on slow and fast machines.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_canvas::core::scene::Starfield;
use tui_canvas::engine::{self, LoopConfig};
use tui_canvas::term::{Capabilities, TerminalRenderer};

fn main() -> Result<()> {
    // Refuse before raw mode so the message prints normally.
    Capabilities::detect().require_palette()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (width, height) = TerminalRenderer::size();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);

    let mut scene = Starfield::new(width, height, seed);
    engine::run(&mut scene, term, LoopConfig::default())
}
