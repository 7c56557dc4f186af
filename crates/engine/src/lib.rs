//! The render loop.
//!
//! One strictly sequential iteration per frame: update the scene, draw it,
//! present, poll the keyboard, sleep the paced delay, and once per window
//! of frames let the pacer re-measure. The bounded sleep is the loop's
//! only suspension point; input polling never blocks, so the cadence holds
//! whether or not anyone is typing.
//!
//! Exits are synchronous: a quit key returns `Ok`, a failed present
//! propagates its error. Session teardown belongs to the caller (the
//! binaries run it on both paths).

use std::thread;
use std::time::Instant;

use anyhow::Result;

use tui_canvas_core::fb::FrameBuffer;
use tui_canvas_core::pace::FramePacer;
use tui_canvas_core::scene::Scene;
use tui_canvas_input::{poll_key, should_quit};
use tui_canvas_term::TerminalRenderer;
use tui_canvas_types::TARGET_FPS;

/// Loop parameters. The default targets [`TARGET_FPS`].
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub target_fps: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
        }
    }
}

/// Drive `scene` against an entered terminal session until a quit key or
/// a present failure.
pub fn run<S: Scene>(scene: &mut S, term: &mut TerminalRenderer, cfg: LoopConfig) -> Result<()> {
    let (width, height) = TerminalRenderer::size();
    let mut fb = FrameBuffer::new(width, height);

    let mut pacer = FramePacer::new(cfg.target_fps);
    pacer.begin_window(Instant::now());

    loop {
        scene.update();
        scene.draw(&mut fb);
        term.present(&mut fb)?;

        if let Some(key) = poll_key()? {
            if should_quit(key) {
                return Ok(());
            }
        }

        let delay = pacer.delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        pacer.end_frame(Instant::now());
    }
}
