//! Terminal session and frame presenter.
//!
//! [`TerminalRenderer`] owns the terminal for the lifetime of a demo: it
//! enters raw mode + alternate screen on `enter`, restores everything on
//! `exit`, and flushes framebuffers in between. Presenting diffs against
//! the previous frame and emits coalesced runs, so a static scene costs
//! almost nothing and a palette fade re-emits exactly the cells whose
//! resolved color changed.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_canvas_core::fb::{CellStyle, FrameBuffer, Rgb};

use crate::error::TermError;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
        }
    }

    /// Current terminal size in cells, with the classic 80x24 fallback.
    pub fn size() -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    /// Enter the session: raw mode, alternate screen, hidden cursor, no
    /// line wrap.
    pub fn enter(&mut self) -> Result<(), TermError> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Must run on every exit path, including after
    /// a present failure; callers ignore its own result for that reason.
    pub fn exit(&mut self) -> Result<(), TermError> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Present a frame, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; the
    /// renderer diffs against the previous frame and then swaps buffers so
    /// the caller reuses the old allocation without cloning.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<(), TermError> {
        let full_redraw = match &self.prev {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full_redraw {
            self.redraw_all(fb)?;
            self.prev = Some(fb.clone());
            return Ok(());
        }

        let mut prev = self.prev.take().expect("previous frame present");
        self.redraw_changed(fb, &prev)?;
        std::mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        Ok(())
    }

    fn redraw_all(&mut self, fb: &FrameBuffer) -> Result<(), TermError> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x as i32, y as i32).unwrap_or_default();
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn redraw_changed(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<(), TermError> {
        let mut style: Option<CellStyle> = None;

        for_each_changed_run(prev, next, |x, y, len| {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get((x + dx) as i32, y as i32).unwrap_or_default();
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            Ok(())
        })?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<(), TermError> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Walk the cells that differ between two equally-sized frames, reporting
/// maximal horizontal runs `(x, y, len)`.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<(), TermError>,
) -> Result<(), TermError> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x as i32, y as i32) == next.get(x as i32, y as i32) {
                x += 1;
                continue;
            }

            let start = x;
            while x < w && prev.get(x as i32, y as i32) != next.get(x as i32, y as i32) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_canvas_core::fb::Cell;

    #[test]
    fn style_conversion_preserves_channels() {
        let rgb = Rgb::new(12, 200, 3);
        assert_eq!(
            rgb_to_color(rgb),
            Color::Rgb {
                r: 12,
                g: 200,
                b: 3
            }
        );
    }

    #[test]
    fn changed_run_walk_coalesces_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.set(x, 0, Cell::new('x', style));
        }
        b.set(5, 1, Cell::new('y', style));

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_produce_no_runs() {
        let a = FrameBuffer::new(6, 2);
        let b = FrameBuffer::new(6, 2);
        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn palette_fade_shows_up_as_changed_cells() {
        // Same glyph, different resolved color: the diff must re-emit it.
        let mut a = FrameBuffer::new(4, 1);
        let mut b = FrameBuffer::new(4, 1);
        let dim = CellStyle {
            fg: Rgb::new(0, 0, 40),
            bg: Rgb::BLACK,
        };
        let bright = CellStyle {
            fg: Rgb::new(0, 0, 80),
            bg: Rgb::BLACK,
        };
        a.set(2, 0, Cell::new('▒', dim));
        b.set(2, 0, Cell::new('▒', bright));

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(2, 0, 1)]);
    }
}
