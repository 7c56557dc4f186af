//! Adaptive frame pacing.
//!
//! The pacer keeps the rendered frame rate near a target FPS on hosts of
//! any speed by measuring how long a window of `target_fps` frames took
//! and nudging a per-frame delay. Resampling is frame-count-gated, not
//! wall-clock-gated: when the actual rate drifts from the target, the
//! real-world sampling period drifts with it.

use std::time::{Duration, Instant};

use tui_canvas_types::SMOOTHING_MARGIN_MS;

/// Per-frame delay state.
///
/// The delay itself is applied as a blocking sleep by the render loop; the
/// pacer only decides its length.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_fps: u32,
    delay_ms: u64,
    frames: u32,
    window_start: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        assert!(target_fps > 0);
        Self {
            target_fps,
            delay_ms: 0,
            frames: 0,
            window_start: Instant::now(),
        }
    }

    /// Record the start of a sampling window.
    pub fn begin_window(&mut self, now: Instant) {
        self.window_start = now;
        self.frames = 0;
    }

    /// Current inter-frame delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Count a finished frame; when a full window of frames has elapsed,
    /// recompute the delay from the measured wall-clock time and start the
    /// next window at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        self.frames += 1;
        if should_resample(self.frames, self.target_fps) {
            let elapsed_ms = now.duration_since(self.window_start).as_millis() as u64;
            self.delay_ms = adjust(self.delay_ms, elapsed_ms, self.target_fps);
            self.begin_window(now);
        }
    }
}

/// True exactly when `frame_count` frames have completed since the last
/// resample.
pub fn should_resample(frame_count: u32, target_fps: u32) -> bool {
    frame_count >= target_fps
}

/// Compute the next inter-frame delay from the time a window of
/// `target_fps` frames actually took.
///
/// Under budget: halve the gap toward the ideal per-frame time, an
/// exponential convergence rather than a jump, so the delay cannot
/// oscillate. Over budget: back off a single millisecond per window while
/// any delay remains. Inside the dead zone around one second: leave it.
pub fn adjust(current_delay: u64, elapsed_ms: u64, target_fps: u32) -> u64 {
    if elapsed_ms < 1000 - SMOOTHING_MARGIN_MS {
        (current_delay + 1000 / target_fps as u64) / 2
    } else if elapsed_ms > 1000 + SMOOTHING_MARGIN_MS && current_delay > 0 {
        current_delay - 1
    } else {
        current_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_window_converges_toward_ideal_delay() {
        // (0 + 1000/30) / 2 with integer division.
        assert_eq!(adjust(0, 900, 30), 16);
        // Converging again closes half the remaining gap.
        assert_eq!(adjust(16, 900, 30), 24);
    }

    #[test]
    fn slow_window_backs_off_one_ms() {
        assert_eq!(adjust(16, 1050, 30), 15);
        // Never goes below zero.
        assert_eq!(adjust(0, 1050, 30), 0);
    }

    #[test]
    fn dead_zone_leaves_delay_unchanged() {
        assert_eq!(adjust(16, 1000, 30), 16);
        assert_eq!(adjust(16, 975, 30), 16);
        assert_eq!(adjust(16, 1025, 30), 16);
    }

    #[test]
    fn resample_is_frame_count_gated() {
        assert!(!should_resample(29, 30));
        assert!(should_resample(30, 30));
    }

    #[test]
    fn end_frame_resets_the_window() {
        let mut pacer = FramePacer::new(3);
        let t0 = Instant::now();
        pacer.begin_window(t0);
        // Two frames: no resample yet, delay untouched.
        pacer.end_frame(t0);
        pacer.end_frame(t0);
        assert_eq!(pacer.delay(), Duration::ZERO);
        // Third frame completes the window; a fast window raises the delay.
        pacer.end_frame(t0 + Duration::from_millis(100));
        assert!(pacer.delay() > Duration::ZERO);
    }
}
