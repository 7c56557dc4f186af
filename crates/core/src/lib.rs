//! Core rendering logic - pure, deterministic, and testable
//!
//! This crate contains everything that can run without a terminal: the
//! framebuffer, the drawing primitives, the palette engine, the frame pacer
//! and the scene models. It has **zero dependencies** on terminal I/O,
//! making it:
//!
//! - **Deterministic**: same seed produces identical frames
//! - **Testable**: every drawing primitive is verified against a plain
//!   in-memory framebuffer
//! - **Portable**: can back any presenter (terminal, snapshot tests,
//!   headless)
//!
//! # Module Structure
//!
//! - [`fb`]: styled character-cell framebuffer with clipping writes
//! - [`raster`]: integer-only line/rectangle/fractal drawing
//! - [`palette`]: bounded table of mutable color slots with per-tick fading
//! - [`pace`]: adaptive inter-frame delay targeting a fixed FPS
//! - [`rng`]: small LCG for star placement
//! - [`bitmap`]: bit-packed monochrome images (binary PBM)
//! - [`scene`]: the animated demos (starfield, colorscroll, sierpinski,
//!   bitmap viewer)
//!
//! # Frame model
//!
//! A scene redraws the whole framebuffer every frame; later writes to a
//! cell overwrite earlier ones within the frame (no blending). Presenting
//! and pacing are the caller's job - see the `engine` crate.

pub mod bitmap;
pub mod fb;
pub mod pace;
pub mod palette;
pub mod raster;
pub mod rng;
pub mod scene;

pub use tui_canvas_types as types;

// Re-export commonly used types for convenience
pub use bitmap::{Bitmap, BitmapError};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use pace::FramePacer;
pub use palette::{Fade, Palette};
pub use rng::SimpleRng;
pub use scene::Scene;
