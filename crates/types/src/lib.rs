//! Shared types for the rendering toolkit
//! This module contains pure data types with no external dependencies

/// Frame rate the pacer converges toward.
///
/// The frames-per-second count controls the inter-frame delay only. Object
/// velocity is controlled by the scene update functions, never by the FPS.
pub const TARGET_FPS: u32 = 30;

/// Dead zone (in ms) around the one-second sampling window inside which the
/// pacer leaves the delay untouched.
pub const SMOOTHING_MARGIN_MS: u64 = 25;

/// Upper bound on mutable color slots a palette can hold.
pub const PALETTE_CAPACITY: usize = 128;

/// Color channel range used by the palette model. Channels scale to 24-bit
/// RGB only at present time.
pub const CHANNEL_MIN: Channel = 0;
pub const CHANNEL_MAX: Channel = 1000;

/// Low end of the fading blue ramp in the colorscroll palette.
pub const CHANNEL_START: Channel = 50;

/// Starfield composition: layer `L` holds `STAR_BASE_COUNT / 2^L` stars
/// moving at speed `L + 1`.
pub const STAR_LAYERS: usize = 3;
pub const STAR_BASE_COUNT: usize = 128;

/// A single color channel in the 0..=1000 palette range.
pub type Channel = i16;

/// A terminal cell coordinate.
///
/// Signed so that geometry (fractal midpoints, clipped line segments) can
/// leave the visible area; the framebuffer clips on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Drawing characters available to the rasterizer and scenes.
///
/// These mirror the classic alternate character set: solid/checker fills,
/// the diamond, line segments and box corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Block,
    Checker,
    Diamond,
    HLine,
    VLine,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Glyph {
    /// The terminal character this glyph renders as.
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Block => '█',
            Glyph::Checker => '▒',
            Glyph::Diamond => '◆',
            Glyph::HLine => '─',
            Glyph::VLine => '│',
            Glyph::UpperLeft => '┌',
            Glyph::UpperRight => '┐',
            Glyph::LowerLeft => '└',
            Glyph::LowerRight => '┘',
        }
    }
}
