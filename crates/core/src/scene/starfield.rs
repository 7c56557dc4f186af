//! Multi-layer parallax starfield.

use arrayvec::ArrayVec;

use tui_canvas_types::{Glyph, STAR_BASE_COUNT, STAR_LAYERS};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::palette::Palette;
use crate::rng::SimpleRng;
use crate::scene::Scene;

/// Gray levels per layer, brighter for faster layers, in palette channel
/// values.
const LAYER_GRAYS: [(i16, i16, i16); STAR_LAYERS] = [(50, 50, 50), (350, 350, 350), (1000, 1000, 1000)];

#[derive(Debug, Clone, Copy)]
struct Star {
    x: i32,
    y: i32,
}

#[derive(Debug)]
struct Layer {
    stars: Vec<Star>,
    speed: i32,
    pair: usize,
}

/// Three layers of stars drifting rightward at different speeds.
///
/// Layer `L` holds `STAR_BASE_COUNT / 2^L` stars at speed `L + 1`: fewer
/// but faster and brighter stars per deeper layer, which is what sells the
/// parallax. A star leaving the right edge re-enters at `x = 0` with a
/// fresh uniformly random row.
pub struct Starfield {
    layers: ArrayVec<Layer, STAR_LAYERS>,
    palette: Palette,
    width: i32,
    height: i32,
    rng: SimpleRng,
}

impl Starfield {
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        let width = i32::from(width.max(1));
        let height = i32::from(height.max(1));
        let mut rng = SimpleRng::new(seed);

        let mut layers = ArrayVec::new();
        for l in 0..STAR_LAYERS {
            let count = STAR_BASE_COUNT >> l;
            let mut stars = Vec::with_capacity(count);
            for _ in 0..count {
                stars.push(Star {
                    x: rng.next_range(width as u32) as i32,
                    y: rng.next_range(height as u32) as i32,
                });
            }
            layers.push(Layer {
                stars,
                speed: l as i32 + 1,
                pair: l,
            });
        }

        Self {
            layers,
            palette: Palette::fixed(&LAYER_GRAYS),
            width,
            height,
            rng,
        }
    }

    #[cfg(test)]
    fn layer_positions(&self, layer: usize) -> Vec<(i32, i32)> {
        self.layers[layer].stars.iter().map(|s| (s.x, s.y)).collect()
    }
}

impl Scene for Starfield {
    fn update(&mut self) {
        for layer in &mut self.layers {
            for star in &mut layer.stars {
                if star.x + layer.speed >= self.width {
                    star.x = 0;
                    star.y = self.rng.next_range(self.height as u32) as i32;
                } else {
                    star.x += layer.speed;
                }
            }
        }
    }

    fn draw(&self, fb: &mut FrameBuffer) {
        fb.clear();
        for layer in &self.layers {
            let cell = Cell::glyph(Glyph::Diamond, self.palette.style(layer.pair));
            for star in &layer.stars {
                fb.set(star.x, star.y, cell);
            }
        }
        fb.put_str(0, 0, "Press 'q' to exit.", CellStyle::default());
    }
}
