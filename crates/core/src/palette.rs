//! Bounded table of mutable color slots.
//!
//! A palette owns every color slot a scene can reference; scenes hold pair
//! indices only. Pairings (slot against the shared background) are bound
//! once at construction; the slot channels themselves may move every tick,
//! which is what produces the scrolling illusion without repositioning a
//! single glyph. On a truecolor backend "redefining a color" means the
//! next [`Palette::style`] lookup resolves to the new channels.

use arrayvec::ArrayVec;

use tui_canvas_types::{Channel, CHANNEL_MAX, PALETTE_CAPACITY};

use crate::fb::{CellStyle, Rgb};

/// Per-slot fade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    /// Channel climbs toward the upper bound.
    In,
    /// Channel descends toward the lower bound.
    Out,
    /// Channel never moves (fixed slots, e.g. the starfield grays).
    Hold,
}

impl Fade {
    fn sign(self) -> Channel {
        match self {
            Fade::In => 1,
            Fade::Out => -1,
            Fade::Hold => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub r: Channel,
    pub g: Channel,
    pub b: Channel,
    pub fade: Fade,
}

/// A bounded set of color slots plus the bounds and step of the fade cycle.
///
/// One pairing exists per slot, against a fixed background; the pair index
/// equals the slot index.
#[derive(Debug, Clone)]
pub struct Palette {
    slots: ArrayVec<Slot, PALETTE_CAPACITY>,
    lower: Channel,
    upper: Channel,
    step: Channel,
    background: Rgb,
}

impl Palette {
    /// Build the fading blue ramp of the colorscroll demo.
    ///
    /// The first half of the slots fades upward from `start`, the second
    /// half downward from the top; the per-slot step is
    /// `(max - start) / (capacity / 2)`, so blue values ramp up across the
    /// first half and back down across the second.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, odd, or above [`PALETTE_CAPACITY`],
    /// or if `start >= max`. These are static configuration errors, not
    /// runtime conditions.
    pub fn ramp(capacity: usize, start: Channel, max: Channel) -> Self {
        assert!(capacity > 0 && capacity <= PALETTE_CAPACITY);
        assert!(capacity % 2 == 0, "fade halves must be equal");
        assert!(start < max);

        let half = capacity / 2;
        let step = (max - start) / half as Channel;

        let mut slots = ArrayVec::new();
        let mut b = start;
        for i in 0..capacity {
            let fade = if i < half { Fade::In } else { Fade::Out };
            slots.push(Slot { r: 0, g: 0, b, fade });
            if i < half {
                b += step;
            } else {
                b -= step;
            }
        }

        Self {
            slots,
            lower: start,
            upper: start + step * half as Channel,
            step,
            background: Rgb::BLACK,
        }
    }

    /// Build a palette of fixed slots that never fade.
    ///
    /// # Panics
    ///
    /// Panics if more than [`PALETTE_CAPACITY`] slots are given.
    pub fn fixed(channels: &[(Channel, Channel, Channel)]) -> Self {
        assert!(channels.len() <= PALETTE_CAPACITY);
        let mut slots = ArrayVec::new();
        for &(r, g, b) in channels {
            slots.push(Slot {
                r,
                g,
                b,
                fade: Fade::Hold,
            });
        }
        Self {
            slots,
            lower: 0,
            upper: CHANNEL_MAX,
            step: 0,
            background: Rgb::BLACK,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Advance every fading slot one step.
    ///
    /// Must run exactly once per rendered frame: the scroll speed is tied
    /// to the frame rate, which the pacer keeps constant. A slot sitting
    /// at a bound flips direction first, then moves, so the blue channel
    /// never leaves `[lower, upper]`.
    pub fn tick(&mut self) {
        for slot in &mut self.slots {
            match slot.fade {
                Fade::Hold => continue,
                Fade::In | Fade::Out => {
                    if slot.b >= self.upper {
                        slot.fade = Fade::Out;
                    } else if slot.b <= self.lower {
                        slot.fade = Fade::In;
                    }
                    slot.b += self.step * slot.fade.sign();
                }
            }
        }
    }

    /// Resolve a pairing to a concrete cell style from the slot's current
    /// channels.
    pub fn style(&self, pair: usize) -> CellStyle {
        let slot = &self.slots[pair];
        CellStyle {
            fg: Rgb::from_channels(slot.r, slot.g, slot.b),
            bg: self.background,
        }
    }
}
