//! Palette fade-cycle properties at full capacity.

use tui_canvas::core::{Fade, Palette};
use tui_canvas::types::{Channel, CHANNEL_MAX, CHANNEL_START, PALETTE_CAPACITY};

fn blues(pal: &Palette) -> Vec<Channel> {
    (0..pal.len()).map(|i| pal.slot(i).b).collect()
}

#[test]
fn full_fade_cycle_round_trips_every_slot() {
    let mut pal = Palette::ramp(PALETTE_CAPACITY, CHANNEL_START, CHANNEL_MAX);
    let initial = blues(&pal);

    // One up/down cycle: 2 * (capacity / 2) ticks.
    for _ in 0..PALETTE_CAPACITY {
        pal.tick();
    }
    assert_eq!(blues(&pal), initial);

    // Whole multiples of the cycle land on the same values.
    let step = (CHANNEL_MAX - CHANNEL_START) / (PALETTE_CAPACITY as Channel / 2);
    for _ in 0..PALETTE_CAPACITY * step as usize {
        pal.tick();
    }
    assert_eq!(blues(&pal), initial);
}

#[test]
fn blue_channel_never_leaves_its_bounds() {
    let mut pal = Palette::ramp(PALETTE_CAPACITY, CHANNEL_START, CHANNEL_MAX);
    let half = PALETTE_CAPACITY as Channel / 2;
    let step = (CHANNEL_MAX - CHANNEL_START) / half;
    let upper = CHANNEL_START + step * half;

    for _ in 0..3 * PALETTE_CAPACITY {
        pal.tick();
        for b in blues(&pal) {
            assert!(b >= CHANNEL_START, "below lower bound: {}", b);
            assert!(b <= upper, "above upper bound: {}", b);
        }
    }
}

#[test]
fn directions_flip_exactly_at_the_bounds() {
    let mut pal = Palette::ramp(PALETTE_CAPACITY, CHANNEL_START, CHANNEL_MAX);
    let half = PALETTE_CAPACITY as Channel / 2;
    let step = (CHANNEL_MAX - CHANNEL_START) / half;
    let upper = CHANNEL_START + step * half;

    // Track slot 0 through a full cycle: it rises to the top, turns, falls
    // back to the start, turns again.
    let mut seen_top = false;
    let mut seen_bottom_after_top = false;
    for _ in 0..PALETTE_CAPACITY + 1 {
        let before = pal.slot(0).b;
        pal.tick();
        let after = pal.slot(0);
        if before == upper {
            assert_eq!(after.fade, Fade::Out, "must turn at the upper bound");
            seen_top = true;
        }
        if seen_top && before == CHANNEL_START {
            assert_eq!(after.fade, Fade::In, "must turn at the lower bound");
            seen_bottom_after_top = true;
        }
    }
    assert!(seen_top && seen_bottom_after_top);
}
