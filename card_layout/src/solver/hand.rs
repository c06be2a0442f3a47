use serde::{Deserialize, Serialize};

use crate::geometry::{card_height, ASPECT_RATIO};
use crate::{HandConfig, Tuning, ZoneLayout};

/// Card size and spacing for a hand.
///
/// A negative `gap` means that neighbouring cards overlap by that many pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandLayout {
    pub width: u32,
    pub height: u32,
    pub gap: i32,
}

impl HandLayout {
    /// The hand as a single-row [`ZoneLayout`].
    pub fn to_zone_layout(self, count: u32) -> ZoneLayout {
        ZoneLayout {
            width: self.width,
            height: self.height,
            rows: 1,
            columns: count.max(1),
        }
    }
}

/// Lays out a hand of `count` cards in a single row of height `row_height`.
///
/// Cards are as large as the row allows (up to the configured maximum). If they
/// don't fit next to each other, they first overlap by up to
/// [`Tuning::hand_overlap`] of their width, and only shrink once that is not
/// enough either.
pub fn solve_hand(
    count: u32,
    row_height: u32,
    avail_width: f64,
    hand: &HandConfig,
    tuning: &Tuning,
) -> HandLayout {
    let ideal_width = ((row_height as f64 / ASPECT_RATIO).floor() as u32).min(hand.max_card_width);
    let usable_width = avail_width - hand.padding as f64;

    let natural_row_width =
        count as f64 * ideal_width as f64 + count.saturating_sub(1) as f64 * hand.gap as f64;
    if count <= 1 || natural_row_width <= usable_width {
        return HandLayout {
            width: ideal_width,
            height: card_height(ideal_width),
            gap: hand.gap,
        };
    }

    let gaps = (count - 1) as f64;
    let needed_gap = ((usable_width - count as f64 * ideal_width as f64) / gaps).floor() as i32;
    // Gaps are whole pixels, so this is the same as comparing against the unrounded overlap
    let min_gap = -((ideal_width as f64 * tuning.hand_overlap).floor() as i32);
    if needed_gap >= min_gap {
        return HandLayout {
            width: ideal_width,
            height: card_height(ideal_width),
            gap: needed_gap,
        };
    }

    let width = ((usable_width - gaps * min_gap as f64) / count as f64)
        .floor()
        .clamp(0.0, ideal_width as f64) as u32;
    HandLayout {
        width,
        height: card_height(width),
        gap: min_gap,
    }
}
