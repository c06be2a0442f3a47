use serde::{Deserialize, Serialize};

use crate::geometry::{card_height, ContainerSize, ZoneLayout, ASPECT_RATIO};
use crate::solver::{solve_hand, solve_zone};
use crate::{BattleZoneConfig, Tuning, ZoneConfig};

/// Number of equal-height rows the battle board is split into.
///
/// From top to bottom: opponent hand, opponent lands, opponent nonlands,
/// player nonlands, player lands, player hand.
pub const BATTLE_ROWS: u32 = 6;

/// Layouts of all six zones of the battle board.
///
/// Hands are always a single row; their `gap` fields may be negative, meaning
/// the cards overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLayout {
    pub player_hand: ZoneLayout,
    pub opponent_hand: ZoneLayout,
    pub player_lands: ZoneLayout,
    pub player_nonlands: ZoneLayout,
    pub opponent_lands: ZoneLayout,
    pub opponent_nonlands: ZoneLayout,
    /// Height of each of the [`BATTLE_ROWS`] rows. Zero if the board didn't fit at all.
    pub row_height: u32,
    pub player_hand_gap: i32,
    pub opponent_hand_gap: i32,
}

impl BattleLayout {
    /// All six zones, in the order of [`BATTLE_ROWS`] from top to bottom.
    pub fn zones(&self) -> [(&'static str, ZoneLayout); 6] {
        [
            ("opponent_hand", self.opponent_hand),
            ("opponent_lands", self.opponent_lands),
            ("opponent_nonlands", self.opponent_nonlands),
            ("player_nonlands", self.player_nonlands),
            ("player_lands", self.player_lands),
            ("player_hand", self.player_hand),
        ]
    }
}

/// Lays out the battle board.
///
/// The height left after `fixed_height` is split into [`BATTLE_ROWS`] equal rows.
/// The four battlefield zones are each packed into one row with
/// [`solve_zone()`], and the hands with [`solve_hand()`], so that all zones line
/// up on the same row grid. The side rail (`zone_column_width`) is not
/// available to any of them.
pub fn solve_battle(config: &BattleZoneConfig, space: ContainerSize, tuning: &Tuning) -> BattleLayout {
    let counts = config.counts;
    let avail_height = (space.height - config.fixed_height).max(0.0);
    let row_height = (avail_height / BATTLE_ROWS as f64).floor() as u32;
    if row_height == 0 || space.width <= 0.0 {
        let zone = |count| ZoneLayout::fallback(config.fallback_width, count);
        return BattleLayout {
            player_hand: zone(counts.player_hand),
            opponent_hand: zone(counts.opponent_hand),
            player_lands: zone(counts.player_lands),
            player_nonlands: zone(counts.player_nonlands),
            opponent_lands: zone(counts.opponent_lands),
            opponent_nonlands: zone(counts.opponent_nonlands),
            row_height: 0,
            player_hand_gap: config.hand.gap,
            opponent_hand_gap: config.hand.gap,
        };
    }

    let avail_width = (space.width - config.zone_column_width).max(0.0);
    let row = ContainerSize::new(avail_width, row_height as f64);

    let battlefield = |count| {
        let zone = ZoneConfig {
            count,
            gap: config.gap,
            max_card_width: config.battlefield_max_width,
            min_card_width: config.battlefield_min_width,
        };
        fit_into_row(solve_zone(&zone, row, tuning), row_height)
    };
    let player_hand = solve_hand(counts.player_hand, row_height, avail_width, &config.hand, tuning);
    let opponent_hand = solve_hand(counts.opponent_hand, row_height, avail_width, &config.hand, tuning);

    BattleLayout {
        player_hand: player_hand.to_zone_layout(counts.player_hand),
        opponent_hand: opponent_hand.to_zone_layout(counts.opponent_hand),
        player_lands: battlefield(counts.player_lands),
        player_nonlands: battlefield(counts.player_nonlands),
        opponent_lands: battlefield(counts.opponent_lands),
        opponent_nonlands: battlefield(counts.opponent_nonlands),
        row_height,
        player_hand_gap: player_hand.gap,
        opponent_hand_gap: opponent_hand.gap,
    }
}

/// Placeholder and fallback layouts ignore the row height, shrink them into the row.
fn fit_into_row(layout: ZoneLayout, row_height: u32) -> ZoneLayout {
    if layout.height <= row_height {
        return layout;
    }
    let width = (row_height as f64 / ASPECT_RATIO).floor() as u32;
    ZoneLayout {
        width,
        height: card_height(width),
        ..layout
    }
}
