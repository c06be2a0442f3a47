//! Layouts for the screens of the game, with the zone settings each screen uses.

use crate::solver::{solve_battle, solve_dual, solve_zone, BattleLayout, DualLayout};
use crate::{
    BattleCounts, BattleZoneConfig, ContainerSize, DualZoneConfig, Tuning, ZoneConfig, ZoneLayout,
};

/// The pack being drafted from, above the pool of drafted cards.
pub const DRAFT_ZONES: DualZoneConfig = DualZoneConfig {
    top: ZoneConfig {
        count: 0,
        gap: 10.0,
        max_card_width: 200,
        min_card_width: 60,
    },
    bottom: ZoneConfig {
        count: 0,
        gap: 6.0,
        max_card_width: 140,
        min_card_width: 40,
    },
    fixed_height: 96.0,
};

/// Available upgrades above the pool they can be applied to.
pub const REWARD_ZONES: DualZoneConfig = DualZoneConfig {
    top: ZoneConfig {
        count: 0,
        gap: 10.0,
        max_card_width: 180,
        min_card_width: 60,
    },
    bottom: ZoneConfig {
        count: 0,
        gap: 6.0,
        max_card_width: 140,
        min_card_width: 40,
    },
    fixed_height: 120.0,
};

/// The reward cards shown together after a won battle.
pub const REWARD_SUMMARY_ZONE: ZoneConfig = ZoneConfig {
    count: 0,
    gap: 24.0,
    max_card_width: 260,
    min_card_width: 80,
};

/// At most this many reward cards are offered at once.
pub const MAX_REWARD_CARDS: u32 = 3;

/// Grids in panels and dialogs, e.g. the sideboard, graveyard or exile.
pub const GRID_ZONE: ZoneConfig = ZoneConfig {
    count: 0,
    gap: 8.0,
    max_card_width: 150,
    min_card_width: 50,
};

pub fn draft_layout(pack_size: u32, pool_size: u32, space: ContainerSize, tuning: &Tuning) -> DualLayout {
    let config = DualZoneConfig {
        top: DRAFT_ZONES.top.with_count(pack_size),
        bottom: DRAFT_ZONES.bottom.with_count(pool_size),
        ..DRAFT_ZONES
    };
    solve_dual(&config, space, tuning)
}

pub fn reward_layout(upgrades: u32, pool_size: u32, space: ContainerSize, tuning: &Tuning) -> DualLayout {
    let config = DualZoneConfig {
        top: REWARD_ZONES.top.with_count(upgrades),
        bottom: REWARD_ZONES.bottom.with_count(pool_size),
        ..REWARD_ZONES
    };
    solve_dual(&config, space, tuning)
}

/// Layout of the reward cards. Counts above [`MAX_REWARD_CARDS`] are treated as that many.
pub fn reward_summary_layout(rewards: u32, space: ContainerSize, tuning: &Tuning) -> ZoneLayout {
    let zone = REWARD_SUMMARY_ZONE.with_count(rewards.min(MAX_REWARD_CARDS));
    solve_zone(&zone, space, tuning)
}

pub fn grid_layout(count: u32, space: ContainerSize, tuning: &Tuning) -> ZoneLayout {
    solve_zone(&GRID_ZONE.with_count(count), space, tuning)
}

pub fn battle_layout(counts: BattleCounts, space: ContainerSize, tuning: &Tuning) -> BattleLayout {
    solve_battle(&BattleZoneConfig::default().with_counts(counts), space, tuning)
}

/// Whether a card with this type line goes into the lands zone.
///
/// Treasures are tapped for mana like lands, so they sit with them.
pub fn is_land_type(type_line: &str) -> bool {
    let type_line = type_line.to_lowercase();
    type_line.contains("land") || type_line.contains("treasure")
}

/// Counts the cards of each battle zone, given the type lines of the cards on
/// each side of the battlefield.
pub fn battle_counts<S: AsRef<str>>(
    player_hand: usize,
    opponent_hand: usize,
    player_battlefield: &[S],
    opponent_battlefield: &[S],
) -> BattleCounts {
    let lands = |cards: &[S]| cards.iter().filter(|c| is_land_type(c.as_ref())).count() as u32;
    let player_lands = lands(player_battlefield);
    let opponent_lands = lands(opponent_battlefield);
    BattleCounts {
        player_hand: player_hand as u32,
        opponent_hand: opponent_hand as u32,
        player_lands,
        player_nonlands: player_battlefield.len() as u32 - player_lands,
        opponent_lands,
        opponent_nonlands: opponent_battlefield.len() as u32 - opponent_lands,
    }
}
