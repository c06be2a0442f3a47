use quickcheck::{Arbitrary, Gen};

use crate::{
    BattleCounts, BattleZoneConfig, ContainerSize, DualZoneConfig, HandConfig, Tuning, ZoneConfig,
};

/// A random number in `[min, max)`.
fn range(g: &mut Gen, min: u32, max: u32) -> u32 {
    min + u32::arbitrary(g) % (max - min)
}

fn space(g: &mut Gen) -> ContainerSize {
    ContainerSize {
        width: range(g, 0, 2000) as f64,
        height: range(g, 0, 1400) as f64,
    }
}

fn zone(g: &mut Gen) -> ZoneConfig {
    let min_card_width = range(g, 10, 80);
    ZoneConfig {
        count: range(g, 0, 40),
        gap: range(g, 0, 16) as f64,
        max_card_width: range(g, min_card_width, min_card_width + 200),
        min_card_width,
    }
}

impl Arbitrary for Tuning {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            row_penalty: range(g, 50, 101) as f64 / 100.0,
            hand_overlap: range(g, 0, 50) as f64 / 100.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ZoneInput {
    pub zone: ZoneConfig,
    pub space: ContainerSize,
    pub tuning: Tuning,
}

impl Arbitrary for ZoneInput {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            zone: zone(g),
            space: space(g),
            tuning: Tuning::arbitrary(g),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HandInput {
    pub count: u32,
    pub row_height: u32,
    pub avail_width: f64,
    pub hand: HandConfig,
    pub tuning: Tuning,
}

impl Arbitrary for HandInput {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            count: range(g, 0, 30),
            row_height: range(g, 0, 300),
            avail_width: range(g, 0, 2000) as f64,
            hand: HandConfig {
                gap: range(g, 0, 16) as i32,
                max_card_width: range(g, 1, 200),
                padding: range(g, 0, 40),
            },
            tuning: Tuning::arbitrary(g),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DualInput {
    pub config: DualZoneConfig,
    pub space: ContainerSize,
    pub tuning: Tuning,
}

impl Arbitrary for DualInput {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            config: DualZoneConfig {
                top: zone(g),
                bottom: zone(g),
                fixed_height: range(g, 0, 120) as f64,
            },
            space: space(g),
            tuning: Tuning::arbitrary(g),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BattleInput {
    pub config: BattleZoneConfig,
    pub space: ContainerSize,
    pub tuning: Tuning,
}

impl Arbitrary for BattleInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let battlefield_min_width = range(g, 10, 60);
        Self {
            config: BattleZoneConfig {
                counts: BattleCounts {
                    player_hand: range(g, 0, 15),
                    opponent_hand: range(g, 0, 15),
                    player_lands: range(g, 0, 20),
                    player_nonlands: range(g, 0, 20),
                    opponent_lands: range(g, 0, 20),
                    opponent_nonlands: range(g, 0, 20),
                },
                fixed_height: range(g, 0, 120) as f64,
                zone_column_width: range(g, 0, 200) as f64,
                gap: range(g, 0, 12) as f64,
                battlefield_max_width: range(g, battlefield_min_width, 200),
                battlefield_min_width,
                hand: HandConfig {
                    gap: range(g, 0, 12) as i32,
                    max_card_width: range(g, 1, 200),
                    padding: range(g, 0, 40),
                },
                fallback_width: range(g, 1, 100),
            },
            space: space(g),
            tuning: Tuning::arbitrary(g),
        }
    }
}
