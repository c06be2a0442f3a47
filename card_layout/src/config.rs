use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Settings for one zone of same-size cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// How many cards are in the zone.
    pub count: u32,
    /// Space between neighbouring cards, horizontally and vertically.
    pub gap: f64,
    pub max_card_width: u32,
    pub min_card_width: u32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            count: 0,
            gap: 8.0,
            max_card_width: 160,
            min_card_width: 40,
        }
    }
}

impl ZoneConfig {
    pub fn with_count(self, count: u32) -> Self {
        Self { count, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_widths(self.min_card_width, self.max_card_width)?;
        validate_gap(self.gap)
    }
}

/// Settings for a hand: a single row of cards that overlap before they shrink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandConfig {
    /// Space between cards when there is enough room.
    pub gap: i32,
    pub max_card_width: u32,
    /// Horizontal space around the row that cards may not use.
    pub padding: u32,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            gap: 6,
            max_card_width: 140,
            padding: 16,
        }
    }
}

impl HandConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_card_width == 0 {
            return Err(ConfigError::NonPositiveMaxWidth { max: 0 });
        }
        validate_gap(self.gap as f64)
    }
}

/// Two zones that share the height of one container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualZoneConfig {
    pub top: ZoneConfig,
    pub bottom: ZoneConfig,
    /// Height taken by headers and other chrome, not available to cards.
    pub fixed_height: f64,
}

impl Default for DualZoneConfig {
    fn default() -> Self {
        Self {
            top: ZoneConfig::default(),
            bottom: ZoneConfig::default(),
            fixed_height: 0.0,
        }
    }
}

impl DualZoneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.top.validate()?;
        self.bottom.validate()?;
        validate_fixed_space("fixed_height", self.fixed_height)
    }
}

/// Number of cards in each of the six zones of the battle board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleCounts {
    pub player_hand: u32,
    pub opponent_hand: u32,
    pub player_lands: u32,
    pub player_nonlands: u32,
    pub opponent_lands: u32,
    pub opponent_nonlands: u32,
}

/// Settings for the battle board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleZoneConfig {
    pub counts: BattleCounts,
    /// Height taken by the phase bar and other chrome.
    pub fixed_height: f64,
    /// Width of the side rail holding the auxiliary zones.
    pub zone_column_width: f64,
    /// Gap between cards in the battlefield zones.
    pub gap: f64,
    pub battlefield_max_width: u32,
    pub battlefield_min_width: u32,
    pub hand: HandConfig,
    /// Card width for every zone when there is no room for the board at all.
    pub fallback_width: u32,
}

impl Default for BattleZoneConfig {
    fn default() -> Self {
        Self {
            counts: BattleCounts::default(),
            fixed_height: 72.0,
            zone_column_width: 120.0,
            gap: 6.0,
            battlefield_max_width: 120,
            battlefield_min_width: 24,
            hand: HandConfig::default(),
            fallback_width: 60,
        }
    }
}

impl BattleZoneConfig {
    pub fn with_counts(self, counts: BattleCounts) -> Self {
        Self { counts, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_fixed_space("fixed_height", self.fixed_height)?;
        validate_fixed_space("zone_column_width", self.zone_column_width)?;
        validate_widths(self.battlefield_min_width, self.battlefield_max_width)?;
        validate_gap(self.gap)?;
        if self.fallback_width == 0 {
            return Err(ConfigError::NonPositiveMaxWidth { max: 0 });
        }
        self.hand.validate()
    }
}

/// Tuned constants of the solvers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Score multiplier per additional row in the single-zone solver.
    ///
    /// Lower values favour fewer rows more strongly.
    pub row_penalty: f64,
    /// How far hand cards may overlap, as a fraction of their width,
    /// before they start to shrink.
    pub hand_overlap: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            row_penalty: 0.90,
            hand_overlap: 0.20,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.row_penalty > 0.0 && self.row_penalty <= 1.0) {
            return Err(ConfigError::RowPenaltyOutOfRange {
                penalty: self.row_penalty,
            });
        }
        if !(self.hand_overlap >= 0.0 && self.hand_overlap < 1.0) {
            return Err(ConfigError::OverlapOutOfRange {
                overlap: self.hand_overlap,
            });
        }
        Ok(())
    }
}

fn validate_widths(min: u32, max: u32) -> Result<(), ConfigError> {
    if max == 0 {
        return Err(ConfigError::NonPositiveMaxWidth { max });
    }
    if min > max {
        return Err(ConfigError::MinWidthExceedsMaxWidth { min, max });
    }
    Ok(())
}

fn validate_gap(gap: f64) -> Result<(), ConfigError> {
    // Written this way round so that NaN is rejected too
    if !(gap >= 0.0) {
        return Err(ConfigError::NegativeGap { gap });
    }
    Ok(())
}

fn validate_fixed_space(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value >= 0.0) {
        return Err(ConfigError::NegativeFixedSpace { field, value });
    }
    Ok(())
}
