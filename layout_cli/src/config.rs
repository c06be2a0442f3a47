use std::path::Path;

use card_layout::{BattleZoneConfig, DualZoneConfig, Tuning, ZoneConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The contents of a layout config file.
///
/// Every section is optional and falls back to the library defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutFile {
    pub tuning: Tuning,
    pub zone: ZoneConfig,
    pub dual: DualZoneConfig,
    pub battle: BattleZoneConfig,
}

impl LayoutFile {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: LayoutFile = serde_json::from_str(&contents)?;
        file.validate()?;
        debug!(path = %path.display(), "Loaded layout config");
        Ok(file)
    }

    /// Like [`Self::load()`], but uses the defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.tuning.validate()?;
        self.zone.validate()?;
        self.dual.validate()?;
        self.battle.validate()?;
        Ok(())
    }
}
