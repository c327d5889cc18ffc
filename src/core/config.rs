//! Game configuration.
//!
//! A run is configured at construction by a `GameConfig`:
//! - `RulesConfig`: capacities, economy constants and the save version
//! - `TargetTable`: ante × blind target scores
//! - `HandTable`: per-hand-type base chips, multiplier and level bonus
//! - `JokerCatalog`: jokers the shop can offer
//! - `BossCatalog`: bosses a Boss Blind can draw
//!
//! Tables come from a `ConfigProvider`. A table the provider cannot supply
//! is replaced by its built-in default and reported as a warning; loading
//! configuration never fails.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::effects::JokerCatalog;
use crate::hands::{HandStats, HandTable};
use crate::rules::{BossCatalog, TargetRow, TargetTable};

/// Rule constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Cards held before joker bonuses.
    pub hand_size: usize,

    /// Hands playable per blind.
    pub hands_per_blind: u32,

    /// Discards per blind before joker bonuses.
    pub discards_per_blind: u32,

    /// Most cards a single play or discard may use.
    pub max_selection: usize,

    /// Money at the start of a run.
    pub starting_money: u64,

    /// Defeating this ante's Boss Blind wins the run.
    pub max_ante: u32,

    /// Reroll cost when a shop opens.
    pub reroll_base: u64,

    /// Added to the reroll cost after each reroll.
    pub reroll_step: u64,

    /// Jokers offered per shop visit.
    pub shop_slots: usize,

    /// Base reward per blind type: Small, Big, Boss.
    pub blind_rewards: [u64; 3],

    /// Money per unused hand at blind end.
    pub unused_hand_reward: u64,

    /// Money per unused discard at blind end.
    pub unused_discard_reward: u64,

    /// Save format written by this build.
    pub save_version: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            hands_per_blind: 4,
            discards_per_blind: 3,
            max_selection: 5,
            starting_money: 4,
            max_ante: 8,
            reroll_base: 5,
            reroll_step: 2,
            shop_slots: 2,
            blind_rewards: [4, 5, 6],
            unused_hand_reward: 1,
            unused_discard_reward: 1,
            save_version: 1,
        }
    }
}

/// Complete run configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rules: RulesConfig,
    pub targets: TargetTable,
    pub hands: HandTable,
    pub jokers: JokerCatalog,
    pub bosses: BossCatalog,
}

impl GameConfig {
    /// Load every table from `provider`, substituting built-in defaults.
    ///
    /// Returns the configuration and one warning per substituted table.
    pub fn load(provider: &impl ConfigProvider) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let config = Self {
            rules: or_default("rules", provider.rules(), &mut warnings),
            targets: or_default("target table", provider.targets(), &mut warnings),
            hands: or_default("hand table", provider.hands(), &mut warnings),
            jokers: or_default("joker catalog", provider.jokers(), &mut warnings),
            bosses: or_default("boss catalog", provider.bosses(), &mut warnings),
        };
        (config, warnings)
    }

    /// Replace the rules constants.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the target table.
    #[must_use]
    pub fn with_targets(mut self, targets: TargetTable) -> Self {
        self.targets = targets;
        self
    }

    /// Replace the joker catalog.
    #[must_use]
    pub fn with_jokers(mut self, jokers: JokerCatalog) -> Self {
        self.jokers = jokers;
        self
    }

    /// Replace the boss catalog.
    #[must_use]
    pub fn with_bosses(mut self, bosses: BossCatalog) -> Self {
        self.bosses = bosses;
        self
    }
}

fn or_default<T: Default>(table: &str, loaded: Result<T, ConfigError>, warnings: &mut Vec<String>) -> T {
    loaded.unwrap_or_else(|err| {
        warn!(table, error = %err, "using built-in default");
        warnings.push(format!("{table}: {err}; using built-in default"));
        T::default()
    })
}

/// Source of configuration tables.
///
/// Each method is independent: one failing table does not affect the rest.
pub trait ConfigProvider {
    fn rules(&self) -> Result<RulesConfig, ConfigError>;
    fn targets(&self) -> Result<TargetTable, ConfigError>;
    fn hands(&self) -> Result<HandTable, ConfigError>;
    fn jokers(&self) -> Result<JokerCatalog, ConfigError>;
    fn bosses(&self) -> Result<BossCatalog, ConfigError>;
}

/// Supplies the built-in tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinConfig;

impl ConfigProvider for BuiltinConfig {
    fn rules(&self) -> Result<RulesConfig, ConfigError> {
        Ok(RulesConfig::default())
    }

    fn targets(&self) -> Result<TargetTable, ConfigError> {
        Ok(TargetTable::default())
    }

    fn hands(&self) -> Result<HandTable, ConfigError> {
        Ok(HandTable::default())
    }

    fn jokers(&self) -> Result<JokerCatalog, ConfigError> {
        Ok(JokerCatalog::default())
    }

    fn bosses(&self) -> Result<BossCatalog, ConfigError> {
        Ok(BossCatalog::default())
    }
}

/// Reads tables from JSON files in a directory.
///
/// | File           | Contents                                   |
/// |----------------|--------------------------------------------|
/// | `rules.json`   | `RulesConfig` object (missing keys default) |
/// | `targets.json` | array of `{ante, small, big, boss}`         |
/// | `hands.json`   | array of `{hand_type, base, mult, level_bonus}` |
/// | `jokers.json`  | array of jokers                             |
/// | `bosses.json`  | array of `{name, effect}`                   |
#[derive(Clone, Debug)]
pub struct JsonConfigProvider {
    dir: PathBuf,
}

impl JsonConfigProvider {
    /// Read tables from `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the tables are read from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T, ConfigError> {
        let path = self.dir.join(file);
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }
}

impl ConfigProvider for JsonConfigProvider {
    fn rules(&self) -> Result<RulesConfig, ConfigError> {
        let rules: RulesConfig = self.read("rules.json")?;
        if rules.max_ante == 0 || rules.hands_per_blind == 0 || rules.max_selection == 0 {
            return Err(ConfigError::Invalid {
                table: "rules",
                reason: "max_ante, hands_per_blind and max_selection must be positive".to_string(),
            });
        }
        Ok(rules)
    }

    fn targets(&self) -> Result<TargetTable, ConfigError> {
        let rows: Vec<TargetRow> = self.read("targets.json")?;
        Ok(TargetTable::new(rows))
    }

    fn hands(&self) -> Result<HandTable, ConfigError> {
        let rows: Vec<HandStats> = self.read("hands.json")?;
        Ok(HandTable::from_rows(rows))
    }

    fn jokers(&self) -> Result<JokerCatalog, ConfigError> {
        self.read("jokers.json")
    }

    fn bosses(&self) -> Result<BossCatalog, ConfigError> {
        self.read("bosses.json")
    }
}
