//! Blinds, bosses and target scores.
//!
//! An ante is three blinds of rising difficulty. Targets come from a lookup
//! table keyed by `(ante, blind)`; antes the table does not list fall back
//! to a closed form.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Position within an ante.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BlindType {
    Small,
    Big,
    Boss,
}

impl BlindType {
    /// All blinds in play order.
    pub const ALL: [BlindType; 3] = [BlindType::Small, BlindType::Big, BlindType::Boss];

    /// The following blind within the same ante, `None` after the Boss.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            BlindType::Small => Some(BlindType::Big),
            BlindType::Big => Some(BlindType::Boss),
            BlindType::Boss => None,
        }
    }

    /// Display name, also used in saves.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BlindType::Small => "Small Blind",
            BlindType::Big => "Big Blind",
            BlindType::Boss => "Boss Blind",
        }
    }

    /// Parse a display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

impl std::fmt::Display for BlindType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Targets for one ante.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRow {
    pub ante: u32,
    pub small: u64,
    pub big: u64,
    pub boss: u64,
}

impl TargetRow {
    /// Closed-form row: base `300 + 75 × (ante − 1)`, Big 1.5×, Boss 2×.
    #[must_use]
    pub fn fallback(ante: u32) -> Self {
        let base = 300 + 75 * u64::from(ante.max(1) - 1);
        Self {
            ante,
            small: base,
            big: base * 3 / 2,
            boss: base * 2,
        }
    }

    /// Target for a blind in this row.
    #[must_use]
    pub fn target(&self, blind: BlindType) -> u64 {
        match blind {
            BlindType::Small => self.small,
            BlindType::Big => self.big,
            BlindType::Boss => self.boss,
        }
    }
}

/// Ante × blind target table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetTable {
    rows: Vec<TargetRow>,
}

impl TargetTable {
    /// Create a table from explicit rows.
    #[must_use]
    pub fn new(rows: Vec<TargetRow>) -> Self {
        Self { rows }
    }

    /// A table with no rows: every target uses the closed form.
    #[must_use]
    pub fn closed_form() -> Self {
        Self { rows: Vec::new() }
    }

    /// Target score for `(ante, blind)`, before any boss effect.
    #[must_use]
    pub fn target(&self, ante: u32, blind: BlindType) -> u64 {
        self.rows
            .iter()
            .find(|r| r.ante == ante)
            .copied()
            .unwrap_or_else(|| TargetRow::fallback(ante))
            .target(blind)
    }

    /// Number of explicit rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if every target uses the closed form.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for TargetTable {
    fn default() -> Self {
        const BASES: [u64; 8] = [300, 800, 2_000, 5_000, 11_000, 20_000, 35_000, 50_000];
        let rows = BASES
            .iter()
            .zip(1u32..)
            .map(|(&base, ante)| TargetRow {
                ante,
                small: base,
                big: base * 3 / 2,
                boss: base * 2,
            })
            .collect();
        Self { rows }
    }
}

/// What a boss does when its blind starts. Applied once, on entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossEffect {
    /// Double the blind's target score.
    DoubleChips,
    /// Integer-halve the player's money.
    HalveMoney,
}

impl BossEffect {
    /// Apply to a freshly computed target and the current money.
    pub fn apply(self, target: &mut u64, money: &mut u64) {
        match self {
            BossEffect::DoubleChips => *target = target.saturating_mul(2),
            BossEffect::HalveMoney => *money /= 2,
        }
    }

    /// Short description for notifications.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            BossEffect::DoubleChips => "target score doubled",
            BossEffect::HalveMoney => "money halved",
        }
    }
}

/// A named boss with its entry effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub effect: BossEffect,
}

impl Boss {
    #[must_use]
    pub fn new(name: impl Into<String>, effect: BossEffect) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }
}

/// Bosses a Boss Blind may draw from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BossCatalog {
    bosses: Vec<Boss>,
}

impl BossCatalog {
    #[must_use]
    pub fn new(bosses: Vec<Boss>) -> Self {
        Self { bosses }
    }

    /// Pick a boss uniformly at random. `None` for an empty catalog.
    pub fn choose(&self, rng: &mut GameRng) -> Option<&Boss> {
        rng.choose(&self.bosses)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bosses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Boss> {
        self.bosses.iter()
    }
}

impl Default for BossCatalog {
    fn default() -> Self {
        Self::new(vec![
            Boss::new("The Wall", BossEffect::DoubleChips),
            Boss::new("The Tax", BossEffect::HalveMoney),
        ])
    }
}
