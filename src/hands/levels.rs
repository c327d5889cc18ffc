//! Per-hand-type base score, multiplier and level scaling.
//!
//! Levels raise the base score only: level `L` scores
//! `base + (L - 1) * level_bonus` chips with an unchanged multiplier.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::hand_type::HandType;

/// Starting level of every hand type.
pub const BASE_LEVEL: u32 = 1;

/// Table row for one hand type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandStats {
    pub hand_type: HandType,
    /// Base chips at level 1.
    pub base: u64,
    /// Multiplier (level-independent).
    pub mult: u64,
    /// Extra base chips per level above 1.
    pub level_bonus: u64,
}

impl HandStats {
    /// Base chips at `level` (levels below 1 count as 1).
    #[must_use]
    pub fn base_at(&self, level: u32) -> u64 {
        let extra = u64::from(level.max(BASE_LEVEL) - BASE_LEVEL);
        self.base + extra * self.level_bonus
    }
}

/// Base/mult table for all hand types.
///
/// Always holds one row per hand type in index order; deserialization goes
/// through `from_rows`, so partial or reordered input is completed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HandStats>", into = "Vec<HandStats>")]
pub struct HandTable {
    rows: Vec<HandStats>,
}

impl From<Vec<HandStats>> for HandTable {
    fn from(rows: Vec<HandStats>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<HandTable> for Vec<HandStats> {
    fn from(table: HandTable) -> Self {
        table.rows
    }
}

impl HandTable {
    /// Build a table from rows. Hand types missing from `rows` fall back to
    /// the built-in row.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = HandStats>) -> Self {
        let mut table = Self::default();
        for row in rows {
            table.rows[row.hand_type.index()] = row;
        }
        table
    }

    /// Row for a hand type.
    #[must_use]
    pub fn stats(&self, hand: HandType) -> HandStats {
        self.rows[hand.index()]
    }

    /// Level-scaled base chips.
    #[must_use]
    pub fn base_score(&self, hand: HandType, level: u32) -> u64 {
        self.stats(hand).base_at(level)
    }

    /// Multiplier (levels do not change it).
    #[must_use]
    pub fn mult(&self, hand: HandType) -> u64 {
        self.stats(hand).mult
    }

    /// Iterate rows, lowest priority first.
    pub fn iter(&self) -> impl Iterator<Item = &HandStats> {
        self.rows.iter()
    }
}

impl Default for HandTable {
    fn default() -> Self {
        use HandType::*;
        let row = |hand_type, base, mult, level_bonus| HandStats {
            hand_type,
            base,
            mult,
            level_bonus,
        };
        Self {
            rows: vec![
                row(HighCard, 5, 1, 10),
                row(Pair, 10, 2, 15),
                row(TwoPair, 20, 2, 20),
                row(ThreeOfAKind, 30, 3, 20),
                row(Straight, 30, 4, 30),
                row(Flush, 35, 4, 15),
                row(FullHouse, 40, 4, 25),
                row(FourOfAKind, 60, 7, 30),
                row(StraightFlush, 100, 8, 40),
                row(RoyalFlush, 100, 8, 40),
            ],
        }
    }
}

/// Current level of every hand type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandLevels {
    levels: FxHashMap<HandType, u32>,
}

impl HandLevels {
    /// All hand types at level 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of a hand type (1 if never raised).
    #[must_use]
    pub fn level(&self, hand: HandType) -> u32 {
        self.levels.get(&hand).copied().unwrap_or(BASE_LEVEL)
    }

    /// Set a hand type's level (clamped to at least 1).
    pub fn set_level(&mut self, hand: HandType, level: u32) {
        self.levels.insert(hand, level.max(BASE_LEVEL));
    }

    /// Raise a hand type by one level and return the new level.
    pub fn level_up(&mut self, hand: HandType) -> u32 {
        let next = self.level(hand) + 1;
        self.levels.insert(hand, next);
        next
    }

    /// Every hand type with its level, lowest priority first.
    pub fn iter(&self) -> impl Iterator<Item = (HandType, u32)> + '_ {
        HandType::ALL.iter().map(move |&h| (h, self.level(h)))
    }
}
