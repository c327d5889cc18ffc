//! The run's aggregate state.
//!
//! `GameState` holds everything that changes during a run: progression
//! (ante, blind, target, score), per-blind budgets, money, owned jokers,
//! the deck and dealt hand, hand levels and the action history.
//!
//! Owned jokers and the history are `im::Vector`s so that snapshots taken
//! for notifications clone cheaply.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::RulesConfig;
use crate::cards::{DealtHand, Deck};
use crate::effects::{EffectKind, EffectResolver, Joker};
use crate::hands::{HandLevels, HandType};
use crate::rules::{BlindType, Boss};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The final ante's Boss Blind was defeated.
    Victory,
    /// A blind ran out of hands below its target.
    Defeat,
    /// The player quit (or the front end went away).
    Quit,
}

/// Which action set the run currently accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Blind,
    Shop,
    Finished(RunOutcome),
}

impl Phase {
    /// Short description used in rejection reasons.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Phase::Blind => "a blind is in progress",
            Phase::Shop => "the shop is open",
            Phase::Finished(_) => "the run is over",
        }
    }
}

/// Complete run state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Progression ===
    /// Current ante, starting at 1.
    pub ante: u32,

    /// Current blind within the ante.
    pub blind: BlindType,

    /// Boss of the current Boss Blind.
    pub boss: Option<Boss>,

    /// Score needed to defeat the current blind.
    pub target: u64,

    /// Score accumulated this blind.
    pub score: u64,

    /// Hands played this blind.
    pub hands_played: u32,

    /// Discards used this blind.
    pub discards_used: u32,

    pub phase: Phase,

    // === Economy ===
    pub money: u64,

    /// Owned jokers, in display order.
    pub jokers: Vector<Joker>,

    /// Cost of the next shop reroll.
    pub reroll_cost: u64,

    // === Cards ===
    pub deck: Deck,
    pub hand: DealtHand,

    // === Statistics ===
    pub levels: HandLevels,

    /// Times each hand type has been played this run.
    pub hand_counts: FxHashMap<HandType, u32>,

    /// Every accepted action, oldest first.
    pub history: Vector<ActionRecord>,

    rules: RulesConfig,
}

impl GameState {
    /// State at the start of a run: Ante 1, Small Blind, nothing dealt.
    #[must_use]
    pub fn new(rules: RulesConfig, deck: Deck) -> Self {
        Self {
            ante: 1,
            blind: BlindType::Small,
            boss: None,
            target: 0,
            score: 0,
            hands_played: 0,
            discards_used: 0,
            phase: Phase::Blind,
            money: rules.starting_money,
            jokers: Vector::new(),
            reroll_cost: rules.reroll_base,
            deck,
            hand: DealtHand::default(),
            levels: HandLevels::new(),
            hand_counts: FxHashMap::default(),
            history: Vector::new(),
            rules,
        }
    }

    /// Rule constants this state was created with.
    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Cards held: base hand size plus joker bonuses (at least 1).
    #[must_use]
    pub fn hand_size(&self) -> usize {
        let bonus = EffectResolver::capacity_bonus(&self.jokers, EffectKind::AddHandSize);
        (self.rules.hand_size as i64).saturating_add(bonus).max(1) as usize
    }

    /// Hands allowed per blind.
    #[must_use]
    pub fn max_hands(&self) -> u32 {
        self.rules.hands_per_blind
    }

    /// Discards allowed per blind: base plus joker bonuses.
    #[must_use]
    pub fn max_discards(&self) -> u32 {
        let bonus = EffectResolver::capacity_bonus(&self.jokers, EffectKind::AddDiscards);
        i64::from(self.rules.discards_per_blind).saturating_add(bonus).clamp(0, i64::from(u32::MAX)) as u32
    }

    #[must_use]
    pub fn hands_left(&self) -> u32 {
        self.max_hands().saturating_sub(self.hands_played)
    }

    #[must_use]
    pub fn discards_left(&self) -> u32 {
        self.max_discards().saturating_sub(self.discards_used)
    }

    /// Check if a discard would currently be accepted.
    #[must_use]
    pub fn can_discard(&self) -> bool {
        self.phase == Phase::Blind && self.discards_used < self.max_discards()
    }

    /// Check if the run has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Clear the per-blind counters and the reroll ramp.
    pub fn reset_blind(&mut self) {
        self.score = 0;
        self.hands_played = 0;
        self.discards_used = 0;
        self.reroll_cost = self.rules.reroll_base;
    }

    /// Raise a hand type by one level and return the new level.
    pub fn level_up(&mut self, hand: HandType) -> u32 {
        self.levels.level_up(hand)
    }

    /// Count one play of `hand`.
    pub fn record_hand(&mut self, hand: HandType) {
        *self.hand_counts.entry(hand).or_insert(0) += 1;
    }

    /// Times `hand` has been played this run.
    #[must_use]
    pub fn times_played(&self, hand: HandType) -> u32 {
        self.hand_counts.get(&hand).copied().unwrap_or(0)
    }

    /// Append an accepted action to the history.
    pub fn record(&mut self, action: impl Into<Action>) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(self.ante, self.blind, sequence, action));
    }
}
