//! Effect resolution.
//!
//! The `EffectResolver` folds owned jokers against a played hand. All
//! additive terms commute and all multiplicative terms commute, so joker
//! order never changes the result.
//!
//! ## Resolution order
//!
//! 1. `expand_replays`: duplicate cards matched by `ReplayCard` effects
//! 2. `fold_scoring`: sum `AddChips`/`AddMult`, multiply `MultiplyMult`
//!    over the expanded card set
//! 3. `fold_money`: sum `AddMoney` when the blind is defeated
//!
//! Capacity effects (`AddHandSize`, `AddDiscards`) are read with
//! `capacity_bonus` whenever a limit is needed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::{Effect, EffectKind};
use super::joker::Joker;
use crate::cards::Card;
use crate::hands::HandType;

/// Played cards after replay expansion.
pub type PlayedCards = SmallVec<[Card; 8]>;

/// Upper bound on extra copies of one played card.
pub const MAX_REPLAY_COPIES: i64 = 8;

/// What a single joker added to a hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokerContribution {
    pub name: String,
    pub chips: i64,
    pub mult: i64,
    pub factor: i64,
}

/// Folded scoring terms of all owned jokers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokerFold {
    pub chips: i64,
    pub mult: i64,
    /// Product of matching `MultiplyMult` contributions (1 when none match).
    pub factor: i64,
    /// Per-joker breakdown, only jokers that contributed something.
    pub contributions: Vec<JokerContribution>,
}

impl Default for JokerFold {
    fn default() -> Self {
        Self {
            chips: 0,
            mult: 0,
            factor: 1,
            contributions: Vec::new(),
        }
    }
}

/// Generic interpreter for data-only effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Duplicate played cards matched by `ReplayCard` effects.
    ///
    /// Every replay effect matches against the original played cards, so
    /// two jokers replaying the same card add two copies. Copies are placed
    /// right after their original, at most `MAX_REPLAY_COPIES` per card.
    pub fn expand_replays<'a, I>(jokers: I, hand: HandType, played: &[Card]) -> PlayedCards
    where
        I: IntoIterator<Item = &'a Joker>,
    {
        let replays: SmallVec<[Effect; 4]> = jokers
            .into_iter()
            .flat_map(|j| j.effects.iter())
            .filter(|e| e.kind == EffectKind::ReplayCard && e.hand_rule.matches(hand))
            .copied()
            .collect();

        let mut expanded = PlayedCards::new();
        for card in played {
            expanded.push(*card);
            let copies = replays
                .iter()
                .filter(|e| e.card_rule.matches(card))
                .fold(0i64, |total, e| total.saturating_add(e.magnitude.max(0)))
                .min(MAX_REPLAY_COPIES);
            for _ in 0..copies {
                expanded.push(*card);
            }
        }
        expanded
    }

    /// Fold scoring effects against the classified hand and expanded cards.
    pub fn fold_scoring<'a, I>(jokers: I, hand: HandType, cards: &[Card]) -> JokerFold
    where
        I: IntoIterator<Item = &'a Joker>,
    {
        let mut fold = JokerFold::default();

        for joker in jokers {
            let mut part = JokerContribution {
                name: joker.name.clone(),
                chips: 0,
                mult: 0,
                factor: 1,
            };

            for effect in &joker.effects {
                let count = i64::try_from(effect.match_count(hand, cards)).unwrap_or(i64::MAX);
                if count == 0 {
                    continue;
                }
                let amount = effect.magnitude.saturating_mul(count);
                match effect.kind {
                    EffectKind::AddChips => part.chips = part.chips.saturating_add(amount),
                    EffectKind::AddMult => part.mult = part.mult.saturating_add(amount),
                    EffectKind::MultiplyMult => part.factor = part.factor.saturating_mul(amount),
                    _ => {}
                }
            }

            fold.chips = fold.chips.saturating_add(part.chips);
            fold.mult = fold.mult.saturating_add(part.mult);
            fold.factor = fold.factor.saturating_mul(part.factor);
            if part.chips != 0 || part.mult != 0 || part.factor != 1 {
                fold.contributions.push(part);
            }
        }

        fold
    }

    /// Money paid by `AddMoney` effects when a blind is defeated.
    ///
    /// Matched against the hand that defeated the blind; unconditional
    /// effects always pay once.
    pub fn fold_money<'a, I>(jokers: I, hand: HandType, cards: &[Card]) -> Vec<(String, i64)>
    where
        I: IntoIterator<Item = &'a Joker>,
    {
        jokers
            .into_iter()
            .filter_map(|joker| {
                let amount = joker
                    .effects
                    .iter()
                    .filter(|e| e.kind == EffectKind::AddMoney)
                    .map(|e| {
                        let count = i64::try_from(e.match_count(hand, cards)).unwrap_or(i64::MAX);
                        e.magnitude.saturating_mul(count)
                    })
                    .fold(0i64, i64::saturating_add);
                (amount != 0).then(|| (joker.name.clone(), amount))
            })
            .collect()
    }

    /// Sum of a passive capacity effect across jokers.
    pub fn capacity_bonus<'a, I>(jokers: I, kind: EffectKind) -> i64
    where
        I: IntoIterator<Item = &'a Joker>,
    {
        jokers
            .into_iter()
            .map(|j| j.passive(kind))
            .fold(0, i64::saturating_add)
    }
}
