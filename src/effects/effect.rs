//! Effect definitions.
//!
//! Effects are data-only records: a kind, a magnitude and two matching
//! rules. They carry no callbacks, so jokers stay serializable and the fold
//! in [`super::EffectResolver`] is the single place that gives them meaning.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::hands::HandType;

/// What an effect does when it matches.
///
/// ## Scoring
/// - `AddChips`: added to the chip term
/// - `AddMult`: added to the multiplier term
/// - `MultiplyMult`: multiplied into the multiplier factor
///
/// ## Card set
/// - `ReplayCard`: matching played cards are duplicated before scoring
///
/// ## Passive
/// - `AddMoney`: paid out when a blind is defeated
/// - `AddHandSize`, `AddDiscards`: capacity bonuses, never scored
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    AddChips,
    AddMult,
    MultiplyMult,
    AddMoney,
    ReplayCard,
    AddHandSize,
    AddDiscards,
}

/// Predicate over the classified hand type.
///
/// The `Contains*` rules are containment tests: a Full House contains both a
/// pair and three of a kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandMatchingRule {
    /// Always matches.
    #[default]
    None,
    ContainsPair,
    ContainsTwoPair,
    ContainsThreeOfAKind,
    ContainsStraight,
    ContainsFlush,
    ContainsFourOfAKind,
    /// Matches one hand type exactly.
    Exactly(HandType),
}

impl HandMatchingRule {
    /// Check the rule against a classified hand.
    #[must_use]
    pub fn matches(self, hand: HandType) -> bool {
        use HandType::*;
        match self {
            HandMatchingRule::None => true,
            HandMatchingRule::ContainsPair => {
                matches!(hand, Pair | TwoPair | ThreeOfAKind | FullHouse | FourOfAKind)
            }
            HandMatchingRule::ContainsTwoPair => matches!(hand, TwoPair | FullHouse),
            HandMatchingRule::ContainsThreeOfAKind => {
                matches!(hand, ThreeOfAKind | FullHouse | FourOfAKind)
            }
            HandMatchingRule::ContainsStraight => {
                matches!(hand, Straight | StraightFlush | RoyalFlush)
            }
            HandMatchingRule::ContainsFlush => matches!(hand, Flush | StraightFlush | RoyalFlush),
            HandMatchingRule::ContainsFourOfAKind => matches!(hand, FourOfAKind),
            HandMatchingRule::Exactly(expected) => hand == expected,
        }
    }
}

/// Predicate over a single played card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardMatchingRule {
    /// No per-card test; the hand rule alone decides.
    #[default]
    None,
    IsAce,
    IsFace,
    IsSpade,
    IsHeart,
    IsDiamond,
    IsClub,
}

impl CardMatchingRule {
    /// Check the rule against one card. `None` accepts every card.
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        match self {
            CardMatchingRule::None => true,
            CardMatchingRule::IsAce => card.rank == Rank::Ace,
            CardMatchingRule::IsFace => card.rank.is_face(),
            CardMatchingRule::IsSpade => card.suit == Suit::Spades,
            CardMatchingRule::IsHeart => card.suit == Suit::Hearts,
            CardMatchingRule::IsDiamond => card.suit == Suit::Diamonds,
            CardMatchingRule::IsClub => card.suit == Suit::Clubs,
        }
    }

    /// Number of cards satisfying the rule.
    #[must_use]
    pub fn count(self, cards: &[Card]) -> u64 {
        cards.iter().filter(|c| self.matches(c)).count() as u64
    }
}

/// A single joker effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub magnitude: i64,
    #[serde(default)]
    pub hand_rule: HandMatchingRule,
    #[serde(default)]
    pub card_rule: CardMatchingRule,
}

impl Effect {
    /// Create an unconditional effect.
    #[must_use]
    pub const fn new(kind: EffectKind, magnitude: i64) -> Self {
        Self {
            kind,
            magnitude,
            hand_rule: HandMatchingRule::None,
            card_rule: CardMatchingRule::None,
        }
    }

    /// `+chips`.
    #[must_use]
    pub const fn add_chips(amount: i64) -> Self {
        Self::new(EffectKind::AddChips, amount)
    }

    /// `+mult`.
    #[must_use]
    pub const fn add_mult(amount: i64) -> Self {
        Self::new(EffectKind::AddMult, amount)
    }

    /// `×mult`.
    #[must_use]
    pub const fn multiply_mult(factor: i64) -> Self {
        Self::new(EffectKind::MultiplyMult, factor)
    }

    /// `+$` at blind end.
    #[must_use]
    pub const fn add_money(amount: i64) -> Self {
        Self::new(EffectKind::AddMoney, amount)
    }

    /// Replay matching cards `copies` extra times.
    #[must_use]
    pub const fn replay(copies: i64) -> Self {
        Self::new(EffectKind::ReplayCard, copies)
    }

    /// `+hand size`.
    #[must_use]
    pub const fn add_hand_size(amount: i64) -> Self {
        Self::new(EffectKind::AddHandSize, amount)
    }

    /// `+discards`.
    #[must_use]
    pub const fn add_discards(amount: i64) -> Self {
        Self::new(EffectKind::AddDiscards, amount)
    }

    /// Restrict to hands matching `rule` (builder pattern).
    #[must_use]
    pub fn when_hand(mut self, rule: HandMatchingRule) -> Self {
        self.hand_rule = rule;
        self
    }

    /// Count matching cards instead of the hand (builder pattern).
    #[must_use]
    pub fn per_card(mut self, rule: CardMatchingRule) -> Self {
        self.card_rule = rule;
        self
    }

    /// How many times this effect applies to a played hand.
    ///
    /// The hand rule gates; when a card rule is present the count is the
    /// number of satisfying cards, otherwise 1.
    #[must_use]
    pub fn match_count(&self, hand: HandType, cards: &[Card]) -> u64 {
        if !self.hand_rule.matches(hand) {
            return 0;
        }
        match self.card_rule {
            CardMatchingRule::None => 1,
            rule => rule.count(cards),
        }
    }
}
