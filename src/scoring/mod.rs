//! Score computation.
//!
//! ```text
//! final = (levelBase + jokerChips + Σ cardValues) × (levelMult + jokerMult) × jokerFactor
//! ```
//!
//! Replays are expanded before card values are summed and before any other
//! effect is matched, so a replayed Ace adds its 11 chips twice and counts
//! twice for per-card effects.

use serde::{Deserialize, Serialize};

use crate::cards::{card_values, Card};
use crate::effects::{EffectResolver, JokerContribution, Joker, PlayedCards};
use crate::hands::{classify, HandLevels, HandTable, HandType};

/// Full breakdown of one scored hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub hand_type: HandType,
    pub level: u32,
    /// Cards as played (before replay).
    pub played: Vec<Card>,
    /// Cards after replay expansion.
    pub scored: PlayedCards,
    /// Level-scaled base chips.
    pub base_chips: u64,
    /// Level multiplier.
    pub base_mult: u64,
    /// Sum of chip values of the scored cards.
    pub card_chips: u64,
    pub joker_chips: i64,
    pub joker_mult: i64,
    pub joker_factor: i64,
    pub jokers: Vec<JokerContribution>,
    /// Chip term after all additions (never negative).
    pub chips: u64,
    /// Multiplier term after all additions (never negative).
    pub mult: u64,
    pub total: u64,
}

/// Classify and score a played hand.
pub fn score_hand<'a, I>(played: &[Card], jokers: I, table: &HandTable, levels: &HandLevels) -> ScoreBreakdown
where
    I: IntoIterator<Item = &'a Joker> + Clone,
{
    let hand_type = classify(played);
    let scored = EffectResolver::expand_replays(jokers.clone(), hand_type, played);
    let fold = EffectResolver::fold_scoring(jokers, hand_type, &scored);

    let level = levels.level(hand_type);
    let base_chips = table.base_score(hand_type, level);
    let base_mult = table.mult(hand_type);
    let card_chips = u64::from(card_values(&scored));

    let chips = clamp((base_chips as i64).saturating_add(fold.chips).saturating_add(card_chips as i64));
    let mult = clamp((base_mult as i64).saturating_add(fold.mult));
    let factor = clamp(fold.factor);

    ScoreBreakdown {
        hand_type,
        level,
        played: played.to_vec(),
        scored,
        base_chips,
        base_mult,
        card_chips,
        joker_chips: fold.chips,
        joker_mult: fold.mult,
        joker_factor: fold.factor,
        jokers: fold.contributions,
        chips,
        mult,
        total: chips.saturating_mul(mult).saturating_mul(factor),
    }
}

fn clamp(value: i64) -> u64 {
    value.max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::effects::{CardMatchingRule, Effect, HandMatchingRule};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn plain(played: &[Card]) -> ScoreBreakdown {
        let none: [Joker; 0] = [];
        score_hand(played, &none, &HandTable::default(), &HandLevels::new())
    }

    #[test]
    fn test_wheel_scores_220() {
        let score = plain(&[
            c(Rank::Ace, Suit::Spades),
            c(Rank::Two, Suit::Hearts),
            c(Rank::Three, Suit::Clubs),
            c(Rank::Four, Suit::Diamonds),
            c(Rank::Five, Suit::Spades),
        ]);
        assert_eq!(score.hand_type, HandType::Straight);
        assert_eq!(score.card_chips, 25);
        assert_eq!(score.total, 220);
    }

    #[test]
    fn test_pair_scores_68() {
        let score = plain(&[
            c(Rank::Seven, Suit::Hearts),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::King, Suit::Diamonds),
        ]);
        assert_eq!(score.base_chips, 10);
        assert_eq!(score.card_chips, 24);
        assert_eq!(score.total, 68);
    }

    #[test]
    fn test_royal_flush_scores_1208() {
        let score = plain(&[
            c(Rank::Ten, Suit::Hearts),
            c(Rank::Jack, Suit::Hearts),
            c(Rank::Queen, Suit::Hearts),
            c(Rank::King, Suit::Hearts),
            c(Rank::Ace, Suit::Hearts),
        ]);
        assert_eq!(score.hand_type, HandType::RoyalFlush);
        assert_eq!(score.base_chips, 100);
        assert_eq!(score.card_chips, 51);
        assert_eq!(score.total, 1208);
    }

    #[test]
    fn test_levels_raise_base() {
        let mut levels = HandLevels::new();
        levels.level_up(HandType::Pair);
        let none: [Joker; 0] = [];
        let score = score_hand(
            &[c(Rank::Seven, Suit::Hearts), c(Rank::Seven, Suit::Clubs)],
            &none,
            &HandTable::default(),
            &levels,
        );
        assert_eq!(score.level, 2);
        assert_eq!(score.base_chips, 25);
        assert_eq!(score.total, (25 + 14) * 2);
    }

    #[test]
    fn test_jokers_fold_into_formula() {
        let jokers = vec![
            Joker::new("Sly", 3).with_effect(Effect::add_chips(50).when_hand(HandMatchingRule::ContainsPair)),
            Joker::new("Jolly", 3).with_effect(Effect::add_mult(8).when_hand(HandMatchingRule::ContainsPair)),
            Joker::new("Duo", 8).with_effect(Effect::multiply_mult(2).when_hand(HandMatchingRule::ContainsPair)),
        ];
        let score = score_hand(
            &[c(Rank::Seven, Suit::Hearts), c(Rank::Seven, Suit::Clubs), c(Rank::King, Suit::Diamonds)],
            &jokers,
            &HandTable::default(),
            &HandLevels::new(),
        );
        // (10 + 50 + 24) × (2 + 8) × 2
        assert_eq!(score.total, 84 * 10 * 2);
        assert_eq!(score.jokers.len(), 3);
    }

    #[test]
    fn test_replay_counts_card_value_twice() {
        let jokers = vec![Joker::new("Echo", 5).with_effect(Effect::replay(1).per_card(CardMatchingRule::IsAce))];
        let score = score_hand(
            &[c(Rank::Ace, Suit::Hearts), c(Rank::Three, Suit::Clubs)],
            &jokers,
            &HandTable::default(),
            &HandLevels::new(),
        );
        // Classification uses the played cards, not the replayed set
        assert_eq!(score.hand_type, HandType::HighCard);
        assert_eq!(score.card_chips, 11 + 11 + 3);
        assert_eq!(score.total, 5 + 25);
    }

    #[test]
    fn test_replay_feeds_per_card_effects() {
        let jokers = vec![
            Joker::new("Echo", 5).with_effect(Effect::replay(1).per_card(CardMatchingRule::IsAce)),
            Joker::new("Scholar", 4).with_effect(Effect::add_mult(4).per_card(CardMatchingRule::IsAce)),
        ];
        let score = score_hand(&[c(Rank::Ace, Suit::Hearts)], &jokers, &HandTable::default(), &HandLevels::new());
        assert_eq!(score.joker_mult, 8);
        assert_eq!(score.total, (5 + 22) * (1 + 8));
    }
}
