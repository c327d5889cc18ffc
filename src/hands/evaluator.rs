//! Hand classification.
//!
//! Classification walks a fixed table of `(HandType, predicate)` entries from
//! highest to lowest priority and returns the first match. `HighCard` is the
//! last entry and always matches, so every input (including an empty one)
//! classifies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::hand_type::HandType;
use crate::cards::{card_values, Card, Rank};

/// Cards a flush or straight must contain.
pub const FIVE_CARD_HAND: usize = 5;

/// Broadway ordinals: A, 10, J, Q, K.
const BROADWAY: [u8; 5] = [1, 10, 11, 12, 13];

/// Wheel ordinals: A, 2, 3, 4, 5.
const WHEEL: [u8; 5] = [1, 2, 3, 4, 5];

/// Facts about a card set shared by every predicate.
#[derive(Clone, Debug)]
pub struct HandShape {
    len: usize,
    /// Rank multiplicities, largest first.
    counts: Vec<u8>,
    /// Distinct ordinals, ascending.
    ordinals: Vec<u8>,
    flush: bool,
}

impl HandShape {
    /// Analyse a card set.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut histogram: FxHashMap<Rank, u8> = FxHashMap::default();
        for card in cards {
            *histogram.entry(card.rank).or_insert(0) += 1;
        }

        let mut counts: Vec<u8> = histogram.values().copied().collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));

        let mut ordinals: Vec<u8> = histogram.keys().map(|r| r.ordinal()).collect();
        ordinals.sort_unstable();

        let flush = cards.len() == FIVE_CARD_HAND
            && cards.iter().all(|c| c.suit == cards[0].suit);

        Self {
            len: cards.len(),
            counts,
            ordinals,
            flush,
        }
    }

    /// Exactly five cards of one suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        self.flush
    }

    /// Exactly five distinct ranks forming a run, the wheel, or broadway.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        if self.len != FIVE_CARD_HAND || self.ordinals.len() != FIVE_CARD_HAND {
            return false;
        }
        if self.ordinals == WHEEL || self.ordinals == BROADWAY {
            return true;
        }
        self.ordinals.windows(2).all(|w| w[1] == w[0] + 1)
    }

    /// The ranks are exactly {A, 10, J, Q, K}.
    #[must_use]
    pub fn is_broadway(&self) -> bool {
        self.len == FIVE_CARD_HAND && self.ordinals == BROADWAY
    }

    fn count(&self, position: usize) -> u8 {
        self.counts.get(position).copied().unwrap_or(0)
    }
}

type Predicate = fn(&HandShape) -> bool;

fn royal_flush(s: &HandShape) -> bool {
    s.is_flush() && s.is_straight() && s.is_broadway()
}

fn straight_flush(s: &HandShape) -> bool {
    s.is_flush() && s.is_straight()
}

fn four_of_a_kind(s: &HandShape) -> bool {
    s.count(0) >= 4
}

fn full_house(s: &HandShape) -> bool {
    s.len == FIVE_CARD_HAND && s.count(0) == 3 && s.count(1) == 2
}

fn flush(s: &HandShape) -> bool {
    s.is_flush()
}

fn straight(s: &HandShape) -> bool {
    s.is_straight()
}

fn three_of_a_kind(s: &HandShape) -> bool {
    s.count(0) >= 3
}

fn two_pair(s: &HandShape) -> bool {
    s.count(0) >= 2 && s.count(1) >= 2
}

fn pair(s: &HandShape) -> bool {
    s.count(0) >= 2
}

fn high_card(_: &HandShape) -> bool {
    true
}

/// Classification table, highest priority first.
const CLASSIFIERS: [(HandType, Predicate); 10] = [
    (HandType::RoyalFlush, royal_flush),
    (HandType::StraightFlush, straight_flush),
    (HandType::FourOfAKind, four_of_a_kind),
    (HandType::FullHouse, full_house),
    (HandType::Flush, flush),
    (HandType::Straight, straight),
    (HandType::ThreeOfAKind, three_of_a_kind),
    (HandType::TwoPair, two_pair),
    (HandType::Pair, pair),
    (HandType::HighCard, high_card),
];

/// Classification result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub hand_type: HandType,
    /// Sum of the cards' chip values.
    pub card_value: u32,
}

/// Classify 0–5 cards into a hand type and sum their chip values.
#[must_use]
pub fn evaluate(cards: &[Card]) -> Evaluation {
    Evaluation {
        hand_type: classify(cards),
        card_value: card_values(cards),
    }
}

/// Classify a card set into its highest matching hand type.
#[must_use]
pub fn classify(cards: &[Card]) -> HandType {
    let shape = HandShape::of(cards);
    CLASSIFIERS
        .iter()
        .find(|(_, matches)| matches(&shape))
        .map_or(HandType::HighCard, |(hand, _)| *hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_empty_is_high_card() {
        let eval = evaluate(&[]);
        assert_eq!(eval.hand_type, HandType::HighCard);
        assert_eq!(eval.card_value, 0);
    }

    #[test]
    fn test_royal_flush() {
        let cards = [
            c(Rank::Ten, Suit::Hearts),
            c(Rank::Jack, Suit::Hearts),
            c(Rank::Queen, Suit::Hearts),
            c(Rank::King, Suit::Hearts),
            c(Rank::Ace, Suit::Hearts),
        ];
        let eval = evaluate(&cards);
        assert_eq!(eval.hand_type, HandType::RoyalFlush);
        assert_eq!(eval.card_value, 51);
    }

    #[test]
    fn test_steel_wheel_is_straight_flush() {
        let cards = [
            c(Rank::Ace, Suit::Spades),
            c(Rank::Two, Suit::Spades),
            c(Rank::Three, Suit::Spades),
            c(Rank::Four, Suit::Spades),
            c(Rank::Five, Suit::Spades),
        ];
        assert_eq!(classify(&cards), HandType::StraightFlush);
    }

    #[test]
    fn test_wheel_straight() {
        let cards = [
            c(Rank::Ace, Suit::Spades),
            c(Rank::Two, Suit::Hearts),
            c(Rank::Three, Suit::Clubs),
            c(Rank::Four, Suit::Diamonds),
            c(Rank::Five, Suit::Spades),
        ];
        let eval = evaluate(&cards);
        assert_eq!(eval.hand_type, HandType::Straight);
        assert_eq!(eval.card_value, 25);
    }

    #[test]
    fn test_broadway_straight_mixed_suits() {
        let cards = [
            c(Rank::Ace, Suit::Spades),
            c(Rank::King, Suit::Hearts),
            c(Rank::Queen, Suit::Clubs),
            c(Rank::Jack, Suit::Diamonds),
            c(Rank::Ten, Suit::Spades),
        ];
        assert_eq!(classify(&cards), HandType::Straight);
    }

    #[test]
    fn test_no_wraparound_straight() {
        // Q K A 2 3 is not a straight
        let cards = [
            c(Rank::Queen, Suit::Spades),
            c(Rank::King, Suit::Hearts),
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Two, Suit::Diamonds),
            c(Rank::Three, Suit::Spades),
        ];
        assert_eq!(classify(&cards), HandType::HighCard);
    }

    #[test]
    fn test_four_card_suited_is_not_flush() {
        let cards = [
            c(Rank::Two, Suit::Clubs),
            c(Rank::Six, Suit::Clubs),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::King, Suit::Clubs),
        ];
        assert_eq!(classify(&cards), HandType::HighCard);
    }

    #[test]
    fn test_four_card_run_is_not_straight() {
        let cards = [
            c(Rank::Five, Suit::Clubs),
            c(Rank::Six, Suit::Hearts),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Eight, Suit::Spades),
        ];
        assert_eq!(classify(&cards), HandType::HighCard);
    }

    #[test]
    fn test_rank_count_hands() {
        let pair = [
            c(Rank::Seven, Suit::Hearts),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::King, Suit::Diamonds),
        ];
        let eval = evaluate(&pair);
        assert_eq!(eval.hand_type, HandType::Pair);
        assert_eq!(eval.card_value, 24);

        let two_pair = [
            c(Rank::Seven, Suit::Hearts),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::King, Suit::Diamonds),
            c(Rank::King, Suit::Spades),
        ];
        assert_eq!(classify(&two_pair), HandType::TwoPair);

        let trips = [
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Nine, Suit::Diamonds),
        ];
        assert_eq!(classify(&trips), HandType::ThreeOfAKind);

        let quads = [
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Nine, Suit::Diamonds),
            c(Rank::Nine, Suit::Spades),
        ];
        assert_eq!(classify(&quads), HandType::FourOfAKind);

        let full_house = [
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Nine, Suit::Diamonds),
            c(Rank::Four, Suit::Spades),
            c(Rank::Four, Suit::Hearts),
        ];
        assert_eq!(classify(&full_house), HandType::FullHouse);
    }

    #[test]
    fn test_flush_beats_straight() {
        let flush = [
            c(Rank::Two, Suit::Diamonds),
            c(Rank::Five, Suit::Diamonds),
            c(Rank::Nine, Suit::Diamonds),
            c(Rank::Jack, Suit::Diamonds),
            c(Rank::King, Suit::Diamonds),
        ];
        assert_eq!(classify(&flush), HandType::Flush);
    }

    #[test]
    fn test_single_card() {
        let eval = evaluate(&[c(Rank::Ace, Suit::Clubs)]);
        assert_eq!(eval.hand_type, HandType::HighCard);
        assert_eq!(eval.card_value, 11);
    }
}
