//! Hand evaluation and deck properties.
//!
//! These tests check classification over every starting rank and suit,
//! plus randomized properties of classification and shuffling.

use proptest::prelude::*;
use rust_ante::{card_values, classify, evaluate, Card, Deck, GameRng, HandType, Rank, Suit, DECK_SIZE};

fn run_of(start: usize, suit: Suit) -> Vec<Card> {
    (0..5)
        .map(|offset| Card::new(Rank::ALL[(start + offset) % 13], suit))
        .collect()
}

fn sorted(cards: &[Card]) -> Vec<(Rank, Suit)> {
    let mut keys: Vec<_> = cards.iter().map(|c| (c.rank, c.suit)).collect();
    keys.sort_unstable();
    keys
}

/// Every same-suit run of five is a straight flush, except broadway.
#[test]
fn test_suited_runs() {
    for suit in Suit::ALL {
        // A-2-3-4-5 through 9-10-J-Q-K
        for start in 0..9 {
            assert_eq!(classify(&run_of(start, suit)), HandType::StraightFlush, "start {start}");
        }
        // 10-J-Q-K-A
        assert_eq!(classify(&run_of(9, suit)), HandType::RoyalFlush);
        // J-Q-K-A-2 does not wrap
        assert_eq!(classify(&run_of(10, suit)), HandType::Flush);
    }
}

/// The worked examples from the scoring rules.
#[test]
fn test_reference_hands() {
    let wheel = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Four, Suit::Diamonds),
        Card::new(Rank::Five, Suit::Spades),
    ];
    let eval = evaluate(&wheel);
    assert_eq!(eval.hand_type, HandType::Straight);
    assert_eq!(eval.card_value, 25);

    let pair = [
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::King, Suit::Diamonds),
    ];
    assert_eq!(evaluate(&pair), rust_ante::Evaluation { hand_type: HandType::Pair, card_value: 24 });

    let full_house = [
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Four, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Clubs),
    ];
    assert_eq!(classify(&full_house), HandType::FullHouse);
}

/// Empty and single-card selections are High Card.
#[test]
fn test_small_inputs() {
    assert_eq!(classify(&[]), HandType::HighCard);
    assert_eq!(classify(&[Card::new(Rank::Ace, Suit::Spades)]), HandType::HighCard);
}

/// A fresh deck holds all 52 distinct cards.
#[test]
fn test_new_deck_is_complete() {
    let deck = Deck::new();
    let mut keys = sorted(deck.cards());
    keys.dedup();
    assert_eq!(keys.len(), DECK_SIZE);
    assert_eq!(card_values(deck.cards()), 4 * (11 + 2 + 3 + 4 + 5 + 6 + 7 + 8 + 9 + 10 * 4));
}

proptest! {
    /// Removing a card never raises the classification.
    #[test]
    fn prop_removal_never_raises(seed in any::<u64>(), size in 1usize..=5, drop in 0usize..5) {
        let mut deck = Deck::shuffled(&mut GameRng::new(seed));
        let cards = deck.deal(size);
        let drop = drop % size;

        let mut fewer = cards.clone();
        fewer.remove(drop);

        prop_assert!(classify(&fewer) <= classify(&cards));
    }

    /// Same seed, same order; shuffling never changes the card multiset.
    #[test]
    fn prop_shuffle_deterministic(seed in any::<u64>()) {
        let a = Deck::shuffled(&mut GameRng::new(seed));
        let b = Deck::shuffled(&mut GameRng::new(seed));
        prop_assert_eq!(a.cards(), b.cards());
        prop_assert_eq!(sorted(a.cards()), sorted(Deck::new().cards()));
    }

    /// Different seeds give different orders.
    #[test]
    fn prop_seeds_differ(seed in any::<u64>()) {
        let a = Deck::shuffled(&mut GameRng::new(seed));
        let b = Deck::shuffled(&mut GameRng::new(seed.wrapping_add(1)));
        prop_assert_ne!(a.cards(), b.cards());
    }

    /// Card value is the sum of the parts regardless of classification.
    #[test]
    fn prop_card_value_sums(seed in any::<u64>(), size in 0usize..=5) {
        let mut deck = Deck::shuffled(&mut GameRng::new(seed));
        let cards = deck.deal(size);
        let expected: u32 = cards.iter().map(|c| c.rank.value()).sum();
        prop_assert_eq!(evaluate(&cards).card_value, expected);
    }
}
