//! The 52-card deck with a deal cursor.
//!
//! Shuffling reorders the cards and rewinds the cursor; dealing advances the
//! cursor without removing anything, so the deck always holds the full
//! multiset of 52 cards.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Ordered deck plus the position of the next card to deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// A fresh, unshuffled deck: suits in display order, ranks Ace..King.
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards, cursor: 0 }
    }

    /// A fresh deck shuffled with `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Shuffle every card back into the deck and rewind the cursor.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.cursor = 0;
    }

    /// Deal up to `count` cards. Returns fewer when the deck runs out.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let end = (self.cursor + count).min(self.cards.len());
        let dealt = self.cards[self.cursor..end].to_vec();
        self.cursor = end;
        dealt
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Position of the next card to deal.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All cards in current shuffle order, dealt or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
