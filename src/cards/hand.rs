//! The dealt hand and its display ordering.
//!
//! Players address cards by display slot; the engine stores cards in deal
//! order and keeps a display-to-underlying mapping that is recomputed after
//! every deal and resort. Selection is tracked by card identity so it
//! survives a resort.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Display sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Rank descending (Ace high), ties broken by suit.
    #[default]
    RankThenSuit,
    /// Suit order, then rank descending.
    SuitThenRank,
}

impl SortMode {
    /// The other sort key.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortMode::RankThenSuit => SortMode::SuitThenRank,
            SortMode::SuitThenRank => SortMode::RankThenSuit,
        }
    }

    fn key(self, card: &Card) -> (u8, u8) {
        let rank = 14 - card.rank.high_order();
        let suit = card.suit as u8;
        match self {
            SortMode::RankThenSuit => (rank, suit),
            SortMode::SuitThenRank => (suit, rank),
        }
    }
}

/// Display slot indices chosen by the player (at most a handful).
pub type Selection = SmallVec<[usize; 8]>;

/// Cards currently held, in deal order, plus display mapping and selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealtHand {
    cards: Vec<Card>,
    display: Vec<usize>,
    sort: SortMode,
    selected: Vec<Card>,
}

impl DealtHand {
    /// Create a hand from dealt cards using the given sort key.
    #[must_use]
    pub fn new(cards: Vec<Card>, sort: SortMode) -> Self {
        let mut hand = Self {
            cards,
            display: Vec::new(),
            sort,
            selected: Vec::new(),
        };
        hand.recompute_display();
        hand
    }

    /// Number of held cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Current sort key.
    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards in display order.
    pub fn displayed(&self) -> impl Iterator<Item = Card> + '_ {
        self.display.iter().map(move |&i| self.cards[i])
    }

    /// Card at a display slot.
    #[must_use]
    pub fn at_display(&self, slot: usize) -> Option<Card> {
        self.display.get(slot).map(|&i| self.cards[i])
    }

    /// Remove the given cards and append replacements, then re-sort.
    ///
    /// Clears the selection: played or discarded cards are gone and the
    /// replacements start unselected.
    pub fn replace(&mut self, removed: &[Card], replacements: Vec<Card>) {
        self.cards.retain(|c| !removed.contains(c));
        self.cards.extend(replacements);
        self.selected.clear();
        self.recompute_display();
    }

    /// Append cards without removing any (topping up to a larger hand size).
    pub fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
        self.recompute_display();
    }

    /// Toggle the sort key and rebuild the display mapping.
    pub fn resort(&mut self) {
        self.sort = self.sort.toggled();
        self.recompute_display();
    }

    /// Toggle selection of the card at a display slot.
    ///
    /// Returns the new selection state, or `None` for an empty slot.
    pub fn toggle_selection(&mut self, slot: usize) -> Option<bool> {
        let card = self.at_display(slot)?;
        if let Some(pos) = self.selected.iter().position(|&c| c == card) {
            self.selected.remove(pos);
            Some(false)
        } else {
            self.selected.push(card);
            Some(true)
        }
    }

    /// Display slots of the selected cards under the current sort.
    #[must_use]
    pub fn selected_display_indices(&self) -> Selection {
        let mut slots: Selection = self
            .display
            .iter()
            .enumerate()
            .filter(|&(_, &i)| self.selected.contains(&self.cards[i]))
            .map(|(slot, _)| slot)
            .collect();
        slots.sort_unstable();
        slots
    }

    /// Selected cards, in selection order.
    #[must_use]
    pub fn selected_cards(&self) -> &[Card] {
        &self.selected
    }

    fn recompute_display(&mut self) {
        let sort = self.sort;
        let cards = &self.cards;
        let mut display: Vec<usize> = (0..cards.len()).collect();
        display.sort_by_key(|&i| sort.key(&cards[i]));
        self.display = display;
    }
}
