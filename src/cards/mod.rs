//! Playing cards, the deck and the dealt hand.
//!
//! - `Card`: immutable rank + suit with a chip value
//! - `Deck`: 52 cards in shuffle order plus a deal cursor
//! - `DealtHand`: held cards, display sort and identity-based selection

mod card;
mod deck;
mod hand;

pub use card::{card_values, Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use hand::{DealtHand, Selection, SortMode};
