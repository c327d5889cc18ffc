//! Player actions and action history.
//!
//! There are two action sets, one per phase:
//! - `BlindAction`: play, discard, resort, reorder or sell jokers, quit
//! - `ShopAction`: buy, reroll, sell, leave the shop, quit
//!
//! Card indices are display slots of the current (sorted) hand; joker and
//! shop indices are positions in the owned joker row and the offer.

use serde::{Deserialize, Serialize};

use crate::cards::Selection;
use crate::rules::BlindType;

/// An action taken while a blind is in progress.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlindAction {
    /// Score 1 to 5 cards.
    Play(Selection),
    /// Throw away 1 to 5 cards for replacements.
    Discard(Selection),
    /// Toggle the display sort.
    Resort,
    /// Move an owned joker to another position.
    MoveJoker { from: usize, to: usize },
    /// Sell an owned joker for its sell value.
    SellJoker(usize),
    /// Abandon the run.
    Quit,
}

impl BlindAction {
    /// Play the cards at the given display slots.
    #[must_use]
    pub fn play(slots: &[usize]) -> Self {
        BlindAction::Play(Selection::from_slice(slots))
    }

    /// Discard the cards at the given display slots.
    #[must_use]
    pub fn discard(slots: &[usize]) -> Self {
        BlindAction::Discard(Selection::from_slice(slots))
    }
}

/// An action taken in the shop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopAction {
    /// Buy the joker in an offer slot.
    Buy(usize),
    /// Pay the reroll cost for a fresh offer.
    Reroll,
    /// Sell an owned joker.
    Sell(usize),
    /// Leave the shop and deal the next blind.
    Exit,
    /// Abandon the run.
    Quit,
}

/// Either kind of action, as stored in the history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Blind(BlindAction),
    Shop(ShopAction),
}

impl From<BlindAction> for Action {
    fn from(action: BlindAction) -> Self {
        Action::Blind(action)
    }
}

impl From<ShopAction> for Action {
    fn from(action: ShopAction) -> Self {
        Action::Shop(action)
    }
}

/// An accepted action with the blind it was taken in.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Ante when the action was taken.
    pub ante: u32,

    /// Blind the action belongs to (shop actions belong to the blind just
    /// entered).
    pub blind: BlindType,

    /// Position in the run's history, starting at 0.
    pub sequence: u32,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(ante: u32, blind: BlindType, sequence: u32, action: impl Into<Action>) -> Self {
        Self {
            ante,
            blind,
            sequence,
            action: action.into(),
        }
    }
}
