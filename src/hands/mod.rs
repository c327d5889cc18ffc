//! Poker hand evaluation.
//!
//! - `HandType`: the ten categories in priority order
//! - `evaluate`/`classify`: ordered predicate table, first match wins
//! - `HandTable`/`HandLevels`: level-scaled base chips and multipliers

mod evaluator;
mod hand_type;
mod levels;

pub use evaluator::{classify, evaluate, Evaluation, HandShape, FIVE_CARD_HAND};
pub use hand_type::HandType;
pub use levels::{HandLevels, HandStats, HandTable, BASE_LEVEL};
