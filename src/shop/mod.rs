//! Economy between blinds.
//!
//! - `RewardBreakdown`: money paid for defeating a blind
//! - `Shop`: random joker offer with buy and reroll
//! - `sell_joker`: refund an owned joker (also allowed during a blind)

pub mod reward;
pub mod store;

pub use reward::RewardBreakdown;
pub use store::{sell_joker, Shop};
