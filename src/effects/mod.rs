//! Joker effect system.
//!
//! Jokers carry data-only effects:
//! - `Effect`: kind + magnitude + hand rule + card rule
//! - `Joker`/`JokerCatalog`: named, priced bundles of effects
//! - `EffectResolver`: the one fold that interprets them
//!
//! ## Design Philosophy
//!
//! Effects never close over configuration or state. A joker is plain data
//! that serializes by value, and every rule about what an effect means lives
//! in the resolver.

mod effect;
mod joker;
mod resolver;

pub use effect::{CardMatchingRule, Effect, EffectKind, HandMatchingRule};
pub use joker::{Joker, JokerCatalog};
pub use resolver::{EffectResolver, JokerContribution, JokerFold, PlayedCards, MAX_REPLAY_COPIES};
