//! Run progression.
//!
//! - `blinds`: blind cycle, target table, bosses
//! - `engine`: the `Game` state machine that plays a run through them

pub mod blinds;
pub mod engine;

pub use blinds::{BlindType, Boss, BossCatalog, BossEffect, TargetRow, TargetTable};
pub use engine::Game;
