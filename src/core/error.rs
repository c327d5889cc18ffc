//! Error types.
//!
//! - `ActionError`: a rejected player action. Always recoverable; the
//!   `Display` text is the reason shown to the player.
//! - `ConfigError`: a configuration table could not be loaded. Recovered by
//!   falling back to built-in defaults.
//! - `PersistenceError`: a save could not be written or restored. Fatal for
//!   the run being restored.

use std::path::PathBuf;

use thiserror::Error;

/// Why a player action was rejected. State is unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("select between 1 and {max} cards (got {got})")]
    WrongCardCount { got: usize, max: usize },

    #[error("there is no card in slot {0}")]
    BadCardIndex(usize),

    #[error("slot {0} was selected more than once")]
    DuplicateCardIndex(usize),

    #[error("no discards left this blind")]
    NoDiscardsLeft,

    #[error("no jokers are available to reroll into the shop")]
    ShopExhausted,

    #[error("shop slot {0} is empty")]
    EmptyShopSlot(usize),

    #[error("not enough money: need ${need}, have ${have}")]
    InsufficientFunds { need: u64, have: u64 },

    #[error("there is no joker in slot {0}")]
    BadJokerIndex(usize),

    #[error("selling {0} would leave fewer discards than already used")]
    DiscardsInUse(String),

    #[error("selling {0} would leave more cards in hand than the hand size")]
    HandSizeInUse(String),

    #[error("that action is not available while {0}")]
    WrongPhase(&'static str),
}

/// A configuration source could not supply a table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {table}: {reason}")]
    Invalid { table: &'static str, reason: String },
}

/// A save could not be written, read or applied.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("save is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save is not a valid binary snapshot: {0}")]
    Binary(#[from] bincode::Error),

    #[error("unknown blind {0:?}")]
    UnknownBlind(String),

    #[error("unknown joker {0:?}")]
    UnknownJoker(String),

    #[error("unknown hand type {0:?}")]
    UnknownHandType(String),

    #[error("ante {ante} is outside 1..={max}")]
    AnteOutOfRange { ante: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_reasons_are_readable() {
        let err = ActionError::InsufficientFunds { need: 5, have: 3 };
        assert_eq!(err.to_string(), "not enough money: need $5, have $3");

        let err = ActionError::WrongCardCount { got: 6, max: 5 };
        assert_eq!(err.to_string(), "select between 1 and 5 cards (got 6)");
    }

    #[test]
    fn test_persistence_error_from_json() {
        let bad = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PersistenceError = bad.into();
        assert!(matches!(err, PersistenceError::Json(_)));
    }
}
