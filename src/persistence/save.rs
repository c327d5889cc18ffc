//! Save snapshot and codecs.
//!
//! A save records only what cannot be re-derived: the seed, progression,
//! money, owned joker names and hand levels. The deck is never stored;
//! restoring reseeds the RNG and rebuilds and reshuffles it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::PersistenceError;
use crate::hands::{HandLevels, HandType};

/// Persisted run snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    /// Save format version.
    pub version: u32,
    /// RNG seed of the run.
    pub seed: u64,
    pub ante: u32,
    /// Blind display name, e.g. `"Big Blind"`.
    pub blind: String,
    pub money: u64,
    /// Owned joker names, in order.
    pub jokers: Vec<String>,
    /// Hand type name to level; omitted types are level 1.
    pub hand_levels: BTreeMap<String, u32>,
}

impl SaveGame {
    /// Fail unless this save was written in format `expected`.
    pub fn check_version(&self, expected: u32) -> Result<(), PersistenceError> {
        if self.version == expected {
            Ok(())
        } else {
            Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                expected,
            })
        }
    }

    /// Record hand levels by name (level 1 entries are skipped).
    #[must_use]
    pub fn encode_levels(levels: &HandLevels) -> BTreeMap<String, u32> {
        levels
            .iter()
            .filter(|&(_, level)| level > crate::hands::BASE_LEVEL)
            .map(|(hand, level)| (hand.name().to_string(), level))
            .collect()
    }

    /// Rebuild hand levels from their names.
    pub fn decode_levels(&self) -> Result<HandLevels, PersistenceError> {
        let mut levels = HandLevels::new();
        for (name, &level) in &self.hand_levels {
            let hand = HandType::from_name(name).ok_or_else(|| PersistenceError::UnknownHandType(name.clone()))?;
            levels.set_level(hand, level);
        }
        Ok(levels)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistenceError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistenceError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SaveGame {
        SaveGame {
            version: 1,
            seed: 42,
            ante: 3,
            blind: "Big Blind".to_string(),
            money: 17,
            jokers: vec!["Jolly Joker".to_string(), "Juggler".to_string()],
            hand_levels: BTreeMap::from([("Pair".to_string(), 3)]),
        }
    }

    #[test]
    fn test_json_and_binary_agree() {
        let save = sample();
        let from_json = SaveGame::from_json(&save.to_json().unwrap()).unwrap();
        let from_bytes = SaveGame::from_bytes(&save.to_bytes().unwrap()).unwrap();
        assert_eq!(from_json, save);
        assert_eq!(from_bytes, save);
    }

    #[test]
    fn test_version_check() {
        let mut save = sample();
        assert!(save.check_version(1).is_ok());
        save.version = 2;
        assert!(matches!(
            save.check_version(1),
            Err(PersistenceError::UnsupportedVersion { found: 2, expected: 1 })
        ));
    }

    #[test]
    fn test_levels_by_name() {
        let mut levels = HandLevels::new();
        levels.set_level(HandType::FullHouse, 4);

        let encoded = SaveGame::encode_levels(&levels);
        assert_eq!(encoded.len(), 1);
        assert_eq!(encoded["Full House"], 4);

        let save = SaveGame {
            hand_levels: encoded,
            ..sample()
        };
        assert_eq!(save.decode_levels().unwrap(), levels);
    }

    #[test]
    fn test_unknown_hand_rejected() {
        let save = SaveGame {
            hand_levels: BTreeMap::from([("Five of a Kind".to_string(), 2)]),
            ..sample()
        };
        assert!(matches!(save.decode_levels(), Err(PersistenceError::UnknownHandType(_))));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(matches!(SaveGame::from_json("{"), Err(PersistenceError::Json(_))));
        assert!(matches!(SaveGame::from_bytes(&[1, 2]), Err(PersistenceError::Binary(_))));
    }
}
