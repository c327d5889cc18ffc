//! Where saves live.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::PersistenceError;

use super::save::SaveGame;

/// Save slot backend.
pub trait SaveStore {
    fn save(&mut self, save: &SaveGame) -> Result<(), PersistenceError>;
    fn load(&self) -> Result<SaveGame, PersistenceError>;
}

/// On-disk encoding of a `FileStore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveFormat {
    Json,
    Binary,
}

/// A save file on disk.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    format: SaveFormat,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, format: SaveFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn save(&mut self, save: &SaveGame) -> Result<(), PersistenceError> {
        match self.format {
            SaveFormat::Json => fs::write(&self.path, save.to_json()?)?,
            SaveFormat::Binary => fs::write(&self.path, save.to_bytes()?)?,
        }
        Ok(())
    }

    fn load(&self) -> Result<SaveGame, PersistenceError> {
        match self.format {
            SaveFormat::Json => SaveGame::from_json(&fs::read_to_string(&self.path)?),
            SaveFormat::Binary => SaveGame::from_bytes(&fs::read(&self.path)?),
        }
    }
}

/// Keeps the encoded save in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
}

impl SaveStore for MemoryStore {
    fn save(&mut self, save: &SaveGame) -> Result<(), PersistenceError> {
        self.bytes = Some(save.to_bytes()?);
        Ok(())
    }

    fn load(&self) -> Result<SaveGame, PersistenceError> {
        let bytes = self.bytes.as_deref().ok_or_else(|| {
            PersistenceError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "no save in memory"))
        })?;
        SaveGame::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn sample() -> SaveGame {
        SaveGame {
            version: 1,
            seed: 9,
            ante: 2,
            blind: "Small Blind".to_string(),
            money: 11,
            jokers: vec!["Golden Joker".to_string()],
            hand_levels: BTreeMap::new(),
        }
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        assert!(matches!(store.load(), Err(PersistenceError::Io(_))));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_file_store_both_formats() {
        let dir = std::env::temp_dir();
        for (name, format) in [("json", SaveFormat::Json), ("bin", SaveFormat::Binary)] {
            let path = dir.join(format!("rust-ante-save-{}.{name}", std::process::id()));
            let mut store = FileStore::new(&path, format);
            store.save(&sample()).unwrap();
            assert_eq!(store.load().unwrap(), sample());
            fs::remove_file(&path).ok();
        }
    }

    #[test]
    fn test_missing_file() {
        let store = FileStore::new("/nonexistent/rust-ante.json", SaveFormat::Json);
        assert!(matches!(store.load(), Err(PersistenceError::Io(_))));
    }
}
