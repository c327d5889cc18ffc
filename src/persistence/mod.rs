//! Saving and restoring runs.
//!
//! `SaveGame` is the snapshot; `SaveStore` implementations decide where it
//! is kept. Applying a snapshot is `rules::Game::restore`.

pub mod save;
pub mod store;

pub use save::SaveGame;
pub use store::{FileStore, MemoryStore, SaveFormat, SaveStore};
