//! Core engine types: RNG, configuration, errors, state and actions.
//!
//! Nothing here knows how a blind is scored or won; the `rules` module
//! drives these types.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, BlindAction, ShopAction};
pub use config::{BuiltinConfig, ConfigProvider, GameConfig, JsonConfigProvider, RulesConfig};
pub use error::{ActionError, ConfigError, PersistenceError};
pub use rng::GameRng;
pub use state::{GameState, Phase, RunOutcome};
