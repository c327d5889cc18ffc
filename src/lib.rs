//! # rust-ante
//!
//! Rules engine for a poker-hand scoring roguelike.
//!
//! A run climbs through antes of three blinds each. In every blind the
//! player plays poker hands from a dealt hand of cards to reach a target
//! score, buying jokers between blinds that change how hands score.
//!
//! ## Design Principles
//!
//! 1. **Data-only effects**: jokers are plain records interpreted by one
//!    fold, so they serialize and load from configuration.
//!
//! 2. **Explicit inputs**: the seed and the `GameConfig` are constructor
//!    arguments. Same seed, same config, same actions ⇒ same run.
//!
//! 3. **Synchronous core**: the engine is a plain state machine. Front ends
//!    answer a blocking `Presenter` query; threaded front ends adapt through
//!    `ChannelPresenter`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, game state, actions
//! - `cards`: cards, deck, dealt hand
//! - `hands`: hand classification and level tables
//! - `effects`: joker effects and their fold
//! - `scoring`: the scoring formula
//! - `rules`: blinds, bosses, targets and the `Game` state machine
//! - `shop`: rewards and the joker shop
//! - `events`: notifications and presenters
//! - `persistence`: save snapshots and stores
//!
//! ## Example
//!
//! ```
//! use rust_ante::{EventBus, Game, GameConfig, Phase};
//!
//! let mut game = Game::new(GameConfig::default(), 42);
//! let mut events = EventBus::new();
//!
//! let preview = game.preview(&[0, 1]).unwrap();
//! let played = game.play(&[0, 1], &mut events).unwrap();
//! assert_eq!(preview.total, played.total);
//! assert_eq!(game.state().hands_played, 1);
//! assert_eq!(game.phase(), Phase::Blind);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod events;
pub mod hands;
pub mod persistence;
pub mod rules;
pub mod scoring;
pub mod shop;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, BlindAction, BuiltinConfig, ConfigError, ConfigProvider, GameConfig,
    GameRng, GameState, JsonConfigProvider, PersistenceError, Phase, RulesConfig, RunOutcome,
    ShopAction,
};

pub use crate::cards::{card_values, Card, DealtHand, Deck, Rank, Selection, SortMode, Suit, DECK_SIZE};

pub use crate::hands::{classify, evaluate, Evaluation, HandLevels, HandStats, HandTable, HandType};

pub use crate::effects::{
    CardMatchingRule, Effect, EffectKind, EffectResolver, HandMatchingRule, Joker, JokerCatalog, JokerContribution,
};

pub use crate::scoring::{score_hand, ScoreBreakdown};

pub use crate::rules::{BlindType, Boss, BossCatalog, BossEffect, Game, TargetRow, TargetTable};

pub use crate::shop::{RewardBreakdown, Shop};

pub use crate::events::{
    channel_presenter, BlindPrompt, ChannelPresenter, EventBus, FrontEnd, Notification, Presenter, Prompt,
    ScriptedPresenter, ShopPrompt, StateView,
};

pub use crate::persistence::{FileStore, MemoryStore, SaveFormat, SaveGame, SaveStore};
