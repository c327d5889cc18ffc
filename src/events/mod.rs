//! Event channel between the engine and a front end.
//!
//! - `Notification`: ordered, fire-and-forget state changes
//! - `EventBus`: per-step notification buffer
//! - `Presenter`: notification sink plus blocking action queries
//! - `ScriptedPresenter`: canned actions, for tests and replays
//! - `ChannelPresenter`: crossbeam channels to a front end thread

pub mod channel;
pub mod notification;
pub mod presenter;

pub use channel::{channel_presenter, ChannelPresenter, FrontEnd, Prompt};
pub use notification::{EventBus, Notification, StateView};
pub use presenter::{BlindPrompt, Presenter, ScriptedPresenter, ShopPrompt};
