//! The presentation boundary.
//!
//! A `Presenter` receives notifications and answers two blocking queries:
//! the next in-blind action and the next shop action. The engine holds at
//! most one outstanding query and does not continue until it is answered.
//! Any way a front end gives up (timeout, closed window, dropped channel)
//! must come back as `Quit`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::notification::Notification;
use crate::cards::Card;
use crate::core::{BlindAction, ShopAction};
use crate::effects::Joker;

/// Context for the next in-blind action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindPrompt {
    /// Whether a discard would be accepted.
    pub can_discard: bool,
    pub hands_left: u32,
    pub discards_left: u32,
    /// Held cards in display order.
    pub hand: Vec<Card>,
}

/// Context for the next shop action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopPrompt {
    pub money: u64,
    pub reroll_cost: u64,
    pub offers: Vec<Option<Joker>>,
    pub owned: Vec<String>,
}

/// Front end driving a run.
pub trait Presenter {
    /// Receive one notification, in production order.
    fn notify(&mut self, notification: Notification);

    /// Block until the player picks an in-blind action.
    fn next_blind_action(&mut self, prompt: &BlindPrompt) -> BlindAction;

    /// Block until the player picks a shop action.
    fn next_shop_action(&mut self, prompt: &ShopPrompt) -> ShopAction;
}

/// Plays back fixed action lists and records every notification.
///
/// An exhausted blind script answers `Quit`; an exhausted shop script
/// answers `Exit`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPresenter {
    blind: VecDeque<BlindAction>,
    shop: VecDeque<ShopAction>,
    /// Notifications received so far.
    pub received: Vec<Notification>,
    /// Prompts answered so far.
    pub blind_prompts: Vec<BlindPrompt>,
}

impl ScriptedPresenter {
    #[must_use]
    pub fn new(blind: impl IntoIterator<Item = BlindAction>, shop: impl IntoIterator<Item = ShopAction>) -> Self {
        Self {
            blind: blind.into_iter().collect(),
            shop: shop.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Script only in-blind actions; every shop visit exits immediately.
    #[must_use]
    pub fn blind_only(blind: impl IntoIterator<Item = BlindAction>) -> Self {
        Self::new(blind, Vec::new())
    }

    /// Reasons of every rejected action, in order.
    #[must_use]
    pub fn rejections(&self) -> Vec<&str> {
        self.received
            .iter()
            .filter_map(|n| match n {
                Notification::InvalidAction { reason } => Some(reason.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for ScriptedPresenter {
    fn notify(&mut self, notification: Notification) {
        self.received.push(notification);
    }

    fn next_blind_action(&mut self, prompt: &BlindPrompt) -> BlindAction {
        self.blind_prompts.push(prompt.clone());
        self.blind.pop_front().unwrap_or(BlindAction::Quit)
    }

    fn next_shop_action(&mut self, _prompt: &ShopPrompt) -> ShopAction {
        self.shop.pop_front().unwrap_or(ShopAction::Exit)
    }
}
