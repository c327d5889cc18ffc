//! Presenter backed by crossbeam channels, for front ends running on
//! another thread.
//!
//! ```text
//! engine thread                        front end thread
//! ChannelPresenter ── Notification ──▶ FrontEnd.notifications
//!                  ── Prompt ────────▶ FrontEnd.prompts
//!                  ◀─ Action ───────── FrontEnd.actions
//! ```
//!
//! Notifications are sent without waiting. A prompt blocks until its
//! answer arrives; if the front end hangs up, or answers a blind prompt
//! with a shop action (or the reverse), the answer is `Quit`.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::notification::Notification;
use super::presenter::{BlindPrompt, Presenter, ShopPrompt};
use crate::core::{Action, BlindAction, ShopAction};

/// A query waiting for the front end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    Blind(BlindPrompt),
    Shop(ShopPrompt),
}

/// Engine side of the channel pair.
#[derive(Debug)]
pub struct ChannelPresenter {
    notifications: Sender<Notification>,
    prompts: Sender<Prompt>,
    actions: Receiver<Action>,
}

/// Front end side of the channel pair.
#[derive(Debug)]
pub struct FrontEnd {
    pub notifications: Receiver<Notification>,
    pub prompts: Receiver<Prompt>,
    pub actions: Sender<Action>,
}

/// Create a connected presenter and front end.
#[must_use]
pub fn channel_presenter() -> (ChannelPresenter, FrontEnd) {
    let (note_tx, note_rx) = unbounded();
    let (prompt_tx, prompt_rx) = unbounded();
    let (action_tx, action_rx) = unbounded();
    (
        ChannelPresenter {
            notifications: note_tx,
            prompts: prompt_tx,
            actions: action_rx,
        },
        FrontEnd {
            notifications: note_rx,
            prompts: prompt_rx,
            actions: action_tx,
        },
    )
}

impl ChannelPresenter {
    fn ask(&self, prompt: Prompt) -> Option<Action> {
        if self.prompts.send(prompt).is_err() {
            debug!("front end dropped its prompt receiver");
            return None;
        }
        match self.actions.recv() {
            Ok(action) => Some(action),
            Err(_) => {
                debug!("front end dropped its action sender");
                None
            }
        }
    }
}

impl Presenter for ChannelPresenter {
    fn notify(&mut self, notification: Notification) {
        // A departed front end surfaces at the next prompt.
        let _ = self.notifications.send(notification);
    }

    fn next_blind_action(&mut self, prompt: &BlindPrompt) -> BlindAction {
        match self.ask(Prompt::Blind(prompt.clone())) {
            Some(Action::Blind(action)) => action,
            Some(Action::Shop(action)) => {
                warn!(?action, "shop action answered a blind prompt; quitting");
                BlindAction::Quit
            }
            None => BlindAction::Quit,
        }
    }

    fn next_shop_action(&mut self, prompt: &ShopPrompt) -> ShopAction {
        match self.ask(Prompt::Shop(prompt.clone())) {
            Some(Action::Shop(action)) => action,
            Some(Action::Blind(action)) => {
                warn!(?action, "blind action answered a shop prompt; quitting");
                ShopAction::Quit
            }
            None => ShopAction::Quit,
        }
    }
}
