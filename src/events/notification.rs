//! Outward notifications.
//!
//! The engine pushes notifications onto an `EventBus` as state changes;
//! the driver drains the bus to the presenter in production order.
//! Notifications are fire-and-forget: nothing waits for them to be read.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Selection, SortMode};
use crate::core::{GameState, Phase};
use crate::effects::Joker;
use crate::rules::{BlindType, Boss};
use crate::scoring::ScoreBreakdown;
use crate::shop::RewardBreakdown;

/// Read-only summary of the run for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
    pub phase: Phase,
    pub ante: u32,
    pub blind: BlindType,
    pub boss: Option<Boss>,
    pub target: u64,
    pub score: u64,
    pub hands_left: u32,
    pub discards_left: u32,
    pub money: u64,
    pub reroll_cost: u64,
    /// Owned joker names, in order.
    pub jokers: Vec<String>,
    /// Held cards in display order.
    pub hand: Vec<Card>,
    /// Display slots of the selected cards.
    pub selected: Selection,
    pub sort: SortMode,
    pub deck_remaining: usize,
}

impl From<&GameState> for StateView {
    fn from(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            ante: state.ante,
            blind: state.blind,
            boss: state.boss.clone(),
            target: state.target,
            score: state.score,
            hands_left: state.hands_left(),
            discards_left: state.discards_left(),
            money: state.money,
            reroll_cost: state.reroll_cost,
            jokers: state.jokers.iter().map(|j| j.name.clone()).collect(),
            hand: state.hand.displayed().collect(),
            selected: state.hand.selected_display_indices(),
            sort: state.hand.sort_mode(),
            deck_remaining: state.deck.remaining(),
        }
    }
}

/// A state change reported to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    // === Run ===
    GameStarted { seed: u64, max_ante: u32 },
    StateSnapshot(StateView),
    GameOver(StateView),
    Victory(StateView),

    // === Blind ===
    HandDealt { hand: Vec<Card>, deck_remaining: usize },
    HandPlayed(ScoreBreakdown),
    CardsDiscarded { cards: Vec<Card>, discards_left: u32 },
    CardsResorted { sort: SortMode, hand: Vec<Card> },
    JokersReordered { jokers: Vec<String> },
    JokerSold { joker: Joker, refund: u64 },

    // === Progression ===
    BlindDefeated {
        ante: u32,
        blind: BlindType,
        score: u64,
        target: u64,
        reward: RewardBreakdown,
    },
    AnteCompleted { ante: u32 },
    NewBlind {
        ante: u32,
        blind: BlindType,
        target: u64,
        boss: Option<Boss>,
    },

    // === Shop ===
    ShopOpened { offers: Vec<Option<Joker>>, reroll_cost: u64 },
    ShopRerolled { offers: Vec<Option<Joker>>, paid: u64, next_cost: u64 },
    ItemPurchased { joker: Joker, money_left: u64 },
    ShopClosed,

    // === Messages ===
    InvalidAction { reason: String },
    Info(String),
    Warning(String),
    Error(String),
    Success(String),
}

/// Ordered buffer of notifications produced by one engine step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventBus {
    events: Vec<Notification>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.events.push(notification);
    }

    /// Take every buffered notification, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Notification> + '_ {
        self.events.drain(..)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.events.iter()
    }
}
