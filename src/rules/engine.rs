//! The progression state machine.
//!
//! `Game` owns the configuration, the RNG and the `GameState`, and is the
//! only thing that mutates them. It can be driven two ways:
//! - step by step: `play`, `discard`, `buy`, `exit_shop`, ... each take an
//!   `EventBus` and return `Result<_, ActionError>`
//! - as a loop: `run` asks a `Presenter` for one action at a time and
//!   forwards notifications until the run ends
//!
//! ## Blind transition
//!
//! When a Play reaches the target:
//! 1. reward is computed and paid
//! 2. blind advances (Small → Big → Boss → next ante's Small)
//! 3. per-blind counters and the reroll cost reset
//! 4. the new target is looked up; a Boss Blind draws and applies a boss
//! 5. the deck is reshuffled
//! 6. the shop opens (skipped when every joker is owned)
//! 7. leaving the shop deals the fresh hand
//!
//! Defeating the final ante's Boss Blind pays the reward and ends the run
//! without a shop.

use tracing::{debug, info};

use crate::cards::{Card, DealtHand, Deck, SortMode};
use crate::core::{
    Action, ActionError, BlindAction, ConfigProvider, GameConfig, GameRng, GameState, PersistenceError, Phase, RunOutcome,
    ShopAction,
};
use crate::effects::{EffectKind, EffectResolver, Joker};
use crate::events::{BlindPrompt, EventBus, Notification, Presenter, ShopPrompt, StateView};
use crate::hands::HandType;
use crate::persistence::SaveGame;
use crate::scoring::{score_hand, ScoreBreakdown};
use crate::shop::{self, RewardBreakdown, Shop};

use super::blinds::BlindType;

/// A single run.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    shop: Option<Shop>,
    /// Configuration fallbacks, reported when `run` starts.
    warnings: Vec<String>,
}

impl Game {
    /// Start a run at Ante 1, Small Blind, with a hand dealt.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng);
        let state = GameState::new(config.rules, deck);
        let mut game = Self {
            config,
            state,
            rng,
            shop: None,
            warnings: Vec::new(),
        };
        game.enter_blind(true);
        game.deal_fresh_hand();
        game
    }

    /// Resume a run from a save.
    ///
    /// The deck is rebuilt from the seed. The saved blind is re-entered from
    /// scratch; a Boss Blind draws its boss again but money effects are not
    /// reapplied.
    pub fn restore(config: GameConfig, save: &SaveGame) -> Result<Self, PersistenceError> {
        save.check_version(config.rules.save_version)?;

        let blind = BlindType::from_name(&save.blind).ok_or_else(|| PersistenceError::UnknownBlind(save.blind.clone()))?;
        let max = config.rules.max_ante;
        if save.ante == 0 || save.ante > max {
            return Err(PersistenceError::AnteOutOfRange { ante: save.ante, max });
        }
        let jokers = save
            .jokers
            .iter()
            .map(|name| {
                config
                    .jokers
                    .get(name)
                    .cloned()
                    .ok_or_else(|| PersistenceError::UnknownJoker(name.clone()))
            })
            .collect::<Result<im::Vector<Joker>, _>>()?;
        let levels = save.decode_levels()?;

        let mut rng = GameRng::new(save.seed);
        let deck = Deck::shuffled(&mut rng);
        let mut state = GameState::new(config.rules, deck);
        state.ante = save.ante;
        state.blind = blind;
        state.money = save.money;
        state.jokers = jokers;
        state.levels = levels;

        let mut game = Self {
            config,
            state,
            rng,
            shop: None,
            warnings: Vec::new(),
        };
        game.enter_blind(false);
        game.deal_fresh_hand();
        info!(ante = save.ante, blind = %blind, seed = save.seed, "run restored");
        Ok(game)
    }

    /// Start a run from whatever `provider` supplies.
    ///
    /// Tables that fail to load fall back to the built-in ones; each
    /// fallback is reported as a `Warning` once the run starts.
    pub fn load(provider: &impl ConfigProvider, seed: u64) -> Self {
        let (config, warnings) = GameConfig::load(provider);
        Self::new(config, seed).with_warnings(warnings)
    }

    /// Attach warnings to report when `run` starts.
    #[must_use]
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    /// Pending configuration warnings.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Reseed the RNG and rebuild the deck from the new seed.
    ///
    /// In a blind the hand is redealt; in the shop the next hand comes from
    /// the rebuilt deck. Progress and counters are kept.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
        self.state.deck = Deck::shuffled(&mut self.rng);
        if self.state.phase == Phase::Blind {
            self.deal_fresh_hand();
        }
        debug!(seed, "rng reseeded");
    }

    /// Snapshot for persistence.
    #[must_use]
    pub fn snapshot(&self) -> SaveGame {
        SaveGame {
            version: self.config.rules.save_version,
            seed: self.rng.seed(),
            ante: self.state.ante,
            blind: self.state.blind.name().to_string(),
            money: self.state.money,
            jokers: self.state.jokers.iter().map(|j| j.name.clone()).collect(),
            hand_levels: SaveGame::encode_levels(&self.state.levels),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Open shop, if any.
    #[must_use]
    pub fn shop(&self) -> Option<&Shop> {
        self.shop.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Display summary of the current state.
    #[must_use]
    pub fn view(&self) -> StateView {
        StateView::from(&self.state)
    }

    // === Driver ===

    /// Drive the run to completion with `presenter`.
    pub fn run(&mut self, presenter: &mut impl Presenter) -> RunOutcome {
        let mut events = EventBus::new();
        events.push(Notification::GameStarted {
            seed: self.seed(),
            max_ante: self.config.rules.max_ante,
        });
        for warning in self.warnings.drain(..) {
            events.push(Notification::Warning(warning));
        }
        if !self.state.is_over() {
            self.announce_blind(&mut events);
        }
        events.push(Notification::StateSnapshot(self.view()));
        flush(&mut events, presenter);

        loop {
            let result = match self.state.phase {
                Phase::Finished(outcome) => {
                    info!(?outcome, ante = self.state.ante, "run finished");
                    return outcome;
                }
                Phase::Blind => {
                    let action = presenter.next_blind_action(&self.blind_prompt());
                    self.apply(action, &mut events)
                }
                Phase::Shop => {
                    let action = presenter.next_shop_action(&self.shop_prompt());
                    self.apply(action, &mut events)
                }
            };

            match result {
                Ok(()) if !self.state.is_over() => events.push(Notification::StateSnapshot(self.view())),
                Ok(()) => {}
                Err(err) => {
                    debug!(%err, "action rejected");
                    events.push(Notification::InvalidAction { reason: err.to_string() });
                }
            }
            flush(&mut events, presenter);
        }
    }

    /// Apply one action of either kind.
    pub fn apply(&mut self, action: impl Into<Action>, events: &mut EventBus) -> Result<(), ActionError> {
        match action.into() {
            Action::Blind(action) => match action {
                BlindAction::Play(slots) => self.play(&slots, events).map(drop),
                BlindAction::Discard(slots) => self.discard(&slots, events).map(drop),
                BlindAction::Resort => self.resort(events).map(drop),
                BlindAction::MoveJoker { from, to } => self.move_joker(from, to, events),
                BlindAction::SellJoker(index) => self.sell_joker(index, events).map(drop),
                BlindAction::Quit => self.quit(BlindAction::Quit, events),
            },
            Action::Shop(action) => match action {
                ShopAction::Buy(slot) => self.buy(slot, events).map(drop),
                ShopAction::Reroll => self.reroll(events),
                ShopAction::Sell(index) => self.sell_in_shop(index, events).map(drop),
                ShopAction::Exit => self.exit_shop(events),
                ShopAction::Quit => self.quit(ShopAction::Quit, events),
            },
        }
    }

    /// Context for the next in-blind action.
    #[must_use]
    pub fn blind_prompt(&self) -> BlindPrompt {
        BlindPrompt {
            can_discard: self.state.can_discard(),
            hands_left: self.state.hands_left(),
            discards_left: self.state.discards_left(),
            hand: self.state.hand.displayed().collect(),
        }
    }

    /// Context for the next shop action.
    #[must_use]
    pub fn shop_prompt(&self) -> ShopPrompt {
        ShopPrompt {
            money: self.state.money,
            reroll_cost: self.state.reroll_cost,
            offers: self.shop.as_ref().map(|s| s.offers().to_vec()).unwrap_or_default(),
            owned: self.state.jokers.iter().map(|j| j.name.clone()).collect(),
        }
    }

    // === Blind actions ===

    /// Score the cards at `slots` (display order).
    pub fn play(&mut self, slots: &[usize], events: &mut EventBus) -> Result<ScoreBreakdown, ActionError> {
        self.require(Phase::Blind)?;
        let cards = self.selected(slots)?;

        let breakdown = score_hand(&cards, &self.state.jokers, &self.config.hands, &self.state.levels);
        self.state.score = self.state.score.saturating_add(breakdown.total);
        self.state.hands_played += 1;
        self.state.record_hand(breakdown.hand_type);
        self.state.record(BlindAction::play(slots));
        debug!(
            hand = %breakdown.hand_type,
            chips = breakdown.chips,
            mult = breakdown.mult,
            factor = breakdown.joker_factor,
            total = breakdown.total,
            score = self.state.score,
            target = self.state.target,
            "hand played"
        );
        events.push(Notification::HandPlayed(breakdown.clone()));

        if self.state.score >= self.state.target {
            self.defeat_blind(&breakdown, events);
        } else if self.state.hands_played >= self.state.max_hands() {
            self.lose(events);
        } else {
            self.redeal(&cards, events);
        }
        Ok(breakdown)
    }

    /// Replace the cards at `slots` without scoring.
    pub fn discard(&mut self, slots: &[usize], events: &mut EventBus) -> Result<Vec<Card>, ActionError> {
        self.require(Phase::Blind)?;
        if !self.state.can_discard() {
            return Err(ActionError::NoDiscardsLeft);
        }
        let cards = self.selected(slots)?;

        self.state.discards_used += 1;
        self.state.record(BlindAction::discard(slots));
        debug!(count = cards.len(), discards_left = self.state.discards_left(), "cards discarded");
        events.push(Notification::CardsDiscarded {
            cards: cards.clone(),
            discards_left: self.state.discards_left(),
        });
        self.redeal(&cards, events);
        Ok(cards)
    }

    /// Toggle the display sort.
    pub fn resort(&mut self, events: &mut EventBus) -> Result<SortMode, ActionError> {
        self.require(Phase::Blind)?;
        self.state.hand.resort();
        self.state.record(BlindAction::Resort);

        let sort = self.state.hand.sort_mode();
        events.push(Notification::CardsResorted {
            sort,
            hand: self.state.hand.displayed().collect(),
        });
        Ok(sort)
    }

    /// Toggle selection of the card at a display slot.
    pub fn toggle_selection(&mut self, slot: usize) -> Result<bool, ActionError> {
        self.require(Phase::Blind)?;
        self.state.hand.toggle_selection(slot).ok_or(ActionError::BadCardIndex(slot))
    }

    /// Score a selection without playing it.
    pub fn preview(&self, slots: &[usize]) -> Result<ScoreBreakdown, ActionError> {
        self.require(Phase::Blind)?;
        let cards = self.selected(slots)?;
        Ok(score_hand(&cards, &self.state.jokers, &self.config.hands, &self.state.levels))
    }

    /// Move the joker at `from` so it ends up at `to`.
    pub fn move_joker(&mut self, from: usize, to: usize, events: &mut EventBus) -> Result<(), ActionError> {
        self.require(Phase::Blind)?;
        let len = self.state.jokers.len();
        for index in [from, to] {
            if index >= len {
                return Err(ActionError::BadJokerIndex(index));
            }
        }

        if from != to {
            let joker = self.state.jokers.remove(from);
            self.state.jokers.insert(to, joker);
        }
        self.state.record(BlindAction::MoveJoker { from, to });
        events.push(Notification::JokersReordered {
            jokers: self.state.jokers.iter().map(|j| j.name.clone()).collect(),
        });
        Ok(())
    }

    /// Sell an owned joker during a blind.
    ///
    /// Rejected if losing its discard bonus would leave fewer discards than
    /// already used.
    pub fn sell_joker(&mut self, index: usize, events: &mut EventBus) -> Result<Joker, ActionError> {
        self.require(Phase::Blind)?;
        let joker = self.state.jokers.get(index).ok_or(ActionError::BadJokerIndex(index))?;
        let discards_after = i64::from(self.state.max_discards()).saturating_sub(joker.passive(EffectKind::AddDiscards));
        if discards_after < i64::from(self.state.discards_used) {
            return Err(ActionError::DiscardsInUse(joker.name.clone()));
        }
        let bonus_after = EffectResolver::capacity_bonus(&self.state.jokers, EffectKind::AddHandSize)
            .saturating_sub(joker.passive(EffectKind::AddHandSize));
        let size_after = (self.config.rules.hand_size as i64).saturating_add(bonus_after).max(1);
        if self.state.hand.len() as i64 > size_after {
            return Err(ActionError::HandSizeInUse(joker.name.clone()));
        }

        let sold = shop::sell_joker(&mut self.state, index)?;
        self.state.record(BlindAction::SellJoker(index));
        self.announce_sale(&sold, events);
        self.top_up(events);
        Ok(sold)
    }

    // === Shop actions ===

    /// Buy the joker in an offer slot.
    pub fn buy(&mut self, slot: usize, events: &mut EventBus) -> Result<Joker, ActionError> {
        self.require(Phase::Shop)?;
        let shop = self.shop.as_mut().ok_or(ActionError::WrongPhase(Phase::Blind.describe()))?;
        let joker = shop.buy(slot, &mut self.state)?;

        self.state.record(ShopAction::Buy(slot));
        info!(joker = %joker.name, money = self.state.money, "joker bought");
        events.push(Notification::ItemPurchased {
            joker: joker.clone(),
            money_left: self.state.money,
        });
        Ok(joker)
    }

    /// Pay for a fresh offer.
    pub fn reroll(&mut self, events: &mut EventBus) -> Result<(), ActionError> {
        self.require(Phase::Shop)?;
        let shop = self.shop.as_mut().ok_or(ActionError::WrongPhase(Phase::Blind.describe()))?;
        let paid = shop.reroll(&mut self.state, &self.config.jokers, &mut self.rng)?;

        self.state.record(ShopAction::Reroll);
        debug!(paid, next_cost = self.state.reroll_cost, "shop rerolled");
        events.push(Notification::ShopRerolled {
            offers: shop.offers().to_vec(),
            paid,
            next_cost: self.state.reroll_cost,
        });
        Ok(())
    }

    /// Sell an owned joker in the shop.
    pub fn sell_in_shop(&mut self, index: usize, events: &mut EventBus) -> Result<Joker, ActionError> {
        self.require(Phase::Shop)?;
        let sold = shop::sell_joker(&mut self.state, index)?;
        self.state.record(ShopAction::Sell(index));
        self.announce_sale(&sold, events);
        Ok(sold)
    }

    /// Leave the shop and deal the next blind.
    pub fn exit_shop(&mut self, events: &mut EventBus) -> Result<(), ActionError> {
        self.require(Phase::Shop)?;
        self.shop = None;
        self.state.record(ShopAction::Exit);
        events.push(Notification::ShopClosed);
        self.start_blind(events);
        Ok(())
    }

    /// Abandon the run.
    pub fn quit(&mut self, action: impl Into<Action>, events: &mut EventBus) -> Result<(), ActionError> {
        if let Phase::Finished(_) = self.state.phase {
            return Err(ActionError::WrongPhase(self.state.phase.describe()));
        }
        self.state.record(action);
        self.state.phase = Phase::Finished(RunOutcome::Quit);
        self.shop = None;
        info!(ante = self.state.ante, blind = %self.state.blind, "run abandoned");
        events.push(Notification::Info("run abandoned".to_string()));
        Ok(())
    }

    /// Raise a hand type's level.
    pub fn level_up(&mut self, hand: HandType) -> u32 {
        self.state.level_up(hand)
    }

    // === Transitions ===

    fn defeat_blind(&mut self, breakdown: &ScoreBreakdown, events: &mut EventBus) {
        let money = EffectResolver::fold_money(&self.state.jokers, breakdown.hand_type, &breakdown.scored);
        let reward = RewardBreakdown::compute(
            &self.config.rules,
            self.state.blind,
            self.state.hands_left(),
            self.state.discards_left(),
            money,
        );
        self.state.money = self.state.money.saturating_add(reward.total);

        let (ante, blind) = (self.state.ante, self.state.blind);
        info!(ante, blind = %blind, score = self.state.score, reward = reward.total, "blind defeated");
        events.push(Notification::Success(format!("{blind} defeated, earned ${}", reward.total)));
        events.push(Notification::BlindDefeated {
            ante,
            blind,
            score: self.state.score,
            target: self.state.target,
            reward,
        });

        match blind.next() {
            Some(next) => self.state.blind = next,
            None => {
                events.push(Notification::AnteCompleted { ante });
                if ante >= self.config.rules.max_ante {
                    self.state.phase = Phase::Finished(RunOutcome::Victory);
                    info!(ante, money = self.state.money, "final boss defeated");
                    events.push(Notification::Victory(self.view()));
                    return;
                }
                self.state.ante += 1;
                self.state.blind = BlindType::Small;
            }
        }

        self.enter_blind(true);
        self.state.deck.shuffle(&mut self.rng);
        self.state.hand = DealtHand::new(Vec::new(), self.state.hand.sort_mode());
        self.open_shop(events);
    }

    fn lose(&mut self, events: &mut EventBus) {
        self.state.phase = Phase::Finished(RunOutcome::Defeat);
        info!(
            ante = self.state.ante,
            blind = %self.state.blind,
            score = self.state.score,
            target = self.state.target,
            "out of hands"
        );
        events.push(Notification::Error(format!(
            "out of hands at {} of {}",
            self.state.score, self.state.target
        )));
        events.push(Notification::GameOver(self.view()));
    }

    /// Reset counters, set the target and apply any boss.
    fn enter_blind(&mut self, apply_money_effects: bool) {
        self.state.reset_blind();
        self.state.boss = None;

        let mut target = self.config.targets.target(self.state.ante, self.state.blind);
        if self.state.blind == BlindType::Boss {
            if let Some(boss) = self.config.bosses.choose(&mut self.rng).cloned() {
                let mut money = self.state.money;
                boss.effect.apply(&mut target, &mut money);
                if apply_money_effects {
                    self.state.money = money;
                }
                info!(boss = %boss.name, effect = boss.effect.describe(), "boss blind");
                self.state.boss = Some(boss);
            }
        }
        self.state.target = target;
        debug!(ante = self.state.ante, blind = %self.state.blind, target, "blind entered");
    }

    fn open_shop(&mut self, events: &mut EventBus) {
        let slots = self.config.rules.shop_slots;
        match Shop::open(&self.config.jokers, &self.state.jokers, slots, &mut self.rng) {
            Some(shop) => {
                events.push(Notification::ShopOpened {
                    offers: shop.offers().to_vec(),
                    reroll_cost: self.state.reroll_cost,
                });
                self.shop = Some(shop);
                self.state.phase = Phase::Shop;
            }
            None => {
                debug!("no jokers left to offer");
                events.push(Notification::Info("every joker is owned; skipping the shop".to_string()));
                self.start_blind(events);
            }
        }
    }

    fn start_blind(&mut self, events: &mut EventBus) {
        self.state.phase = Phase::Blind;
        self.deal_fresh_hand();
        self.announce_blind(events);
    }

    fn deal_fresh_hand(&mut self) {
        let cards = self.state.deck.deal(self.state.hand_size());
        self.state.hand = DealtHand::new(cards, self.state.hand.sort_mode());
    }

    fn redeal(&mut self, removed: &[Card], events: &mut EventBus) {
        let kept = self.state.hand.len() - removed.len();
        let wanted = self.state.hand_size().saturating_sub(kept);
        let fresh = self.state.deck.deal(wanted);
        if fresh.len() < wanted {
            debug!(wanted, dealt = fresh.len(), "deck exhausted");
            events.push(Notification::Warning(format!(
                "deck exhausted: dealt {} of {wanted} cards",
                fresh.len()
            )));
        }
        self.state.hand.replace(removed, fresh);
        events.push(self.hand_dealt());
    }

    /// Deal up to the current hand size without removing anything.
    fn top_up(&mut self, events: &mut EventBus) {
        let wanted = self.state.hand_size().saturating_sub(self.state.hand.len());
        if wanted == 0 {
            return;
        }
        let fresh = self.state.deck.deal(wanted);
        self.state.hand.extend(fresh);
        events.push(self.hand_dealt());
    }

    fn announce_blind(&self, events: &mut EventBus) {
        events.push(Notification::NewBlind {
            ante: self.state.ante,
            blind: self.state.blind,
            target: self.state.target,
            boss: self.state.boss.clone(),
        });
        events.push(self.hand_dealt());
    }

    fn announce_sale(&self, sold: &Joker, events: &mut EventBus) {
        info!(joker = %sold.name, refund = sold.sell_value(), "joker sold");
        events.push(Notification::JokerSold {
            joker: sold.clone(),
            refund: sold.sell_value(),
        });
    }

    fn hand_dealt(&self) -> Notification {
        Notification::HandDealt {
            hand: self.state.hand.displayed().collect(),
            deck_remaining: self.state.deck.remaining(),
        }
    }

    // === Validation ===

    fn require(&self, phase: Phase) -> Result<(), ActionError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(ActionError::WrongPhase(self.state.phase.describe()))
        }
    }

    /// Cards at display slots: 1 to `max_selection` distinct, in-range slots.
    fn selected(&self, slots: &[usize]) -> Result<Vec<Card>, ActionError> {
        let max = self.config.rules.max_selection;
        if slots.is_empty() || slots.len() > max {
            return Err(ActionError::WrongCardCount { got: slots.len(), max });
        }
        for (i, slot) in slots.iter().enumerate() {
            if slots[..i].contains(slot) {
                return Err(ActionError::DuplicateCardIndex(*slot));
            }
        }
        slots
            .iter()
            .map(|&slot| self.state.hand.at_display(slot).ok_or(ActionError::BadCardIndex(slot)))
            .collect()
    }
}

fn flush(events: &mut EventBus, presenter: &mut impl Presenter) {
    for notification in events.drain() {
        presenter.notify(notification);
    }
}
