//! The joker shop visited between blinds.
//!
//! Offers are drawn uniformly from catalog jokers the player does not own.
//! Buying removes a joker from the offer; owning it keeps it out of future
//! offers. Every operation validates before mutating, so a rejected action
//! leaves both the shop and the state untouched.

use serde::{Deserialize, Serialize};

use crate::core::{ActionError, GameRng, GameState};
use crate::effects::{Joker, JokerCatalog};

/// Current shop offer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Offer slots; `None` once bought.
    offers: Vec<Option<Joker>>,
}

impl Shop {
    /// Open the shop with a fresh offer.
    ///
    /// Returns `None` when every catalog joker is already owned.
    pub fn open(catalog: &JokerCatalog, owned: &im::Vector<Joker>, slots: usize, rng: &mut GameRng) -> Option<Self> {
        let offers = Self::draw(catalog, owned, slots, rng);
        (!offers.is_empty()).then_some(Self { offers })
    }

    /// Catalog jokers not currently owned, in catalog order.
    pub fn available<'a>(catalog: &'a JokerCatalog, owned: &im::Vector<Joker>) -> Vec<&'a Joker> {
        catalog
            .iter()
            .filter(|j| !owned.iter().any(|o| o.name == j.name))
            .collect()
    }

    fn draw(catalog: &JokerCatalog, owned: &im::Vector<Joker>, slots: usize, rng: &mut GameRng) -> Vec<Option<Joker>> {
        let pool = Self::available(catalog, owned);
        rng.sample_indices(pool.len(), slots)
            .into_iter()
            .map(|i| Some(pool[i].clone()))
            .collect()
    }

    /// Offer slots in display order.
    #[must_use]
    pub fn offers(&self) -> &[Option<Joker>] {
        &self.offers
    }

    /// Joker in an offer slot, if still for sale.
    #[must_use]
    pub fn offer(&self, slot: usize) -> Option<&Joker> {
        self.offers.get(slot).and_then(Option::as_ref)
    }

    /// Buy the joker in `slot`.
    pub fn buy(&mut self, slot: usize, state: &mut GameState) -> Result<Joker, ActionError> {
        let price = self.offer(slot).ok_or(ActionError::EmptyShopSlot(slot))?.price;
        if state.money < price {
            return Err(ActionError::InsufficientFunds {
                need: price,
                have: state.money,
            });
        }

        let joker = self.offers[slot].take().ok_or(ActionError::EmptyShopSlot(slot))?;
        state.money -= price;
        state.jokers.push_back(joker.clone());
        Ok(joker)
    }

    /// Replace the offer with a fresh draw.
    ///
    /// Charges the current reroll cost and raises it by the reroll step.
    pub fn reroll(&mut self, state: &mut GameState, catalog: &JokerCatalog, rng: &mut GameRng) -> Result<u64, ActionError> {
        let cost = state.reroll_cost;
        if state.money < cost {
            return Err(ActionError::InsufficientFunds {
                need: cost,
                have: state.money,
            });
        }
        if Self::available(catalog, &state.jokers).is_empty() {
            return Err(ActionError::ShopExhausted);
        }

        state.money -= cost;
        state.reroll_cost += state.rules().reroll_step;
        self.offers = Self::draw(catalog, &state.jokers, state.rules().shop_slots, rng);
        Ok(cost)
    }
}

/// Sell the owned joker at `index`, refunding its sell value.
pub fn sell_joker(state: &mut GameState, index: usize) -> Result<Joker, ActionError> {
    if index >= state.jokers.len() {
        return Err(ActionError::BadJokerIndex(index));
    }
    let joker = state.jokers.remove(index);
    state.money += joker.sell_value();
    Ok(joker)
}
