//! Jokers and the joker catalog.
//!
//! A joker is a name, a shop price and one or more effects. Composite jokers
//! simply list several effects; each is folded independently.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::effect::{CardMatchingRule, Effect, EffectKind, HandMatchingRule};

/// A purchasable modifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Joker {
    pub name: String,
    pub price: u64,
    pub effects: SmallVec<[Effect; 2]>,
}

impl Joker {
    /// Create a joker with no effects yet.
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
            effects: SmallVec::new(),
        }
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Money refunded when sold: half the price, at least 1.
    #[must_use]
    pub fn sell_value(&self) -> u64 {
        (self.price / 2).max(1)
    }

    /// Sum of this joker's magnitudes for a passive effect kind.
    #[must_use]
    pub fn passive(&self, kind: EffectKind) -> i64 {
        self.effects
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.magnitude)
            .fold(0, i64::saturating_add)
    }
}

impl std::fmt::Display for Joker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (${})", self.name, self.price)
    }
}

/// Every joker that can appear in the shop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JokerCatalog {
    jokers: Vec<Joker>,
}

impl JokerCatalog {
    /// Create a catalog from a list of jokers.
    #[must_use]
    pub fn new(jokers: Vec<Joker>) -> Self {
        Self { jokers }
    }

    /// Look up a joker by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Joker> {
        self.jokers.iter().find(|j| j.name == name)
    }

    /// Number of jokers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jokers.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jokers.is_empty()
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Joker> {
        self.jokers.iter()
    }
}

impl Default for JokerCatalog {
    fn default() -> Self {
        use CardMatchingRule as OnCard;
        use HandMatchingRule as OnHand;

        let simple = |name: &str, price: u64, effect: Effect| Joker {
            name: name.to_string(),
            price,
            effects: smallvec![effect],
        };

        Self::new(vec![
            simple("Joker", 2, Effect::add_mult(4)),
            simple("Jolly Joker", 3, Effect::add_mult(8).when_hand(OnHand::ContainsPair)),
            simple("Zany Joker", 4, Effect::add_mult(12).when_hand(OnHand::ContainsThreeOfAKind)),
            simple("Mad Joker", 4, Effect::add_mult(10).when_hand(OnHand::ContainsTwoPair)),
            simple("Crazy Joker", 4, Effect::add_mult(12).when_hand(OnHand::ContainsStraight)),
            simple("Droll Joker", 4, Effect::add_mult(10).when_hand(OnHand::ContainsFlush)),
            simple("Sly Joker", 3, Effect::add_chips(50).when_hand(OnHand::ContainsPair)),
            simple("Clever Joker", 4, Effect::add_chips(80).when_hand(OnHand::ContainsTwoPair)),
            Joker::new("Scholar", 4)
                .with_effect(Effect::add_chips(20).per_card(OnCard::IsAce))
                .with_effect(Effect::add_mult(4).per_card(OnCard::IsAce)),
            simple("Arrowhead", 7, Effect::add_chips(50).per_card(OnCard::IsSpade)),
            simple("Scary Face", 4, Effect::add_chips(30).per_card(OnCard::IsFace)),
            simple("The Duo", 8, Effect::multiply_mult(2).when_hand(OnHand::ContainsPair)),
            simple("The Trio", 8, Effect::multiply_mult(3).when_hand(OnHand::ContainsThreeOfAKind)),
            simple("Golden Joker", 6, Effect::add_money(4)),
            simple("Sock and Buskin", 6, Effect::replay(1).per_card(OnCard::IsFace)),
            simple("Ace Echo", 5, Effect::replay(1).per_card(OnCard::IsAce)),
            simple("Juggler", 4, Effect::add_hand_size(1)),
            simple("Drunkard", 4, Effect::add_discards(1)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = JokerCatalog::default();
        assert_eq!(catalog.len(), 18);
        assert!(catalog.get("Jolly Joker").is_some());
        assert!(catalog.get("Nonexistent").is_none());

        let scholar = catalog.get("Scholar").unwrap();
        assert_eq!(scholar.effects.len(), 2);
    }

    #[test]
    fn test_catalog_names_unique() {
        let catalog = JokerCatalog::default();
        let mut names: Vec<_> = catalog.iter().map(|j| j.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_sell_value() {
        assert_eq!(Joker::new("A", 8).sell_value(), 4);
        assert_eq!(Joker::new("B", 5).sell_value(), 2);
        assert_eq!(Joker::new("C", 1).sell_value(), 1);
    }

    #[test]
    fn test_passive_sum() {
        let joker = Joker::new("Pockets", 5)
            .with_effect(Effect::add_hand_size(1))
            .with_effect(Effect::add_hand_size(2))
            .with_effect(Effect::add_discards(1));
        assert_eq!(joker.passive(EffectKind::AddHandSize), 3);
        assert_eq!(joker.passive(EffectKind::AddDiscards), 1);
        assert_eq!(joker.passive(EffectKind::AddChips), 0);
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = JokerCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: JokerCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, back);
    }
}
