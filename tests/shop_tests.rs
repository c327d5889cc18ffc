//! Shop and economy tests.
//!
//! These tests verify:
//! - Offers come from unowned catalog jokers
//! - Buy/reroll/sell money flows and rejections
//! - Reroll cost ramps within a shop and resets per blind

use rust_ante::{
    ActionError, BossCatalog, EventBus, Game, GameConfig, Joker, JokerCatalog, Notification, Phase, ScriptedPresenter,
    ShopAction, TargetRow, TargetTable,
};

fn trivial_targets() -> TargetTable {
    TargetTable::new(
        (1..=8)
            .map(|ante| TargetRow {
                ante,
                small: 1,
                big: 1,
                boss: 1,
            })
            .collect(),
    )
}

fn config_with(catalog: JokerCatalog) -> GameConfig {
    GameConfig::default()
        .with_targets(trivial_targets())
        .with_bosses(BossCatalog::new(Vec::new()))
        .with_jokers(catalog)
}

/// Play the Small Blind and stop in its shop. Money is then 4 + 10 = 14.
fn game_in_shop(config: GameConfig, seed: u64) -> (Game, EventBus) {
    let mut game = Game::new(config, seed);
    let mut events = EventBus::new();
    game.play(&[0], &mut events).unwrap();
    assert_eq!(game.phase(), Phase::Shop);
    assert_eq!(game.state().money, 14);
    (game, events)
}

/// Buying deducts the price and appends the joker.
#[test]
fn test_buy() {
    let (mut game, mut events) = game_in_shop(GameConfig::default().with_targets(trivial_targets()), 1);
    let offer = game.shop().unwrap().offer(0).cloned().unwrap();

    let bought = game.buy(0, &mut events).unwrap();
    assert_eq!(bought, offer);
    assert_eq!(game.state().money, 14 - offer.price);
    assert_eq!(game.state().jokers.back(), Some(&offer));

    // Purchased slot is now empty
    assert_eq!(game.buy(0, &mut events), Err(ActionError::EmptyShopSlot(0)));
}

/// Offers never include owned jokers.
#[test]
fn test_offers_exclude_owned() {
    let catalog = JokerCatalog::new(vec![Joker::new("A", 1), Joker::new("B", 1), Joker::new("C", 1)]);
    let (mut game, mut events) = game_in_shop(config_with(catalog), 2);

    let first = game.buy(0, &mut events).unwrap();
    game.exit_shop(&mut events).unwrap();
    game.play(&[0], &mut events).unwrap();

    let shop = game.shop().unwrap();
    assert!(shop.offers().iter().flatten().all(|j| j.name != first.name));
    assert_eq!(shop.offers().len(), 2);
}

/// Too little money rejects the purchase with the amounts in the reason.
#[test]
fn test_insufficient_funds() {
    let catalog = JokerCatalog::new(vec![Joker::new("Gilded", 100)]);
    let (mut game, mut events) = game_in_shop(config_with(catalog), 3);

    let err = game.buy(0, &mut events).unwrap_err();
    assert_eq!(err.to_string(), "not enough money: need $100, have $14");
    assert_eq!(game.state().money, 14);
    assert!(game.state().jokers.is_empty());
}

/// Rerolls cost 5, then 7; the cost is back to 5 in the next shop.
#[test]
fn test_reroll_cost_ramp_and_reset() {
    let (mut game, mut events) = game_in_shop(config_with(JokerCatalog::default()), 4);

    game.reroll(&mut events).unwrap();
    assert_eq!(game.state().money, 9);
    assert_eq!(game.state().reroll_cost, 7);
    game.reroll(&mut events).unwrap();
    assert_eq!(game.state().money, 2);
    assert_eq!(game.state().reroll_cost, 9);
    assert!(matches!(
        game.reroll(&mut events),
        Err(ActionError::InsufficientFunds { need: 9, have: 2 })
    ));

    game.exit_shop(&mut events).unwrap();
    game.play(&[0], &mut events).unwrap();
    assert_eq!(game.phase(), Phase::Shop);
    assert_eq!(game.state().reroll_cost, 5);
}

/// Selling in the shop refunds half the price, at least 1.
#[test]
fn test_sell_in_shop() {
    let catalog = JokerCatalog::new(vec![Joker::new("Duo", 8), Joker::new("Penny", 1)]);
    let (mut game, mut events) = game_in_shop(config_with(catalog), 5);

    game.buy(0, &mut events).unwrap();
    game.buy(1, &mut events).unwrap();
    assert_eq!(game.state().money, 14 - 9);

    let sold = game.sell_in_shop(0, &mut events).unwrap();
    assert_eq!(game.state().money, 5 + sold.sell_value());
    assert_eq!(game.state().jokers.len(), 1);
    assert_eq!(game.sell_in_shop(3, &mut events), Err(ActionError::BadJokerIndex(3)));
}

/// Owning the whole catalog skips the shop with a notice.
#[test]
fn test_shop_skipped_when_nothing_to_offer() {
    let catalog = JokerCatalog::new(vec![Joker::new("Only", 1)]);
    let (mut game, mut events) = game_in_shop(config_with(catalog), 6);

    game.buy(0, &mut events).unwrap();
    game.exit_shop(&mut events).unwrap();

    let mut events = EventBus::new();
    game.play(&[0], &mut events).unwrap();
    assert_eq!(game.phase(), Phase::Blind);
    assert!(game.shop().is_none());
    assert!(events.iter().any(|n| matches!(n, Notification::Info(msg) if msg.contains("skipping the shop"))));
    assert!(matches!(
        game.reroll(&mut events),
        Err(ActionError::WrongPhase(_))
    ));
}

/// Shop actions from a presenter, with rejections reported in order.
#[test]
fn test_shop_through_presenter() {
    let catalog = JokerCatalog::new(vec![Joker::new("Cheap", 2), Joker::new("Dear", 50)]);
    let mut game = Game::new(config_with(catalog), 7);

    let mut presenter = ScriptedPresenter::new(
        [rust_ante::BlindAction::play(&[0])],
        [ShopAction::Buy(5), ShopAction::Reroll, ShopAction::Exit],
    );
    game.run(&mut presenter);

    let rejections = presenter.rejections();
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0], "shop slot 5 is empty");
    assert!(presenter
        .received
        .iter()
        .any(|n| matches!(n, Notification::ShopRerolled { paid: 5, next_cost: 7, .. })));
    assert!(presenter.received.iter().any(|n| matches!(n, Notification::ShopClosed)));
}
