//! Rent and building rules on the standard board.

use oligopoly::board::{presets, HOTEL, HOUSE, MONEY};
use oligopoly::core::{Action, DiceRoll, Ledger, PlayerId};
use oligopoly::game::Game;
use oligopoly::rules::RulesEngine;

const OWNER: PlayerId = PlayerId::new(1);

fn game_with_owner(properties: &[&str]) -> Game {
    let mut game = Game::new(presets::standard(), 2, 1);
    for property in properties {
        game.player_mut(OWNER).items.set(*property, 1);
    }
    game
}

fn holder_action(game: &Game, property: &str, name: &str) -> Action {
    game.item_actions(property)
        .into_iter()
        .find(|a| a.name == name)
        .unwrap_or_else(|| panic!("{name} not offered for {property}"))
}

/// Test base rent and the doubled rent of a full color group.
#[test]
fn test_street_rent_monopoly_doubles() {
    let game = game_with_owner(&["BROWN_1"]);
    assert_eq!(game.rent("BROWN_1"), Ledger::single(MONEY, 2));

    let game = game_with_owner(&["BROWN_1", "BROWN_2"]);
    assert_eq!(game.rent("BROWN_1"), Ledger::single(MONEY, 4));
    assert_eq!(game.rent("BROWN_2"), Ledger::single(MONEY, 8));
}

/// Test that houses use the ladder whether or not the group is complete.
#[test]
fn test_street_rent_with_buildings() {
    let mut game = game_with_owner(&["BROWN_1"]);
    game.property_state_mut("BROWN_1").set_buildings(HOUSE, 2);
    assert_eq!(game.rent("BROWN_1"), Ledger::single(MONEY, 30));

    game.property_state_mut("BROWN_1").set_buildings(HOUSE, 0);
    game.property_state_mut("BROWN_1").set_buildings(HOTEL, 1);
    assert_eq!(game.rent("BROWN_1"), Ledger::single(MONEY, 250));
}

/// Test railroad tiers by number owned.
#[test]
fn test_railroad_rent_tiers() {
    let game = game_with_owner(&["RAILROAD_1"]);
    assert_eq!(game.rent("RAILROAD_1"), Ledger::single(MONEY, 25));

    let game = game_with_owner(&["RAILROAD_1", "RAILROAD_2"]);
    assert_eq!(game.rent("RAILROAD_2"), Ledger::single(MONEY, 50));

    let game = game_with_owner(&["RAILROAD_1", "RAILROAD_2", "RAILROAD_3", "RAILROAD_4"]);
    assert_eq!(game.rent("RAILROAD_4"), Ledger::single(MONEY, 200));
}

/// Test that utility rent scales with the last roll, and is zero before one.
#[test]
fn test_utility_rent_scales_with_roll() {
    let mut game = game_with_owner(&["UTILITY_1"]);
    assert!(game.rent("UTILITY_1").is_empty());

    // Tile 12 is the first utility
    game.current_player_mut().set_location(5);
    game.transition_to_premove();
    game.apply_roll(DiceRoll(3, 4));
    assert_eq!(game.current_player().location(), 12);
    assert_eq!(game.rent("UTILITY_1"), Ledger::single(MONEY, 28));

    game.player_mut(OWNER).items.set("UTILITY_2", 1);
    assert_eq!(game.rent("UTILITY_1"), Ledger::single(MONEY, 70));
}

/// Test that unowned properties have no rent.
#[test]
fn test_unowned_rent_is_empty() {
    let game = Game::new(presets::standard(), 2, 1);
    assert!(game.rent("BLUE_2").is_empty());
    assert!(game.rent("NOT_A_PROPERTY").is_empty());
}

/// Test paying rent through the action protocol moves exactly the rent.
#[test]
fn test_pay_rent_transfers_exactly() {
    let mut game = game_with_owner(&["BROWN_1", "BROWN_2"]);
    game.transition_to_premove();
    game.apply_roll(DiceRoll(0, 1));

    let pay = game.current_actions()[0].clone();
    assert_eq!(pay.name, "Pay Rent");
    assert_eq!(pay.cost, Ledger::single(MONEY, 4));
    game.apply_action(&pay).unwrap();

    assert_eq!(game.current_player().items.get(MONEY), 1496);
    assert_eq!(game.player(OWNER).items.get(MONEY), 1504);
    assert_eq!(game.current_player().last_creditor(), Some(OWNER));
}

/// Test landing on a mortgaged property of another player costs nothing.
#[test]
fn test_mortgaged_property_is_free() {
    let mut game = game_with_owner(&["BROWN_1"]);
    game.property_state_mut("BROWN_1").set_mortgaged(true);
    game.transition_to_premove();
    game.apply_roll(DiceRoll(0, 1));

    let names: Vec<_> = game.current_actions().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["End Turn"]);
}

/// Test building up to a hotel and selling it back.
#[test]
fn test_build_and_sell() {
    let mut game = Game::new(presets::standard(), 2, 1);
    game.current_player_mut().items.set("BROWN_1", 1);
    assert!(!holder_action(&game, "BROWN_1", "Buy House").is_allowed(&game));

    game.current_player_mut().items.set("BROWN_2", 1);
    for _ in 0..4 {
        let buy = holder_action(&game, "BROWN_1", "Buy House");
        game.apply_action(&buy).unwrap();
    }
    assert_eq!(game.property_state("BROWN_1").buildings().get(HOUSE), 4);
    assert!(!holder_action(&game, "BROWN_1", "Buy House").is_allowed(&game));
    assert!(!holder_action(&game, "BROWN_1", "Mortgage").is_allowed(&game));

    let hotel = holder_action(&game, "BROWN_1", "Buy Hotel");
    game.apply_action(&hotel).unwrap();
    let buildings = game.property_state("BROWN_1").buildings();
    assert_eq!(buildings.get(HOUSE), 0);
    assert_eq!(buildings.get(HOTEL), 1);
    assert_eq!(game.current_player().items.get(MONEY), 1500 - 4 * 50 - 50);

    let sell = holder_action(&game, "BROWN_1", "Sell Hotel");
    assert_eq!(sell.cost, Ledger::single(MONEY, -25));
    game.apply_action(&sell).unwrap();
    assert!(game.property_state("BROWN_1").buildings().is_empty());
    assert_eq!(game.current_player().items.get(MONEY), 1275);
}

/// Test the mortgage round trip costs ten percent.
#[test]
fn test_mortgage_and_unmortgage() {
    let mut game = Game::new(presets::standard(), 2, 1);
    game.current_player_mut().items.set("BROWN_1", 1);

    let mortgage = holder_action(&game, "BROWN_1", "Mortgage");
    game.apply_action(&mortgage).unwrap();
    assert!(game.property_state("BROWN_1").is_mortgaged());
    assert_eq!(game.current_player().items.get(MONEY), 1530);
    assert!(!holder_action(&game, "BROWN_1", "Buy House").is_allowed(&game));

    let unmortgage = holder_action(&game, "BROWN_1", "Unmortgage");
    assert_eq!(unmortgage.cost, Ledger::single(MONEY, 33));
    game.apply_action(&unmortgage).unwrap();
    assert!(!game.property_state("BROWN_1").is_mortgaged());
    assert_eq!(game.current_player().items.get(MONEY), 1497);
}

/// Test that holder actions belong to whoever holds the item.
#[test]
fn test_holder_actions_need_the_item() {
    let game = game_with_owner(&["BROWN_1"]);
    assert!(game.item_actions("BROWN_1").is_empty());
    assert_eq!(game.item_description("BROWN_1"), "Owned by Player 2");
}

/// Test that buildings cannot be placed on a mortgaged property directly.
#[test]
#[should_panic(expected = "Cannot build on a mortgaged property")]
fn test_no_buildings_on_mortgaged_property() {
    let mut game = game_with_owner(&["BROWN_1"]);
    game.property_state_mut("BROWN_1").set_mortgaged(true);
    game.property_state_mut("BROWN_1").add_buildings(HOUSE, 1);
}
