//! Turn flow tests: rolling, doubles, jail and the end of the game.

use oligopoly::board::{presets, GET_OUT_OF_JAIL_FREE, MONEY};
use oligopoly::core::{Action, DiceRoll, PlayerId, TurnPhase};
use oligopoly::game::Game;

fn names(actions: &[Action]) -> Vec<&str> {
    actions.iter().map(|a| a.name.as_str()).collect()
}

fn perform_named(game: &mut Game, name: &str) {
    let action = game
        .current_actions()
        .iter()
        .find(|a| a.name == name)
        .cloned()
        .unwrap_or_else(|| panic!("{name} not offered: {:?}", names(game.current_actions())));
    assert!(action.is_allowed(game), "{name} is not allowed");
    game.debit_and_perform(&action);
}

/// Test that a new game waits in Start with nothing on offer.
#[test]
fn test_first_turn_starts_empty() {
    let game = Game::new(presets::standard(), 3, 1);
    assert_eq!(game.phase(), TurnPhase::Start);
    assert_eq!(game.turns(), 1);
    assert!(game.current_actions().is_empty());
    assert!(game.dice_rolls().is_empty());
}

/// Test that the third double of a turn sends the player to jail.
#[test]
fn test_three_doubles_go_to_jail() {
    let mut game = Game::new(presets::standard(), 2, 1);
    game.transition_to_premove();

    game.apply_roll(DiceRoll(1, 1));
    assert_eq!(game.current_player().location(), 2);
    game.apply_roll(DiceRoll(2, 2));
    assert_eq!(game.current_player().location(), 6);
    game.apply_roll(DiceRoll(3, 3));

    let player = game.current_player();
    assert_eq!(player.location(), 10);
    assert!(player.is_jailed());
    assert_eq!(player.turns_in_jail(), Some(0));
    assert_eq!(names(game.current_actions()), ["End Turn"]);
}

/// Test that without a jail the third double is discarded and play goes on.
#[test]
fn test_three_doubles_without_jail() {
    let mut game = Game::new(presets::deathmatch(), 2, 1);
    game.transition_to_premove();

    game.apply_roll(DiceRoll(1, 1));
    game.apply_roll(DiceRoll(2, 2));
    let before = game.current_actions().to_vec();
    game.apply_roll(DiceRoll(3, 3));

    assert_eq!(game.current_player().location(), 6);
    assert!(!game.current_player().is_jailed());
    assert_eq!(game.dice_rolls().len(), 3);
    assert_eq!(game.current_actions(), before.as_slice());
}

/// Test that a double earns another roll instead of ending the turn.
#[test]
fn test_double_rolls_again() {
    let mut game = Game::new(presets::standard(), 2, 1);
    game.transition_to_premove();
    game.apply_roll(DiceRoll(5, 5));

    // Just visiting
    assert_eq!(game.current_player().location(), 10);
    assert_eq!(names(game.current_actions()), ["Move"]);

    game.apply_roll(DiceRoll(1, 2));
    assert_eq!(game.current_player().location(), 13);
}

/// Test that landing on Go To Jail jails the player and ends the turn.
#[test]
fn test_go_to_jail_tile() {
    let mut game = Game::new(presets::standard(), 2, 1);
    game.current_player_mut().set_location(25);
    game.transition_to_premove();
    game.apply_roll(DiceRoll(1, 4));

    assert_eq!(names(game.current_actions()), ["Accept Fate"]);
    perform_named(&mut game, "Accept Fate");

    let jailed = game.player(PlayerId::new(0));
    assert_eq!(jailed.location(), 10);
    assert!(jailed.is_jailed());
    assert_eq!(game.current_player_id(), PlayerId::new(1));
}

/// Test the jail options: a failed roll, then paying the fine.
#[test]
fn test_jail_roll_then_fine() {
    let mut game = Game::new(presets::standard(), 2, 1);
    let board = game.board().clone();
    game.current_player_mut().send_to_jail(&board);
    game.end_turn();
    game.end_turn();

    assert_eq!(game.current_player_id(), PlayerId::new(0));
    assert_eq!(game.current_player().turns_in_jail(), Some(1));

    game.transition_to_premove();
    assert_eq!(
        names(game.current_actions()),
        ["Use Card", "Attempt Roll", "Pay Fine", "End Turn"]
    );
    assert!(!game.current_actions()[0].is_allowed(&game));

    game.apply_jail_roll(DiceRoll(1, 2));
    assert_eq!(game.current_player().location(), 10);
    assert_eq!(names(game.current_actions()), ["Use Card", "Pay Fine", "End Turn"]);

    perform_named(&mut game, "Pay Fine");
    assert!(!game.current_player().is_jailed());
    assert_eq!(game.current_player().items.get(MONEY), 1450);
    assert_eq!(names(game.current_actions()), ["Move"]);
}

/// Test that a double in jail releases and moves the player.
#[test]
fn test_jail_double_releases() {
    let mut game = Game::new(presets::standard(), 1, 1);
    let board = game.board().clone();
    game.current_player_mut().send_to_jail(&board);
    game.transition_to_premove();

    game.apply_jail_roll(DiceRoll(2, 2));
    assert!(!game.current_player().is_jailed());
    assert_eq!(game.current_player().location(), 14);
}

/// Test that a get-out-of-jail-free card is spent to leave jail.
#[test]
fn test_jail_card_releases() {
    let mut game = Game::new(presets::standard(), 2, 1);
    let board = game.board().clone();
    game.current_player_mut().send_to_jail(&board);
    game.current_player_mut().items.set(GET_OUT_OF_JAIL_FREE, 1);
    game.transition_to_premove();

    perform_named(&mut game, "Use Card");
    assert!(!game.current_player().is_jailed());
    assert_eq!(game.current_player().items.get(GET_OUT_OF_JAIL_FREE), 0);
    assert_eq!(names(game.current_actions()), ["Move"]);
}

/// Test that the fine is forced after three turns in jail.
#[test]
fn test_fine_forced_after_three_turns() {
    let mut game = Game::new(presets::standard(), 2, 1);
    let board = game.board().clone();
    game.current_player_mut().send_to_jail(&board);
    game.current_player_mut().items.set(MONEY, 0);
    for _ in 0..6 {
        game.end_turn();
    }

    assert_eq!(game.current_player().turns_in_jail(), Some(3));
    game.transition_to_premove();
    assert_eq!(
        names(game.current_actions()),
        ["Use Card", "Attempt Roll", "Pay Fine"]
    );

    perform_named(&mut game, "Pay Fine");
    assert_eq!(game.current_player().items.get(MONEY), -50);
}

/// Test that turns skip dead players and that the last one standing wins.
#[test]
fn test_turns_skip_dead_and_winner_declared() {
    let mut game = Game::new(presets::standard(), 3, 1);

    game.end_turn();
    game.current_player_mut().items.set(MONEY, -1);
    game.end_turn();
    assert!(!game.player(PlayerId::new(1)).is_alive());
    assert_eq!(game.current_player_id(), PlayerId::new(2));

    game.end_turn();
    assert_eq!(game.current_player_id(), PlayerId::new(0));

    game.current_player_mut().items.set(MONEY, -1);
    game.end_turn();
    assert!(game.is_finished());
    assert_eq!(game.phase(), TurnPhase::Winner);
    assert_eq!(game.current_player_id(), PlayerId::new(2));
}

/// Test that a lone bankrupt player still ends the game as the winner.
#[test]
fn test_everyone_dead_current_wins() {
    let mut game = Game::new(presets::standard(), 1, 1);
    game.current_player_mut().items.set(MONEY, -5);
    game.end_turn();

    assert!(game.is_finished());
    assert_eq!(game.current_player_id(), PlayerId::new(0));
    assert!(!game.current_player().is_alive());
}
