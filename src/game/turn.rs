//! The turn-phase machine.
//!
//! ```text
//! Start --transition_to_premove--> PreMove --move--> PostMove --end_turn--> Start
//!                                                        \--(one player left)--> Winner
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use super::Game;
use crate::board::Card;
use crate::core::{Action, ActionKind, DiceRoll, PlayerId, TurnPhase};

impl Game {
    /// Begin the current player's turn.
    ///
    /// Clears the dice, counts the turn, advances the jail counter and fires
    /// the save hook. No actions are offered until `transition_to_premove`.
    pub fn start_turn(&mut self) {
        self.phase = TurnPhase::Start;
        self.dice_rolls.clear();
        self.turns += 1;
        self.current_player_mut().start_turn();
        debug!("Turn {} begins for {}", self.turns, self.current);
        self.fire_saver();
    }

    /// Offer the actions of the tile the current player stands on.
    pub fn transition_to_premove(&mut self) {
        self.phase = TurnPhase::PreMove;
        let location = self.current_player().location();
        self.current_actions = self.tile_actions(location);
    }

    /// Move the current player forward `steps` tiles.
    ///
    /// Tiles strictly between the start and the destination are passed; the
    /// destination is landed on and offers its actions.
    pub fn move_by(&mut self, steps: usize) {
        self.phase = TurnPhase::PostMove;
        self.set_current_card(None);

        let tile_count = self.board.tile_count();
        let start = self.current_player().location();
        let end = (start + steps) % tile_count;
        self.current_player_mut().set_location(end);
        debug!("{} moves {} from {} to {}", self.current, steps, start, end);

        for i in 1..steps {
            self.on_pass((start + i) % tile_count);
        }

        self.on_land(end);
        self.current_actions = self.tile_actions(end);
    }

    /// Roll two dice and resolve the roll.
    pub fn roll_dice_and_move(&mut self) {
        let roll = self.rng.roll_dice();
        self.apply_roll(roll);
    }

    /// Resolve a roll exactly as `roll_dice_and_move` would.
    ///
    /// A third double in one turn sends the player to jail instead of moving.
    /// With no jail on the board the roll is discarded and the offered actions
    /// stay as they were, so the player rolls again.
    pub fn apply_roll(&mut self, roll: DiceRoll) {
        self.dice_rolls.push(roll);
        debug!("{} rolls {}", self.current, roll);

        if roll.is_double() && self.dice_rolls.len() >= 3 {
            let board = Arc::clone(&self.board);
            if self.current_player_mut().send_to_jail(&board) {
                info!("{} rolled three doubles and goes to jail", self.current);
                self.phase = TurnPhase::PostMove;
                let location = self.current_player().location();
                self.on_land(location);
                self.current_actions = self.tile_actions(location);
            } else {
                warn!("{} rolled three doubles but the board has no jail", self.current);
            }
            return;
        }

        self.move_by(roll.sum());
    }

    /// The action that rolls the dice.
    #[must_use]
    pub fn move_action(&self) -> Action {
        Action::free("Move", ActionKind::Move)
    }

    /// The action that finishes the turn.
    ///
    /// After a double a free player rolls again instead.
    #[must_use]
    pub fn end_turn_action(&self) -> Action {
        let rolled_double = self.last_roll().is_some_and(DiceRoll::is_double);
        if rolled_double && !self.current_player().is_jailed() {
            return self.move_action();
        }
        Action::free("End Turn", ActionKind::EndTurn)
    }

    /// Finish the current turn and pass play to the next living player.
    ///
    /// A player left in debt is bankrupted first. With one player left alive
    /// that player wins; with none, the current player does.
    pub fn end_turn(&mut self) {
        self.current_actions.clear();
        self.set_current_card(None);

        if self.current_player().items.has_debt() {
            self.mark_as_dead(self.current);
        }

        let alive = self.players.values().filter(|p| p.is_alive()).count();
        let count = self.player_count();

        for i in 1..=count {
            let candidate = PlayerId::new(((self.current.index() + i) % count) as u8);
            if self.players[candidate].is_alive() {
                self.current = candidate;
                if alive == 1 {
                    self.declare_winner();
                } else {
                    self.start_turn();
                }
                return;
            }
        }

        warn!("Every player is dead; {} wins by default", self.current);
        self.declare_winner();
    }

    /// End the game with the current player as the winner.
    pub fn declare_winner(&mut self) {
        self.phase = TurnPhase::Winner;
        info!("{} wins after {} turns", self.current, self.turns);
        self.fire_saver();
    }

    /// Present a card, replacing the offered actions with its own.
    ///
    /// `None` only clears the card; the offered actions are left alone.
    pub fn set_current_card(&mut self, card: Option<Card>) {
        if let Some(card) = &card {
            debug!("{} is presented {:?}", self.current, card.title());
            self.current_actions = self.card_actions(card);
        }
        self.current_card = card;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{presets, MONEY};

    #[test]
    fn test_transition_to_premove_offers_move() {
        let mut game = Game::new(presets::standard(), 2, 1);
        game.transition_to_premove();
        assert_eq!(game.phase(), TurnPhase::PreMove);
        assert_eq!(game.current_actions(), &[game.move_action()]);
    }

    #[test]
    fn test_move_lands_and_offers_tile_actions() {
        let mut game = Game::new(presets::standard(), 2, 1);
        game.transition_to_premove();
        game.apply_roll(DiceRoll(1, 3));

        assert_eq!(game.phase(), TurnPhase::PostMove);
        assert_eq!(game.current_player().location(), 4);
        let names: Vec<_> = game.current_actions().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Pay Tax"]);
    }

    #[test]
    fn test_pass_go_grants_reward() {
        let mut game = Game::new(presets::standard(), 2, 1);
        game.current_player_mut().set_location(38);
        game.move_by(5);

        assert_eq!(game.current_player().location(), 3);
        assert_eq!(game.current_player().items.get(MONEY), 1700);
    }

    #[test]
    fn test_land_on_go_grants_reward_once() {
        let mut game = Game::new(presets::standard(), 2, 1);
        game.current_player_mut().set_location(35);
        game.move_by(5);

        assert_eq!(game.current_player().location(), 0);
        assert_eq!(game.current_player().items.get(MONEY), 1700);
    }

    #[test]
    fn test_end_turn_action_after_double() {
        let mut game = Game::new(presets::standard(), 2, 1);
        game.apply_roll(DiceRoll(2, 2));
        assert_eq!(game.end_turn_action(), game.move_action());

        game.apply_roll(DiceRoll(1, 2));
        assert_eq!(game.end_turn_action().kind, ActionKind::EndTurn);
    }

    #[test]
    fn test_end_turn_advances_player() {
        let mut game = Game::new(presets::standard(), 3, 1);
        game.end_turn();
        assert_eq!(game.current_player_id(), PlayerId::new(1));
        assert_eq!(game.turns(), 2);
        assert_eq!(game.phase(), TurnPhase::Start);
    }

    #[test]
    fn test_end_turn_skips_dead_players() {
        let mut game = Game::new(presets::standard(), 3, 1);
        game.mark_as_dead(PlayerId::new(1));
        game.end_turn();
        assert_eq!(game.current_player_id(), PlayerId::new(2));
    }

    #[test]
    fn test_last_player_standing_wins() {
        let mut game = Game::new(presets::standard(), 2, 1);
        game.current_player_mut().items.set(MONEY, -1);
        game.end_turn();

        assert_eq!(game.phase(), TurnPhase::Winner);
        assert_eq!(game.current_player_id(), PlayerId::new(1));
        assert!(!game.player(PlayerId::new(0)).is_alive());
    }

    #[test]
    fn test_everyone_dead_current_wins() {
        let mut game = Game::new(presets::standard(), 1, 1);
        game.current_player_mut().items.set(MONEY, -1);
        game.end_turn();

        assert_eq!(game.phase(), TurnPhase::Winner);
        assert_eq!(game.current_player_id(), PlayerId::new(0));
    }

    #[test]
    fn test_clearing_card_keeps_actions() {
        let mut game = Game::new(presets::standard(), 2, 1);
        game.set_current_card(Some(Card::GoToJail));
        assert_eq!(game.current_actions()[0].name, "Accept Fate");

        game.set_current_card(None);
        assert!(game.current_card().is_none());
        assert_eq!(game.current_actions()[0].name, "Accept Fate");
    }
}
