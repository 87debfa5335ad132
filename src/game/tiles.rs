//! Tile hooks and contextual actions.

use std::sync::Arc;

use log::debug;

use super::Game;
use crate::board::{Card, Tile};
use crate::core::{Action, ActionKind};

impl Game {
    /// Actions the tile at `location` offers the current player.
    #[must_use]
    pub fn tile_actions(&self, location: usize) -> Vec<Action> {
        let post_move = self.is_post_move();

        match self.board.tile(location) {
            Tile::Property { item } if post_move => self.property_tile_actions(item),
            Tile::Cards { deck, .. } if post_move && !deck.is_empty() => {
                vec![Action::free("Draw Card", ActionKind::DrawCard)]
            }
            Tile::Tax { tax, .. } if post_move => {
                vec![Action::new("Pay Tax", tax.clone(), ActionKind::PayTax)]
            }
            Tile::Jail { .. } if self.current_player().is_jailed() && !post_move => {
                self.jailed_actions(false)
            }
            Tile::GoToJail if post_move => self.card_actions(&Card::GoToJail),
            _ => self.default_tile_actions(),
        }
    }

    fn default_tile_actions(&self) -> Vec<Action> {
        if self.is_post_move() {
            vec![self.end_turn_action()]
        } else {
            vec![self.move_action()]
        }
    }

    fn property_tile_actions(&self, id: &str) -> Vec<Action> {
        let Some(property) = self.board.property(id) else {
            return self.default_tile_actions();
        };

        match self.find_owner(id) {
            Some(owner) if owner == self.current => vec![self.end_turn_action()],
            Some(_) if self.property_state(id).is_mortgaged() => vec![self.end_turn_action()],
            Some(owner) => vec![Action::new(
                "Pay Rent",
                self.rent(id),
                ActionKind::PayRent { owner },
            )],
            None => vec![
                Action::new(
                    "Buy",
                    property.buy_price.clone(),
                    ActionKind::BuyProperty {
                        property: id.to_string(),
                    },
                ),
                self.end_turn_action(),
            ],
        }
    }

    /// Actions for a jailed player standing in jail.
    ///
    /// `did_roll` hides the roll attempt once it has been used this turn.
    /// After three turns the fine is forced and the turn cannot be skipped.
    #[must_use]
    pub fn jailed_actions(&self, did_roll: bool) -> Vec<Action> {
        let location = self.current_player().location();
        let Tile::Jail { fine, release_card } = self.board.tile(location) else {
            return vec![self.end_turn_action()];
        };

        let can_skip = self.current_player().turns_in_jail().unwrap_or(0) < 3;

        let mut actions = vec![Action::new(
            "Use Card",
            release_card.clone(),
            ActionKind::UseJailCard,
        )];
        if !did_roll {
            actions.push(Action::free("Attempt Roll", ActionKind::AttemptJailRoll));
        }
        actions.push(Action::new(
            "Pay Fine",
            fine.clone(),
            ActionKind::PayJailFine { forced: !can_skip },
        ));
        if can_skip {
            actions.push(self.end_turn_action());
        }
        actions
    }

    /// Run the passing hook of the tile at `location`.
    pub(crate) fn on_pass(&mut self, location: usize) {
        let board = Arc::clone(&self.board);
        if let Tile::Go { reward } = board.tile(location) {
            debug!("{} passes GO", self.current);
            self.current_player_mut().items.merge(reward);
        }
    }

    /// Run the landing hook of the tile at `location`.
    pub(crate) fn on_land(&mut self, location: usize) {
        let board = Arc::clone(&self.board);
        if let Tile::Go { reward } = board.tile(location) {
            debug!("{} lands on GO", self.current);
            self.current_player_mut().items.merge(reward);
        }
    }
}
