//! Legality and effects of every `ActionKind`.
//!
//! `is_allowed` is a pure predicate over the game; `perform` assumes the
//! action's cost has already been debited from the current player.

use std::sync::Arc;

use log::{debug, info};

use super::Game;
use crate::board::{CardPower, Item, PropertyKind, HOTEL, HOUSE};
use crate::core::{Action, ActionKind, DiceRoll, PlayerId};

impl Action {
    /// Whether the current player may take this action right now.
    #[must_use]
    pub fn is_allowed(&self, game: &Game) -> bool {
        let player = game.current_player();
        let affordable = player.items.has_all(&self.cost);

        match &self.kind {
            ActionKind::Move
            | ActionKind::EndTurn
            | ActionKind::DrawCard
            | ActionKind::PayRent { .. }
            | ActionKind::PayTax
            | ActionKind::AttemptJailRoll
            | ActionKind::AcceptFate
            | ActionKind::AcceptCard { .. }
            | ActionKind::GoToProperty { .. } => true,

            ActionKind::BuyProperty { .. } | ActionKind::UseJailCard => affordable,
            ActionKind::PayJailFine { forced } => *forced || affordable,
            ActionKind::CardChoice { index } => game.has_card_choice(*index),

            ActionKind::Mortgage { property } => {
                player.items.has(property) && {
                    let state = game.property_state(property);
                    !state.is_mortgaged() && state.buildings().is_empty()
                }
            }
            ActionKind::Unmortgage { property } => {
                player.items.has(property) && game.property_state(property).is_mortgaged()
            }
            ActionKind::BuyHouse { property } => {
                affordable
                    && game.can_build(property)
                    && game.street_house_limit(property).is_some_and(|limit| {
                        game.property_state(property).buildings().get(HOUSE) < limit
                    })
            }
            ActionKind::SellHouse { property } => {
                player.items.has(property) && game.property_state(property).buildings().has(HOUSE)
            }
            ActionKind::BuyHotel { property } => {
                affordable
                    && game.can_build(property)
                    && game.street_house_limit(property).is_some_and(|limit| {
                        game.property_state(property).buildings().get(HOUSE) == limit
                    })
            }
            ActionKind::SellHotel { property } => {
                player.items.has(property) && game.property_state(property).buildings().has(HOTEL)
            }

            ActionKind::UseCard { item } => affordable && game.can_use_card(item),
        }
    }

    /// Carry out the action's effect. The cost must already be debited.
    pub fn perform(&self, game: &mut Game) {
        debug!("{} performs {:?}", game.current, self.name);

        match &self.kind {
            ActionKind::Move => game.roll_dice_and_move(),
            ActionKind::EndTurn => game.end_turn(),
            ActionKind::DrawCard => game.draw_card(),

            ActionKind::PayRent { owner } => {
                game.current_player_mut().set_last_creditor(Some(*owner));
                game.player_mut(*owner).items.merge(&self.cost);
                game.current_actions = vec![game.end_turn_action()];
            }
            ActionKind::BuyProperty { property } => {
                info!("{} buys {}", game.current, property);
                game.current_player_mut().items.set(property.as_str(), 1);
                game.current_actions = vec![game.end_turn_action()];
            }
            ActionKind::PayTax => {
                game.current_player_mut().set_last_creditor(None);
                game.current_actions = vec![game.end_turn_action()];
            }

            ActionKind::UseJailCard => {
                game.current_player_mut().release_from_jail();
                game.current_actions = vec![game.move_action()];
            }
            ActionKind::AttemptJailRoll => {
                let roll = game.rng.roll_dice();
                game.apply_jail_roll(roll);
            }
            ActionKind::PayJailFine { .. } => {
                let player = game.current_player_mut();
                player.set_last_creditor(None);
                player.release_from_jail();
                game.current_actions = vec![game.move_action()];
            }

            ActionKind::AcceptFate => {
                let board = Arc::clone(&game.board);
                game.current_player_mut().send_to_jail(&board);
                game.end_turn();
            }
            ActionKind::AcceptCard { item } => {
                game.current_player_mut().items.add(item, 1);
                game.set_current_card(None);
                game.current_actions = vec![game.end_turn_action()];
            }
            ActionKind::GoToProperty { property } => game.go_to_property(property),
            ActionKind::CardChoice { index } => game.resolve_card_choice(*index),

            ActionKind::Mortgage { property } => {
                game.property_state_mut(property).set_mortgaged(true);
            }
            ActionKind::Unmortgage { property } => {
                game.property_state_mut(property).set_mortgaged(false);
            }
            ActionKind::BuyHouse { property } => {
                game.property_state_mut(property).add_buildings(HOUSE, 1);
            }
            ActionKind::SellHouse { property } => {
                game.property_state_mut(property).add_buildings(HOUSE, -1);
            }
            ActionKind::BuyHotel { property } => {
                let state = game.property_state_mut(property);
                state.set_buildings(HOUSE, 0);
                state.add_buildings(HOTEL, 1);
            }
            ActionKind::SellHotel { property } => {
                game.property_state_mut(property).set_buildings(HOTEL, 0);
            }

            ActionKind::UseCard { item } => game.use_card(item),
        }
    }
}

impl Game {
    /// Resolve a roll made to leave jail.
    ///
    /// Doubles release the player and move them; otherwise the jail options
    /// are offered again without the roll.
    pub fn apply_jail_roll(&mut self, roll: DiceRoll) {
        self.dice_rolls.push(roll);
        if roll.is_double() {
            info!("{} rolls {} and leaves jail", self.current, roll);
            self.current_player_mut().release_from_jail();
            self.move_by(roll.sum());
        } else {
            debug!("{} rolls {} and stays in jail", self.current, roll);
            self.current_actions = self.jailed_actions(true);
        }
    }

    /// House limit of a street, or `None` for other items.
    fn street_house_limit(&self, id: &str) -> Option<i64> {
        match &self.board.property(id)?.kind {
            PropertyKind::Street(street) => Some(street.house_rent.len() as i64),
            _ => None,
        }
    }

    /// Shared building preconditions: the current player holds the street's
    /// whole color group, the street is unmortgaged and has no hotel.
    fn can_build(&self, id: &str) -> bool {
        let Some(street) = self.board.property(id).and_then(|p| p.as_street()) else {
            return false;
        };
        let player = self.current_player();
        let state = self.property_state(id);

        player.items.has(id)
            && player.has_monopoly(&street.category, &self.board)
            && !state.is_mortgaged()
            && !state.buildings().has(HOTEL)
    }

    /// Property on the tile the current player stands on.
    fn property_underfoot(&self) -> Option<&str> {
        let location = self.current_player().location();
        self.board
            .tile(location)
            .property_id()
            .filter(|id| self.board.is_property(id))
    }

    fn can_use_card(&self, id: &str) -> bool {
        let Item::Card(card) = &*self.board.item(id) else {
            return false;
        };

        match &card.power {
            CardPower::Passive => false,
            CardPower::Steal => {
                !self.is_post_move()
                    && self.property_underfoot().is_some_and(|property| {
                        self.find_owner(property)
                            .is_some_and(|owner| owner != self.current)
                    })
            }
            CardPower::Kill => {
                let location = self.current_player().location();
                self.players
                    .values()
                    .filter(|p| p.is_alive() && p.location() == location)
                    .count()
                    > 1
            }
            CardPower::InstantHotel => {
                !self.is_post_move()
                    && self.property_underfoot().is_some_and(|property| {
                        let state = self.property_state(property);
                        self.board.property(property).is_some_and(|p| p.as_street().is_some())
                            && !state.is_mortgaged()
                            && !state.buildings().has(HOTEL)
                    })
            }
            CardPower::Skip | CardPower::Purge { .. } => true,
        }
    }

    fn use_card(&mut self, id: &str) {
        let Item::Card(card) = self.board.item(id).into_owned() else {
            return;
        };
        info!("{} uses {}", self.current, card.item_name());

        match card.power {
            CardPower::Passive => {}
            CardPower::Steal => {
                let Some(property) = self.property_underfoot().map(str::to_string) else {
                    return;
                };
                self.property_state_mut(&property).set_mortgaged(false);
                if let Some(owner) = self.find_owner(&property) {
                    self.player_mut(owner).items.set(property.as_str(), 0);
                }
                self.current_player_mut().items.set(property, 1);
            }
            CardPower::Kill => {
                let location = self.current_player().location();
                let victims: Vec<PlayerId> = self
                    .players
                    .iter()
                    .filter(|(id, p)| {
                        *id != self.current && p.is_alive() && p.location() == location
                    })
                    .map(|(id, _)| id)
                    .collect();
                for victim in victims {
                    self.mark_as_dead(victim);
                }
            }
            CardPower::InstantHotel => {
                let Some(property) = self.property_underfoot().map(str::to_string) else {
                    return;
                };
                let state = self.property_state_mut(&property);
                state.set_buildings(HOUSE, 0);
                state.set_buildings(HOTEL, 1);
            }
            CardPower::Skip => self.end_turn(),
            CardPower::Purge { item } => {
                for (_, player) in self.players.iter_mut() {
                    player.items.set(item.as_str(), 0);
                }
            }
        }
    }
}
