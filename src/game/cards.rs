//! Card resolution.
//!
//! A presented card is modal: its actions replace everything else on offer.
//! Scripted choices may present the next card from inside their own effect,
//! which simply re-enters the presented-card state; chains of any length
//! never grow the stack.

use log::debug;

use super::Game;
use crate::board::{Card, CardEffect, CardOutcome, Tile};
use crate::core::{Action, ActionKind, Ledger};

impl Game {
    /// Actions a card offers while presented.
    #[must_use]
    pub fn card_actions(&self, card: &Card) -> Vec<Action> {
        match card {
            Card::GoToJail => vec![Action::free("Accept Fate", ActionKind::AcceptFate)],
            Card::Ownable(card) => vec![Action::free(
                "Accept",
                ActionKind::AcceptCard {
                    item: card.id.clone(),
                },
            )],
            Card::GoToProperty { property, .. } => vec![Action::free(
                "Go!",
                ActionKind::GoToProperty {
                    property: property.clone(),
                },
            )],
            Card::Scripted(card) if card.choices.is_empty() => vec![self.end_turn_action()],
            Card::Scripted(card) => card
                .choices
                .iter()
                .enumerate()
                .map(|(index, choice)| {
                    Action::free(choice.label.clone(), ActionKind::CardChoice { index })
                })
                .collect(),
        }
    }

    /// Draw uniformly from the deck of the tile stood on and present it.
    pub(crate) fn draw_card(&mut self) {
        let location = self.current_player().location();
        let card = match self.board.tile(location) {
            Tile::Cards { deck, .. } => self.rng.choose(deck).cloned(),
            _ => None,
        };

        match card {
            Some(card) => {
                debug!("{} draws {:?}", self.current, card.title());
                self.set_current_card(Some(card));
            }
            None => self.end_turn(),
        }
    }

    /// Advance to the next tile of `property`, or offer to end the turn when
    /// the board has none.
    pub(crate) fn go_to_property(&mut self, property: &str) {
        self.set_current_card(None);

        let tile_count = self.board.tile_count();
        let location = self.current_player().location();
        let steps = (0..tile_count).find(|i| {
            self.board.tile((location + i) % tile_count).property_id() == Some(property)
        });

        match steps {
            Some(steps) => self.move_by(steps),
            None => self.current_actions = vec![self.end_turn_action()],
        }
    }

    /// Whether the presented card is scripted and has a choice at `index`.
    pub(crate) fn has_card_choice(&self, index: usize) -> bool {
        matches!(&self.current_card, Some(Card::Scripted(card)) if index < card.choices.len())
    }

    /// Take a choice on the presented scripted card.
    pub(crate) fn resolve_card_choice(&mut self, index: usize) {
        let Some(Card::Scripted(card)) = &self.current_card else {
            return;
        };
        let Some(choice) = card.choices.get(index).cloned() else {
            return;
        };

        debug!("{} chooses {:?}", self.current, choice.label);
        for effect in &choice.effects {
            self.apply_card_effect(effect);
        }

        match choice.outcome {
            CardOutcome::Next(next) => self.set_current_card(Some(*next)),
            CardOutcome::Done => {
                self.current_actions = vec![self.end_turn_action()];
                self.set_current_card(None);
            }
        }
    }

    fn apply_card_effect(&mut self, effect: &CardEffect) {
        match effect {
            CardEffect::Grant(items) => self.current_player_mut().items.merge(items),
            CardEffect::GrantPerPlayer(items) => {
                let seats = self.player_count() as i64;
                let total = Ledger::map(items, |q| q * seats);
                self.current_player_mut().items.merge(&total);
            }
            CardEffect::ChargeEveryone(items) => {
                for (_, player) in self.players.iter_mut() {
                    player.items.subtract(items);
                }
            }
            CardEffect::Seize { item } => {
                for (_, player) in self.players.iter_mut() {
                    player.items.set(item.as_str(), 0);
                }
                self.current_player_mut().items.set(item.as_str(), 1);
            }
        }
    }
}
