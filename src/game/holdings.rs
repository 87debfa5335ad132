//! What the current player can do with what they hold, plus item display.

use super::Game;
use crate::board::{CardPower, Item, PropertyKind};
use crate::core::{Action, ActionKind, Ledger};

impl Game {
    /// Actions the current player may take with an item they hold.
    ///
    /// Empty when the current player does not hold the item.
    #[must_use]
    pub fn item_actions(&self, id: &str) -> Vec<Action> {
        if !self.current_player().items.has(id) {
            return Vec::new();
        }

        match &*self.board.item(id) {
            Item::Property(property) => {
                let property_id = || id.to_string();
                let mortgage = &property.mortgage_price;

                let mut actions = vec![
                    Action::new(
                        "Mortgage",
                        Ledger::map(mortgage, |q| -q),
                        ActionKind::Mortgage {
                            property: property_id(),
                        },
                    ),
                    Action::new(
                        "Unmortgage",
                        Ledger::map(mortgage, |q| q + q / 10),
                        ActionKind::Unmortgage {
                            property: property_id(),
                        },
                    ),
                ];

                if let PropertyKind::Street(street) = &property.kind {
                    actions.extend([
                        Action::new(
                            "Buy House",
                            street.house_price.clone(),
                            ActionKind::BuyHouse {
                                property: property_id(),
                            },
                        ),
                        Action::new(
                            "Sell House",
                            Ledger::map(&street.house_price, |q| -q / 2),
                            ActionKind::SellHouse {
                                property: property_id(),
                            },
                        ),
                        Action::new(
                            "Buy Hotel",
                            street.hotel_price.clone(),
                            ActionKind::BuyHotel {
                                property: property_id(),
                            },
                        ),
                        Action::new(
                            "Sell Hotel",
                            Ledger::map(&street.hotel_price, |q| -q / 2),
                            ActionKind::SellHotel {
                                property: property_id(),
                            },
                        ),
                    ]);
                }

                actions
            }
            Item::Card(card) if card.power != CardPower::Passive => vec![Action::new(
                "Use",
                Ledger::single(card.id.clone(), 1),
                ActionKind::UseCard {
                    item: card.id.clone(),
                },
            )],
            _ => Vec::new(),
        }
    }

    /// One-line description of an item in the context of this game.
    #[must_use]
    pub fn item_description(&self, id: &str) -> String {
        let item = self.board.item(id);
        match &*item {
            Item::Property(_) => match self.find_owner(id) {
                Some(owner) => format!(
                    "{} by {}",
                    if self.property_state(id).is_mortgaged() {
                        "Mortgaged"
                    } else {
                        "Owned"
                    },
                    owner
                ),
                None => "Unowned".to_string(),
            },
            _ => item.blurb().unwrap_or_default().to_string(),
        }
    }

    /// Display lines for an item: category and rent schedule for properties.
    #[must_use]
    pub fn item_stats(&self, id: &str) -> Vec<String> {
        match self.board.property(id) {
            Some(property) => {
                let owner = self.find_owner(id).map(|owner| self.player(owner));
                property.stats(self.property_state(id), owner, &self.board, self.last_roll())
            }
            None => Vec::new(),
        }
    }
}
