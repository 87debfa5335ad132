//! Tile definitions.
//!
//! Tiles are data; their hooks (`on_pass`, `on_land`, offered actions) are
//! interpreted by the game in `game::tiles`.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::item::GET_OUT_OF_JAIL_FREE;
use super::property::money;
use super::Board;
use crate::core::Ledger;

/// A tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Grants `reward` when passed over or landed on.
    Go { reward: Ledger },
    /// Offers the property item to buy, or charges rent to visitors.
    Property { item: String },
    /// Offers a random card from `deck`.
    Cards { name: String, deck: Vec<Card> },
    /// Charges a tax payable to the bank.
    Tax { name: String, tax: Ledger },
    /// Holds jailed players until they pay, roll out, or use a card.
    Jail { fine: Ledger, release_card: Ledger },
    FreeParking,
    /// Sends whoever lands here to jail.
    GoToJail,
}

impl Tile {
    /// A jail with a $50 fine released by one get-out-of-jail-free card.
    #[must_use]
    pub fn jail_default() -> Self {
        Tile::Jail {
            fine: money(50),
            release_card: Ledger::single(GET_OUT_OF_JAIL_FREE, 1),
        }
    }

    /// Display name of the tile.
    #[must_use]
    pub fn name(&self, board: &Board) -> String {
        match self {
            Tile::Go { .. } => "GO".to_string(),
            Tile::Property { item } => board.item(item).name(),
            Tile::Cards { name, .. } | Tile::Tax { name, .. } => name.clone(),
            Tile::Jail { .. } => "Jail".to_string(),
            Tile::FreeParking => "Free Parking".to_string(),
            Tile::GoToJail => "Go to Jail".to_string(),
        }
    }

    #[must_use]
    pub fn is_jail(&self) -> bool {
        matches!(self, Tile::Jail { .. })
    }

    /// The property item this tile sells, if any.
    #[must_use]
    pub fn property_id(&self) -> Option<&str> {
        match self {
            Tile::Property { item } => Some(item),
            _ => None,
        }
    }
}
