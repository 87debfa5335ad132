//! The static board catalog.
//!
//! A `Board` is immutable once built: a named ring of tiles, the catalog of
//! every item ID it uses, and the ledger each player starts with. Games share
//! a board through `Arc`.
//!
//! ## Authoring
//!
//! Boards come from `presets` or from JSON via `Board::from_json`:
//!
//! ```
//! use oligopoly::board::{presets, Board};
//!
//! let standard = presets::standard();
//! let json = serde_json::to_string(&*standard).unwrap();
//! let reloaded = Board::from_json(&json).unwrap();
//! assert_eq!(reloaded.name(), "Standard");
//! assert_eq!(reloaded.tile_count(), 40);
//! ```

pub mod card;
pub mod item;
pub mod presets;
pub mod property;
pub mod tile;

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use card::{Card, CardChoice, CardEffect, CardOutcome, ScriptedCard};
pub use item::{Building, CardPower, Item, OwnableCard, GET_OUT_OF_JAIL_FREE, HOTEL, HOUSE, MONEY};
pub use property::{money, Property, PropertyCategory, PropertyKind, Street};
pub use tile::Tile;

use crate::core::Ledger;
use crate::error::BoardError;

/// A complete board definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    name: String,
    tiles: Vec<Tile>,
    items: BTreeMap<String, Item>,
    start_items: Ledger,
}

impl Board {
    /// Create a board.
    ///
    /// Panics if `tiles` is empty.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tiles: Vec<Tile>,
        items: BTreeMap<String, Item>,
        start_items: Ledger,
    ) -> Self {
        assert!(!tiles.is_empty(), "Board must have at least 1 tile");
        Self {
            name: name.into(),
            tiles,
            items,
            start_items,
        }
    }

    /// Parse a board from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let board: Board = serde_json::from_str(json)?;
        if board.tiles.is_empty() {
            return Err(BoardError::NoTiles(board.name));
        }
        Ok(board)
    }

    /// Unique display name; saves refer to boards by it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a location. Panics when out of range.
    #[must_use]
    pub fn tile(&self, location: usize) -> &Tile {
        &self.tiles[location]
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over `(id, item)` catalog entries in ID order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    /// Resolve an item ID, falling back to `Item::Unknown`.
    #[must_use]
    pub fn item(&self, id: &str) -> Cow<'_, Item> {
        match self.items.get(id) {
            Some(item) => Cow::Borrowed(item),
            None => Cow::Owned(Item::Unknown(id.to_string())),
        }
    }

    /// Resolve an item ID that should name a property.
    #[must_use]
    pub fn property(&self, id: &str) -> Option<&Property> {
        self.items.get(id).and_then(Item::as_property)
    }

    /// Whether an ID names a property in the catalog.
    #[must_use]
    pub fn is_property(&self, id: &str) -> bool {
        self.property(id).is_some()
    }

    /// Location of the first tile matching `predicate`.
    #[must_use]
    pub fn find_location(&self, predicate: impl Fn(&Tile) -> bool) -> Option<usize> {
        self.tiles.iter().position(predicate)
    }

    /// Location of the first jail tile.
    #[must_use]
    pub fn jail_location(&self) -> Option<usize> {
        self.find_location(Tile::is_jail)
    }

    /// What every player holds at the start of a game.
    #[must_use]
    pub fn start_items(&self) -> &Ledger {
        &self.start_items
    }
}
