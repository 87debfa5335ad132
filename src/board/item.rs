//! Item definitions: everything a ledger can count.
//!
//! Items are static catalog entries supplied with the board. Each variant
//! resolves its ordering key, fungibility and formatting by pattern matching.
//! An ID missing from the catalog resolves to `Item::Unknown`, which sorts
//! last and renders as an obvious bug marker instead of halting play.

use serde::{Deserialize, Serialize};

use super::property::Property;

/// Suggested ID for money.
pub const MONEY: &str = "MONEY";
/// Suggested ID for houses.
pub const HOUSE: &str = "HOUSE";
/// Suggested ID for hotels.
pub const HOTEL: &str = "HOTEL";
/// Suggested ID for get-out-of-jail-free cards.
pub const GET_OUT_OF_JAIL_FREE: &str = "GET_OUT_OF_JAIL_FREE";

/// A building that can stand on a street.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Building {
    House,
    Hotel,
}

/// What an ownable card does when its holder uses it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardPower {
    /// Held for a purpose elsewhere (e.g. leaving jail); no "Use" action.
    Passive,
    /// Before moving, take the property stood on from its owner.
    Steal,
    /// Bankrupt every other living player on the same tile.
    Kill,
    /// Before moving, put a hotel on the unmortgaged street stood on.
    InstantHotel,
    /// End the turn immediately, skipping whatever is pending.
    Skip,
    /// Remove every copy of an item from every player.
    Purge { item: String },
}

/// A card that can be drawn and then kept as an item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnableCard {
    /// Item ID of the held form.
    pub id: String,
    pub title: String,
    pub body: String,
    /// Short text for icon rendering.
    pub icon_text: String,
    pub power: CardPower,
}

impl OwnableCard {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        icon_text: impl Into<String>,
        power: CardPower,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            icon_text: icon_text.into(),
            power,
        }
    }

    #[must_use]
    pub fn get_out_of_jail_free() -> Self {
        Self::new(
            GET_OUT_OF_JAIL_FREE,
            "Get out of Jail Free",
            "Use this card to get out of jail for free.",
            "FREE",
            CardPower::Passive,
        )
    }

    #[must_use]
    pub fn steal() -> Self {
        Self::new(
            "STEAL",
            "Wharton Strats",
            "Before you roll the dice, use this card to steal the property you're on from someone else!",
            "WH",
            CardPower::Steal,
        )
    }

    #[must_use]
    pub fn kill() -> Self {
        Self::new(
            "KILL",
            "Amogus Sus",
            "Use this card to immediately kill players on the same spot as you.",
            "KILL",
            CardPower::Kill,
        )
    }

    #[must_use]
    pub fn instant_hotel() -> Self {
        Self::new(
            "HOTEL_UPGRADE",
            "Tourist Trap",
            "Before you roll the dice, use this card to upgrade any unmortgaged street with a hotel!",
            "TT",
            CardPower::InstantHotel,
        )
    }

    #[must_use]
    pub fn skip() -> Self {
        Self::new(
            "SKIP",
            "Skip",
            "Use this card to skip any actions like paying rent and immediately end your turn.",
            "SKIP",
            CardPower::Skip,
        )
    }

    /// Item-form name, e.g. "Skip Card".
    #[must_use]
    pub fn item_name(&self) -> String {
        format!("{} Card", self.title)
    }
}

/// A catalog entry for an item ID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    Money,
    Building(Building),
    Card(OwnableCard),
    Property(Property),
    /// Placeholder for an ID missing from the catalog.
    Unknown(String),
}

impl Item {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Item::Money => "Money".to_string(),
            Item::Building(Building::House) => "House".to_string(),
            Item::Building(Building::Hotel) => "Hotel".to_string(),
            Item::Card(card) => card.item_name(),
            Item::Property(property) => property.name.clone(),
            Item::Unknown(id) => format!("Bug! ({id})"),
        }
    }

    /// Sort key for display; lower sorts first.
    #[must_use]
    pub fn order(&self) -> i32 {
        match self {
            Item::Money => 0,
            Item::Card(_) => 2,
            Item::Building(_) => 3,
            Item::Property(property) => property.category().order + 100,
            Item::Unknown(_) => i32::MAX,
        }
    }

    /// Whether more than one copy can meaningfully be held.
    #[must_use]
    pub fn is_fungible(&self) -> bool {
        match self {
            Item::Money | Item::Card(_) | Item::Building(Building::House) => true,
            Item::Building(Building::Hotel) | Item::Property(_) | Item::Unknown(_) => false,
        }
    }

    /// Render a quantity of this item.
    #[must_use]
    pub fn format_quantity(&self, quantity: i64) -> String {
        match self {
            Item::Money => format!("${quantity}"),
            _ if self.is_fungible() => format!("{}x {}", quantity, self.name()),
            _ => self.name(),
        }
    }

    /// Static flavor text, where the item has one.
    #[must_use]
    pub fn blurb(&self) -> Option<&str> {
        match self {
            Item::Money => Some("What FTX lost in the span of a few short weeks."),
            Item::Card(card) => Some(&card.body),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Item::Property(property) => Some(property),
            _ => None,
        }
    }
}
