//! Card definitions.
//!
//! A card is what a card tile presents after a draw. Cards are data: the
//! game turns the presented card into actions (see `game::cards`).
//!
//! Scripted cards are small decision trees: each choice applies a list of
//! effects and then either presents the next card or finishes.

use serde::{Deserialize, Serialize};

use super::item::OwnableCard;
use crate::core::Ledger;

/// A card that can be presented to the current player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    /// Go directly to jail and end the turn.
    GoToJail,
    /// A card the player keeps as an item.
    Ownable(OwnableCard),
    /// Move forward to the next tile of a property.
    GoToProperty {
        property: String,
        title: String,
        body: String,
    },
    /// A card with scripted choices.
    Scripted(ScriptedCard),
}

impl Card {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Card::GoToJail => "Go to Jail",
            Card::Ownable(card) => &card.title,
            Card::GoToProperty { title, .. } => title,
            Card::Scripted(card) => &card.title,
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Card::GoToJail => "Go directly to Jail. Do not pass GO. Do not collect $200.",
            Card::Ownable(card) => &card.body,
            Card::GoToProperty { body, .. } => body,
            Card::Scripted(card) => &card.body,
        }
    }
}

/// A card whose actions are a fixed list of choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedCard {
    pub title: String,
    pub body: String,
    /// Empty means the only option is to end the turn.
    pub choices: Vec<CardChoice>,
}

impl ScriptedCard {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, choices: Vec<CardChoice>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            choices,
        }
    }
}

/// One choice on a scripted card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardChoice {
    pub label: String,
    /// Applied in order when the choice is taken.
    pub effects: Vec<CardEffect>,
    pub outcome: CardOutcome,
}

impl CardChoice {
    #[must_use]
    pub fn new(label: impl Into<String>, effects: Vec<CardEffect>, outcome: CardOutcome) -> Self {
        Self {
            label: label.into(),
            effects,
            outcome,
        }
    }
}

/// A change a scripted choice makes to the players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Add to the current player. Negative entries take away.
    Grant(Ledger),
    /// Add to the current player once per seat at the table.
    GrantPerPlayer(Ledger),
    /// Take from every player, the current one included.
    ChargeEveryone(Ledger),
    /// Take every copy of an item from everyone and give one to the current player.
    Seize { item: String },
}

/// What follows a scripted choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardOutcome {
    /// Present another card.
    Next(Box<Card>),
    /// Clear the card and offer to end the turn.
    Done,
}
