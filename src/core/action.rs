//! Action representation: display name + cost + command.
//!
//! Actions are the only way game state changes outside the engine's own
//! transitions. An action is plain data: a name to show, a cost to debit, and
//! an `ActionKind` the game interprets. The engine decides legality with
//! `Action::is_allowed` and applies the effect with `Action::perform`.
//!
//! ## Invocation protocol
//!
//! Callers debit `cost` from the current player, then perform. This ordering
//! matters: effects may inspect the already-debited ledger. `Game::debit_and_perform`
//! does both steps.
//!
//! ```
//! use oligopoly::core::{Action, ActionKind, Ledger};
//!
//! let end = Action::free("End Turn", ActionKind::EndTurn);
//! assert!(end.cost.is_empty());
//!
//! let tax = Action::new("Pay Tax", Ledger::single("MONEY", 200), ActionKind::PayTax);
//! assert_eq!(tax.cost.get("MONEY"), 200);
//! ```

use super::ledger::Ledger;
use super::player::PlayerId;
use crate::board::Board;

/// The command an action carries out.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    // === Turn flow ===
    /// Roll the dice and move.
    Move,
    /// End the current turn.
    EndTurn,

    // === Tiles ===
    /// Draw a random card from the deck of the tile stood on.
    DrawCard,
    /// Pay rent (already debited) to the property's owner.
    PayRent { owner: PlayerId },
    /// Take an unowned property (price already debited).
    BuyProperty { property: String },
    /// Pay a tax (already debited) to the bank.
    PayTax,

    // === Jail ===
    /// Spend a get-out-of-jail-free card.
    UseJailCard,
    /// Try to roll doubles out of jail, once per turn.
    AttemptJailRoll,
    /// Pay the fine. `forced` once the player has waited three turns.
    PayJailFine { forced: bool },

    // === Cards ===
    /// Go to jail and end the turn.
    AcceptFate,
    /// Take one copy of an ownable card.
    AcceptCard { item: String },
    /// Advance to the next tile of a property.
    GoToProperty { property: String },
    /// Resolve the presented scripted card with the choice at `index`.
    CardChoice { index: usize },

    // === Holder actions ===
    Mortgage { property: String },
    Unmortgage { property: String },
    BuyHouse { property: String },
    SellHouse { property: String },
    BuyHotel { property: String },
    SellHotel { property: String },
    /// Use the power of a held ownable card.
    UseCard { item: String },
}

/// A complete, offerable action.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// Display name.
    pub name: String,
    /// Debited from the current player before the effect runs.
    pub cost: Ledger,
    /// What the action does.
    pub kind: ActionKind,
}

impl Action {
    /// Create an action with a cost.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: Ledger, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            cost,
            kind,
        }
    }

    /// Create an action with no cost.
    #[must_use]
    pub fn free(name: impl Into<String>, kind: ActionKind) -> Self {
        Self::new(name, Ledger::new(), kind)
    }

    /// Button label: the name, with the cost appended when there is one.
    #[must_use]
    pub fn label(&self, board: &Board) -> String {
        if self.cost.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.cost.format(board))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::presets;

    #[test]
    fn test_free_action_has_empty_cost() {
        let action = Action::free("Move", ActionKind::Move);
        assert_eq!(action.name, "Move");
        assert!(action.cost.is_empty());
    }

    #[test]
    fn test_label() {
        let board = presets::standard();

        let free = Action::free("End Turn", ActionKind::EndTurn);
        assert_eq!(free.label(&board), "End Turn");

        let tax = Action::new("Pay Tax", Ledger::single("MONEY", 200), ActionKind::PayTax);
        assert_eq!(tax.label(&board), "Pay Tax ($200)");
    }

    #[test]
    fn test_action_equality() {
        let a1 = Action::free("Buy", ActionKind::BuyProperty { property: "A".into() });
        let a2 = Action::free("Buy", ActionKind::BuyProperty { property: "A".into() });
        let a3 = Action::free("Buy", ActionKind::BuyProperty { property: "B".into() });

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }
}
