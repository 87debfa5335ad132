//! Turn phases and per-property mutable state.

use serde::{Deserialize, Serialize};

use super::ledger::Ledger;

/// The phase of the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The turn has started; nothing is offered until the player steps in.
    Start,
    /// The player has not moved yet.
    PreMove,
    /// The player has moved and the destination was resolved.
    PostMove,
    /// Terminal: the current player won.
    Winner,
}

impl TurnPhase {
    /// Whether the player has already moved (the winner counts as moved).
    #[must_use]
    pub fn is_post_move(self) -> bool {
        matches!(self, TurnPhase::PostMove | TurnPhase::Winner)
    }
}

/// Mutable state of one property: mortgage flag and the buildings on it.
///
/// A property cannot be mortgaged while any building stands on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyState {
    mortgaged: bool,
    buildings: Ledger,
}

impl PropertyState {
    /// Shared default for properties never touched.
    pub(crate) const UNTOUCHED: PropertyState = PropertyState {
        mortgaged: false,
        buildings: Ledger::new(),
    };

    #[must_use]
    pub fn new(mortgaged: bool, buildings: Ledger) -> Self {
        assert!(
            !mortgaged || buildings.is_empty(),
            "Cannot mortgage a property with buildings"
        );
        Self {
            mortgaged,
            buildings,
        }
    }

    #[must_use]
    pub fn is_mortgaged(&self) -> bool {
        self.mortgaged
    }

    /// Set the mortgage flag.
    ///
    /// Panics when mortgaging a property that has buildings.
    pub fn set_mortgaged(&mut self, mortgaged: bool) {
        assert!(
            !mortgaged || self.buildings.is_empty(),
            "Cannot mortgage a property with buildings"
        );
        self.mortgaged = mortgaged;
    }

    /// Buildings standing on the property.
    #[must_use]
    pub fn buildings(&self) -> &Ledger {
        &self.buildings
    }

    /// Set how many of one building stand here.
    ///
    /// Panics when building on a mortgaged property.
    pub fn set_buildings(&mut self, building: &str, quantity: i64) {
        assert!(
            !self.mortgaged || quantity == 0,
            "Cannot build on a mortgaged property"
        );
        self.buildings.set(building, quantity);
    }

    /// Add (or with a negative count, remove) buildings of one kind.
    pub fn add_buildings(&mut self, building: &str, count: i64) {
        self.set_buildings(building, self.buildings.get(building) + count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unmortgaged_and_empty() {
        let state = PropertyState::default();
        assert!(!state.is_mortgaged());
        assert!(state.buildings().is_empty());
        assert_eq!(state, PropertyState::UNTOUCHED);
    }

    #[test]
    fn test_mortgage_toggle() {
        let mut state = PropertyState::default();
        state.set_mortgaged(true);
        assert!(state.is_mortgaged());
        state.set_mortgaged(false);
        assert!(!state.is_mortgaged());
    }

    #[test]
    #[should_panic(expected = "Cannot mortgage a property with buildings")]
    fn test_mortgage_with_buildings_panics() {
        let mut state = PropertyState::default();
        state.set_buildings("HOUSE", 1);
        state.set_mortgaged(true);
    }

    #[test]
    fn test_unmortgage_with_buildings_is_fine() {
        let mut state = PropertyState::default();
        state.set_buildings("HOUSE", 2);
        state.set_mortgaged(false);
        assert!(!state.is_mortgaged());
    }

    #[test]
    #[should_panic(expected = "Cannot build on a mortgaged property")]
    fn test_build_on_mortgaged_panics() {
        let mut state = PropertyState::default();
        state.set_mortgaged(true);
        state.add_buildings("HOUSE", 1);
    }

    #[test]
    fn test_building_counts() {
        let mut state = PropertyState::default();
        state.add_buildings("HOUSE", 2);
        state.add_buildings("HOUSE", -1);
        assert_eq!(state.buildings().get("HOUSE"), 1);

        state.add_buildings("HOUSE", -1);
        assert!(state.buildings().is_empty());

        state.set_mortgaged(true);
        state.set_buildings("HOTEL", 0);
        assert!(state.is_mortgaged());
    }

    #[test]
    fn test_phase_post_move() {
        assert!(!TurnPhase::Start.is_post_move());
        assert!(!TurnPhase::PreMove.is_post_move());
        assert!(TurnPhase::PostMove.is_post_move());
        assert!(TurnPhase::Winner.is_post_move());
    }
}
