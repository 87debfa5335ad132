//! Property definitions and rent rules.
//!
//! Three property kinds share buy and mortgage prices but differ in rent:
//!
//! - **Street**: hotel rent, else the house ladder, else base rent (doubled
//!   when the owner holds the whole color group).
//! - **Railroad**: tiered by how many railroads the owner holds, clamped to
//!   the table.
//! - **Utility**: base or all-utilities multiplier times the last dice sum.

use serde::{Deserialize, Serialize};

use super::item::{HOTEL, HOUSE, MONEY};
use super::Board;
use crate::core::{DiceRoll, Ledger, Player, PropertyState};

/// A property category (color group).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyCategory {
    pub name: String,
    /// Display order within properties.
    pub order: i32,
    /// RGB color hint for renderers.
    pub color: [u8; 3],
}

impl PropertyCategory {
    #[must_use]
    pub fn new(name: impl Into<String>, order: i32, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            order,
            color,
        }
    }

    /// Shared category of every railroad.
    #[must_use]
    pub fn railroad() -> Self {
        Self::new("Railroad", 998, [0, 0, 0])
    }

    /// Shared category of every utility.
    #[must_use]
    pub fn utility() -> Self {
        Self::new("Utility", 999, [255, 255, 255])
    }
}

/// Rent and building schedule of a street.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub category: PropertyCategory,
    pub house_price: Ledger,
    pub hotel_price: Ledger,
    pub base_rent: Ledger,
    /// Rent with 1..=N houses; N is the house limit.
    pub house_rent: Vec<Ledger>,
    pub hotel_rent: Ledger,
}

/// Kind-specific rules of a property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Street(Street),
    Railroad {
        /// Rent when owning 1, 2, ... railroads.
        rent: Vec<Ledger>,
    },
    Utility {
        base_rent: Ledger,
        monopoly_rent: Ledger,
    },
}

/// An ownable, non-fungible, tile-backed item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub buy_price: Ledger,
    pub mortgage_price: Ledger,
    pub kind: PropertyKind,
}

impl Property {
    /// Convenience constructor for a street priced in money.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn street(
        name: impl Into<String>,
        category: PropertyCategory,
        buy: i64,
        mortgage: i64,
        house: i64,
        hotel: i64,
        rent: i64,
        house_rent: [i64; 4],
        hotel_rent: i64,
    ) -> Self {
        Self {
            name: name.into(),
            buy_price: money(buy),
            mortgage_price: money(mortgage),
            kind: PropertyKind::Street(Street {
                category,
                house_price: money(house),
                hotel_price: money(hotel),
                base_rent: money(rent),
                house_rent: house_rent.iter().map(|&r| money(r)).collect(),
                hotel_rent: money(hotel_rent),
            }),
        }
    }

    #[must_use]
    pub fn railroad(name: impl Into<String>, buy: Ledger, mortgage: Ledger, rent: Vec<Ledger>) -> Self {
        Self {
            name: name.into(),
            buy_price: buy,
            mortgage_price: mortgage,
            kind: PropertyKind::Railroad { rent },
        }
    }

    #[must_use]
    pub fn utility(
        name: impl Into<String>,
        buy: Ledger,
        mortgage: Ledger,
        base_rent: Ledger,
        monopoly_rent: Ledger,
    ) -> Self {
        Self {
            name: name.into(),
            buy_price: buy,
            mortgage_price: mortgage,
            kind: PropertyKind::Utility {
                base_rent,
                monopoly_rent,
            },
        }
    }

    #[must_use]
    pub fn category(&self) -> PropertyCategory {
        match &self.kind {
            PropertyKind::Street(street) => street.category.clone(),
            PropertyKind::Railroad { .. } => PropertyCategory::railroad(),
            PropertyKind::Utility { .. } => PropertyCategory::utility(),
        }
    }

    #[must_use]
    pub fn as_street(&self) -> Option<&Street> {
        match &self.kind {
            PropertyKind::Street(street) => Some(street),
            _ => None,
        }
    }

    /// Rent a visitor owes `owner`.
    ///
    /// `last_roll` is the most recent dice roll of the turn; utilities charge
    /// nothing when there is none.
    #[must_use]
    pub fn rent(
        &self,
        state: &PropertyState,
        owner: &Player,
        board: &Board,
        last_roll: Option<DiceRoll>,
    ) -> Ledger {
        match &self.kind {
            PropertyKind::Street(street) => {
                if state.buildings().has(HOTEL) {
                    return street.hotel_rent.clone();
                }

                let houses = state.buildings().get(HOUSE);
                if houses > 0 && houses as usize <= street.house_rent.len() {
                    return street.house_rent[houses as usize - 1].clone();
                }

                if owner.has_monopoly(&street.category, board) {
                    Ledger::map(&street.base_rent, |q| q * 2)
                } else {
                    street.base_rent.clone()
                }
            }
            PropertyKind::Railroad { rent } => {
                if rent.is_empty() {
                    return Ledger::new();
                }

                let owned = owner.count_properties(&PropertyCategory::railroad(), board);
                let tier = owned.saturating_sub(1).min(rent.len() - 1);
                rent[tier].clone()
            }
            PropertyKind::Utility { .. } => match last_roll {
                Some(roll) => {
                    let multiplier = roll.sum() as i64;
                    Ledger::map(&self.unmultiplied_rent(owner, board), |q| q * multiplier)
                }
                None => Ledger::new(),
            },
        }
    }

    /// Utility rent per pip: the all-utilities rate when the owner has them all.
    fn unmultiplied_rent(&self, owner: &Player, board: &Board) -> Ledger {
        match &self.kind {
            PropertyKind::Utility {
                base_rent,
                monopoly_rent,
            } => {
                if owner.has_monopoly(&PropertyCategory::utility(), board) {
                    monopoly_rent.clone()
                } else {
                    base_rent.clone()
                }
            }
            _ => Ledger::new(),
        }
    }

    /// Display lines describing this property's rent schedule.
    ///
    /// `owner` adds the current-rent line when the property is held.
    #[must_use]
    pub fn stats(
        &self,
        state: &PropertyState,
        owner: Option<&Player>,
        board: &Board,
        last_roll: Option<DiceRoll>,
    ) -> Vec<String> {
        let mut stats = vec![format!("Category: {}", self.category().name)];

        match &self.kind {
            PropertyKind::Street(street) => {
                if let Some(owner) = owner {
                    let rent = self.rent(state, owner, board, last_roll);
                    stats.push(format!("Current Rent: {}", rent.format(board)));
                }
                stats.push(format!("Base Rent: {}", street.base_rent.format(board)));
                stats.push(format!(
                    "w/ color group: {}",
                    Ledger::map(&street.base_rent, |q| q * 2).format(board)
                ));
                for (i, rent) in street.house_rent.iter().enumerate() {
                    stats.push(format!("w/ {} houses: {}", i + 1, rent.format(board)));
                }
                stats.push(format!("w/ hotel: {}", street.hotel_rent.format(board)));
            }
            PropertyKind::Railroad { rent } => {
                if let Some(owner) = owner {
                    let current = self.rent(state, owner, board, last_roll);
                    stats.push(format!("Current Rent: {}", current.format(board)));
                }
                for (i, tier) in rent.iter().enumerate() {
                    stats.push(format!("w/ {} owned: {}", i + 1, tier.format(board)));
                }
            }
            PropertyKind::Utility {
                base_rent,
                monopoly_rent,
            } => {
                if let Some(owner) = owner {
                    stats.push(format!(
                        "Current Rent: {} times dice roll",
                        self.unmultiplied_rent(owner, board).format(board)
                    ));
                }
                stats.push(format!("Base Rent: {} times dice roll", base_rent.format(board)));
                stats.push(format!(
                    "w/ all utilities: {} times dice roll",
                    monopoly_rent.format(board)
                ));
            }
        }

        stats
    }
}

/// A ledger holding only money.
#[must_use]
pub fn money(amount: i64) -> Ledger {
    Ledger::single(MONEY, amount)
}
