//! Signed item ledger.
//!
//! A `Ledger` maps item IDs to signed quantities. It is the unit of
//! currency, cards and buildings: player holdings, prices, rents and the
//! buildings standing on a property are all ledgers.
//!
//! ## Invariants
//!
//! - No entry is ever stored with quantity 0. Setting an entry to 0
//!   removes it, so equality is structural over nonzero entries.
//! - Quantities may go negative (an overdrawn player). `has_debt` reports it.
//!
//! ## Containment asymmetry
//!
//! `has_all` treats any negative required quantity as satisfied. Costs with
//! negative entries mean "receive", so they never block an action.
//!
//! ```
//! use oligopoly::core::Ledger;
//!
//! let mut wallet = Ledger::single("MONEY", 100);
//! let price = Ledger::single("MONEY", 60);
//!
//! assert!(wallet.has_all(&price));
//! wallet.subtract(&price);
//! assert_eq!(wallet.get("MONEY"), 40);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Signed multiset of item quantities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, i64>", into = "BTreeMap<String, i64>")]
pub struct Ledger {
    entries: BTreeMap<String, i64>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Create a ledger holding `quantity` of a single item.
    #[must_use]
    pub fn single(item: impl Into<String>, quantity: i64) -> Self {
        let mut ledger = Self::new();
        ledger.set(item, quantity);
        ledger
    }

    /// Create a ledger whose quantities are `f` applied to `other`'s.
    ///
    /// Entries that map to 0 are dropped.
    #[must_use]
    pub fn map(other: &Ledger, f: impl Fn(i64) -> i64) -> Self {
        other.iter().map(|(id, qty)| (id.to_string(), f(qty))).collect()
    }

    /// Quantity of an item (0 if absent).
    #[must_use]
    pub fn get(&self, item: &str) -> i64 {
        self.entries.get(item).copied().unwrap_or(0)
    }

    /// Set the quantity of an item. Setting 0 removes the entry.
    pub fn set(&mut self, item: impl Into<String>, quantity: i64) {
        let item = item.into();
        if quantity == 0 {
            self.entries.remove(&item);
        } else {
            self.entries.insert(item, quantity);
        }
    }

    /// Add `quantity` of an item, returning the new quantity.
    pub fn add(&mut self, item: &str, quantity: i64) -> i64 {
        let updated = self.get(item) + quantity;
        self.set(item, updated);
        updated
    }

    /// Whether a strictly positive quantity of the item is held.
    #[must_use]
    pub fn has(&self, item: &str) -> bool {
        self.get(item) > 0
    }

    /// Whether this ledger covers every entry of `other`.
    ///
    /// Negative entries in `other` are always satisfied.
    #[must_use]
    pub fn has_all(&self, other: &Ledger) -> bool {
        other
            .iter()
            .all(|(id, qty)| qty < 0 || self.get(id) >= qty)
    }

    /// Add every entry of `other` into this ledger.
    pub fn merge(&mut self, other: &Ledger) {
        for (id, qty) in other.iter() {
            self.add(id, qty);
        }
    }

    /// Subtract every entry of `other` from this ledger.
    pub fn subtract(&mut self, other: &Ledger) {
        for (id, qty) in other.iter() {
            self.add(id, -qty);
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct items with a nonzero quantity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any quantity is negative.
    #[must_use]
    pub fn has_debt(&self) -> bool {
        self.entries.values().any(|&qty| qty < 0)
    }

    /// Iterate over `(item, quantity)` pairs in item ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(id, &qty)| (id.as_str(), qty))
    }

    /// Item IDs with a nonzero quantity.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries sorted for display: item order first, then item ID.
    #[must_use]
    pub fn sorted_entries<'a>(&'a self, board: &Board) -> Vec<(&'a str, i64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| {
            board
                .item(a)
                .order()
                .cmp(&board.item(b).order())
                .then_with(|| a.cmp(b))
        });
        entries
    }

    /// Human-readable rendering under a board's catalog.
    ///
    /// Empty ledgers render as `-`.
    #[must_use]
    pub fn format(&self, board: &Board) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        self.sorted_entries(board)
            .into_iter()
            .map(|(id, qty)| board.item(id).format_quantity(qty))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Ledger {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        let mut ledger = Ledger::new();
        for (id, qty) in iter {
            ledger.set(id, qty);
        }
        ledger
    }
}

impl From<BTreeMap<String, i64>> for Ledger {
    fn from(map: BTreeMap<String, i64>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Ledger> for BTreeMap<String, i64> {
    fn from(ledger: Ledger) -> Self {
        ledger.entries
    }
}
