//! Ledger algebra properties.
//!
//! These hold for any ledger, so they are checked over generated ones.

use std::collections::BTreeMap;

use oligopoly::board::{presets, MONEY};
use oligopoly::core::Ledger;
use proptest::prelude::*;

fn ledger_strategy() -> impl Strategy<Value = Ledger> {
    prop::collection::btree_map("[A-F]", -500i64..500, 0..6).prop_map(Ledger::from)
}

proptest! {
    #[test]
    fn proptest_merge_then_subtract_is_identity(start in ledger_strategy(), delta in ledger_strategy()) {
        let mut ledger = start.clone();
        ledger.merge(&delta);
        ledger.subtract(&delta);
        prop_assert_eq!(ledger, start);
    }

    #[test]
    fn proptest_has_all_is_reflexive(ledger in ledger_strategy()) {
        prop_assert!(ledger.has_all(&ledger));
    }

    #[test]
    fn proptest_no_zero_entries(start in ledger_strategy(), delta in ledger_strategy()) {
        let mut ledger = start;
        ledger.subtract(&delta);
        prop_assert!(ledger.iter().all(|(_, qty)| qty != 0));
        prop_assert_eq!(ledger.is_empty(), ledger.len() == 0);
    }

    #[test]
    fn proptest_map_identity_and_negation(ledger in ledger_strategy()) {
        prop_assert_eq!(Ledger::map(&ledger, |qty| qty), ledger.clone());

        let mut sum = ledger.clone();
        sum.merge(&Ledger::map(&ledger, |qty| -qty));
        prop_assert!(sum.is_empty());
    }
}

/// Test that equality ignores how a zero entry came about.
#[test]
fn test_equality_is_structural() {
    let mut a = Ledger::single(MONEY, 10);
    a.add("HOUSE", 2);
    a.add("HOUSE", -2);
    assert_eq!(a, Ledger::single(MONEY, 10));

    let from_map = Ledger::from(BTreeMap::from([(MONEY.to_string(), 10), ("HOUSE".to_string(), 0)]));
    assert_eq!(from_map, a);
}

/// Test that debt is any negative quantity and that negative costs never block.
#[test]
fn test_debt_and_receive_costs() {
    let mut wallet = Ledger::single(MONEY, 50);
    let refund = Ledger::single(MONEY, -100);
    assert!(wallet.has_all(&refund));

    wallet.subtract(&Ledger::single(MONEY, 60));
    assert!(wallet.has_debt());
    assert_eq!(wallet.get(MONEY), -10);
}

/// Test display ordering: money first, then properties by category order.
#[test]
fn test_format_sorts_by_item_order() {
    let board = presets::standard();
    let ledger: Ledger = [("RAILROAD_1", 1), ("BROWN_1", 1), (MONEY, 300)]
        .into_iter()
        .collect();

    let ids: Vec<_> = ledger.sorted_entries(&board).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, [MONEY, "BROWN_1", "RAILROAD_1"]);
    assert_eq!(Ledger::new().format(&board), "-");
}
