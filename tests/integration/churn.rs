//! Integration test: membership churn.
//!
//! Adding or removing a member must only move the keys whose winner actually
//! changed.

use rendezvous::{Builder, Fnv1a32, Table};
use rendezvous_integration_tests::{
    KEY_COUNT, keys, mixed_table_of, node_names, owners, table_of,
};

/// Adding a third member moves roughly a third of the keys, all to it.
#[test]
#[ntest::timeout(30000)]
fn test_add_member_only_fraction_moves() {
    let keys = keys(KEY_COUNT);
    let before_table = mixed_table_of(&["n1", "n2"]);
    let after_table = mixed_table_of(&["n1", "n2", "n3"]);

    let before = owners(&before_table, &keys);
    let after = owners(&after_table, &keys);

    let mut moved = 0;
    for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
        if b != a {
            moved += 1;
            assert_eq!(*a, Some("n3"), "key {i} moved from {b:?} to {a:?}, not to the new member");
        }
    }

    let move_ratio = moved as f64 / KEY_COUNT as f64;
    assert!(
        (0.25..=0.42).contains(&move_ratio),
        "too many or too few keys moved: {moved}/{KEY_COUNT} ({move_ratio:.2})"
    );
}

/// A key moves to the new member exactly when it outscores the old owner.
#[test]
#[ntest::timeout(30000)]
fn test_add_member_moves_iff_new_score_is_higher() {
    let keys = keys(2_000);
    let before = table_of(&["a", "b"]);
    let after = table_of(&["a", "b", "c"]);
    let strategy = after.strategy();

    for key in &keys {
        let old_owner = before.get(key).unwrap();
        let old_score = strategy.score(key, old_owner.as_bytes());
        let new_score = strategy.score(key, b"c");

        let expected = if new_score > old_score { "c" } else { old_owner.as_str() };
        assert_eq!(after.get(key).map(String::as_str), Some(expected));
    }
}

/// Removing a member only reassigns the keys it owned.
#[test]
#[ntest::timeout(30000)]
fn test_remove_member_only_its_keys_redistribute() {
    let keys = keys(KEY_COUNT);
    let before_table = table_of(&["n1", "n2", "n3"]);
    let after_table = table_of(&["n1", "n3"]);

    let before = owners(&before_table, &keys);
    let after = owners(&after_table, &keys);

    for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
        if *b != Some("n2") {
            assert_eq!(b, a, "key {i} was on {b:?} (not the removed member) but moved to {a:?}");
        } else {
            assert_ne!(*a, Some("n2"));
        }
    }
}

/// Removed member's keys go to whichever survivor now scores highest.
#[test]
#[ntest::timeout(30000)]
fn test_removed_keys_go_to_best_survivor() {
    let keys = keys(2_000);
    let after = table_of(&["n1", "n3", "n4"]);
    let strategy = after.strategy();

    for key in &keys {
        let best = ["n1", "n3", "n4"]
            .into_iter()
            .max_by_key(|name| strategy.score(key, name.as_bytes()))
            .unwrap();
        assert_eq!(after.get(key).map(String::as_str), Some(best));
    }
}

/// `Table::diff` agrees with a key-by-key comparison.
#[test]
#[ntest::timeout(30000)]
fn test_diff_matches_owner_comparison() {
    let keys = keys(KEY_COUNT);
    let names = node_names(5);
    let old = table_of(&names);
    let new = table_of(&names[..4]);

    let moves = Table::diff(&old, &new, &keys);
    let changed = owners(&old, &keys)
        .iter()
        .zip(owners(&new, &keys).iter())
        .filter(|(b, a)| b != a)
        .count();

    assert_eq!(moves.len(), changed);
    for m in &moves {
        assert_eq!(m.from.map(String::as_str), Some("node-4"), "only node-4's keys move");
    }
}

/// Growing one member at a time: each step only moves keys to the newcomer.
#[test]
#[ntest::timeout(60000)]
fn test_incremental_growth() {
    let keys = keys(5_000);
    let names = node_names(8);
    let mut builder = Builder::<String>::new();
    let mut previous = builder.add_string_members(names[..1].iter().cloned()).build();

    for n in 2..=names.len() {
        let current = builder
            .add_string_members(names[..n].iter().cloned())
            .build();
        let newcomer = &names[n - 1];

        for m in Table::diff(&previous, &current, &keys) {
            assert_eq!(m.to, Some(newcomer), "growth to {n} moved a key elsewhere");
        }
        previous = current;
    }
}

/// Churn guarantees hold for the 32-bit adapter too.
#[test]
#[ntest::timeout(30000)]
fn test_hash32_churn() {
    let keys = keys(KEY_COUNT);
    let mut builder = Builder::<String>::new();
    let old = builder
        .hash32(Fnv1a32::new)
        .add_string_members(["foo.com", "bar.net", "baz.org"])
        .build();
    let new = builder
        .hash32(Fnv1a32::new)
        .add_string_members(["foo.com", "baz.org"])
        .build();

    for m in Table::diff(&old, &new, &keys) {
        assert_eq!(m.from.map(String::as_str), Some("bar.net"));
    }
}
