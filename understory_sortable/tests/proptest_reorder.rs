// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the array move.
//!
//! Verifies:
//! 1. Permutation: a move preserves length and the multiset of elements
//! 2. Only the moved element changes position relative to the rest
//! 3. The moved element lands at the target index
//! 4. Missing keys leave the order unchanged
//! 5. Round-trip: i → j then j → i restores the original order
//! 6. `move_by_key` agrees with `array_move` on resolved indices

use proptest::prelude::*;
use understory_sortable::identity::DefaultIdentity;
use understory_sortable::reorder::{array_move, move_by_key};

// ── Strategy helpers ──────────────────────────────────────────────────

/// A shuffled list of distinct items.
fn arb_items() -> impl Strategy<Value = Vec<u32>> {
    (1_u32..24).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

/// A list plus two valid indices into it.
fn arb_move() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    arb_items().prop_flat_map(|items| {
        let n = items.len();
        (Just(items), 0..n, 0..n)
    })
}

fn without(items: &[u32], x: u32) -> Vec<u32> {
    items.iter().copied().filter(|&i| i != x).collect()
}

proptest! {
    #[test]
    fn move_is_a_permutation((items, from, to) in arb_move()) {
        let out = array_move(&items, from, to);
        prop_assert_eq!(out.len(), items.len());
        let mut a = items.clone();
        let mut b = out.clone();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn only_moved_element_relocates((items, from, to) in arb_move()) {
        let moved = items[from];
        let out = array_move(&items, from, to);
        prop_assert_eq!(without(&out, moved), without(&items, moved));
        prop_assert_eq!(out[to], moved);
    }

    #[test]
    fn missing_key_is_noop(items in arb_items(), to in 0_usize..24) {
        let to_key = items[to % items.len()].to_string();
        let out = move_by_key(&items, &"missing".to_string(), &to_key, &DefaultIdentity);
        prop_assert_eq!(&out, &items);
        let out = move_by_key(&items, &to_key, &"missing".to_string(), &DefaultIdentity);
        prop_assert_eq!(&out, &items);
    }

    #[test]
    fn round_trip_restores((items, i, j) in arb_move()) {
        let there = array_move(&items, i, j);
        let back = array_move(&there, j, i);
        prop_assert_eq!(back, items);
    }

    #[test]
    fn by_key_matches_by_index((items, from, to) in arb_move()) {
        let by_key = move_by_key(
            &items,
            &items[from].to_string(),
            &items[to].to_string(),
            &DefaultIdentity,
        );
        prop_assert_eq!(by_key, array_move(&items, from, to));
    }
}
