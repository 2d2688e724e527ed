// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Array move: relocate one element, preserving the relative order of the rest.
//!
//! This is "move" semantics, not "swap": the element at `from` is removed and
//! reinserted at `to` as measured after the removal. Forward and backward moves
//! behave symmetrically.
//!
//! ```
//! use understory_sortable::reorder::{array_move, move_by_key};
//! use understory_sortable::identity::DefaultIdentity;
//!
//! assert_eq!(array_move(&["a", "b", "c", "d"], 1, 3), ["a", "c", "d", "b"]);
//! assert_eq!(array_move(&["a", "b", "c", "d"], 3, 0), ["d", "a", "b", "c"]);
//!
//! // Missing keys leave the order untouched.
//! let items = ["a", "b", "c"];
//! let same = move_by_key(&items, &"zz".to_string(), &"a".to_string(), &DefaultIdentity);
//! assert_eq!(same, items);
//! ```

use alloc::vec::Vec;

use crate::identity::{Identity, position_of};

/// Move the element at `from` to `to` in place.
///
/// Returns `false`, leaving `items` untouched, when the indices are equal or
/// either is out of range.
pub fn move_in_place<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}

/// Return a copy of `items` with the element at `from` moved to `to`.
///
/// Out-of-range indices yield an unchanged copy.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    move_in_place(&mut out, from, to);
    out
}

/// Return a copy of `items` with the `from_key` item moved to the `to_key` slot.
///
/// If either key is absent (the collection changed under the drag) or both
/// resolve to the same item, the copy is unchanged.
pub fn move_by_key<T: Clone, R: Identity<T>>(
    items: &[T],
    from_key: &R::Key,
    to_key: &R::Key,
    identity: &R,
) -> Vec<T> {
    match resolve_move(items, from_key, to_key, identity) {
        Some((from, to)) => array_move(items, from, to),
        None => items.to_vec(),
    }
}

/// Resolve both keys to a `(from, to)` index pair of distinct slots.
pub(crate) fn resolve_move<T, R: Identity<T>>(
    items: &[T],
    from_key: &R::Key,
    to_key: &R::Key,
    identity: &R,
) -> Option<(usize, usize)> {
    let from = position_of(items, from_key, identity)?;
    let to = position_of(items, to_key, identity)?;
    (from != to).then_some((from, to))
}
