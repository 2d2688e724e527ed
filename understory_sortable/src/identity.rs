// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item identity: map domain items to stable, unique keys.
//!
//! ## Overview
//!
//! The drag engine only knows keys. An [`Identity`] correlates those keys back
//! to the consumer's items.
//!
//! - [`DefaultIdentity`] resolves any [`ItemId`] value to its string form.
//!   Primitive values use their own string form; records implement [`ItemId`]
//!   by returning their `id` field.
//! - Any `Fn(&T) -> K` closure is a custom resolver.
//!
//! ## Injectivity
//!
//! No two distinct items in one collection may resolve to the same key at the
//! same time. This is the caller's responsibility. When it is violated,
//! lookups silently pick the first match. Use [`check_unique`] to validate a
//! collection during development.
//!
//! ```
//! use understory_sortable::identity::{DefaultIdentity, Identity, ItemId};
//!
//! struct Task {
//!     id: u32,
//!     title: &'static str,
//! }
//!
//! impl ItemId for Task {
//!     fn item_id(&self) -> String {
//!         self.id.to_string()
//!     }
//! }
//!
//! let task = Task { id: 7, title: "write docs" };
//! assert_eq!(DefaultIdentity.key_of(&task), "7");
//! assert_eq!(DefaultIdentity.key_of(&"plain"), "plain");
//!
//! let by_title = |t: &Task| t.title;
//! assert_eq!(by_title.key_of(&task), "write docs");
//! ```

use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::error::SortableError;

/// Resolve a domain item to its key.
pub trait Identity<T: ?Sized> {
    /// Key type correlating engine events with items.
    type Key: Clone + Eq + core::fmt::Debug;
    /// Returns the key for `item`. Must be stable for as long as the item is
    /// present in the collection.
    fn key_of(&self, item: &T) -> Self::Key;
}

impl<T: ?Sized, K, F> Identity<T> for F
where
    F: Fn(&T) -> K,
    K: Clone + Eq + core::fmt::Debug,
{
    type Key = K;

    #[inline]
    fn key_of(&self, item: &T) -> K {
        self(item)
    }
}

/// The `id`-like field of an item, in string form.
///
/// Implemented for primitive values by their own string form.
pub trait ItemId {
    /// Returns the string form of this item's identity.
    fn item_id(&self) -> String;
}

macro_rules! item_id_via_to_string {
    ($($t:ty),* $(,)?) => {
        $(
            impl ItemId for $t {
                #[inline]
                fn item_id(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

item_id_via_to_string!(
    str, String, char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

impl<T: ItemId + ?Sized> ItemId for &T {
    #[inline]
    fn item_id(&self) -> String {
        (**self).item_id()
    }
}

impl<T: ItemId + ?Sized> ItemId for Box<T> {
    #[inline]
    fn item_id(&self) -> String {
        (**self).item_id()
    }
}

/// Default resolver: the item's [`ItemId`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultIdentity;

impl<T: ItemId + ?Sized> Identity<T> for DefaultIdentity {
    type Key = String;

    #[inline]
    fn key_of(&self, item: &T) -> String {
        item.item_id()
    }
}

/// Index of the first item whose key equals `key`.
pub fn position_of<T, R: Identity<T>>(items: &[T], key: &R::Key, identity: &R) -> Option<usize> {
    items.iter().position(|item| identity.key_of(item) == *key)
}

/// Check that no two items resolve to the same key.
///
/// Quadratic in the collection length; meant for debug assertions and tests.
pub fn check_unique<T, R: Identity<T>>(items: &[T], identity: &R) -> Result<(), SortableError> {
    let keys: alloc::vec::Vec<R::Key> = items.iter().map(|i| identity.key_of(i)).collect();
    for (second, key) in keys.iter().enumerate() {
        if let Some(first) = keys[..second].iter().position(|k| k == key) {
            return Err(SortableError::DuplicateKey { first, second });
        }
    }
    Ok(())
}
