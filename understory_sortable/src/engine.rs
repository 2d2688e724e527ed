// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag engine boundary.
//!
//! ## Overview
//!
//! The drag engine turns raw pointer and keyboard input plus hit testing into
//! four events: [`DragEvent::Start`], [`DragEvent::Over`], [`DragEvent::End`],
//! and [`DragEvent::Cancel`]. This crate does not capture input or test
//! geometry. Native listeners, a reactive stream, or message passing can all
//! adapt to this contract by producing [`DragEvent`]s for
//! [`SortableController::handle`].
//!
//! In the other direction, the controller declares which keys participate and
//! which [`OrderStrategy`] applies via [`Participants`], which engines receive
//! through [`DragEngine::declare`].
//!
//! Engines are expected to provide keyboard equivalents for every pointer
//! gesture (activate, move to an adjacent slot, commit, cancel) and to emit
//! `Cancel` on focus loss so a session never stays stuck.
//!
//! ```
//! use understory_sortable::engine::{DragEngine, Participants};
//! use understory_sortable::identity::DefaultIdentity;
//! use understory_sortable::session::SortableController;
//! use understory_sortable::strategy::{Layout, OrderStrategy};
//!
//! #[derive(Default)]
//! struct Recorder(Vec<String>);
//!
//! impl DragEngine<String> for Recorder {
//!     fn declare(&mut self, participants: &Participants<String>) {
//!         self.0 = participants.draggable().cloned().collect();
//!     }
//! }
//!
//! let mut sortable: SortableController<&str, _> =
//!     SortableController::new(DefaultIdentity, Layout::Horizontal);
//! sortable.set_disabled("b".to_string(), true);
//!
//! let mut engine = Recorder::default();
//! let participants = sortable.participants(&["a", "b", "c"]);
//! assert_eq!(participants.strategy, OrderStrategy::HorizontalList);
//! engine.declare(&participants);
//! assert_eq!(engine.0, ["a", "c"]);
//! ```

use alloc::vec::Vec;

use crate::identity::{Identity, check_unique};
use crate::session::SortableController;
use crate::strategy::OrderStrategy;

/// An input event reported by the drag engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragEvent<K> {
    /// A drag began on the item with this key.
    Start(K),
    /// The input moved over this item, or over no item.
    Over(Option<K>),
    /// The input was released over this item, or over no item.
    End(Option<K>),
    /// The drag was abandoned (escape, focus loss, unmount).
    Cancel,
}

/// Per-collection declaration handed to the drag engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participants<K> {
    /// Every item key, in collection order.
    pub keys: Vec<K>,
    /// Keys that can be neither dragged nor dropped onto.
    pub disabled: Vec<K>,
    /// Order strategy for interpreting spatial relationships.
    pub strategy: OrderStrategy,
}

impl<K: PartialEq> Participants<K> {
    /// Whether `key` participates and is enabled.
    pub fn is_draggable(&self, key: &K) -> bool {
        self.keys.contains(key) && !self.disabled.contains(key)
    }

    /// Enabled keys in collection order.
    pub fn draggable(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys.iter().filter(|k| !self.disabled.contains(k))
    }
}

/// A drag engine that accepts participant declarations.
pub trait DragEngine<K> {
    /// Replace the set of participating keys and the order strategy.
    ///
    /// Called whenever the collection, its disabled set, or its layout changes.
    fn declare(&mut self, participants: &Participants<K>);
}

impl<T, R: Identity<T>> SortableController<T, R> {
    /// Build the engine declaration for `items`.
    ///
    /// Only disabled keys present in `items` are declared.
    pub fn participants(&self, items: &[T]) -> Participants<R::Key> {
        debug_assert!(
            check_unique(items, &self.identity).is_ok(),
            "sortable items must resolve to unique keys"
        );
        let keys: Vec<R::Key> = items.iter().map(|i| self.identity.key_of(i)).collect();
        let disabled = keys
            .iter()
            .filter(|k| self.is_disabled(k))
            .cloned()
            .collect();
        Participants {
            keys,
            disabled,
            strategy: self.strategy,
        }
    }
}
