// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay projection: what the floating copy of the dragged item shows.
//!
//! ## Overview
//!
//! [`project`] derives the overlay from the current session alone. It holds no
//! state, so hosts recompute it after every transition without drift.
//!
//! Resolution order while dragging:
//! 1) the custom overlay hook, called with the active item;
//! 2) otherwise the per-item hook, called with the active item and its index;
//! 3) otherwise [`Overlay::Placeholder`].
//!
//! When idle there is no overlay at all.
//!
//! ```
//! use understory_sortable::identity::DefaultIdentity;
//! use understory_sortable::overlay::{Overlay, RenderHooks};
//! use understory_sortable::session::SortableController;
//! use understory_sortable::strategy::Layout;
//!
//! let items = ["alpha", "beta"];
//! let mut sortable: SortableController<&str, _> =
//!     SortableController::new(DefaultIdentity, Layout::Vertical);
//!
//! let row = |item: &&str, index: usize| format!("{index}: {item}");
//! let hooks: RenderHooks<'_, &str, String> = RenderHooks::new().with_item(&row);
//!
//! assert_eq!(sortable.current_overlay(&items, &hooks), None);
//! sortable.drag_start("beta".to_string());
//! assert_eq!(
//!     sortable.current_overlay(&items, &hooks),
//!     Some(Overlay::Rendered("1: beta".to_string()))
//! );
//! ```

use alloc::vec::Vec;

use crate::identity::{Identity, position_of};
use crate::session::{SessionState, SortableController};

/// Per-item hook: render `item` at `index`.
pub type ItemHook<'h, T, V> = &'h dyn Fn(&T, usize) -> V;

/// Overlay hook: render the dragged `item`.
pub type OverlayHook<'h, T, V> = &'h dyn Fn(&T) -> V;

/// Caller-supplied rendering functions producing host values `V`.
pub struct RenderHooks<'h, T, V> {
    /// Custom per-item rendering.
    pub item: Option<ItemHook<'h, T, V>>,
    /// Custom rendering for the floating overlay.
    pub overlay: Option<OverlayHook<'h, T, V>>,
}

impl<T, V> Default for RenderHooks<'_, T, V> {
    fn default() -> Self {
        Self {
            item: None,
            overlay: None,
        }
    }
}

impl<T, V> Clone for RenderHooks<'_, T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for RenderHooks<'_, T, V> {}

impl<T, V> core::fmt::Debug for RenderHooks<'_, T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderHooks")
            .field("item", &self.item.is_some())
            .field("overlay", &self.overlay.is_some())
            .finish()
    }
}

impl<'h, T, V> RenderHooks<'h, T, V> {
    /// No hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-item hook.
    #[must_use]
    pub fn with_item(mut self, hook: ItemHook<'h, T, V>) -> Self {
        self.item = Some(hook);
        self
    }

    /// Set the overlay hook.
    #[must_use]
    pub fn with_overlay(mut self, hook: OverlayHook<'h, T, V>) -> Self {
        self.overlay = Some(hook);
        self
    }
}

/// Render instruction for the floating overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay<V> {
    /// A value produced by one of the hooks.
    Rendered(V),
    /// Minimal generic placeholder: no hook applies, or the active item is no
    /// longer in the collection.
    Placeholder,
}

/// Project the overlay for `session` over `items`.
pub fn project<T, R: Identity<T>, V>(
    session: &SessionState<R::Key>,
    items: &[T],
    identity: &R,
    hooks: &RenderHooks<'_, T, V>,
) -> Option<Overlay<V>> {
    let active = session.active()?;
    let Some(index) = position_of(items, active, identity) else {
        return Some(Overlay::Placeholder);
    };
    let item = &items[index];
    let rendered = match (hooks.overlay, hooks.item) {
        (Some(overlay), _) => overlay(item),
        (None, Some(render)) => render(item, index),
        (None, None) => return Some(Overlay::Placeholder),
    };
    Some(Overlay::Rendered(rendered))
}

/// Render every item with the custom per-item hook, or `default` without one.
pub fn render_items<T, V>(
    items: &[T],
    default: impl Fn(&T, usize) -> V,
    hooks: &RenderHooks<'_, T, V>,
) -> Vec<V> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match hooks.item {
            Some(render) => render(item, index),
            None => default(item, index),
        })
        .collect()
}

impl<T, R: Identity<T>> SortableController<T, R> {
    /// The overlay for the current session.
    pub fn current_overlay<V>(
        &self,
        items: &[T],
        hooks: &RenderHooks<'_, T, V>,
    ) -> Option<Overlay<V>> {
        project(&self.session, items, &self.identity, hooks)
    }
}
