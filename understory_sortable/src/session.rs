// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session controller: the state machine behind a sortable collection.
//!
//! ## States
//!
//! - [`SessionState::Idle`]: no drag in progress.
//! - [`SessionState::Dragging`]: an active item is being dragged, optionally over a target.
//!
//! ## Transitions
//!
//! | Event | From | To | Effect |
//! |-------|------|----|--------|
//! | [`drag_start(k)`](SortableController::drag_start) | `Idle` | `Dragging { active: k, over: None }` | ignored if `k` is disabled |
//! | [`drag_over(k)`](SortableController::drag_over) | `Dragging` | `Dragging { over: k }` | replaces the previous target |
//! | [`drag_end(k)`](SortableController::drag_end) | `Dragging` | `Idle` | commits a move when `k` is a valid, different target |
//! | [`drag_cancel()`](SortableController::drag_cancel) | any | `Idle` | never reorders |
//!
//! Every call returns a [`Transition`] describing what happened. The consumer's
//! items are only ever read; a commit hands a freshly computed order to an
//! [`OrderListener`], exactly once.
//!
//! ## Example
//!
//! ```
//! use understory_sortable::identity::DefaultIdentity;
//! use understory_sortable::session::{SortableController, Transition};
//! use understory_sortable::strategy::Layout;
//!
//! let mut items = vec!["a", "b", "c", "d"];
//! let mut sortable: SortableController<&str, _> =
//!     SortableController::new(DefaultIdentity, Layout::Vertical);
//!
//! sortable.drag_start("b".to_string());
//! sortable.drag_over(Some("c".to_string()));
//! sortable.drag_over(Some("d".to_string()));
//!
//! let mut next = None;
//! let t = sortable.drag_end(Some("d".to_string()), &items, &mut |order: Vec<&'static str>| {
//!     next = Some(order);
//! });
//! assert!(matches!(t, Transition::Committed { from: 1, to: 3, .. }));
//! items = next.unwrap();
//! assert_eq!(items, ["a", "c", "d", "b"]);
//! assert!(!sortable.is_dragging());
//! ```

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::config::SortableConfig;
use crate::engine::DragEvent;
use crate::identity::{Identity, check_unique};
use crate::reorder::{array_move, resolve_move};
use crate::strategy::{Layout, OrderStrategy, strategy_for};

/// The ephemeral drag session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState<K> {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Key of the item being dragged.
        active: K,
        /// Key of the item currently under the input, if any.
        over: Option<K>,
    },
}

impl<K> SessionState<K> {
    /// Key of the item being dragged.
    pub fn active(&self) -> Option<&K> {
        match self {
            Self::Idle => None,
            Self::Dragging { active, .. } => Some(active),
        }
    }

    /// Key of the current drop target.
    pub fn over(&self) -> Option<&K> {
        match self {
            Self::Idle => None,
            Self::Dragging { over, .. } => over.as_ref(),
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// What a single event did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition<K> {
    /// A session started for `active`.
    Started {
        /// Item being dragged.
        active: K,
    },
    /// The drop target changed.
    Over {
        /// Item being dragged.
        active: K,
        /// New drop target, if any.
        over: Option<K>,
    },
    /// The drag ended on a valid target and the listener received a new order.
    Committed {
        /// Item that moved.
        active: K,
        /// Item whose slot it moved into.
        over: K,
        /// Index of the moved item before the commit.
        from: usize,
        /// Index of the moved item after the commit.
        to: usize,
    },
    /// The drag ended without a move: no target, itself, a disabled item,
    /// or a key no longer present in the collection.
    Dropped {
        /// Item that was being dragged.
        active: K,
        /// Drop target reported by the engine, if any.
        over: Option<K>,
    },
    /// The drag was cancelled.
    Cancelled {
        /// Item that was being dragged.
        active: K,
    },
    /// The event did not apply in the current state.
    Ignored,
}

bitflags::bitflags! {
    /// Drag affordances for rendering a single item.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemState: u8 {
        /// The item is being dragged.
        const ACTIVE   = 0b0000_0001;
        /// The item is the current drop target.
        const OVER     = 0b0000_0010;
        /// The item can be neither dragged nor dropped onto.
        const DISABLED = 0b0000_0100;
    }
}

/// Receives the new order on each committed move.
pub trait OrderListener<T> {
    /// Called exactly once per commit with the full recomputed order.
    fn order_changed(&mut self, new_order: Vec<T>);
}

impl<T, F: FnMut(Vec<T>)> OrderListener<T> for F {
    #[inline]
    fn order_changed(&mut self, new_order: Vec<T>) {
        self(new_order);
    }
}

/// Controller for one sortable collection.
///
/// ## Usage
///
/// - Construct with [`SortableController::new`] or
///   [`SortableController::with_config`], giving an [`Identity`] resolver.
/// - Declare participants to the drag engine with
///   [`participants`](SortableController::participants).
/// - Feed engine events to [`handle`](SortableController::handle) (or the
///   individual transition methods).
/// - Render [`current_overlay`](SortableController::current_overlay) and per-item
///   [`item_state`](SortableController::item_state) after each event.
pub struct SortableController<T, R: Identity<T>> {
    pub(crate) identity: R,
    pub(crate) layout: Layout,
    pub(crate) strategy: OrderStrategy,
    pub(crate) disabled: Vec<R::Key>,
    pub(crate) session: SessionState<R::Key>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, R: Identity<T>> core::fmt::Debug for SortableController<T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortableController")
            .field("layout", &self.layout)
            .field("disabled", &self.disabled)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<T, R: Identity<T>> SortableController<T, R> {
    /// Create an idle controller for a collection laid out as `layout`.
    pub fn new(identity: R, layout: Layout) -> Self {
        Self {
            identity,
            layout,
            strategy: strategy_for(layout),
            disabled: Vec::new(),
            session: SessionState::Idle,
            _phantom: PhantomData,
        }
    }

    /// Create an idle controller from a [`SortableConfig`].
    pub fn with_config(identity: R, config: SortableConfig<R::Key>) -> Self {
        let mut this = Self::new(identity, config.layout);
        for key in config.disabled {
            this.set_disabled(key, true);
        }
        this
    }

    /// The identity resolver.
    pub fn identity(&self) -> &R {
        &self.identity
    }

    /// The collection layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The order strategy selected for the layout.
    pub fn strategy(&self) -> OrderStrategy {
        self.strategy
    }

    /// Change the layout, reselecting the order strategy.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.strategy = strategy_for(layout);
    }

    /// The current session.
    pub fn session(&self) -> &SessionState<R::Key> {
        &self.session
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Mark `key` disabled or enabled.
    pub fn set_disabled(&mut self, key: R::Key, disabled: bool) {
        let pos = self.disabled.iter().position(|k| *k == key);
        match (pos, disabled) {
            (None, true) => self.disabled.push(key),
            (Some(i), false) => {
                self.disabled.swap_remove(i);
            }
            _ => {}
        }
    }

    /// Re-enable every item.
    pub fn clear_disabled(&mut self) {
        self.disabled.clear();
    }

    /// Whether `key` is disabled.
    pub fn is_disabled(&self, key: &R::Key) -> bool {
        self.disabled.contains(key)
    }

    /// Drag affordances for the item with `key`.
    pub fn item_state(&self, key: &R::Key) -> ItemState {
        let mut state = ItemState::empty();
        state.set(ItemState::ACTIVE, self.session.active() == Some(key));
        state.set(ItemState::OVER, self.session.over() == Some(key));
        state.set(ItemState::DISABLED, self.is_disabled(key));
        state
    }

    /// Begin a session for `key`.
    ///
    /// Ignored when `key` is disabled or a session is already active.
    pub fn drag_start(&mut self, key: R::Key) -> Transition<R::Key> {
        if self.session.is_dragging() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?key, "sortable: drag start while dragging, ignored");
            return Transition::Ignored;
        }
        if self.is_disabled(&key) {
            #[cfg(feature = "tracing")]
            tracing::debug!(?key, "sortable: drag start on disabled item, ignored");
            return Transition::Ignored;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?key, "sortable: drag start");
        self.session = SessionState::Dragging {
            active: key.clone(),
            over: None,
        };
        Transition::Started { active: key }
    }

    /// Replace the current drop target.
    ///
    /// Disabled items are recorded as no target.
    pub fn drag_over(&mut self, key: Option<R::Key>) -> Transition<R::Key> {
        let key = key.filter(|k| !self.is_disabled(k));
        let SessionState::Dragging { active, over } = &mut self.session else {
            return Transition::Ignored;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(?active, ?key, "sortable: drag over");
        over.clone_from(&key);
        Transition::Over {
            active: active.clone(),
            over: key,
        }
    }

    /// End the session, committing a move onto `key` when it is a valid target.
    ///
    /// The session returns to idle in every case. The listener is called only
    /// for [`Transition::Committed`].
    pub fn drag_end<L>(
        &mut self,
        key: Option<R::Key>,
        items: &[T],
        listener: &mut L,
    ) -> Transition<R::Key>
    where
        T: Clone,
        L: OrderListener<T> + ?Sized,
    {
        let SessionState::Dragging { active, .. } =
            core::mem::replace(&mut self.session, SessionState::Idle)
        else {
            return Transition::Ignored;
        };
        let target = match key {
            Some(k) if k != active && !self.is_disabled(&k) => k,
            over => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?active, ?over, "sortable: drop without target");
                return Transition::Dropped { active, over };
            }
        };
        debug_assert!(
            check_unique(items, &self.identity).is_ok(),
            "sortable items must resolve to unique keys"
        );
        let Some((from, to)) = resolve_move(items, &active, &target, &self.identity) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?active, over = ?target, "sortable: stale key on drop");
            return Transition::Dropped {
                active,
                over: Some(target),
            };
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?active, over = ?target, from, to, "sortable: commit");
        listener.order_changed(array_move(items, from, to));
        Transition::Committed {
            active,
            over: target,
            from,
            to,
        }
    }

    /// Abandon the session without reordering.
    ///
    /// Safe to call from idle, so unmount and focus-loss paths can call it
    /// unconditionally.
    pub fn drag_cancel(&mut self) -> Transition<R::Key> {
        match core::mem::replace(&mut self.session, SessionState::Idle) {
            SessionState::Idle => Transition::Ignored,
            SessionState::Dragging { active, .. } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?active, "sortable: drag cancel");
                Transition::Cancelled { active }
            }
        }
    }

    /// Apply one drag engine event.
    pub fn handle<L>(
        &mut self,
        event: DragEvent<R::Key>,
        items: &[T],
        listener: &mut L,
    ) -> Transition<R::Key>
    where
        T: Clone,
        L: OrderListener<T> + ?Sized,
    {
        match event {
            DragEvent::Start(key) => self.drag_start(key),
            DragEvent::Over(key) => self.drag_over(key),
            DragEvent::End(key) => self.drag_end(key, items, listener),
            DragEvent::Cancel => self.drag_cancel(),
        }
    }
}
