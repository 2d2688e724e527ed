// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sortable --heading-base-level=0

//! Understory Sortable: a deterministic, `no_std` controller for reorderable collections.
//!
//! ## Overview
//!
//! This crate drives the "drag an item to a new slot" interaction for a list or grid.
//! It does not capture input, hit test, or animate.
//! Instead, an external drag engine reports [`DragEvent`](crate::engine::DragEvent)s
//! (start, over, end, cancel) and the controller turns them into session state and,
//! on a valid drop, exactly one new order for the consumer.
//!
//! ## Pieces
//!
//! - [`identity`]: map items to stable, unique keys ([`Identity`](crate::identity::Identity),
//!   [`DefaultIdentity`](crate::identity::DefaultIdentity)).
//! - [`strategy`]: pick an [`OrderStrategy`](crate::strategy::OrderStrategy) for a vertical,
//!   horizontal, or grid [`Layout`](crate::strategy::Layout). Handed to the engine verbatim.
//! - [`session`]: the [`SortableController`](crate::session::SortableController) state machine,
//!   `Idle` ⇄ `Dragging`.
//! - [`reorder`]: the pure array move used on commit.
//! - [`overlay`]: derive what the floating copy of the dragged item renders.
//! - [`engine`]: the drag engine boundary, events in and participant declarations out.
//! - [`config`]: per-collection settings.
//!
//! ## Ownership
//!
//! The consumer owns the items. The controller only reads them and proposes a new
//! order through an [`OrderListener`](crate::session::OrderListener). Each rendered
//! collection owns one controller and at most one session at a time.
//!
//! ## Failure behavior
//!
//! - A drop on nothing, on the dragged item itself, or on a disabled item ends the
//!   session without a move.
//! - A key that vanished from the collection mid-drag is a no-op, not an error.
//! - Cancel is always valid, including from `Idle`, so cleanup code can call it unconditionally.
//! - Non-unique keys and unknown layout names are caller contract violations; see
//!   [`SortableError`](crate::error::SortableError).
//!
//! ## Minimal usage
//!
//! ```
//! use understory_sortable::engine::DragEvent;
//! use understory_sortable::identity::DefaultIdentity;
//! use understory_sortable::session::{SortableController, Transition};
//! use understory_sortable::strategy::Layout;
//!
//! let mut items = vec!["a", "b", "c", "d"];
//! let mut sortable: SortableController<&str, _> =
//!     SortableController::new(DefaultIdentity, Layout::Vertical);
//!
//! let events = [
//!     DragEvent::Start("d".to_string()),
//!     DragEvent::Over(Some("b".to_string())),
//!     DragEvent::Over(Some("a".to_string())),
//!     DragEvent::End(Some("a".to_string())),
//! ];
//! let mut next = None;
//! for event in events {
//!     let t = sortable.handle(event, &items, &mut |order: Vec<&'static str>| next = Some(order));
//!     if let Transition::Committed { from, to, .. } = t {
//!         assert_eq!((from, to), (3, 0));
//!     }
//! }
//! if let Some(order) = next {
//!     items = order;
//! }
//! assert_eq!(items, ["d", "a", "b", "c"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: derive serde traits for [`Layout`](crate::strategy::Layout),
//!   [`OrderStrategy`](crate::strategy::OrderStrategy), and
//!   [`SortableConfig`](crate::config::SortableConfig).
//! - `tracing`: emit `tracing` events for every session transition.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod overlay;
pub mod reorder;
pub mod session;
pub mod strategy;
