// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract violations reported by validators.
//!
//! Nothing on the drag path returns these. Stale keys and interrupted sessions
//! resolve to no-op [`Transition`](crate::session::Transition)s instead.

use alloc::string::String;

/// A caller contract was violated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SortableError {
    /// A layout name did not match `vertical`, `horizontal`, or `grid`.
    #[error("unrecognized layout `{0}` (expected `vertical`, `horizontal`, or `grid`)")]
    UnknownLayout(String),
    /// Two items in the same collection resolved to the same key.
    #[error("items at indices {first} and {second} resolve to the same key")]
    DuplicateKey {
        /// Index of the first item carrying the key.
        first: usize,
        /// Index of the later item carrying the same key.
        second: usize,
    },
}
