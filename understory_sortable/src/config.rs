// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-collection configuration.

use alloc::string::String;
use alloc::vec::Vec;

use crate::strategy::Layout;

/// Settings for one sortable collection.
///
/// Apply with [`SortableController::with_config`](crate::session::SortableController::with_config).
/// With the `serde` feature this can be loaded from a host's own config files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortableConfig<K = String> {
    /// Layout of the collection; selects the order strategy.
    pub layout: Layout,
    /// Keys of items that can be neither dragged nor dropped onto.
    pub disabled: Vec<K>,
}

impl<K> Default for SortableConfig<K> {
    fn default() -> Self {
        Self {
            layout: Layout::Vertical,
            disabled: Vec::new(),
        }
    }
}

impl<K> SortableConfig<K> {
    /// Config for `layout` with nothing disabled.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            disabled: Vec::new(),
        }
    }

    /// Add keys to the disabled set.
    #[must_use]
    pub fn with_disabled(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.disabled.extend(keys);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_is_vertical_with_nothing_disabled() {
        let c: SortableConfig = SortableConfig::default();
        assert_eq!(c.layout, Layout::Vertical);
        assert!(c.disabled.is_empty());
    }

    // with_disabled accumulates across calls.
    #[test]
    fn with_disabled_extends() {
        let c = SortableConfig::new(Layout::Horizontal)
            .with_disabled([1_u32, 2])
            .with_disabled(vec![5]);
        assert_eq!(c.layout, Layout::Horizontal);
        assert_eq!(c.disabled, [1, 2, 5]);
    }
}
