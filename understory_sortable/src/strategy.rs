// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Order strategy selection: which axes matter for a layout.
//!
//! ## Overview
//!
//! A collection is laid out as a vertical list, a horizontal list, or a grid.
//! [`strategy_for`] selects the matching [`OrderStrategy`] once per collection
//! configuration. The strategy is handed to the drag engine verbatim; the
//! controller never interprets it.
//!
//! Engines that want a shared notion of "is `b` before or after `a`" can use
//! [`OrderStrategy::compare`] over item bounds.
//!
//! ```
//! use kurbo::Rect;
//! use understory_sortable::strategy::{Axes, Layout, OrderStrategy, strategy_for};
//!
//! let s = strategy_for(Layout::Grid);
//! assert_eq!(s, OrderStrategy::Rect);
//! assert_eq!(s.axes(), Axes::X | Axes::Y);
//!
//! // Same row: x decides.
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let b = Rect::new(20.0, 0.0, 30.0, 10.0);
//! assert!(s.compare(a, b).is_lt());
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use kurbo::Rect;

use crate::error::SortableError;

/// How a collection is laid out on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// Items stacked top to bottom.
    #[default]
    Vertical,
    /// Items placed left to right.
    Horizontal,
    /// Items wrapped into rows and columns.
    Grid,
}

impl Layout {
    /// Lowercase name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = SortableError;

    /// Parse a layout name. Unrecognized names are a caller contract
    /// violation and must not be defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            "grid" => Ok(Self::Grid),
            other => Err(SortableError::UnknownLayout(other.to_string())),
        }
    }
}

bitflags::bitflags! {
    /// Axes consulted when ordering items.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// Horizontal axis.
        const X = 0b0000_0001;
        /// Vertical axis.
        const Y = 0b0000_0010;
    }
}

/// Stateless ordering policy for a layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderStrategy {
    /// Only the vertical position matters.
    VerticalList,
    /// Only the horizontal position matters.
    HorizontalList,
    /// Row-major over both axes.
    Rect,
}

/// Select the strategy for `layout`.
pub const fn strategy_for(layout: Layout) -> OrderStrategy {
    match layout {
        Layout::Vertical => OrderStrategy::VerticalList,
        Layout::Horizontal => OrderStrategy::HorizontalList,
        Layout::Grid => OrderStrategy::Rect,
    }
}

impl OrderStrategy {
    /// Axes this strategy consults.
    pub const fn axes(self) -> Axes {
        match self {
            Self::VerticalList => Axes::Y,
            Self::HorizontalList => Axes::X,
            Self::Rect => Axes::X.union(Axes::Y),
        }
    }

    /// Order two item bounds: `Less` when `a` comes before `b`.
    ///
    /// Lists compare bound centers along their single axis. Grids treat
    /// bounds with overlapping vertical spans as one row and compare x within
    /// it, otherwise y. Bounds are assumed finite.
    pub fn compare(self, a: Rect, b: Rect) -> Ordering {
        let (ca, cb) = (a.center(), b.center());
        match self {
            Self::VerticalList => ca.y.total_cmp(&cb.y),
            Self::HorizontalList => ca.x.total_cmp(&cb.x),
            Self::Rect => {
                let same_row = a.y0 < b.y1 && b.y0 < a.y1;
                if same_row {
                    ca.x.total_cmp(&cb.x)
                } else {
                    ca.y.total_cmp(&cb.y)
                }
            }
        }
    }
}
