// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view pushed into the portal's mount node while the tooltip is visible.

use alloc::format;
use alloc::string::String;

use crate::position::PositionStyle;
use crate::types::Side;

/// Floating layer content plus its computed placement.
///
/// A toolkit renders this as an outer layer (classes from
/// [`class_name`](Overlay::class_name), inline style from
/// [`style`](Overlay::style)) wrapping a content element with
/// [`CONTENT_CLASS`](Overlay::CONTENT_CLASS).
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay<C> {
    /// Anchor side, or `None` for an unrecognized position.
    pub side: Option<Side>,
    /// Computed placement.
    pub style: PositionStyle,
    /// Tooltip content.
    pub content: C,
}

impl<C> Overlay<C> {
    /// Class of the outer layer.
    pub const CLASS: &'static str = "Tooltip";
    /// Class of the element wrapping the content.
    pub const CONTENT_CLASS: &'static str = "Tooltip-content";

    /// Classes of the outer layer: the base class plus a side modifier.
    ///
    /// ```
    /// use understory_tooltip::{Overlay, PositionStyle, Side};
    ///
    /// let o = Overlay { side: Some(Side::Top), style: PositionStyle::default(), content: () };
    /// assert_eq!(o.class_name(), "Tooltip Tooltip--top");
    /// ```
    pub fn class_name(&self) -> String {
        match self.side {
            Some(side) => format!("{} {}--{}", Self::CLASS, Self::CLASS, side),
            None => String::from(Self::CLASS),
        }
    }
}
