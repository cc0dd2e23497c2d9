// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: anchor sides, trigger actions, and the injected lookups.

use alloc::string::ToString;
use core::str::FromStr;

use kurbo::Rect;

use crate::error::UnknownSide;

/// Side of the trigger the overlay is anchored to.
///
/// Parses from (and prints as) its lowercase name. Unrecognized names have no
/// `Side`; see [`Side::parse`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Side {
    /// Above the trigger, horizontally centered.
    Top,
    /// Below the trigger, horizontally centered.
    Bottom,
    /// Left of the trigger, vertically centered.
    Left,
    /// Right of the trigger, vertically centered.
    #[default]
    Right,
}

impl Side {
    /// All sides, in declaration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Lowercase name of the side.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Lenient parse: unknown names yield `None`, which positions nothing.
    ///
    /// ```
    /// use understory_tooltip::Side;
    /// assert_eq!(Side::parse("top"), Some(Side::Top));
    /// assert_eq!(Side::parse("diagonal"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = UnknownSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(UnknownSide(other.to_string())),
        }
    }
}

bitflags::bitflags! {
    /// Interactions on the trigger that change overlay visibility.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TriggerActions: u8 {
        /// Pointer entering shows, leaving hides.
        const HOVER = 0b0000_0001;
        /// Each click toggles.
        const CLICK = 0b0000_0010;
    }
}

impl Default for TriggerActions {
    fn default() -> Self {
        Self::HOVER | Self::CLICK
    }
}

/// Geometry provider for trigger nodes and the document.
///
/// Stands in for reading bounding rectangles from a live node tree, so
/// positioning can be driven deterministically without a rendering surface.
/// All rectangles are in viewport coordinates.
pub trait Geometry<K> {
    /// Bounding rectangle of `node`, or `None` if it has no geometry yet.
    fn bounding_rect(&self, node: &K) -> Option<Rect>;

    /// Bounding rectangle of the document body.
    ///
    /// Its origin moves opposite to scrolling, so subtracting it yields
    /// document-relative offsets.
    fn document_rect(&self) -> Rect;

    /// Rectangle of the trigger, or [`Rect::ZERO`] when the trigger is not mounted.
    fn trigger_rect(&self, node: Option<&K>) -> Rect {
        node.and_then(|n| self.bounding_rect(n))
            .unwrap_or(Rect::ZERO)
    }
}

/// Look up the parent of a node, used to answer containment queries.
///
/// Implementations must describe an acyclic ancestry.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A parent provider for flat trees: every node is a root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}
