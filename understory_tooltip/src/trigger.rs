// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trigger wrapper: child resolution and the wrap-and-forward contract.
//!
//! ## Contract
//!
//! Any element used as a trigger implements [`Trigger`]. It exposes its node
//! (for geometry reads) and may react to the same interactions the tooltip
//! listens to. The tooltip always calls the element's own handler first and
//! then applies its own, so wrapping never replaces existing behavior.
//!
//! ## Children
//!
//! A tooltip wraps exactly one child. [`TriggerChild::resolve`] makes the edge
//! cases explicit:
//!
//! - one [`Child::Element`] becomes the wrapped trigger;
//! - one [`Child::Tag`] becomes a bare element of that name, with no
//!   handlers and no geometry (kept for compatibility with string children);
//! - no child, or several, is a [`ChildError`].

use alloc::string::String;

use crate::error::ChildError;
use crate::hover::Crossing;

/// Capabilities a trigger element must provide.
///
/// The handler methods are the element's own handlers; the defaults do nothing.
pub trait Trigger {
    /// Node key used for geometry and containment queries.
    type Node: Copy + Eq + core::fmt::Debug;

    /// The element's rendered node, or `None` if it is not mounted yet.
    fn node(&self) -> Option<Self::Node>;

    /// The element's own pointer-over handler.
    fn on_pointer_over(&mut self, _crossing: &Crossing<Self::Node>) {}

    /// The element's own pointer-out handler.
    fn on_pointer_out(&mut self, _crossing: &Crossing<Self::Node>) {}

    /// The element's own click handler.
    fn on_click(&mut self) {}
}

/// An interaction delivered to a trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerEvent<K> {
    /// The pointer moved onto the trigger or one of its descendants.
    PointerOver(Crossing<K>),
    /// The pointer moved off the trigger or one of its descendants.
    PointerOut(Crossing<K>),
    /// The trigger was clicked.
    Click,
}

/// A child as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child<T> {
    /// A renderable element.
    Element(T),
    /// An element name, rendered as a bare element.
    Tag(String),
}

impl<T> From<T> for Child<T> {
    fn from(element: T) -> Self {
        Self::Element(element)
    }
}

/// The single child a tooltip renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerChild<T> {
    /// An element wrapped with the tooltip's handlers.
    Element(T),
    /// A bare element of the given name. Receives no handlers and no ref.
    Tag(String),
}

impl<T> TriggerChild<T> {
    /// Resolve the supplied children to the one child a tooltip wraps.
    ///
    /// ```
    /// use understory_tooltip::trigger::{Child, TriggerChild};
    /// use understory_tooltip::ChildError;
    ///
    /// let one = TriggerChild::resolve([Child::Element("button")]);
    /// assert_eq!(one, Ok(TriggerChild::Element("button")));
    ///
    /// let none = TriggerChild::<&str>::resolve([]);
    /// assert_eq!(none, Err(ChildError::Missing));
    ///
    /// let two = TriggerChild::resolve([Child::Element("a"), Child::Element("b")]);
    /// assert_eq!(two, Err(ChildError::Multiple(2)));
    /// ```
    pub fn resolve<I>(children: I) -> Result<Self, ChildError>
    where
        I: IntoIterator<Item = Child<T>>,
    {
        let mut iter = children.into_iter();
        let Some(first) = iter.next() else {
            return Err(ChildError::Missing);
        };
        let rest = iter.count();
        if rest > 0 {
            return Err(ChildError::Multiple(rest + 1));
        }
        match first {
            Child::Element(element) => Ok(Self::Element(element)),
            Child::Tag(tag) if tag.is_empty() => Err(ChildError::EmptyTag),
            Child::Tag(tag) => Ok(Self::Tag(tag)),
        }
    }
}

/// What the trigger wrapper renders in place of its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered<T> {
    /// The child element, wrapped.
    Wrapped(T),
    /// A bare element of the given name.
    Bare(String),
    /// Nothing; the children were invalid.
    Nothing,
}

impl<T> Rendered<T> {
    /// The wrapped trigger, if any.
    pub fn trigger(&self) -> Option<&T> {
        match self {
            Self::Wrapped(t) => Some(t),
            Self::Bare(_) | Self::Nothing => None,
        }
    }

    /// The wrapped trigger, mutably.
    pub fn trigger_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Wrapped(t) => Some(t),
            Self::Bare(_) | Self::Nothing => None,
        }
    }

    /// True when nothing is rendered.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

impl<T> From<Result<TriggerChild<T>, ChildError>> for Rendered<T> {
    fn from(resolved: Result<TriggerChild<T>, ChildError>) -> Self {
        match resolved {
            Ok(TriggerChild::Element(t)) => Self::Wrapped(t),
            Ok(TriggerChild::Tag(tag)) => {
                tracing::debug!(tag = tag.as_str(), "string child rendered as a bare element");
                Self::Bare(tag)
            }
            Err(err) => {
                tracing::warn!(%err, "tooltip renders nothing");
                Self::Nothing
            }
        }
    }
}
