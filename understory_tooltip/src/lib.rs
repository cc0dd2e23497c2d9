// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: a headless tooltip with a portal-mounted overlay.
//!
//! ## Overview
//!
//! A tooltip has two halves:
//!
//! - A **trigger wrapper** around exactly one child element. It forwards pointer-over,
//!   pointer-out and click to the child's own handlers, then applies the tooltip's, and
//!   reads the child's node on every render for geometry.
//! - An **overlay** rendered through an [`understory_portal::Portal`] into a detached
//!   mount node, so it escapes the clipping and stacking contexts of the trigger's
//!   ancestors. It is positioned from the trigger's bounding rectangle.
//!
//! Interaction changes visibility; a visibility change re-renders synchronously; every
//! render recomputes placement from current geometry and pushes the overlay (or an
//! empty subtree) into the mount node.
//!
//! ## Collaborators
//!
//! The crate does not touch a real node tree. Callers inject:
//!
//! - a [`Host`](understory_portal::Host) to create, patch and release the mount node;
//! - a [`Geometry`] provider for trigger and document rectangles;
//! - a [`ParentLookup`] to tell descendants of the trigger apart from the outside world;
//! - a [`Trigger`](trigger::Trigger) implementation for the child element.
//!
//! ## Modules
//!
//! - [`position`]: pure placement from trigger rect, body rect and [`Side`].
//! - [`hover`]: whole-target enter/leave from raw crossings.
//! - [`trigger`]: child resolution and the wrap-and-forward contract.
//! - [`overlay`]: the view pushed into the mount node.
//! - [`tooltip`]: the component tying it together.
//!
//! ## Defaults and fallbacks
//!
//! - `position` defaults to [`Side::Right`]; an unrecognized position name leaves the
//!   overlay unpositioned rather than failing.
//! - A trigger that has no node yet reads as [`kurbo::Rect::ZERO`].
//! - Zero or several children render nothing and log a warning; a string child renders a
//!   bare element with no handlers.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use understory_portal::Document;
//! use understory_tooltip::hover::Crossing;
//! use understory_tooltip::trigger::{Child, Trigger, TriggerEvent};
//! use understory_tooltip::{Geometry, ParentLookup, Side, Tooltip, TooltipProps};
//!
//! // Node 1 is a button containing an icon (2). Node 3 is elsewhere.
//! struct Page;
//! impl Geometry<u32> for Page {
//!     fn bounding_rect(&self, node: &u32) -> Option<Rect> {
//!         (*node == 1).then(|| Rect::new(50.0, 100.0, 150.0, 130.0))
//!     }
//!     fn document_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 800.0, 600.0)
//!     }
//! }
//! impl ParentLookup<u32> for Page {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node == 2).then_some(1)
//!     }
//! }
//!
//! struct Button;
//! impl Trigger for Button {
//!     type Node = u32;
//!     fn node(&self) -> Option<u32> {
//!         Some(1)
//!     }
//! }
//!
//! let mut doc = Document::new();
//! let props = TooltipProps::new("Delete").with_position(Side::Top);
//! let mut tip = Tooltip::new(props, [Child::Element(Button)]);
//! let mount = tip.mount(&mut doc, &Page);
//!
//! let enter = TriggerEvent::PointerOver(Crossing::new(1, Some(3)));
//! assert!(tip.handle(enter, &mut doc, &Page, &Page));
//! assert_eq!(doc.content(mount).unwrap().style.to_string(), "top: 100px; left: 100px");
//!
//! // Moving onto the icon is not a leave.
//! let onto_icon = TriggerEvent::PointerOut(Crossing::new(1, Some(2)));
//! assert!(!tip.handle(onto_icon, &mut doc, &Page, &Page));
//! assert!(tip.is_visible());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod hover;
pub mod overlay;
pub mod position;
pub mod tooltip;
pub mod trigger;
pub mod types;

pub use error::{ChildError, UnknownSide};
pub use overlay::Overlay;
pub use position::PositionStyle;
pub use tooltip::{Tooltip, TooltipProps};
pub use types::{Geometry, NoParent, ParentLookup, Side, TriggerActions};
