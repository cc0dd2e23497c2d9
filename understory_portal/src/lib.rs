// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_portal --heading-base-level=0

//! Understory Portal: a headless lifecycle for content rendered outside its owner's subtree.
//!
//! ## Overview
//!
//! Overlays such as tooltips, popovers and menus must escape the clipping and stacking
//! contexts of the widget that owns them. The usual answer is a *portal*: a container
//! node created outside the owner's natural parent, into which the overlay subtree is
//! rendered.
//!
//! This crate does not render anything. It tracks the lifecycle of that container and
//! drives a toolkit through the [`Host`] trait:
//!
//! - [`Host`]: create a detached container, render (patch) a view into it, unmount the
//!   view, release the container.
//! - [`Portal`]: a two-state machine (`Inactive`/`Active`) that owns exactly one mount node
//!   while active.
//! - [`Document`]: an in-memory [`Host`] with generational [`MountId`] handles, used for
//!   tests, demos, and as a reference implementation.
//!
//! ## Lifecycle
//!
//! 1) On component activation call [`Portal::activate`]. The mount node is created once.
//! 2) On every update call [`Portal::render`]. The node is reused; only its contents change.
//!    Render `None` to leave an empty subtree behind.
//! 3) On teardown call [`Portal::deactivate`]. The subtree is unmounted and the node released.
//!
//! Repeated activate/deactivate cycles create and release one node each and leak nothing.
//!
//! ## Example
//!
//! ```
//! use understory_portal::{Document, Portal};
//!
//! let mut doc: Document<&str> = Document::new();
//! let mut portal = Portal::new();
//!
//! for _ in 0..3 {
//!     let m = portal.activate(&mut doc, Some(&"overlay"));
//!     assert_eq!(doc.mount_count(), 1);
//!     assert_eq!(doc.content(m), Some(&"overlay"));
//!     portal.deactivate(&mut doc);
//!     assert_eq!(doc.mount_count(), 0);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod document;
pub mod host;
pub mod portal;

pub use document::{Document, MountId};
pub use host::Host;
pub use portal::{Portal, PortalState};
