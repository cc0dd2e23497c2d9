// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portal lifecycle: `Inactive` → activate → `Active` → deactivate → `Inactive`.
//!
//! ## Transitions
//!
//! - [`Portal::activate`] creates the mount node and performs the first render.
//! - [`Portal::render`] pushes a new view into the existing mount node.
//! - [`Portal::deactivate`] unmounts the rendered subtree and releases the node.
//!
//! Misuse (activating twice, rendering while inactive) is logged and ignored;
//! it never creates a second mount node.

use crate::host::Host;

/// Lifecycle state of a [`Portal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PortalState<M> {
    /// No mount node exists.
    Inactive,
    /// The mount node exists and receives renders.
    Active(M),
}

/// Owns a single detached mount node for the active lifetime of a component.
///
/// The mount node is `None` before activation and after deactivation, and
/// `Some` in between. It is never recreated while active; only its rendered
/// contents change.
///
/// ```
/// use understory_portal::{Document, Portal};
///
/// let mut doc: Document<&str> = Document::new();
/// let mut portal = Portal::new();
/// assert_eq!(portal.mount_node(), None);
///
/// let m = portal.activate(&mut doc, Some(&"first"));
/// assert_eq!(doc.content(m), Some(&"first"));
///
/// portal.render(&mut doc, None);
/// assert_eq!(doc.content(m), None);
/// assert_eq!(portal.mount_node(), Some(m));
///
/// portal.deactivate(&mut doc);
/// assert_eq!(portal.mount_node(), None);
/// assert_eq!(doc.mount_count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Portal<M> {
    state: PortalState<M>,
}

impl<M: Copy + Eq + core::fmt::Debug> Default for Portal<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Copy + Eq + core::fmt::Debug> Portal<M> {
    /// Create an inactive portal.
    pub const fn new() -> Self {
        Self {
            state: PortalState::Inactive,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PortalState<M> {
        self.state
    }

    /// Whether the portal currently owns a mount node.
    pub fn is_active(&self) -> bool {
        matches!(self.state, PortalState::Active(_))
    }

    /// The mount node, if active.
    pub fn mount_node(&self) -> Option<M> {
        match self.state {
            PortalState::Active(m) => Some(m),
            PortalState::Inactive => None,
        }
    }

    /// Create the mount node and render `view` into it.
    ///
    /// If already active, the existing node is kept, re-rendered, and returned.
    pub fn activate<V, H>(&mut self, host: &mut H, view: Option<&V>) -> M
    where
        V: ?Sized,
        H: Host<V, Mount = M> + ?Sized,
    {
        let mount = match self.state {
            PortalState::Active(m) => {
                tracing::debug!(mount = ?m, "portal already active");
                m
            }
            PortalState::Inactive => {
                let m = host.create_mount();
                tracing::debug!(mount = ?m, "portal activated");
                self.state = PortalState::Active(m);
                m
            }
        };
        host.render_into(mount, view);
        mount
    }

    /// Push `view` into the mount node.
    ///
    /// Returns `false` (and renders nothing) when the portal is inactive.
    pub fn render<V, H>(&mut self, host: &mut H, view: Option<&V>) -> bool
    where
        V: ?Sized,
        H: Host<V, Mount = M> + ?Sized,
    {
        match self.state {
            PortalState::Active(m) => {
                tracing::trace!(mount = ?m, empty = view.is_none(), "portal render");
                host.render_into(m, view);
                true
            }
            PortalState::Inactive => {
                tracing::warn!("render on an inactive portal ignored");
                false
            }
        }
    }

    /// Unmount the rendered subtree and release the mount node.
    ///
    /// Returns `false` when the portal was already inactive.
    pub fn deactivate<V, H>(&mut self, host: &mut H) -> bool
    where
        V: ?Sized,
        H: Host<V, Mount = M> + ?Sized,
    {
        let PortalState::Active(m) = self.state else {
            return false;
        };
        host.unmount(m);
        host.release(m);
        self.state = PortalState::Inactive;
        tracing::debug!(mount = ?m, "portal deactivated");
        true
    }
}
