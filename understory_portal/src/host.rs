// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host capability a portal renders through.

/// A rendering host that can mount a detached subtree into a container it creates.
///
/// This is the only surface the portal needs from a toolkit. A DOM-backed host
/// creates an element that is not attached under the component's parent; a
/// retained-mode toolkit might hand out a layer slot instead.
///
/// `V` is the view type pushed into the container. Passing `None` to
/// [`render_into`](Host::render_into) renders an empty subtree.
pub trait Host<V: ?Sized> {
    /// Handle to a container created by this host.
    type Mount: Copy + Eq + core::fmt::Debug;

    /// Create a new detached container.
    fn create_mount(&mut self) -> Self::Mount;

    /// Render `view` into `mount`, replacing (patching) whatever was there.
    fn render_into(&mut self, mount: Self::Mount, view: Option<&V>);

    /// Unmount the subtree currently rendered into `mount`.
    ///
    /// The container itself stays alive until [`release`](Host::release).
    fn unmount(&mut self, mount: Self::Mount);

    /// Destroy the container. `mount` is stale afterwards.
    fn release(&mut self, mount: Self::Mount);
}
