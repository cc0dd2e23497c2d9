// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Host`] with generational mount slots.

use alloc::vec::Vec;

use crate::host::Host;

/// Identifier for a mount node in a [`Document`].
///
/// A slot index plus a generation counter.
///
/// ## Semantics
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On release, the slot is freed; any existing `MountId` for that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `MountId`.
/// - A slot whose generation reached `u32::MAX` is retired on release and never reused.
///
/// Stale ids never alias a live mount node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MountId(u32, u32);

impl MountId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Generation of the slot this id was issued for.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

#[derive(Clone, Debug)]
struct MountNode<V> {
    content: Option<V>,
    renders: u64,
}

#[derive(Clone, Debug)]
struct Slot<V> {
    // Kept across release so that reuse can bump it.
    generation: u32,
    node: Option<MountNode<V>>,
}

/// A detached-node arena standing in for a document.
///
/// Each mount node records the last view rendered into it (if any) and how
/// many times it was rendered. Useful for tests and demos, and as a reference
/// for toolkits implementing [`Host`] over a real node tree.
///
/// ```
/// use understory_portal::{Document, Host};
///
/// let mut doc: Document<&str> = Document::new();
/// let m = doc.create_mount();
/// doc.render_into(m, Some(&"hello"));
/// assert_eq!(doc.content(m), Some(&"hello"));
///
/// doc.unmount(m);
/// doc.release(m);
/// assert_eq!(doc.mount_count(), 0);
/// assert!(!doc.is_alive(m));
/// ```
#[derive(Clone, Debug)]
pub struct Document<V> {
    slots: Vec<Slot<V>>,
    free_list: Vec<usize>,
    live: usize,
    created: u64,
}

impl<V> Default for Document<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Document<V> {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
            created: 0,
        }
    }

    /// Number of live mount nodes.
    pub fn mount_count(&self) -> usize {
        self.live
    }

    /// Total number of mount nodes ever created.
    pub fn created_total(&self) -> u64 {
        self.created
    }

    /// Whether `id` still refers to a live mount node.
    pub fn is_alive(&self, id: MountId) -> bool {
        self.node(id).is_some()
    }

    /// The view currently rendered into `id`, or `None` when the subtree is
    /// empty or the node is stale.
    pub fn content(&self, id: MountId) -> Option<&V> {
        self.node(id)?.content.as_ref()
    }

    /// How many times `id` has been rendered into.
    pub fn render_count(&self, id: MountId) -> Option<u64> {
        self.node(id).map(|n| n.renders)
    }

    /// Iterate live mount nodes.
    pub fn mounts(&self) -> impl Iterator<Item = MountId> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.node.as_ref()?;
            let idx = u32::try_from(i).ok()?;
            Some(MountId::new(idx, slot.generation))
        })
    }

    fn node(&self, id: MountId) -> Option<&MountNode<V>> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: MountId) -> Option<&mut MountNode<V>> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_mut()
    }
}

impl<V: Clone> Host<V> for Document<V> {
    type Mount = MountId;

    fn create_mount(&mut self) -> MountId {
        let node = MountNode {
            content: None,
            renders: 0,
        };
        self.created += 1;
        self.live += 1;
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            slot.generation = slot.generation.saturating_add(1);
            slot.node = Some(node);
            (idx, slot.generation)
        } else {
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            (self.slots.len() - 1, 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "MountId uses 32-bit indices by design."
        )]
        let id = MountId::new(idx as u32, generation);
        id
    }

    fn render_into(&mut self, mount: MountId, view: Option<&V>) {
        if let Some(node) = self.node_mut(mount) {
            node.content = view.cloned();
            node.renders += 1;
        } else {
            tracing::warn!(?mount, "render into a stale mount node");
        }
    }

    fn unmount(&mut self, mount: MountId) {
        if let Some(node) = self.node_mut(mount) {
            node.content = None;
        }
    }

    fn release(&mut self, mount: MountId) {
        if self.node(mount).is_none() {
            return;
        }
        self.slots[mount.idx()].node = None;
        self.live -= 1;
        if mount.generation() == u32::MAX {
            tracing::debug!(?mount, "mount slot retired");
            return;
        }
        self.free_list.push(mount.idx());
    }
}
