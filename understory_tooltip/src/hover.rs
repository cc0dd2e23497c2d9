// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-target enter/leave from raw pointer-over/pointer-out crossings.
//!
//! Pointer-over and pointer-out fire every time the pointer crosses any node
//! boundary, including boundaries between a trigger and its own descendants.
//! A tooltip only cares about the pointer entering or leaving the trigger as a
//! whole, so a crossing whose other side is the trigger itself or one of its
//! descendants is suppressed.
//!
//! ## Rule
//!
//! A crossing is a true enter/leave when its related target is absent, or is
//! neither the current target nor contained within it.
//!
//! ```
//! use understory_tooltip::hover::{Crossing, crosses_boundary};
//! use understory_tooltip::ParentLookup;
//!
//! // 1 is the trigger; 2 is a label inside it; 9 is elsewhere on the page.
//! struct Parents;
//! impl ParentLookup<u32> for Parents {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         match node {
//!             2 => Some(1),
//!             1 | 9 => Some(0),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! // Moving from the trigger onto its label is not a leave.
//! assert!(!crosses_boundary(&Parents, &Crossing::new(1, Some(2))));
//! // Moving to an unrelated node is.
//! assert!(crosses_boundary(&Parents, &Crossing::new(1, Some(9))));
//! // Leaving the window (no related target) is.
//! assert!(crosses_boundary(&Parents, &Crossing::new(1, None)));
//! ```

use crate::types::ParentLookup;

/// A pointer-over or pointer-out crossing as seen by the trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crossing<K> {
    /// The node the handler is attached to (the trigger).
    pub current_target: K,
    /// The node the pointer is moving to (for pointer-out) or from (for
    /// pointer-over). `None` when it comes from or goes outside the document.
    pub related_target: Option<K>,
}

impl<K> Crossing<K> {
    /// Create a crossing.
    pub const fn new(current_target: K, related_target: Option<K>) -> Self {
        Self {
            current_target,
            related_target,
        }
    }
}

/// Whether `node` is `ancestor` or one of its descendants.
pub fn contains<K, P>(parents: &P, ancestor: &K, node: &K) -> bool
where
    K: Copy + Eq,
    P: ParentLookup<K> + ?Sized,
{
    let mut cur = *node;
    // Walk to the root; caller ensures acyclic ancestry.
    loop {
        if cur == *ancestor {
            return true;
        }
        match parents.parent_of(&cur) {
            Some(p) => cur = p,
            None => return false,
        }
    }
}

/// Whether `crossing` enters or leaves the current target as a whole.
pub fn crosses_boundary<K, P>(parents: &P, crossing: &Crossing<K>) -> bool
where
    K: Copy + Eq,
    P: ParentLookup<K> + ?Sized,
{
    match &crossing.related_target {
        None => true,
        Some(related) => !contains(parents, &crossing.current_target, related),
    }
}
