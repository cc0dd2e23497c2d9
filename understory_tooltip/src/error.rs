// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;

/// Why a set of children cannot act as a tooltip trigger.
///
/// Returned by [`TriggerChild::resolve`](crate::trigger::TriggerChild::resolve).
/// The tooltip itself never propagates this; it renders nothing and logs it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChildError {
    /// No child was supplied.
    #[error("tooltip trigger needs exactly one child, got none")]
    Missing,
    /// More than one child was supplied.
    #[error("tooltip trigger needs exactly one child, got {0}")]
    Multiple(usize),
    /// A tag-name child was the empty string.
    #[error("tooltip trigger tag name is empty")]
    EmptyTag,
}

/// A position name that is not one of `top`, `bottom`, `left`, `right`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown tooltip position `{0}`")]
pub struct UnknownSide(pub String);
