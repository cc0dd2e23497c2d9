// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the demos: a tiny page of nested boxes and a button trigger.

use kurbo::{Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_tooltip::hover::Crossing;
use understory_tooltip::trigger::Trigger;
use understory_tooltip::{Geometry, ParentLookup};

/// Node key in a [`Page`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Node(pub u32);

/// A flat list of boxes with parents, plus a scroll offset.
#[derive(Clone, Debug, Default)]
pub struct Page {
    boxes: Vec<(Node, Option<Node>, Rect)>,
    scroll: Vec2,
}

impl Page {
    /// Create an empty, unscrolled page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box in document coordinates.
    pub fn insert(&mut self, node: Node, parent: Option<Node>, rect: Rect) {
        self.boxes.push((node, parent, rect));
    }

    /// Scroll the document; viewport rects move the opposite way.
    pub fn scroll_to(&mut self, offset: Vec2) {
        self.scroll = offset;
    }
}

impl Geometry<Node> for Page {
    fn bounding_rect(&self, node: &Node) -> Option<Rect> {
        self.boxes
            .iter()
            .find(|(n, _, _)| n == node)
            .map(|(_, _, r)| *r - self.scroll)
    }

    fn document_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 2000.0) - self.scroll
    }
}

impl ParentLookup<Node> for Page {
    fn parent_of(&self, node: &Node) -> Option<Node> {
        self.boxes
            .iter()
            .find(|(n, _, _)| n == node)
            .and_then(|(_, p, _)| *p)
    }
}

/// A button that counts its own clicks.
#[derive(Debug)]
pub struct Button {
    /// The button's node.
    pub node: Node,
    /// Clicks seen by the button's own handler.
    pub clicks: u32,
}

impl Trigger for Button {
    type Node = Node;

    fn node(&self) -> Option<Node> {
        Some(self.node)
    }

    fn on_pointer_over(&mut self, crossing: &Crossing<Node>) {
        tracing::info!(from = ?crossing.related_target, "button: pointer over");
    }

    fn on_click(&mut self) {
        self.clicks += 1;
    }
}

/// Install a `RUST_LOG`-driven subscriber, defaulting to `debug`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
