// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip component.
//!
//! ## Lifecycle
//!
//! - [`Tooltip::mount`]: capture the trigger node, activate the portal, first render.
//! - [`Tooltip::handle`]: forward an interaction to the child, then apply the
//!   tooltip's own handler. A visibility change re-renders before returning.
//! - [`Tooltip::update`]: re-render after props or geometry changed.
//! - [`Tooltip::unmount`]: deactivate the portal.
//!
//! Every render re-reads the trigger node and recomputes placement, so the
//! overlay is never stale relative to the last interaction.

use understory_portal::{Host, Portal};

use crate::hover::{Crossing, crosses_boundary};
use crate::overlay::Overlay;
use crate::position::{PositionStyle, compute};
use crate::trigger::{Child, Rendered, Trigger, TriggerChild, TriggerEvent};
use crate::types::{Geometry, ParentLookup, Side, TriggerActions};

/// Tooltip configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipProps<C> {
    /// Content shown inside the overlay.
    pub tooltip: C,
    /// Anchor side. `None` leaves the overlay unpositioned.
    pub position: Option<Side>,
    /// Interactions that change visibility.
    pub actions: TriggerActions,
}

impl<C> TooltipProps<C> {
    /// Props for `tooltip`, anchored [`Side::Right`] and reacting to hover and click.
    pub fn new(tooltip: C) -> Self {
        Self {
            tooltip,
            position: Some(Side::default()),
            actions: TriggerActions::default(),
        }
    }

    /// Anchor to `side`.
    pub fn with_position(mut self, side: Side) -> Self {
        self.position = Some(side);
        self
    }

    /// Anchor to the side called `name`; an unknown name leaves the overlay unpositioned.
    pub fn with_position_name(mut self, name: &str) -> Self {
        self.position = Side::parse(name);
        if self.position.is_none() {
            tracing::debug!(name, "unknown tooltip position, overlay left unpositioned");
        }
        self
    }

    /// React only to `actions`.
    pub fn with_actions(mut self, actions: TriggerActions) -> Self {
        self.actions = actions;
        self
    }
}

/// A tooltip wrapping one trigger element and owning one portal.
///
/// `T` is the trigger element, `C` the tooltip content, `M` the host's mount handle.
///
/// ```
/// use kurbo::Rect;
/// use understory_portal::Document;
/// use understory_tooltip::hover::Crossing;
/// use understory_tooltip::trigger::{Child, Trigger, TriggerEvent};
/// use understory_tooltip::{Geometry, NoParent, Tooltip, TooltipProps};
///
/// struct Button;
/// impl Trigger for Button {
///     type Node = u32;
///     fn node(&self) -> Option<u32> { Some(1) }
/// }
///
/// struct Page;
/// impl Geometry<u32> for Page {
///     fn bounding_rect(&self, _: &u32) -> Option<Rect> { Some(Rect::new(50.0, 100.0, 150.0, 130.0)) }
///     fn document_rect(&self) -> Rect { Rect::new(0.0, 0.0, 800.0, 600.0) }
/// }
///
/// let mut doc = Document::new();
/// let mut tip = Tooltip::new(TooltipProps::new("Save"), [Child::Element(Button)]);
/// let mount = tip.mount(&mut doc, &Page);
/// assert!(doc.content(mount).is_none());
///
/// tip.handle(TriggerEvent::PointerOver(Crossing::new(1, None)), &mut doc, &Page, &NoParent);
/// let overlay = doc.content(mount).unwrap();
/// assert_eq!(overlay.content, "Save");
/// assert_eq!(overlay.style.to_string(), "left: 150px; top: 115px");
///
/// tip.unmount(&mut doc);
/// assert_eq!(doc.mount_count(), 0);
/// ```
#[derive(Debug)]
pub struct Tooltip<T: Trigger, C, M> {
    props: TooltipProps<C>,
    child: Rendered<T>,
    visible: bool,
    trigger_node: Option<T::Node>,
    portal: Portal<M>,
}

impl<T, C, M> Tooltip<T, C, M>
where
    T: Trigger,
    C: Clone,
    M: Copy + Eq + core::fmt::Debug,
{
    /// Create an unmounted, hidden tooltip around `children`.
    ///
    /// Invalid children (none, several, an empty tag) render nothing and are
    /// reported with a warning.
    pub fn new<I>(props: TooltipProps<C>, children: I) -> Self
    where
        I: IntoIterator<Item = Child<T>>,
    {
        Self {
            props,
            child: TriggerChild::resolve(children).into(),
            visible: false,
            trigger_node: None,
            portal: Portal::new(),
        }
    }

    /// Current props.
    pub fn props(&self) -> &TooltipProps<C> {
        &self.props
    }

    /// Replace props. Takes effect on the next render; see [`update`](Self::update).
    pub fn set_props(&mut self, props: TooltipProps<C>) {
        self.props = props;
    }

    /// Replace the children. Takes effect on the next render.
    pub fn set_children<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = Child<T>>,
    {
        self.child = TriggerChild::resolve(children).into();
    }

    /// What the trigger wrapper renders.
    pub fn child(&self) -> &Rendered<T> {
        &self.child
    }

    /// The rendered child, mutably.
    pub fn child_mut(&mut self) -> &mut Rendered<T> {
        &mut self.child
    }

    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the tooltip is mounted (its portal is active).
    pub fn is_mounted(&self) -> bool {
        self.portal.is_active()
    }

    /// The portal's mount node; `None` unless mounted.
    pub fn mount_node(&self) -> Option<M> {
        self.portal.mount_node()
    }

    /// The trigger node captured on the last render.
    pub fn trigger_node(&self) -> Option<T::Node> {
        self.trigger_node
    }

    /// Placement for the current props and the last captured trigger node.
    pub fn position_style<G>(&self, geometry: &G) -> PositionStyle
    where
        G: Geometry<T::Node> + ?Sized,
    {
        compute(
            geometry.trigger_rect(self.trigger_node.as_ref()),
            geometry.document_rect(),
            self.props.position,
        )
    }

    /// The overlay view, or `None` while hidden.
    pub fn overlay<G>(&self, geometry: &G) -> Option<Overlay<C>>
    where
        G: Geometry<T::Node> + ?Sized,
    {
        self.visible.then(|| Overlay {
            side: self.props.position,
            style: self.position_style(geometry),
            content: self.props.tooltip.clone(),
        })
    }

    /// Activate the portal and perform the first render.
    pub fn mount<H, G>(&mut self, host: &mut H, geometry: &G) -> M
    where
        H: Host<Overlay<C>, Mount = M> + ?Sized,
        G: Geometry<T::Node> + ?Sized,
    {
        self.capture_node();
        let overlay = self.overlay(geometry);
        self.portal.activate(host, overlay.as_ref())
    }

    /// Re-render into the existing mount node.
    ///
    /// Returns `false` when not mounted.
    pub fn update<H, G>(&mut self, host: &mut H, geometry: &G) -> bool
    where
        H: Host<Overlay<C>, Mount = M> + ?Sized,
        G: Geometry<T::Node> + ?Sized,
    {
        if !self.portal.is_active() {
            return false;
        }
        self.capture_node();
        let overlay = self.overlay(geometry);
        self.portal.render(host, overlay.as_ref())
    }

    /// Deliver an interaction on the trigger.
    ///
    /// The child's own handler runs first. Then pointer-over shows and
    /// pointer-out hides (only for crossings of the trigger as a whole, see
    /// [`crosses_boundary`]), and click toggles, each only if enabled in
    /// [`TooltipProps::actions`].
    ///
    /// Returns whether visibility changed.
    pub fn handle<H, G, P>(
        &mut self,
        event: TriggerEvent<T::Node>,
        host: &mut H,
        geometry: &G,
        parents: &P,
    ) -> bool
    where
        H: Host<Overlay<C>, Mount = M> + ?Sized,
        G: Geometry<T::Node> + ?Sized,
        P: ParentLookup<T::Node> + ?Sized,
    {
        let actions = self.props.actions;
        let Some(trigger) = self.child.trigger_mut() else {
            tracing::trace!(?event, "no wrapped trigger, event ignored");
            return false;
        };
        let next = match event {
            TriggerEvent::PointerOver(crossing) => {
                trigger.on_pointer_over(&crossing);
                hover_crossing(actions, parents, &crossing, "pointer-over").then_some(true)
            }
            TriggerEvent::PointerOut(crossing) => {
                trigger.on_pointer_out(&crossing);
                hover_crossing(actions, parents, &crossing, "pointer-out").then_some(false)
            }
            TriggerEvent::Click => {
                trigger.on_click();
                let enabled = actions.contains(TriggerActions::CLICK);
                if !enabled {
                    tracing::trace!("click action disabled");
                }
                enabled.then_some(!self.visible)
            }
        };
        match next {
            Some(visible) => self.set_visible(visible, host, geometry),
            None => false,
        }
    }

    /// Show the overlay. Returns whether visibility changed.
    pub fn show<H, G>(&mut self, host: &mut H, geometry: &G) -> bool
    where
        H: Host<Overlay<C>, Mount = M> + ?Sized,
        G: Geometry<T::Node> + ?Sized,
    {
        self.set_visible(true, host, geometry)
    }

    /// Hide the overlay. Returns whether visibility changed.
    pub fn hide<H, G>(&mut self, host: &mut H, geometry: &G) -> bool
    where
        H: Host<Overlay<C>, Mount = M> + ?Sized,
        G: Geometry<T::Node> + ?Sized,
    {
        self.set_visible(false, host, geometry)
    }

    /// Deactivate the portal, releasing its mount node.
    ///
    /// Visibility resets to hidden so a later [`mount`](Self::mount) starts fresh.
    /// Returns `false` when not mounted.
    pub fn unmount<H>(&mut self, host: &mut H) -> bool
    where
        H: Host<Overlay<C>, Mount = M> + ?Sized,
    {
        self.visible = false;
        self.trigger_node = None;
        self.portal.deactivate(host)
    }

    fn capture_node(&mut self) {
        self.trigger_node = self.child.trigger().and_then(T::node);
    }

    fn set_visible<H, G>(&mut self, visible: bool, host: &mut H, geometry: &G) -> bool
    where
        H: Host<Overlay<C>, Mount = M> + ?Sized,
        G: Geometry<T::Node> + ?Sized,
    {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        tracing::debug!(visible, "tooltip visibility changed");
        self.update(host, geometry);
        true
    }
}

/// Whether a hover crossing should change visibility.
fn hover_crossing<K, P>(
    actions: TriggerActions,
    parents: &P,
    crossing: &Crossing<K>,
    kind: &'static str,
) -> bool
where
    K: Copy + Eq + core::fmt::Debug,
    P: ParentLookup<K> + ?Sized,
{
    if !actions.contains(TriggerActions::HOVER) {
        tracing::trace!(kind, "hover action disabled");
        return false;
    }
    if !crosses_boundary(parents, crossing) {
        tracing::trace!(kind, ?crossing, "crossing within the trigger suppressed");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Rect;
    use understory_portal::{Document, MountId};

    const ROOT: u32 = 0;
    const TRIGGER: u32 = 1;
    const LABEL: u32 = 2;
    const OUTSIDE: u32 = 9;

    struct Page {
        trigger: Rect,
        body: Rect,
    }

    impl Page {
        fn new() -> Self {
            Self {
                trigger: Rect::new(50.0, 100.0, 150.0, 130.0),
                body: Rect::new(0.0, 0.0, 1024.0, 768.0),
            }
        }
    }

    impl Geometry<u32> for Page {
        fn bounding_rect(&self, node: &u32) -> Option<Rect> {
            (*node == TRIGGER).then_some(self.trigger)
        }

        fn document_rect(&self) -> Rect {
            self.body
        }
    }

    impl ParentLookup<u32> for Page {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match *node {
                LABEL => Some(TRIGGER),
                TRIGGER | OUTSIDE => Some(ROOT),
                _ => None,
            }
        }
    }

    #[derive(Debug, Default)]
    struct Button {
        node: Option<u32>,
        log: Vec<&'static str>,
    }

    impl Button {
        fn mounted() -> Self {
            Self {
                node: Some(TRIGGER),
                log: Vec::new(),
            }
        }
    }

    impl Trigger for Button {
        type Node = u32;

        fn node(&self) -> Option<u32> {
            self.node
        }

        fn on_pointer_over(&mut self, _crossing: &Crossing<u32>) {
            self.log.push("over");
        }

        fn on_pointer_out(&mut self, _crossing: &Crossing<u32>) {
            self.log.push("out");
        }

        fn on_click(&mut self) {
            self.log.push("click");
        }
    }

    type Tip = Tooltip<Button, &'static str, MountId>;
    type Doc = Document<Overlay<&'static str>>;

    fn tip(props: TooltipProps<&'static str>) -> Tip {
        Tooltip::new(props, [Child::Element(Button::mounted())])
    }

    fn over(related: Option<u32>) -> TriggerEvent<u32> {
        TriggerEvent::PointerOver(Crossing::new(TRIGGER, related))
    }

    fn out(related: Option<u32>) -> TriggerEvent<u32> {
        TriggerEvent::PointerOut(Crossing::new(TRIGGER, related))
    }

    fn log(t: &Tip) -> &[&'static str] {
        &t.child().trigger().unwrap().log
    }

    #[test]
    fn props_default_to_right_with_hover_and_click() {
        let p = TooltipProps::new("x");
        assert_eq!(p.position, Some(Side::Right));
        assert_eq!(p.actions, TriggerActions::HOVER | TriggerActions::CLICK);
        assert_eq!(p.with_position_name("nowhere").position, None);
    }

    // mount → enter → visible with content; unrelated leave → hidden and empty.
    #[test]
    fn hover_shows_and_hides_overlay() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint"));

        let m = t.mount(&mut doc, &page);
        assert_eq!(t.mount_node(), Some(m));
        assert_eq!(t.trigger_node(), Some(TRIGGER));
        assert!(!t.is_visible());
        assert!(doc.content(m).is_none());

        assert!(t.handle(over(Some(OUTSIDE)), &mut doc, &page, &page));
        assert!(t.is_visible());
        let overlay = doc.content(m).unwrap();
        assert_eq!(overlay.content, "hint");
        assert_eq!(overlay.class_name(), "Tooltip Tooltip--right");

        assert!(t.handle(out(Some(OUTSIDE)), &mut doc, &page, &page));
        assert!(!t.is_visible());
        assert!(doc.content(m).is_none());
        assert!(doc.is_alive(m));
    }

    #[test]
    fn leaving_onto_a_descendant_keeps_overlay() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint"));
        let m = t.mount(&mut doc, &page);

        t.handle(over(None), &mut doc, &page, &page);
        let renders = doc.render_count(m);

        // Pointer moves from the trigger onto its label, then back.
        assert!(!t.handle(out(Some(LABEL)), &mut doc, &page, &page));
        assert!(!t.handle(over(Some(LABEL)), &mut doc, &page, &page));
        assert!(t.is_visible());
        assert_eq!(doc.render_count(m), renders);

        // Leaving the window entirely is a real leave.
        assert!(t.handle(out(None), &mut doc, &page, &page));
        assert!(!t.is_visible());
    }

    #[test]
    fn click_toggles() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint"));
        let m = t.mount(&mut doc, &page);

        let mut seen = Vec::new();
        for _ in 0..4 {
            t.handle(TriggerEvent::Click, &mut doc, &page, &page);
            seen.push(t.is_visible());
            assert_eq!(doc.content(m).is_some(), t.is_visible());
        }
        assert_eq!(seen, vec![true, false, true, false]);
    }

    // The child's handlers run for every event, even ones the tooltip ignores.
    #[test]
    fn child_handlers_are_additive() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint").with_actions(TriggerActions::HOVER));
        t.mount(&mut doc, &page);

        t.handle(over(Some(LABEL)), &mut doc, &page, &page);
        t.handle(TriggerEvent::Click, &mut doc, &page, &page);
        t.handle(out(Some(OUTSIDE)), &mut doc, &page, &page);

        assert_eq!(log(&t), ["over", "click", "out"]);
        assert!(!t.is_visible());
    }

    #[test]
    fn click_only_ignores_hover() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint").with_actions(TriggerActions::CLICK));
        t.mount(&mut doc, &page);

        assert!(!t.handle(over(None), &mut doc, &page, &page));
        assert!(t.handle(TriggerEvent::Click, &mut doc, &page, &page));
        assert!(!t.handle(out(None), &mut doc, &page, &page));
        assert!(t.is_visible());
    }

    // Disabled hover and an inner crossing are rejected on separate branches.
    #[test]
    fn hover_gate_separates_disabled_from_inner_crossings() {
        let page = Page::new();
        let outer = Crossing::new(TRIGGER, Some(OUTSIDE));
        let inner = Crossing::new(TRIGGER, Some(LABEL));

        assert!(hover_crossing(TriggerActions::HOVER, &page, &outer, "pointer-over"));
        assert!(!hover_crossing(TriggerActions::HOVER, &page, &inner, "pointer-out"));
        assert!(!hover_crossing(TriggerActions::CLICK, &page, &outer, "pointer-over"));
        assert!(!hover_crossing(TriggerActions::empty(), &page, &inner, "pointer-out"));
    }

    #[test]
    fn each_side_positions_from_trigger() {
        let page = Page::new();
        let mut doc = Doc::new();

        let mut t = tip(TooltipProps::new("hint").with_position(Side::Top));
        let m = t.mount(&mut doc, &page);
        t.show(&mut doc, &page);
        let style = doc.content(m).unwrap().style;
        assert_eq!(
            style.to_css(),
            vec![("top", "100px".to_string()), ("left", "100px".to_string())]
        );

        t.set_props(TooltipProps::new("hint"));
        assert!(t.update(&mut doc, &page));
        let style = doc.content(m).unwrap().style;
        assert_eq!(
            style.to_css(),
            vec![("left", "150px".to_string()), ("top", "115px".to_string())]
        );
    }

    #[test]
    fn unknown_position_renders_unpositioned() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint").with_position_name("diagonal"));
        let m = t.mount(&mut doc, &page);
        t.show(&mut doc, &page);
        let overlay = doc.content(m).unwrap();
        assert!(overlay.style.is_empty());
        assert_eq!(overlay.class_name(), "Tooltip");
    }

    // Geometry is re-read on every render.
    #[test]
    fn update_follows_trigger_geometry() {
        let mut page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint").with_position(Side::Bottom));
        let m = t.mount(&mut doc, &page);
        t.show(&mut doc, &page);
        assert_eq!(doc.content(m).unwrap().style.top(), Some(130.0));

        page.trigger = Rect::new(50.0, 300.0, 150.0, 330.0);
        t.update(&mut doc, &page);
        assert_eq!(doc.content(m).unwrap().style.top(), Some(330.0));
        assert_eq!(t.mount_node(), Some(m));
        assert_eq!(doc.created_total(), 1);
    }

    #[test]
    fn unmounted_trigger_reads_zero_geometry() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t: Tip = Tooltip::new(
            TooltipProps::new("hint"),
            [Child::Element(Button::default())],
        );
        let m = t.mount(&mut doc, &page);
        assert_eq!(t.trigger_node(), None);
        t.show(&mut doc, &page);
        assert_eq!(doc.content(m).unwrap().style.to_string(), "left: 0px; top: 0px");
    }

    #[test]
    fn mount_and_unmount_manage_one_node() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint"));
        assert_eq!(t.mount_node(), None);

        for _ in 0..5 {
            let m = t.mount(&mut doc, &page);
            assert_eq!(doc.mount_count(), 1);
            t.handle(over(None), &mut doc, &page, &page);
            assert!(doc.content(m).is_some());

            assert!(t.unmount(&mut doc));
            assert_eq!(doc.mount_count(), 0);
            assert_eq!(t.mount_node(), None);
            assert!(!t.is_visible());
        }
        assert!(!t.unmount(&mut doc));
    }

    // Visibility may change before mount; the first render reflects it.
    #[test]
    fn visibility_before_mount_is_rendered_on_mount() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t = tip(TooltipProps::new("hint"));
        assert!(t.show(&mut doc, &page));
        assert!(!t.update(&mut doc, &page));
        assert_eq!(doc.mount_count(), 0);

        let m = t.mount(&mut doc, &page);
        assert!(doc.content(m).is_some());
    }

    #[test]
    fn string_child_renders_bare_and_ignores_events() {
        let page = Page::new();
        let mut doc = Doc::new();
        let mut t: Tip = Tooltip::new(
            TooltipProps::new("hint"),
            [Child::Tag("abbr".to_string())],
        );
        assert!(matches!(t.child(), Rendered::Bare(tag) if tag == "abbr"));

        let m = t.mount(&mut doc, &page);
        assert!(!t.handle(TriggerEvent::Click, &mut doc, &page, &page));
        assert!(doc.content(m).is_none());
        assert_eq!(t.trigger_node(), None);
    }

    #[test]
    fn invalid_children_render_nothing() {
        let page = Page::new();
        let mut doc = Doc::new();

        let mut none: Tip = Tooltip::new(TooltipProps::new("hint"), []);
        assert!(none.child().is_nothing());
        none.mount(&mut doc, &page);
        assert!(!none.handle(over(None), &mut doc, &page, &page));

        let mut many: Tip = Tooltip::new(
            TooltipProps::new("hint"),
            [
                Child::Element(Button::mounted()),
                Child::Element(Button::mounted()),
            ],
        );
        assert!(many.child().is_nothing());

        // Fixing the children recovers on the next render.
        many.set_children([Child::Element(Button::mounted())]);
        many.mount(&mut doc, &page);
        assert_eq!(many.trigger_node(), Some(TRIGGER));
    }
}
