// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and click a button with a tooltip.
//!
//! The button contains an icon. Moving between the button and its icon does
//! not hide the tooltip; leaving the button does. Scrolling is compensated.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_hover`

use kurbo::{Rect, Vec2};
use understory_demos::{Button, Node, Page, init_logging};
use understory_portal::Document;
use understory_tooltip::hover::Crossing;
use understory_tooltip::trigger::{Child, TriggerEvent};
use understory_tooltip::{Side, Tooltip, TooltipProps};

const BODY: Node = Node(0);
const BUTTON: Node = Node(1);
const ICON: Node = Node(2);
const OTHER: Node = Node(3);

fn main() {
    init_logging();

    let mut page = Page::new();
    page.insert(BODY, None, Rect::new(0.0, 0.0, 1280.0, 2000.0));
    page.insert(BUTTON, Some(BODY), Rect::new(50.0, 100.0, 150.0, 130.0));
    page.insert(ICON, Some(BUTTON), Rect::new(55.0, 105.0, 75.0, 125.0));
    page.insert(OTHER, Some(BODY), Rect::new(400.0, 100.0, 500.0, 130.0));

    let mut doc = Document::new();
    let props = TooltipProps::new("Save (Ctrl+S)").with_position(Side::Top);
    let button = Button {
        node: BUTTON,
        clicks: 0,
    };
    let mut tip = Tooltip::new(props, [Child::Element(button)]);
    let mount = tip.mount(&mut doc, &page);

    let events = [
        ("enter from elsewhere", TriggerEvent::PointerOver(Crossing::new(BUTTON, Some(OTHER)))),
        ("onto icon", TriggerEvent::PointerOut(Crossing::new(BUTTON, Some(ICON)))),
        ("back from icon", TriggerEvent::PointerOver(Crossing::new(BUTTON, Some(ICON)))),
        ("leave window", TriggerEvent::PointerOut(Crossing::new(BUTTON, None))),
        ("click", TriggerEvent::Click),
    ];

    println!("== Events ==");
    for (label, event) in events {
        let changed = tip.handle(event, &mut doc, &page, &page);
        let shown = doc
            .content(mount)
            .map(|o| format!("{} [{}] {}", o.class_name(), o.style, o.content));
        println!("  {label:<22} changed={changed:<5} overlay={shown:?}");
    }

    println!("== Scrolled by 40px ==");
    page.scroll_to(Vec2::new(0.0, 40.0));
    tip.update(&mut doc, &page);
    let overlay = doc.content(mount).expect("tooltip is visible after the click");
    println!("  style: {}", overlay.style);
    assert_eq!(overlay.style.to_string(), "top: 100px; left: 100px");

    let clicks = tip.child().trigger().map_or(0, |b| b.clicks);
    println!("  button saw {clicks} click(s)");

    tip.unmount(&mut doc);
    assert_eq!(doc.mount_count(), 0);
}
