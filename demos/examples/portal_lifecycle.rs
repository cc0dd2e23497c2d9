// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portal lifecycle against the in-memory document.
//!
//! Activates and deactivates a portal a few times and shows that each cycle
//! creates and releases exactly one mount node, reusing the slot with a new
//! generation.
//!
//! Run:
//! - `cargo run -p understory_demos --example portal_lifecycle`

use understory_demos::init_logging;
use understory_portal::{Document, Portal};

fn main() {
    init_logging();

    let mut doc: Document<String> = Document::new();
    let mut portal = Portal::new();

    for round in 0..3 {
        let view = format!("round {round}");
        let m = portal.activate(&mut doc, Some(&view));
        portal.render(&mut doc, None);
        portal.render(&mut doc, Some(&view));
        println!(
            "round {round}: mount={m:?} live={} renders={:?} content={:?}",
            doc.mount_count(),
            doc.render_count(m),
            doc.content(m),
        );
        portal.deactivate(&mut doc);
        assert_eq!(doc.mount_count(), 0);
    }

    println!("created {} mount node(s) in total", doc.created_total());
}
