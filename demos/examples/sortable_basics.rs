// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sortable basics.
//!
//! Drags one task onto another in a vertical list, printing each transition,
//! the floating overlay, and the committed order.
//!
//! Run:
//! - `cargo run -p understory_sortable_demos --example sortable_basics`
//! - `RUST_LOG=debug cargo run -p understory_sortable_demos --example sortable_basics`

use understory_sortable::engine::DragEvent;
use understory_sortable::identity::{DefaultIdentity, ItemId};
use understory_sortable::overlay::{Overlay, RenderHooks};
use understory_sortable::session::SortableController;
use understory_sortable::strategy::Layout;

#[derive(Clone, Debug, PartialEq)]
struct Task {
    id: u32,
    title: &'static str,
}

impl ItemId for Task {
    fn item_id(&self) -> String {
        self.id.to_string()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tasks = vec![
        Task { id: 1, title: "Design" },
        Task { id: 2, title: "Build" },
        Task { id: 3, title: "Test" },
        Task { id: 4, title: "Ship" },
    ];
    let mut sortable: SortableController<Task, _> =
        SortableController::new(DefaultIdentity, Layout::Vertical);

    let row = |t: &Task, i: usize| format!("{i}. {}", t.title);
    let card = |t: &Task| format!("[dragging {}]", t.title);
    let hooks: RenderHooks<'_, Task, String> =
        RenderHooks::new().with_item(&row).with_overlay(&card);

    // Drag "Build" (id 2) down onto "Ship" (id 4).
    let events = [
        DragEvent::Start("2".to_string()),
        DragEvent::Over(Some("3".to_string())),
        DragEvent::Over(Some("4".to_string())),
        DragEvent::End(Some("4".to_string())),
    ];

    let mut next = None;
    for event in events {
        let t = sortable.handle(event, &tasks, &mut |order: Vec<Task>| next = Some(order));
        println!("== {t:?}");
        match sortable.current_overlay(&tasks, &hooks) {
            Some(Overlay::Rendered(s)) => println!("  overlay: {s}"),
            Some(Overlay::Placeholder) => println!("  overlay: <placeholder>"),
            None => println!("  overlay: none"),
        }
    }
    if let Some(order) = next {
        tasks = order;
    }

    let titles: Vec<&str> = tasks.iter().map(|t| t.title).collect();
    println!("== Order\n  {titles:?}");
    assert_eq!(titles, ["Design", "Test", "Ship", "Build"]);
    assert!(!sortable.is_dragging());
}
