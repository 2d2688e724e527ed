// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer reordering in a grid.
//!
//! A toy pointer engine lays items out in a 3-column grid of Kurbo rects, hit
//! tests pointer positions against them, and reports drag events. The grid's
//! order strategy is used to check that slot geometry matches collection order.
//!
//! Run:
//! - `cargo run -p understory_sortable_demos --example sortable_grid`

use kurbo::{Point, Rect};
use understory_sortable::engine::{DragEngine, DragEvent, Participants};
use understory_sortable::identity::DefaultIdentity;
use understory_sortable::session::SortableController;
use understory_sortable::strategy::{Layout, OrderStrategy};

const COLUMNS: usize = 3;
const CELL: f64 = 50.0;

#[derive(Debug, Default)]
struct PointerEngine {
    slots: Vec<(String, Rect)>,
    strategy: Option<OrderStrategy>,
}

impl DragEngine<String> for PointerEngine {
    fn declare(&mut self, participants: &Participants<String>) {
        self.slots = participants
            .keys
            .iter()
            .enumerate()
            .map(|(i, k)| {
                let (col, row) = ((i % COLUMNS) as f64, (i / COLUMNS) as f64);
                let rect = Rect::from_origin_size((col * CELL, row * CELL), (CELL, CELL));
                (k.clone(), rect)
            })
            .collect();
        self.strategy = Some(participants.strategy);
    }
}

impl PointerEngine {
    fn hit(&self, pt: Point) -> Option<String> {
        self.slots
            .iter()
            .find(|(_, r)| r.contains(pt))
            .map(|(k, _)| k.clone())
    }

    fn is_ordered(&self) -> bool {
        let Some(strategy) = self.strategy else {
            return false;
        };
        self.slots
            .windows(2)
            .all(|w| strategy.compare(w[0].1, w[1].1).is_lt())
    }
}

fn main() {
    let mut items: Vec<u32> = (1..=7).collect();
    let mut sortable: SortableController<u32, _> =
        SortableController::new(DefaultIdentity, Layout::Grid);
    let mut engine = PointerEngine::default();
    engine.declare(&sortable.participants(&items));
    assert!(engine.is_ordered());

    // Press on item 2 (row 0, col 1), drag across, release on item 6 (row 1, col 2).
    let path = [
        Point::new(75.0, 25.0),
        Point::new(110.0, 40.0),
        Point::new(130.0, 70.0),
        Point::new(140.0, 80.0),
    ];
    let mut events = Vec::new();
    if let Some(key) = engine.hit(path[0]) {
        events.push(DragEvent::Start(key));
    }
    for &pt in &path[1..path.len() - 1] {
        events.push(DragEvent::Over(engine.hit(pt)));
    }
    events.push(DragEvent::End(engine.hit(path[path.len() - 1])));

    // Second gesture: release outside the grid; nothing moves.
    events.push(DragEvent::Start("1".to_string()));
    events.push(DragEvent::End(engine.hit(Point::new(500.0, 500.0))));

    for event in events {
        let mut next = None;
        let t = sortable.handle(event, &items, &mut |order: Vec<u32>| next = Some(order));
        println!("{t:?}");
        if let Some(order) = next {
            items = order;
            engine.declare(&sortable.participants(&items));
        }
    }

    println!("== Order\n  {items:?}");
    assert_eq!(items, [1, 3, 4, 5, 6, 2, 7]);
    assert!(engine.is_ordered());
}
