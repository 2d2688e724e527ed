// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard reordering.
//!
//! A tiny keyboard engine maps keys onto the four drag events:
//! `Space` picks up or drops, arrows move the target to the adjacent slot,
//! `Escape` cancels. Disabled items are skipped when moving.
//!
//! Run:
//! - `cargo run -p understory_sortable_demos --example sortable_keyboard`

use understory_sortable::engine::{DragEngine, DragEvent, Participants};
use understory_sortable::identity::DefaultIdentity;
use understory_sortable::session::{SortableController, Transition};
use understory_sortable::strategy::Layout;

#[derive(Copy, Clone, Debug)]
enum Key {
    Space,
    Up,
    Down,
    Escape,
}

#[derive(Debug, Default)]
struct KeyboardEngine {
    participants: Option<Participants<String>>,
    focus: usize,
    target: Option<usize>,
}

impl DragEngine<String> for KeyboardEngine {
    fn declare(&mut self, participants: &Participants<String>) {
        self.focus = self.focus.min(participants.keys.len().saturating_sub(1));
        self.participants = Some(participants.clone());
    }
}

impl KeyboardEngine {
    fn key_at(&self, index: usize) -> Option<String> {
        self.participants.as_ref()?.keys.get(index).cloned()
    }

    /// Next enabled slot from `from` in direction `step`.
    fn adjacent(&self, from: usize, step: isize) -> Option<usize> {
        let p = self.participants.as_ref()?;
        let mut i = from;
        loop {
            i = i.checked_add_signed(step)?;
            let key = p.keys.get(i)?;
            if !p.disabled.contains(key) {
                return Some(i);
            }
        }
    }

    fn press(&mut self, key: Key) -> Option<DragEvent<String>> {
        match (key, self.target) {
            (Key::Space, None) => {
                self.target = Some(self.focus);
                self.key_at(self.focus).map(DragEvent::Start)
            }
            (Key::Space, Some(t)) => {
                self.target = None;
                self.focus = t;
                Some(DragEvent::End(self.key_at(t)))
            }
            (Key::Up | Key::Down, Some(t)) => {
                let step = if matches!(key, Key::Up) { -1 } else { 1 };
                let next = self.adjacent(t, step).unwrap_or(t);
                self.target = Some(next);
                Some(DragEvent::Over(self.key_at(next)))
            }
            (Key::Up | Key::Down, None) => {
                let step = if matches!(key, Key::Up) { -1 } else { 1 };
                self.focus = self.adjacent(self.focus, step).unwrap_or(self.focus);
                None
            }
            (Key::Escape, _) => {
                self.target = None;
                Some(DragEvent::Cancel)
            }
        }
    }
}

fn main() {
    let mut items = vec!["one", "two", "three", "four", "five"];
    let mut sortable: SortableController<&str, _> =
        SortableController::new(DefaultIdentity, Layout::Vertical);
    sortable.set_disabled("three".to_string(), true);

    let mut engine = KeyboardEngine::default();
    engine.declare(&sortable.participants(&items));

    // Focus "two", pick it up, move down past the disabled "three" to "four", drop.
    // Then pick up "five", start moving, and cancel.
    let script = [
        Key::Down,
        Key::Space,
        Key::Down,
        Key::Space,
        Key::Down,
        Key::Down,
        Key::Space,
        Key::Up,
        Key::Escape,
    ];

    for key in script {
        let Some(event) = engine.press(key) else {
            println!("{key:?}: focus -> {}", engine.focus);
            continue;
        };
        let mut next = None;
        let t = sortable.handle(event, &items, &mut |order: Vec<&'static str>| next = Some(order));
        println!("{key:?}: {t:?}");
        if let Some(order) = next {
            items = order;
            engine.declare(&sortable.participants(&items));
        }
        if let Transition::Cancelled { active } = &t {
            println!("  cancelled drag of {active}");
        }
    }

    println!("== Order\n  {items:?}");
    assert_eq!(items, ["one", "three", "four", "two", "five"]);
    assert!(!sortable.is_dragging());
}
