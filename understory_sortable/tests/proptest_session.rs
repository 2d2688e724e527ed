// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the drag session controller.
//!
//! Verifies:
//! 1. Cleanliness: start → over* → end|cancel always returns to Idle
//! 2. At most one listener notification per gesture, and only on commit
//! 3. Any committed order is a permutation of the input
//! 4. Disabled items never become active
//! 5. Arbitrary event soup never leaves the controller stuck after a cancel

use proptest::prelude::*;
use understory_sortable::engine::DragEvent;
use understory_sortable::identity::DefaultIdentity;
use understory_sortable::session::{SessionState, SortableController, Transition};
use understory_sortable::strategy::Layout;

type Controller = SortableController<u32, DefaultIdentity>;

fn controller() -> Controller {
    SortableController::new(DefaultIdentity, Layout::Vertical)
}

// ── Strategy helpers ──────────────────────────────────────────────────

/// Keys drawn from a range slightly wider than the collection so stale keys occur.
fn arb_key() -> impl Strategy<Value = String> {
    (0_u32..12).prop_map(|k| k.to_string())
}

fn arb_target() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), arb_key().prop_map(Some)]
}

fn arb_ending() -> impl Strategy<Value = DragEvent<String>> {
    prop_oneof![
        arb_target().prop_map(DragEvent::End),
        Just(DragEvent::Cancel),
    ]
}

fn arb_event() -> impl Strategy<Value = DragEvent<String>> {
    prop_oneof![
        arb_key().prop_map(DragEvent::Start),
        arb_target().prop_map(DragEvent::Over),
        arb_target().prop_map(DragEvent::End),
        Just(DragEvent::Cancel),
    ]
}

/// A well-formed gesture: one start, some overs, one end or cancel.
fn arb_gesture() -> impl Strategy<Value = Vec<DragEvent<String>>> {
    (
        arb_key(),
        prop::collection::vec(arb_target(), 0..8),
        arb_ending(),
    )
        .prop_map(|(start, overs, end)| {
            let mut events = vec![DragEvent::Start(start)];
            events.extend(overs.into_iter().map(DragEvent::Over));
            events.push(end);
            events
        })
}

fn items() -> Vec<u32> {
    (0..8).collect()
}

proptest! {
    #[test]
    fn gesture_always_ends_idle(gesture in arb_gesture()) {
        let mut c = controller();
        let items = items();
        let mut notifications = 0_usize;
        let mut commits = 0_usize;
        for event in gesture {
            let t = c.handle(event, &items, &mut |_: Vec<u32>| notifications += 1);
            if matches!(t, Transition::Committed { .. }) {
                commits += 1;
            }
        }
        prop_assert_eq!(c.session(), &SessionState::Idle);
        prop_assert!(c.session().active().is_none());
        prop_assert!(c.session().over().is_none());
        prop_assert!(notifications <= 1);
        prop_assert_eq!(notifications, commits);
    }

    #[test]
    fn committed_order_is_permutation(gesture in arb_gesture()) {
        let mut c = controller();
        let items = items();
        let mut orders = Vec::new();
        for event in gesture {
            c.handle(event, &items, &mut |o: Vec<u32>| orders.push(o));
        }
        for mut order in orders {
            prop_assert_eq!(order.len(), items.len());
            order.sort_unstable();
            prop_assert_eq!(&order, &items);
        }
    }

    #[test]
    fn disabled_never_activates(disabled in arb_key(), gesture in arb_gesture()) {
        let mut c = controller();
        c.set_disabled(disabled.clone(), true);
        let items = items();
        for event in gesture {
            c.handle(event, &items, &mut |_: Vec<u32>| {});
            prop_assert_ne!(c.session().active(), Some(&disabled));
            prop_assert_ne!(c.session().over(), Some(&disabled));
        }
    }

    #[test]
    fn cancel_recovers_from_any_sequence(events in prop::collection::vec(arb_event(), 0..32)) {
        let mut c = controller();
        let items = items();
        for event in events {
            c.handle(event, &items, &mut |_: Vec<u32>| {});
        }
        c.drag_cancel();
        prop_assert_eq!(c.session(), &SessionState::Idle);
        let restarted = matches!(c.drag_start("3".to_string()), Transition::Started { .. });
        prop_assert!(restarted);
    }
}
