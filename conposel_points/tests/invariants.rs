// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for `PointStore`.
//!
//! Arbitrary operation sequences must never break:
//!
//! 1. At most one pair is incomplete.
//! 2. Pair ids are strictly increasing in list order.
//! 3. Every coordinate lies within its side's bounds.
//! 4. The active pair, if any, exists.
//! 5. Ids are never reused, even across `clear_all`.

use conposel_points::{PairId, PointStore, Side};
use kurbo::{Point, Size};
use proptest::prelude::*;

const BOUNDS: Size = Size::new(400.0, 300.0);

#[derive(Clone, Debug)]
enum Op {
    Begin(Point),
    CompleteIncomplete(Point),
    Move(u64, bool, Point),
    Delete(u64),
    DeleteLast,
    ClearAll,
    Select(u64),
    SelectNearest(bool, Point),
}

fn point() -> impl Strategy<Value = Point> {
    (-100.0f64..600.0, -100.0f64..500.0).prop_map(|(x, y)| Point::new(x, y))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => point().prop_map(Op::Begin),
        3 => point().prop_map(Op::CompleteIncomplete),
        2 => (0u64..12, any::<bool>(), point()).prop_map(|(id, a, p)| Op::Move(id, a, p)),
        1 => (0u64..12).prop_map(Op::Delete),
        1 => Just(Op::DeleteLast),
        1 => Just(Op::ClearAll),
        1 => (0u64..12).prop_map(Op::Select),
        2 => (any::<bool>(), point()).prop_map(|(a, p)| Op::SelectNearest(a, p)),
    ]
}

fn side(a: bool) -> Side {
    if a { Side::A } else { Side::B }
}

fn apply(store: &mut PointStore, op: &Op) {
    match *op {
        Op::Begin(p) => {
            let _ = store.begin_pair(p);
        }
        Op::CompleteIncomplete(p) => {
            if let Some(id) = store.incomplete() {
                let _ = store.complete_pair(id, p);
            }
        }
        Op::Move(id, a, p) => {
            store.move_point(PairId(id), side(a), p);
        }
        Op::Delete(id) => {
            store.delete_pair(PairId(id));
        }
        Op::DeleteLast => {
            store.delete_last_pair();
        }
        Op::ClearAll => store.clear_all(),
        Op::Select(id) => {
            store.select(PairId(id));
        }
        Op::SelectNearest(a, p) => {
            if let Some(id) = store.find_nearest(side(a), p, 10.0) {
                store.select(id);
            }
        }
    }
}

fn in_bounds(p: Point) -> bool {
    (0.0..=BOUNDS.width).contains(&p.x) && (0.0..=BOUNDS.height).contains(&p.y)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_after_every_operation(ops in proptest::collection::vec(op(), 1..60)) {
        let mut store = PointStore::new();
        store.set_bounds(Side::A, BOUNDS);
        store.set_bounds(Side::B, BOUNDS);
        let mut highest_issued: Option<PairId> = None;

        for op in &ops {
            let next_before = store.next_id();
            apply(&mut store, op);

            let incomplete = store.pairs().iter().filter(|p| !p.is_complete()).count();
            prop_assert!(incomplete <= 1, "{} incomplete pairs after {:?}", incomplete, op);

            for window in store.pairs().windows(2) {
                prop_assert!(window[0].id < window[1].id);
            }

            for pair in store.pairs() {
                prop_assert!(in_bounds(pair.a), "A out of bounds: {:?}", pair.a);
                if let Some(b) = pair.b {
                    prop_assert!(in_bounds(b), "B out of bounds: {:?}", b);
                }
            }

            if let Some(active) = store.active() {
                prop_assert!(store.get(active).is_some());
            }

            prop_assert!(store.next_id() >= next_before);
            if store.next_id() > next_before {
                let created = next_before;
                if let Some(prev) = highest_issued {
                    prop_assert!(created > prev, "id {} reused", created);
                }
                highest_issued = Some(created);
            }
        }
    }

    #[test]
    fn find_nearest_hit_is_within_radius_and_closest(
        points in proptest::collection::vec(point(), 1..20),
        query in point(),
        radius in 0.0f64..50.0,
    ) {
        let mut store = PointStore::new();
        store.set_bounds(Side::A, BOUNDS);
        for p in &points {
            if let Some(id) = store.incomplete() {
                store.complete_pair(id, *p).unwrap();
            }
            store.begin_pair(*p).unwrap();
        }

        match store.find_nearest(Side::A, query, radius) {
            Some(id) => {
                let hit = store.get(id).unwrap().a.distance(query);
                prop_assert!(hit <= radius);
                for pair in store.pairs() {
                    let d = pair.a.distance(query);
                    prop_assert!(d >= hit);
                    if d == hit {
                        prop_assert!(pair.id <= id, "older pair won a tie");
                    }
                }
            }
            None => {
                for pair in store.pairs() {
                    prop_assert!(pair.a.distance(query) > radius);
                }
            }
        }
    }
}
