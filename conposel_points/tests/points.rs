// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `conposel_points` crate.
//!
//! These exercise the public `PointStore` API: the pairing lifecycle, id
//! allocation, clamping, selection and hit testing.

use conposel_points::{CompletePair, PairId, PairingError, PointStore, Side};
use kurbo::{Point, Size};

fn store_400x300() -> PointStore {
    let mut store = PointStore::new();
    store.set_bounds(Side::A, Size::new(400.0, 300.0));
    store.set_bounds(Side::B, Size::new(400.0, 300.0));
    store
}

#[test]
fn empty_store_basics() {
    let store = PointStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(!store.has_incomplete());
    assert_eq!(store.active(), None);
    assert_eq!(store.next_id(), PairId(0));
    assert_eq!(store.revision(), 0);
    assert_eq!(store.completed_pairs().count(), 0);
}

#[test]
fn pairing_lifecycle_allocates_ids_and_rejects_second_anchor() {
    let mut store = store_400x300();

    let first = store.begin_pair(Point::new(10.0, 10.0)).unwrap();
    assert_eq!(first, PairId(0));
    let pair = store.get(first).unwrap();
    assert_eq!(pair.a, Point::new(10.0, 10.0));
    assert_eq!(pair.b, None);
    assert!(store.has_incomplete());

    store.complete_pair(first, Point::new(20.0, 20.0)).unwrap();
    assert_eq!(store.get(first).unwrap().b, Some(Point::new(20.0, 20.0)));
    assert!(!store.has_incomplete());

    let second = store.begin_pair(Point::new(5.0, 5.0)).unwrap();
    assert_eq!(second, PairId(1));

    let rev = store.revision();
    assert_eq!(
        store.begin_pair(Point::new(6.0, 6.0)),
        Err(PairingError::IncompletePending(second))
    );
    assert_eq!(store.len(), 2);
    assert_eq!(store.incomplete(), Some(second));
    assert_eq!(store.get(second).unwrap().a, Point::new(5.0, 5.0));
    assert_eq!(store.revision(), rev);
}

#[test]
fn complete_pair_rejects_unknown_and_complete_pairs() {
    let mut store = store_400x300();
    assert_eq!(
        store.complete_pair(PairId(7), Point::ORIGIN),
        Err(PairingError::UnknownPair(PairId(7)))
    );

    let id = store.begin_pair(Point::new(1.0, 1.0)).unwrap();
    store.complete_pair(id, Point::new(2.0, 2.0)).unwrap();
    assert_eq!(
        store.complete_pair(id, Point::new(3.0, 3.0)),
        Err(PairingError::AlreadyComplete(id))
    );
    assert_eq!(store.get(id).unwrap().b, Some(Point::new(2.0, 2.0)));
}

#[test]
fn dragging_past_the_image_clamps_to_bounds() {
    let mut store = store_400x300();
    let id = store.begin_pair(Point::new(10.0, 10.0)).unwrap();
    store.complete_pair(id, Point::new(20.0, 20.0)).unwrap();

    assert!(store.move_point(id, Side::A, Point::new(500.0, 500.0)));
    assert_eq!(store.get(id).unwrap().a, Point::new(400.0, 300.0));

    assert!(store.move_point(id, Side::B, Point::new(-3.0, 12.0)));
    assert_eq!(store.get(id).unwrap().b, Some(Point::new(0.0, 12.0)));
}

#[test]
fn clamped_coordinates_are_never_negative_zero() {
    let mut store = store_400x300();
    let id = store.begin_pair(Point::new(-0.0, 5.0)).unwrap();
    store.complete_pair(id, Point::new(20.0, -0.0)).unwrap();
    let pair = store.get(id).unwrap();
    assert!(pair.a.x.is_sign_positive());
    assert!(pair.b.unwrap().y.is_sign_positive());
}

#[test]
fn move_point_is_a_no_op_for_missing_targets() {
    let mut store = store_400x300();
    let id = store.begin_pair(Point::new(10.0, 10.0)).unwrap();
    let rev = store.revision();

    assert!(!store.move_point(PairId(42), Side::A, Point::new(1.0, 1.0)));
    assert!(!store.move_point(id, Side::B, Point::new(1.0, 1.0)));
    assert!(!store.move_point(id, Side::A, Point::new(10.0, 10.0)));
    assert_eq!(store.get(id).unwrap().b, None);
    assert_eq!(store.revision(), rev);
}

#[test]
fn clear_all_keeps_ids_monotonic() {
    let mut store = store_400x300();
    for i in 0..3 {
        let id = store.begin_pair(Point::new(f64::from(i), 0.0)).unwrap();
        store.complete_pair(id, Point::new(0.0, f64::from(i))).unwrap();
    }
    store.select(PairId(1));

    store.clear_all();
    assert!(store.is_empty());
    assert_eq!(store.active(), None);

    let id = store.begin_pair(Point::new(1.0, 1.0)).unwrap();
    assert_eq!(id, PairId(3));
}

#[test]
fn deleting_the_active_pair_clears_selection() {
    let mut store = store_400x300();
    let a = store.begin_pair(Point::new(10.0, 10.0)).unwrap();
    store.complete_pair(a, Point::new(10.0, 10.0)).unwrap();
    let b = store.begin_pair(Point::new(50.0, 50.0)).unwrap();
    store.complete_pair(b, Point::new(50.0, 50.0)).unwrap();

    assert!(store.select(b));
    assert!(store.delete_pair(a).is_some());
    assert_eq!(store.active(), Some(b));

    assert!(store.delete_pair(b).is_some());
    assert_eq!(store.active(), None);
    assert!(store.delete_pair(b).is_none());
}

#[test]
fn delete_last_pair_removes_incomplete_pairs_too() {
    let mut store = store_400x300();
    let a = store.begin_pair(Point::new(10.0, 10.0)).unwrap();
    store.complete_pair(a, Point::new(10.0, 10.0)).unwrap();
    let b = store.begin_pair(Point::new(50.0, 50.0)).unwrap();
    store.select(b);

    let removed = store.delete_last_pair().unwrap();
    assert_eq!(removed.id, b);
    assert!(!store.has_incomplete());
    assert_eq!(store.active(), None);

    assert_eq!(store.delete_last_pair().unwrap().id, a);
    assert!(store.delete_last_pair().is_none());
}

#[test]
fn find_nearest_prefers_the_newest_of_equidistant_points() {
    let mut store = store_400x300();
    let older = store.begin_pair(Point::new(10.0, 10.0)).unwrap();
    store.complete_pair(older, Point::new(10.0, 10.0)).unwrap();
    let newer = store.begin_pair(Point::new(14.0, 10.0)).unwrap();
    store.complete_pair(newer, Point::new(14.0, 10.0)).unwrap();

    // Both are exactly 2px away.
    let query = Point::new(12.0, 10.0);
    assert_eq!(store.find_nearest(Side::A, query, 10.0), Some(newer));
    assert_eq!(store.find_nearest(Side::B, query, 10.0), Some(newer));

    // Strictly closer wins regardless of age.
    assert_eq!(
        store.find_nearest(Side::A, Point::new(10.5, 10.0), 10.0),
        Some(older)
    );
}

#[test]
fn find_nearest_respects_radius_and_missing_coordinates() {
    let mut store = store_400x300();
    let id = store.begin_pair(Point::new(100.0, 100.0)).unwrap();

    assert_eq!(store.find_nearest(Side::A, Point::new(110.0, 100.0), 10.0), Some(id));
    assert_eq!(store.find_nearest(Side::A, Point::new(110.5, 100.0), 10.0), None);
    assert_eq!(store.find_nearest(Side::B, Point::new(100.0, 100.0), 10.0), None);
}

#[test]
fn completed_pairs_skip_the_incomplete_pair_and_keep_order() {
    let mut store = store_400x300();
    let a = store.begin_pair(Point::new(1.0, 2.0)).unwrap();
    store.complete_pair(a, Point::new(3.0, 4.0)).unwrap();
    let b = store.begin_pair(Point::new(5.0, 6.0)).unwrap();
    store.complete_pair(b, Point::new(7.0, 8.0)).unwrap();
    store.begin_pair(Point::new(9.0, 9.0)).unwrap();

    let complete: Vec<CompletePair> = store.completed_pairs().collect();
    assert_eq!(
        complete,
        vec![
            CompletePair {
                id: a,
                a: Point::new(1.0, 2.0),
                b: Point::new(3.0, 4.0),
            },
            CompletePair {
                id: b,
                a: Point::new(5.0, 6.0),
                b: Point::new(7.0, 8.0),
            },
        ]
    );
    assert_eq!(store.complete_count(), 2);
    assert_eq!(store.point_count(Side::A), 3);
    assert_eq!(store.point_count(Side::B), 2);
}

#[test]
fn selection_bumps_revision_only_on_change() {
    let mut store = store_400x300();
    let id = store.begin_pair(Point::new(1.0, 1.0)).unwrap();
    let rev = store.revision();

    assert!(store.select(id));
    assert_eq!(store.revision(), rev + 1);
    assert!(store.select(id));
    assert_eq!(store.revision(), rev + 1);
    assert_eq!(store.active_pair().map(|pair| pair.id), Some(id));

    assert!(!store.select(PairId(99)));
    assert_eq!(store.active(), Some(id));

    store.clear_selection();
    store.clear_selection();
    assert_eq!(store.revision(), rev + 2);
}
