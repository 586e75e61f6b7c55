// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conposel Points: paired landmark storage.
//!
//! This crate focuses on the _bookkeeping_ of corresponding landmarks between
//! two images, side [`Side::A`] (the fixed image) and side [`Side::B`] (the
//! moving image). It does **not** know about canvases, display scaling or
//! input events; callers map pointer input into intrinsic image coordinates
//! and then call into [`PointStore`].
//!
//! The core type is [`PointStore`], an ordered list of [`PointPair`]s plus:
//! - A monotonically increasing id counter. Ids are never reused within a
//!   store, not even after [`PointStore::clear_all`].
//! - An optional **active** pair (the selected, highlighted, deletable pair).
//! - Optional per-side image bounds every coordinate is clamped into.
//! - A **revision** counter that bumps whenever the contents change.
//!
//! ## Pairing invariants
//!
//! - A pair only exists once its side-A coordinate is set; [`PointPair::a`]
//!   is not optional.
//! - At most one pair is incomplete (missing its side-B coordinate).
//!   [`PointStore::begin_pair`] refuses to start another one.
//! - Pairs stay in creation order and their ids are strictly increasing.
//! - The active pair, if any, always refers to an existing pair. Deleting it
//!   clears the selection.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use conposel_points::{PairingError, PointStore, Side};
//!
//! let mut store = PointStore::new();
//! store.set_bounds(Side::A, Size::new(400.0, 300.0));
//! store.set_bounds(Side::B, Size::new(400.0, 300.0));
//!
//! let id = store.begin_pair(Point::new(10.0, 10.0)).unwrap();
//! assert!(store.has_incomplete());
//!
//! // A second pair cannot start until the first one is completed.
//! assert_eq!(
//!     store.begin_pair(Point::new(6.0, 6.0)),
//!     Err(PairingError::IncompletePending(id))
//! );
//!
//! store.complete_pair(id, Point::new(20.0, 20.0)).unwrap();
//! assert_eq!(store.completed_pairs().count(), 1);
//!
//! // Hit testing favors the most recently created point.
//! assert_eq!(store.find_nearest(Side::B, Point::new(21.0, 19.0), 10.0), Some(id));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod pair;
mod store;

pub use error::PairingError;
pub use pair::{CompletePair, PairId, PointPair, Side};
pub use store::PointStore;
