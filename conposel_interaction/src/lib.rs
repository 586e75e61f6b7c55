// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conposel Interaction: the pointer state machine for landmark pairing.
//!
//! [`Interaction`] consumes pointer and key events that have already been
//! mapped into intrinsic image coordinates, resolves them against a
//! [`conposel_points::PointStore`] and the per-side
//! [`conposel_view::ZoomState`]s, and reports what happened as an
//! [`Outcome`] plus a redraw flag.
//!
//! It does not know about canvases, display scaling or rendering. Hosts
//! translate raw input into [`InteractionEvent`]s and act on the
//! [`Response`].
//!
//! ## States
//!
//! - [`Mode::Idle`]: moves update per-side hover and, for a pointer-following
//!   magnifier, its focus.
//! - [`Mode::DraggingPoint`]: moves relocate one coordinate of one pair,
//!   keeping the grab offset captured at press time (see [`drag`]). Hover is
//!   frozen until the drag ends.
//! - [`Mode::DraggingZoomWindow`]: moves pan a pan-mode magnifier rectangle.
//!
//! Pointer positions are expected in intrinsic pixels. During a drag they
//! may lie outside the image; the store clamps the dragged point.
//!
//! ## Pointer-down priority
//!
//! 1. A hit on an existing point selects its pair. Complete pairs and side-B
//!    points start a drag; the side-A anchor of a pair in progress is only
//!    selected, so it cannot be nudged mid-pairing.
//! 2. Otherwise a press inside a pan-mode rectangle on the full view starts
//!    panning and clears the selection.
//! 3. Otherwise the pairing rules apply. Side A starts a new pair, unless
//!    one is already waiting, in which case that one is selected and the
//!    press is [rejected](Outcome::Rejected) with [`Guidance`]. Side B
//!    completes the selected pair if it is waiting, else the one waiting
//!    pair, else is rejected.
//!
//! [`InteractionEvent::PointerUp`] always returns to idle and recomputes the
//! dragged side's hover from the last pointer position. Hosts should send
//! it for window-level releases and focus loss so a drag never sticks.
//! Secondary presses on a point and [`InteractionEvent::Delete`] (with a
//! selection) delete a whole pair.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use conposel_interaction::{Interaction, InteractionEvent, Outcome, Surface};
//! use conposel_points::{PairId, PointStore, Side};
//! use conposel_view::{MagnifierMode, ZoomState};
//!
//! let size = Size::new(400.0, 300.0);
//! let mut zooms = [
//!     ZoomState::new(size, MagnifierMode::FollowPointer),
//!     ZoomState::new(size, MagnifierMode::FollowPointer),
//! ];
//! let mut store = PointStore::new();
//! let mut ix = Interaction::default();
//!
//! let click = |side, x, y| InteractionEvent::PointerDown {
//!     side,
//!     surface: Surface::Full,
//!     point: Point::new(x, y),
//! };
//!
//! let r = ix.handle(click(Side::A, 10.0, 10.0), &mut store, &mut zooms);
//! assert_eq!(r.outcome, Outcome::PairStarted(PairId(0)));
//!
//! let r = ix.handle(click(Side::B, 20.0, 20.0), &mut store, &mut zooms);
//! assert_eq!(r.outcome, Outcome::PairCompleted(PairId(0)));
//! assert!(r.redraw);
//! assert!(!store.has_incomplete());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod event;
mod machine;
mod outcome;

pub use event::{InteractionEvent, Surface};
pub use machine::{Interaction, InteractionSettings, Mode};
pub use outcome::{CursorHint, Guidance, Outcome, Response};
