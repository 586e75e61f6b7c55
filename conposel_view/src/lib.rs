// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conposel View: coordinate mapping and magnifier geometry.
//!
//! This crate provides the headless math behind a two-image control point
//! selection tool. Every image is shown twice:
//! - A **full view**: a canvas whose intrinsic (drawing buffer) size equals
//!   the image's pixel size, possibly CSS-scaled on screen.
//! - A **detail view**: a small square canvas showing a magnified
//!   sub-rectangle of the image.
//!
//! Three coordinate spaces are involved:
//! - **Display** coordinates: pixels as reported by pointer events, relative
//!   to the canvas' on-screen box.
//! - **Intrinsic** coordinates: pixels in the image's native resolution.
//!   This is the canonical space; points and magnifier focus are stored here.
//! - **Detail** coordinates: pixels inside the detail canvas.
//!
//! The free functions [`to_intrinsic`], [`detail_to_intrinsic`] and
//! [`intrinsic_to_detail`] convert between them; [`compute_source_rect`] and
//! [`compute_visible_rect`] compute the magnified sub-rectangle; and
//! [`ZoomState`] bundles the per-image zoom factor and focus.
//!
//! It does **not** own images, points, or any rendering backend.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use conposel_view::{MagnifierMode, ZoomState, to_intrinsic};
//!
//! // A 400x300 image shown in a canvas scaled down to 200x150 on screen.
//! let image = Size::new(400.0, 300.0);
//! let click = to_intrinsic(Point::new(50.0, 25.0), Size::new(200.0, 150.0), image).unwrap();
//! assert_eq!(click, Point::new(100.0, 50.0));
//!
//! // Magnify around the click.
//! let mut zoom = ZoomState::new(image, MagnifierMode::FollowPointer);
//! zoom.set_factor(4.0);
//! zoom.set_focus(click);
//! let sample = zoom.sample_rect(150.0).unwrap();
//! assert_eq!(sample.width(), 37.5);
//! assert_eq!(sample.center(), click);
//! ```
//!
//! ## Design notes
//!
//! - Sample rectangles are **not** clamped to the image. Renderers clip only
//!   the portion they draw, so overlays near an edge keep their size.
//! - A canvas with zero display size is "not ready": [`to_intrinsic`]
//!   returns `None` and callers drop the event.
//!
//! This crate is `no_std`.

#![no_std]

mod mapper;
mod modes;
mod zoom;

pub use mapper::{
    clamp_to_image, detail_to_intrinsic, detail_to_intrinsic_unclamped, intrinsic_to_detail,
    to_intrinsic, to_intrinsic_unclamped,
};
pub use modes::MagnifierMode;
pub use zoom::{
    DEFAULT_MAX_FACTOR, DEFAULT_MIN_FACTOR, ZoomState, ZoomStateDebugInfo, compute_source_rect,
    compute_visible_rect,
};
