// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conposel Render: landmark views as backend-agnostic draw operations.
//!
//! Rendering is a pure projection of state to [`DrawOp`]s. The renderers
//! read a [`conposel_points::PointStore`], the hovered pair and a
//! [`conposel_view::ZoomState`], and never mutate anything, so they are safe
//! to call at any time, including before an image is loaded (a placeholder
//! is drawn).
//!
//! - [`render_full_view`] draws the image, one marker per coordinate on the
//!   side, and the magnifier overlay clipped to the image.
//! - [`render_detail_view`] draws the magnified sample rectangle, the
//!   markers inside it, and a center crosshair.
//!
//! Marker colors come from a small table: [`point_state`] classifies a pair
//! (active, hover, incomplete, normal) and [`point_style`] maps the state to
//! colors.
//!
//! Concrete renderers implement [`RenderBackend`]. [`Recorder`] is a
//! backend that only records ops, for tests and debugging.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use conposel_points::{PointStore, Side};
//! use conposel_render::{
//!     DrawOp, ImageId, ImageRef, Recorder, RenderStyle, SideView, render_full_view,
//! };
//! use conposel_view::{MagnifierMode, ZoomState};
//!
//! let size = Size::new(400.0, 300.0);
//! let mut store = PointStore::new();
//! store.begin_pair(Point::new(10.0, 10.0)).unwrap();
//! let zoom = ZoomState::new(size, MagnifierMode::FollowPointer);
//!
//! let view = SideView {
//!     side: Side::A,
//!     image: Some(ImageRef { id: ImageId(1), size }),
//!     canvas_size: size,
//!     store: &store,
//!     hover: None,
//!     zoom: &zoom,
//! };
//! let mut rec = Recorder::new();
//! render_full_view(&mut rec, &view, &RenderStyle::default());
//!
//! assert!(matches!(rec.ops()[0], DrawOp::DrawImageRect { .. }));
//! assert!(rec.ops().iter().any(|op| matches!(op, DrawOp::FillCircle { .. })));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod op;
mod style;
mod view;

pub use op::{DrawOp, ImageId, ImageRef, Recorder, RenderBackend};
pub use style::{
    ACTIVE_OUTLINE_COLOR, ACTIVE_POINT_COLOR, CROSSHAIR_COLOR, DETAIL_BACKGROUND_COLOR,
    DETAIL_PLACEHOLDER_COLOR, FULL_PLACEHOLDER_COLOR, INCOMPLETE_POINT_COLOR, LABEL_COLOR,
    POINT_COLOR, PointState, PointStyle, overlay_color, point_state, point_style,
};
pub use view::{RenderStyle, SideView, render_detail_view, render_full_view};
