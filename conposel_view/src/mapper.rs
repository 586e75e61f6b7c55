// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between display, intrinsic, and detail coordinates.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect, Size};

/// Clamps `pt` into `[0, width] x [0, height]` of an image of `size`.
///
/// Non-finite coordinates collapse to `0`.
#[must_use]
pub fn clamp_to_image(pt: Point, size: Size) -> Point {
    Point::new(clamp_axis(pt.x, size.width), clamp_axis(pt.y, size.height))
}

fn clamp_axis(v: f64, max: f64) -> f64 {
    let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
    // `<=` also folds `-0.0` into `+0.0`.
    if v.is_nan() || v <= 0.0 { 0.0 } else { v.min(max) }
}

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()
}

/// Converts a display-space point on a full-view canvas into intrinsic pixels.
///
/// Each axis is scaled independently by `intrinsic_size / display_size`, so
/// non-uniform CSS scaling is supported. The result is rounded to the
/// nearest integer pixel and clamped into the image.
///
/// Returns `None` when either size has no area (the canvas is not laid out
/// yet) or the input is not finite; callers should ignore such events.
#[must_use]
pub fn to_intrinsic(display: Point, display_size: Size, intrinsic_size: Size) -> Option<Point> {
    to_intrinsic_unclamped(display, display_size, intrinsic_size)
        .map(|p| clamp_to_image(p, intrinsic_size))
}

/// Like [`to_intrinsic`], but without clamping into the image.
///
/// Drags use this so a grab offset is applied to the real pointer position;
/// the dragged point is clamped afterwards.
#[must_use]
pub fn to_intrinsic_unclamped(
    display: Point,
    display_size: Size,
    intrinsic_size: Size,
) -> Option<Point> {
    if !has_area(display_size) || !has_area(intrinsic_size) || !display.is_finite() {
        return None;
    }
    let sx = intrinsic_size.width / display_size.width;
    let sy = intrinsic_size.height / display_size.height;
    Some(Point::new(
        (display.x * sx).round(),
        (display.y * sy).round(),
    ))
}

/// Maps a point inside the detail view back into intrinsic pixels.
///
/// `source` is the (unclamped) image rectangle the detail view samples, as
/// returned by [`crate::ZoomState::sample_rect`]. The mapping is a linear
/// interpolation per axis, clamped into an image of `image_size`.
///
/// Returns `None` when the detail view or the source rectangle has no area.
#[must_use]
pub fn detail_to_intrinsic(
    detail: Point,
    detail_size: Size,
    source: Rect,
    image_size: Size,
) -> Option<Point> {
    detail_to_intrinsic_unclamped(detail, detail_size, source)
        .map(|p| clamp_to_image(p, image_size))
}

/// Like [`detail_to_intrinsic`], but without clamping into the image.
#[must_use]
pub fn detail_to_intrinsic_unclamped(
    detail: Point,
    detail_size: Size,
    source: Rect,
) -> Option<Point> {
    if !has_area(detail_size) || !has_area(source.size()) || !detail.is_finite() {
        return None;
    }
    let x = source.x0 + (detail.x / detail_size.width) * source.width();
    let y = source.y0 + (detail.y / detail_size.height) * source.height();
    Some(Point::new(x, y))
}

/// Projects an intrinsic point into detail-view coordinates.
///
/// This is the inverse of [`detail_to_intrinsic`] without clamping; points
/// outside `source` project outside the detail view.
#[must_use]
pub fn intrinsic_to_detail(pt: Point, detail_size: Size, source: Rect) -> Option<Point> {
    if !has_area(detail_size) || !has_area(source.size()) {
        return None;
    }
    let x = (pt.x - source.x0) / source.width() * detail_size.width;
    let y = (pt.y - source.y0) / source.height() * detail_size.height;
    Some(Point::new(x, y))
}
