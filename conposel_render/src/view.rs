// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use conposel_points::{PairId, PointStore, Side};
use conposel_view::{ZoomState, intrinsic_to_detail};
use kurbo::{Point, Rect, Size};

use crate::op::{DrawOp, ImageRef, RenderBackend};
use crate::style::{
    CROSSHAIR_COLOR, DETAIL_BACKGROUND_COLOR, DETAIL_PLACEHOLDER_COLOR, FULL_PLACEHOLDER_COLOR,
    LABEL_COLOR, PointStyle, overlay_color, point_state, point_style,
};

/// Sizes used by the view renderers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Marker radius on the full view, in intrinsic pixels.
    pub point_radius: f64,
    /// Side of the square detail view, in pixels.
    pub detail_view_size: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            point_radius: 5.0,
            detail_view_size: 150.0,
        }
    }
}

/// Everything needed to draw one side.
#[derive(Copy, Clone, Debug)]
pub struct SideView<'a> {
    /// Which side's coordinates to draw.
    pub side: Side,
    /// The loaded image, if any.
    pub image: Option<ImageRef>,
    /// Full-view canvas size used for the placeholder while no image is loaded.
    pub canvas_size: Size,
    /// Landmarks.
    pub store: &'a PointStore,
    /// Pair hovered on this side.
    pub hover: Option<PairId>,
    /// Magnifier state of this side.
    pub zoom: &'a ZoomState,
}

/// Draws the full view of one side.
///
/// Emits, in order: the image (or a placeholder and nothing else), one
/// marker and label per coordinate on this side, and the magnifier overlay
/// clipped to the image bounds.
pub fn render_full_view<B: RenderBackend + ?Sized>(
    backend: &mut B,
    view: &SideView<'_>,
    style: &RenderStyle,
) {
    let Some(image) = view.image.filter(|img| has_area(img.size)) else {
        backend.draw(DrawOp::FillRect {
            rect: view.canvas_size.to_rect(),
            color: FULL_PLACEHOLDER_COLOR,
        });
        return;
    };
    let bounds = image.size.to_rect();
    backend.draw(DrawOp::DrawImageRect {
        image: image.id,
        src: bounds,
        dst: bounds,
    });

    let radius = style.point_radius;
    for_each_marker(view, |pair_id, coord, marker| {
        draw_marker(backend, pair_id, coord, radius, 10.0, marker);
    });

    if let Some(overlay) = view.zoom.overlay_rect(style.detail_view_size) {
        let clipped = overlay.intersect(bounds);
        if has_area(clipped.size()) {
            backend.draw(DrawOp::StrokeRect {
                rect: clipped,
                color: overlay_color(view.zoom.mode()),
                width: 1.0,
            });
        }
    }
}

/// Draws the magnified detail view of one side.
///
/// The sampled rectangle may extend past the image. Only the part inside
/// the image is drawn, into the proportional part of the view, so the
/// magnification is never distorted near edges. Without an image or a
/// non-degenerate sample rectangle a placeholder is drawn instead.
pub fn render_detail_view<B: RenderBackend + ?Sized>(
    backend: &mut B,
    view: &SideView<'_>,
    style: &RenderStyle,
) {
    let side = style.detail_view_size;
    let canvas = Size::new(side, side);
    let sample = view
        .image
        .filter(|img| has_area(img.size))
        .zip(view.zoom.sample_rect(side));
    let Some((image, source)) = sample.filter(|_| has_area(canvas)) else {
        backend.draw(DrawOp::FillRect {
            rect: canvas.to_rect(),
            color: DETAIL_PLACEHOLDER_COLOR,
        });
        return;
    };

    backend.draw(DrawOp::FillRect {
        rect: canvas.to_rect(),
        color: DETAIL_BACKGROUND_COLOR,
    });
    let src = source.intersect(image.size.to_rect());
    if has_area(src.size())
        && let (Some(p0), Some(p1)) = (
            intrinsic_to_detail(Point::new(src.x0, src.y0), canvas, source),
            intrinsic_to_detail(Point::new(src.x1, src.y1), canvas, source),
        )
    {
        backend.draw(DrawOp::DrawImageRect {
            image: image.id,
            src,
            dst: Rect::from_points(p0, p1),
        });
    }

    let radius = style.point_radius * 2.0;
    for_each_marker(view, |pair_id, coord, marker| {
        if !contains_half_open(source, coord) {
            return;
        }
        if let Some(at) = intrinsic_to_detail(coord, canvas, source) {
            draw_marker(backend, pair_id, at, radius, 14.0, marker);
        }
    });

    let c = (side / 2.0).floor();
    backend.draw(DrawOp::StrokeLine {
        from: Point::new(c, 0.0),
        to: Point::new(c, side),
        color: CROSSHAIR_COLOR,
        width: 1.0,
    });
    backend.draw(DrawOp::StrokeLine {
        from: Point::new(0.0, c),
        to: Point::new(side, c),
        color: CROSSHAIR_COLOR,
        width: 1.0,
    });
}

fn for_each_marker(
    view: &SideView<'_>,
    mut f: impl FnMut(PairId, Point, PointStyle),
) {
    let active = view.store.active();
    for pair in view.store.pairs() {
        let Some(coord) = pair.coord(view.side) else {
            continue;
        };
        f(
            pair.id,
            coord,
            point_style(point_state(pair, active, view.hover)),
        );
    }
}

fn draw_marker<B: RenderBackend + ?Sized>(
    backend: &mut B,
    pair: PairId,
    center: Point,
    radius: f64,
    label_size: f64,
    marker: PointStyle,
) {
    backend.draw(DrawOp::FillCircle {
        center,
        radius,
        color: marker.fill,
    });
    if let Some(outline) = marker.outline {
        backend.draw(DrawOp::StrokeCircle {
            center,
            radius,
            color: outline,
            width: 1.0,
        });
    }
    backend.draw(DrawOp::Label {
        pair,
        anchor: Point::new(center.x, center.y - radius - 1.0),
        size: label_size,
        color: LABEL_COLOR,
    });
}

fn contains_half_open(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x < rect.x1 && pt.y >= rect.y0 && pt.y < rect.y1
}

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
