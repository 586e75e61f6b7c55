// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use conposel_points::PairId;
use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Identifier for a decoded image owned by the host.
///
/// The renderer never touches pixels; it only refers to images by handle.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// A host image handle together with its intrinsic size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageRef {
    /// Host handle.
    pub id: ImageId,
    /// Intrinsic size in pixels.
    pub size: Size,
}

/// Draw operations emitted by the view renderers.
///
/// Coordinates are canvas pixels: intrinsic image pixels for the full view,
/// detail-view pixels for the magnifier.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Stroke an axis-aligned rectangle.
    StrokeRect {
        /// Rectangle to outline.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Line width in canvas pixels.
        width: f64,
    },
    /// Draw the `src` part of an image into `dst`, without smoothing.
    DrawImageRect {
        /// Image to sample.
        image: ImageId,
        /// Source rectangle in image pixels, within the image.
        src: Rect,
        /// Destination rectangle in canvas pixels.
        dst: Rect,
    },
    /// Fill a circle.
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// Stroke a circle outline.
    StrokeCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Stroke color.
        color: Color,
        /// Line width in canvas pixels.
        width: f64,
    },
    /// Stroke a straight line.
    StrokeLine {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Line width in canvas pixels.
        width: f64,
    },
    /// Draw a pair id as text, bottom-centered on `anchor`.
    Label {
        /// Pair whose id is drawn.
        pair: PairId,
        /// Bottom-center of the text.
        anchor: Point,
        /// Font size in canvas pixels.
        size: f64,
        /// Text color.
        color: Color,
    },
}

/// Sink for [`DrawOp`]s.
///
/// Implement this on top of a canvas, a GPU scene, or anything else that
/// can fill shapes and blit image sub-rectangles.
pub trait RenderBackend {
    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

/// Backend that records draw operations instead of rasterizing them.
///
/// Intended for tests and debugging that want to assert on emitted ops.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded operations in order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Takes the recorded operations, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawOp> {
        core::mem::take(&mut self.ops)
    }

    /// Clears the recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl RenderBackend for Recorder {
    fn draw(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}
