// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::mapper::clamp_to_image;
use crate::modes::MagnifierMode;

/// Default lower bound for a magnifier zoom factor.
pub const DEFAULT_MIN_FACTOR: f64 = 1.0;

/// Default upper bound for a magnifier zoom factor.
pub const DEFAULT_MAX_FACTOR: f64 = 10.0;

/// Computes the image region sampled by a pointer-following detail view.
///
/// The region is `detail_view_size / zoom` pixels square (at least one pixel
/// per axis), centered on `focus`. It is deliberately not clamped to the
/// image; renderers clip the part they draw.
///
/// Returns `None` for a degenerate region: a non-positive or non-finite zoom,
/// a non-finite focus, or an image without area.
#[must_use]
pub fn compute_source_rect(
    focus: Point,
    zoom: f64,
    detail_view_size: f64,
    image_size: Size,
) -> Option<Rect> {
    if !(zoom > 0.0 && zoom.is_finite()) || !focus.is_finite() {
        return None;
    }
    if !(image_size.width > 0.0 && image_size.height > 0.0) {
        return None;
    }
    let side = (detail_view_size / zoom).max(1.0);
    if !(side > 0.0 && side.is_finite()) {
        return None;
    }
    Some(Rect::from_center_size(focus, Size::new(side, side)))
}

/// Computes the visible rectangle of a pan-style magnifier on the full view.
///
/// `center` is relative (`0..=1` per axis). The rectangle is
/// `full_view_size / zoom` and centered on `center * full_view_size`. Like
/// [`compute_source_rect`] it is not clamped. A non-positive zoom is treated
/// as `1.0`.
#[must_use]
pub fn compute_visible_rect(center: Point, zoom: f64, full_view_size: Size) -> Rect {
    let zoom = if zoom > 0.0 && zoom.is_finite() {
        zoom
    } else {
        1.0
    };
    let size = Size::new(full_view_size.width / zoom, full_view_size.height / zoom);
    let center = Point::new(
        center.x * full_view_size.width,
        center.y * full_view_size.height,
    );
    Rect::from_center_size(center, size)
}

/// Per-image magnifier state: zoom factor, focus, and mode.
///
/// The focus is kept in intrinsic pixels. In
/// [`MagnifierMode::PanRectangle`] a focus always exists; in
/// [`MagnifierMode::FollowPointer`] it is `None` until the pointer hovers the
/// image and again after it leaves.
#[derive(Clone, Debug)]
pub struct ZoomState {
    image_size: Size,
    mode: MagnifierMode,
    factor: f64,
    min_factor: f64,
    max_factor: f64,
    focus: Option<Point>,
}

impl ZoomState {
    /// Creates magnifier state for an image of `image_size`.
    ///
    /// - Initial factor is `1.0`.
    /// - Factor limits are [`DEFAULT_MIN_FACTOR`]..=[`DEFAULT_MAX_FACTOR`].
    /// - Pan mode starts focused on the image center.
    #[must_use]
    pub fn new(image_size: Size, mode: MagnifierMode) -> Self {
        let mut state = Self {
            image_size,
            mode,
            factor: 1.0,
            min_factor: DEFAULT_MIN_FACTOR,
            max_factor: DEFAULT_MAX_FACTOR,
            focus: None,
        };
        state.ensure_pan_focus();
        state
    }

    /// Returns the intrinsic size of the magnified image.
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Replaces the magnified image, e.g. after a reload.
    ///
    /// A pan rectangle is re-centered on the new image; a pointer-following
    /// focus is dropped until the next hover.
    pub fn set_image_size(&mut self, image_size: Size) {
        if self.image_size == image_size {
            return;
        }
        self.image_size = image_size;
        self.focus = None;
        self.ensure_pan_focus();
    }

    /// Returns the current magnifier mode.
    #[must_use]
    pub fn mode(&self) -> MagnifierMode {
        self.mode
    }

    /// Switches the magnifier mode.
    pub fn set_mode(&mut self, mode: MagnifierMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if mode == MagnifierMode::FollowPointer {
            self.focus = None;
        }
        self.ensure_pan_focus();
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The range is normalized so that `min <= max`, and the minimum is never
    /// below `1.0`. The current factor is clamped into the new range.
    pub fn set_factor_limits(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_factor = min.max(1.0);
        self.max_factor = max.max(self.min_factor);
        self.factor = self.factor.clamp(self.min_factor, self.max_factor);
    }

    /// Returns the configured `(min, max)` factor limits.
    #[must_use]
    pub fn factor_limits(&self) -> (f64, f64) {
        (self.min_factor, self.max_factor)
    }

    /// Sets the zoom factor, clamping it into the configured range.
    ///
    /// Returns `true` if the factor changed. NaN is ignored.
    pub fn set_factor(&mut self, factor: f64) -> bool {
        if factor.is_nan() {
            return false;
        }
        let clamped = factor.clamp(self.min_factor, self.max_factor);
        if (self.factor - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.factor = clamped;
        true
    }

    /// Returns the focus in intrinsic pixels, if any.
    #[must_use]
    pub fn focus(&self) -> Option<Point> {
        self.focus
    }

    /// Moves the focus to `pt`, clamped into the image.
    ///
    /// Returns `true` if the focus changed.
    pub fn set_focus(&mut self, pt: Point) -> bool {
        let pt = clamp_to_image(pt, self.image_size);
        if self.focus == Some(pt) {
            return false;
        }
        self.focus = Some(pt);
        true
    }

    /// Clears the focus of a pointer-following magnifier.
    ///
    /// A pan rectangle keeps its focus; this is a no-op in that mode.
    pub fn clear_focus(&mut self) {
        if self.mode == MagnifierMode::FollowPointer {
            self.focus = None;
        }
    }

    /// Returns the focus as a fraction of the image size.
    #[must_use]
    pub fn relative_center(&self) -> Option<Point> {
        let focus = self.focus?;
        if !(self.image_size.width > 0.0 && self.image_size.height > 0.0) {
            return None;
        }
        Some(Point::new(
            focus.x / self.image_size.width,
            focus.y / self.image_size.height,
        ))
    }

    /// Moves the focus to a relative position, clamped into `0..=1` per axis.
    ///
    /// Returns `true` if the focus changed.
    pub fn set_relative_center(&mut self, rel: Point) -> bool {
        let rel = clamp_to_image(rel, Size::new(1.0, 1.0));
        self.set_focus(Point::new(
            rel.x * self.image_size.width,
            rel.y * self.image_size.height,
        ))
    }

    /// Returns the image rectangle the detail view should sample.
    ///
    /// `detail_view_size` is the side of the square detail canvas. Returns
    /// `None` when there is no focus or the region is degenerate.
    #[must_use]
    pub fn sample_rect(&self, detail_view_size: f64) -> Option<Rect> {
        match self.mode {
            MagnifierMode::FollowPointer => compute_source_rect(
                self.focus?,
                self.factor,
                detail_view_size,
                self.image_size,
            ),
            MagnifierMode::PanRectangle => {
                let rect =
                    compute_visible_rect(self.relative_center()?, self.factor, self.image_size);
                (rect.width() > 0.0 && rect.height() > 0.0).then_some(rect)
            }
        }
    }

    /// Returns the unclamped overlay rectangle drawn on the full view.
    ///
    /// This is the same region as [`ZoomState::sample_rect`].
    #[must_use]
    pub fn overlay_rect(&self, detail_view_size: f64) -> Option<Rect> {
        self.sample_rect(detail_view_size)
    }

    /// Returns `true` if `pt` lies inside a draggable pan rectangle.
    ///
    /// Always `false` in [`MagnifierMode::FollowPointer`], whose overlay
    /// just tracks the pointer. Edges are inclusive.
    #[must_use]
    pub fn overlay_contains(&self, pt: Point, detail_view_size: f64) -> bool {
        if self.mode != MagnifierMode::PanRectangle {
            return false;
        }
        self.overlay_rect(detail_view_size).is_some_and(|r| {
            pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
        })
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, detail_view_size: f64) -> ZoomStateDebugInfo {
        ZoomStateDebugInfo {
            image_size: self.image_size,
            mode: self.mode,
            factor: self.factor,
            min_factor: self.min_factor,
            max_factor: self.max_factor,
            focus: self.focus,
            sample_rect: self.sample_rect(detail_view_size),
        }
    }

    fn ensure_pan_focus(&mut self) {
        if self.mode == MagnifierMode::PanRectangle && self.focus.is_none() {
            self.focus = Some(Point::new(
                self.image_size.width / 2.0,
                self.image_size.height / 2.0,
            ));
        }
    }
}

/// Debug snapshot of a [`ZoomState`].
#[derive(Clone, Copy, Debug)]
pub struct ZoomStateDebugInfo {
    /// Intrinsic image size.
    pub image_size: Size,
    /// Magnifier mode.
    pub mode: MagnifierMode,
    /// Current zoom factor.
    pub factor: f64,
    /// Minimum zoom factor.
    pub min_factor: f64,
    /// Maximum zoom factor.
    pub max_factor: f64,
    /// Focus in intrinsic pixels.
    pub focus: Option<Point>,
    /// Region sampled by the detail view.
    pub sample_rect: Option<Rect>,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{MagnifierMode, ZoomState, compute_source_rect, compute_visible_rect};

    #[test]
    fn source_rect_is_centered_and_unclamped() {
        let image = Size::new(400.0, 300.0);
        let r = compute_source_rect(Point::new(2.0, 3.0), 5.0, 150.0, image).unwrap();
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 30.0);
        assert_eq!(r.center(), Point::new(2.0, 3.0));
        // Extends past the top-left edge; no clamping at computation time.
        assert_eq!(r.x0, -13.0);
        assert_eq!(r.y0, -12.0);
    }

    #[test]
    fn source_rect_has_minimum_one_pixel() {
        let image = Size::new(400.0, 300.0);
        let r = compute_source_rect(Point::new(10.0, 10.0), 1000.0, 150.0, image).unwrap();
        assert_eq!(r.size(), Size::new(1.0, 1.0));
    }

    #[test]
    fn source_rect_degenerate_inputs() {
        let image = Size::new(400.0, 300.0);
        assert!(compute_source_rect(Point::ORIGIN, 0.0, 150.0, image).is_none());
        assert!(compute_source_rect(Point::ORIGIN, f64::NAN, 150.0, image).is_none());
        assert!(compute_source_rect(Point::ORIGIN, 2.0, 150.0, Size::ZERO).is_none());
    }

    #[test]
    fn visible_rect_scales_full_view() {
        let r = compute_visible_rect(Point::new(0.5, 0.5), 2.0, Size::new(400.0, 300.0));
        assert_eq!(r, Rect::new(100.0, 75.0, 300.0, 225.0));

        let edge = compute_visible_rect(Point::new(0.0, 1.0), 4.0, Size::new(400.0, 300.0));
        assert_eq!(edge, Rect::new(-50.0, 262.5, 50.0, 337.5));
    }

    #[test]
    fn factor_is_clamped_into_limits() {
        let mut z = ZoomState::new(Size::new(100.0, 100.0), MagnifierMode::FollowPointer);
        assert!(z.set_factor(4.0));
        assert!(!z.set_factor(4.0));
        z.set_factor(0.25);
        assert_eq!(z.factor(), 1.0);
        z.set_factor(50.0);
        assert_eq!(z.factor(), 10.0);
        assert!(!z.set_factor(f64::NAN));

        z.set_factor_limits(8.0, 2.0);
        assert_eq!(z.factor_limits(), (2.0, 8.0));
        assert_eq!(z.factor(), 8.0);

        z.set_factor_limits(0.1, 0.5);
        assert_eq!(z.factor_limits(), (1.0, 1.0));
    }

    #[test]
    fn follow_mode_focus_comes_and_goes() {
        let mut z = ZoomState::new(Size::new(100.0, 80.0), MagnifierMode::FollowPointer);
        assert_eq!(z.focus(), None);
        assert!(z.sample_rect(150.0).is_none());

        assert!(z.set_focus(Point::new(500.0, -4.0)));
        assert_eq!(z.focus(), Some(Point::new(100.0, 0.0)));
        assert!(z.sample_rect(150.0).is_some());

        z.clear_focus();
        assert_eq!(z.focus(), None);
    }

    #[test]
    fn pan_mode_keeps_focus_and_hit_tests_overlay() {
        let mut z = ZoomState::new(Size::new(400.0, 300.0), MagnifierMode::PanRectangle);
        z.set_factor(2.0);
        assert_eq!(z.relative_center(), Some(Point::new(0.5, 0.5)));

        z.clear_focus();
        assert!(z.focus().is_some());

        let overlay = z.overlay_rect(150.0).unwrap();
        assert_eq!(overlay, Rect::new(100.0, 75.0, 300.0, 225.0));
        assert!(z.overlay_contains(Point::new(100.0, 75.0), 150.0));
        assert!(z.overlay_contains(Point::new(300.0, 225.0), 150.0));
        assert!(!z.overlay_contains(Point::new(99.0, 75.0), 150.0));

        assert!(z.set_relative_center(Point::new(1.5, -0.5)));
        assert_eq!(z.focus(), Some(Point::new(400.0, 0.0)));
    }

    #[test]
    fn follow_mode_overlay_is_never_draggable() {
        let mut z = ZoomState::new(Size::new(400.0, 300.0), MagnifierMode::FollowPointer);
        z.set_focus(Point::new(200.0, 150.0));
        assert!(!z.overlay_contains(Point::new(200.0, 150.0), 150.0));
    }

    #[test]
    fn switching_modes_manages_focus() {
        let mut z = ZoomState::new(Size::new(10.0, 20.0), MagnifierMode::FollowPointer);
        z.set_mode(MagnifierMode::PanRectangle);
        assert_eq!(z.focus(), Some(Point::new(5.0, 10.0)));
        z.set_mode(MagnifierMode::FollowPointer);
        assert_eq!(z.focus(), None);

        let info = z.debug_info(150.0);
        assert_eq!(info.mode, MagnifierMode::FollowPointer);
        assert!(info.sample_rect.is_none());
    }

    #[test]
    fn replacing_the_image_resets_focus() {
        let mut pan = ZoomState::new(Size::new(100.0, 100.0), MagnifierMode::PanRectangle);
        pan.set_focus(Point::new(90.0, 10.0));
        pan.set_image_size(Size::new(40.0, 20.0));
        assert_eq!(pan.focus(), Some(Point::new(20.0, 10.0)));

        let mut follow = ZoomState::new(Size::ZERO, MagnifierMode::FollowPointer);
        follow.set_factor(3.0);
        follow.set_focus(Point::new(1.0, 1.0));
        follow.set_image_size(Size::new(40.0, 20.0));
        assert_eq!(follow.focus(), None);
        assert_eq!(follow.factor(), 3.0);
    }
}
