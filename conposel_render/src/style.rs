// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_points::{PairId, PointPair};
use conposel_view::MagnifierMode;
use peniko::Color;

/// Visual state of one landmark marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointState {
    /// A complete pair, neither selected nor hovered.
    Normal,
    /// The pointer is over the marker.
    Hover,
    /// The pair still waits for its side-B coordinate.
    Incomplete,
    /// The selected pair.
    Active,
}

/// Colors for one [`PointState`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointStyle {
    /// Marker fill.
    pub fill: Color,
    /// Optional ring drawn around the marker.
    pub outline: Option<Color>,
}

/// Marker fill for complete pairs.
pub const POINT_COLOR: Color = Color::from_rgba8(0, 255, 0, 204);
/// Marker fill for the selected pair.
pub const ACTIVE_POINT_COLOR: Color = Color::from_rgba8(255, 255, 0, 230);
/// Marker fill for a pair awaiting its side-B coordinate.
pub const INCOMPLETE_POINT_COLOR: Color = Color::from_rgba8(255, 165, 0, 204);
/// Ring around the selected marker.
pub const ACTIVE_OUTLINE_COLOR: Color = Color::from_rgba8(0, 0, 0, 204);
/// Pair id labels.
pub const LABEL_COLOR: Color = Color::from_rgba8(0, 0, 0, 204);
/// Full-view placeholder before an image is loaded.
pub const FULL_PLACEHOLDER_COLOR: Color = Color::from_rgba8(221, 221, 221, 255);
/// Detail-view placeholder when there is nothing to magnify.
pub const DETAIL_PLACEHOLDER_COLOR: Color = Color::from_rgba8(224, 224, 224, 255);
/// Detail-view background behind the magnified image.
pub const DETAIL_BACKGROUND_COLOR: Color = Color::WHITE;
/// Center crosshair in the detail view.
pub const CROSSHAIR_COLOR: Color = Color::from_rgba8(0, 255, 0, 153);

/// Returns the state of `pair`'s marker.
///
/// Precedence is active, then hover, then incomplete.
#[must_use]
pub fn point_state(pair: &PointPair, active: Option<PairId>, hover: Option<PairId>) -> PointState {
    if active == Some(pair.id) {
        PointState::Active
    } else if hover == Some(pair.id) {
        PointState::Hover
    } else if !pair.is_complete() {
        PointState::Incomplete
    } else {
        PointState::Normal
    }
}

/// Returns the colors used for markers in `state`.
#[must_use]
pub const fn point_style(state: PointState) -> PointStyle {
    match state {
        PointState::Normal => PointStyle {
            fill: POINT_COLOR,
            outline: None,
        },
        PointState::Hover => PointStyle {
            fill: ACTIVE_POINT_COLOR,
            outline: None,
        },
        PointState::Incomplete => PointStyle {
            fill: INCOMPLETE_POINT_COLOR,
            outline: None,
        },
        PointState::Active => PointStyle {
            fill: ACTIVE_POINT_COLOR,
            outline: Some(ACTIVE_OUTLINE_COLOR),
        },
    }
}

/// Returns the overlay color for a magnifier in `mode`.
#[must_use]
pub const fn overlay_color(mode: MagnifierMode) -> Color {
    match mode {
        MagnifierMode::FollowPointer => Color::from_rgba8(0, 255, 0, 179),
        MagnifierMode::PanRectangle => Color::from_rgba8(255, 0, 0, 179),
    }
}
