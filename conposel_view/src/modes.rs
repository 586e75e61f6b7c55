// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the detail view chooses the image region it magnifies.
///
/// This mode is consulted by [`crate::ZoomState::sample_rect`] and
/// [`crate::ZoomState::overlay_contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MagnifierMode {
    /// The detail view follows the pointer.
    ///
    /// The sampled region is `detail_view_size / factor` pixels square,
    /// centered on the last hovered position. Without a hovered position the
    /// detail view shows a placeholder.
    #[default]
    FollowPointer,
    /// The detail view shows a rectangle the user drags around the full view.
    ///
    /// The rectangle is `image_size / factor` and is centered on a focus that
    /// always exists, starting at the image center.
    PanRectangle,
}
