// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use conposel_interaction::Guidance;
use conposel_points::{PairId, Side};

/// The line of text a host shows under the images.
///
/// Derived from session state by [`crate::Session::status`]; format it with
/// `Display`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// At least one image is missing.
    LoadImages,
    /// At least one image is still loading.
    Loading,
    /// The last load of `side` failed.
    LoadFailed {
        /// Slot that failed.
        side: Side,
        /// Reason given by the image source.
        reason: String,
    },
    /// A click was rejected. Shown until the next successful change.
    Guidance(Guidance),
    /// A pair waits for its side-B point.
    PlaceOnSideB(PairId),
    /// A complete pair is selected.
    Selected(PairId),
    /// Waiting for the next pair.
    Ready {
        /// Number of complete pairs.
        complete: usize,
    },
}

impl Status {
    /// Returns `true` for messages hosts usually highlight as a problem.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::LoadFailed { .. } | Self::Guidance(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadImages => f.write_str("Load both images to begin."),
            Self::Loading => f.write_str("Loading images..."),
            Self::LoadFailed { side, reason } => {
                write!(f, "Could not load image {side}: {reason}")
            }
            Self::Guidance(guidance) => fmt::Display::fmt(guidance, f),
            Self::PlaceOnSideB(id) => write!(f, "Click on image B to place point {id}."),
            Self::Selected(id) => write!(
                f,
                "Point {id} selected. Drag to move it or press Delete to remove it."
            ),
            Self::Ready { complete: 0 } => {
                f.write_str("Click on image A to start a new point pair.")
            }
            Self::Ready { complete } => write!(
                f,
                "{complete} point pair(s) placed. Click on image A to add another."
            ),
        }
    }
}
