// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use conposel_points::{PairId, Side};

/// User-facing hint emitted when a click is rejected by the pairing rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Guidance {
    /// A click on side A while this pair still waits for its side-B point.
    CompletePendingFirst(PairId),
    /// A click on side B with no pair waiting to be completed.
    StartOnSideAFirst,
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompletePendingFirst(id) => write!(
                f,
                "Please place point {id} on image B before starting a new point."
            ),
            Self::StartOnSideAFirst => {
                f.write_str("Click on image A first to start a new point pair.")
            }
        }
    }
}

/// What a handled event did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing noteworthy; the event may still have moved the magnifier.
    None,
    /// An existing pair was selected without starting a drag.
    Selected(PairId),
    /// A point drag started.
    DragStarted {
        /// Pair being dragged.
        pair: PairId,
        /// Side whose coordinate is being dragged.
        side: Side,
    },
    /// A dragged point moved.
    PointMoved {
        /// Pair being dragged.
        pair: PairId,
        /// Side whose coordinate moved.
        side: Side,
    },
    /// A point or magnifier drag ended.
    DragEnded,
    /// A magnifier rectangle drag started.
    PanStarted(Side),
    /// The magnifier rectangle moved.
    Panned(Side),
    /// A new pair was started on side A.
    PairStarted(PairId),
    /// A pair received its side-B coordinate.
    PairCompleted(PairId),
    /// The click broke the pairing rules; nothing was created.
    Rejected(Guidance),
    /// A pair was deleted.
    Deleted(PairId),
    /// The hovered point on a side changed.
    HoverChanged {
        /// Side whose hover changed.
        side: Side,
        /// Newly hovered pair, if any.
        pair: Option<PairId>,
    },
}

/// Result of [`crate::Interaction::handle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// What happened.
    pub outcome: Outcome,
    /// Whether anything visible changed (points, selection, hover or magnifier).
    pub redraw: bool,
}

/// Cursor the host should show over a canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CursorHint {
    /// Placing points.
    #[default]
    Crosshair,
    /// Over a draggable point.
    Move,
    /// Over a draggable magnifier rectangle.
    Grab,
    /// While dragging.
    Grabbing,
    /// On side B while a pair waits for completion.
    Copy,
}
