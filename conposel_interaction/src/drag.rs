// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grab-offset drag tracking.
//!
//! A drag remembers where the pointer went down and where the dragged object
//! (a landmark, or a magnifier center) was at that moment. Every later
//! pointer position maps to `anchor + (pointer - start)`, so the object keeps
//! its offset from the pointer instead of jumping under it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use conposel_interaction::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Grab a point at (100, 100) with the pointer 3px to its right.
//! drag.start(Point::new(103.0, 100.0), Point::new(100.0, 100.0));
//! assert!(drag.is_dragging());
//!
//! // Moving the pointer moves the point by the same amount.
//! assert_eq!(drag.total_offset(Point::new(113.0, 95.0)), Some(Vec2::new(10.0, -5.0)));
//! assert_eq!(drag.target(Point::new(113.0, 95.0)), Some(Point::new(110.0, 95.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one drag gesture in intrinsic image coordinates.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Pointer position when the drag started.
    pub start_pos: Option<Point>,
    /// Position of the dragged object when the drag started.
    pub anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag with the pointer at `pointer` grabbing an object at `anchor`.
    ///
    /// Any previous drag is replaced.
    pub fn start(&mut self, pointer: Point, anchor: Point) {
        self.start_pos = Some(pointer);
        self.anchor = Some(anchor);
    }

    /// Returns the pointer offset from the drag start.
    #[must_use]
    pub fn total_offset(&self, pointer: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pointer - start)
    }

    /// Returns where the dragged object belongs for pointer position `pointer`.
    #[must_use]
    pub fn target(&self, pointer: Point) -> Option<Point> {
        Some(self.anchor? + self.total_offset(pointer)?)
    }

    /// Ends the drag and resets all state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
