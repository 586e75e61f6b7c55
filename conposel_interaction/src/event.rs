// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_points::Side;
use kurbo::Point;

/// Which canvas of a side a pointer event came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Surface {
    /// The full view showing the whole image.
    #[default]
    Full,
    /// The magnified detail view.
    Detail,
}

/// Input consumed by [`crate::Interaction::handle`].
///
/// Pointer positions are already in intrinsic pixels of the side's image,
/// whichever [`Surface`] they came from. Mapping display coordinates is the
/// host's job (see `conposel_view::to_intrinsic` and
/// `conposel_view::detail_to_intrinsic`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    /// Primary button pressed.
    PointerDown {
        /// Image the pointer is over.
        side: Side,
        /// Canvas the pointer is over.
        surface: Surface,
        /// Pointer position in intrinsic pixels.
        point: Point,
    },
    /// Secondary (context menu) button pressed.
    SecondaryDown {
        /// Image the pointer is over.
        side: Side,
        /// Canvas the pointer is over.
        surface: Surface,
        /// Pointer position in intrinsic pixels.
        point: Point,
    },
    /// Pointer moved, with or without a button held.
    PointerMove {
        /// Image the pointer is over.
        side: Side,
        /// Canvas the pointer is over.
        surface: Surface,
        /// Pointer position in intrinsic pixels.
        point: Point,
    },
    /// Primary button released anywhere, or the window lost the pointer.
    PointerUp,
    /// Pointer left a canvas.
    PointerLeave {
        /// Image whose canvas was left.
        side: Side,
        /// Canvas that was left.
        surface: Surface,
    },
    /// Delete or Backspace pressed.
    Delete,
}
