// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// Which of the two images a coordinate belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// The first ("fixed") image. Pairs start here.
    A,
    /// The second ("moving") image. Pairs are completed here.
    B,
}

impl Side {
    /// Both sides, in order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Returns `0` for [`Side::A`] and `1` for [`Side::B`].
    ///
    /// Handy for indexing per-side arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::B => "B",
        })
    }
}

/// Identifier for a point pair.
///
/// Assigned when the pair is created and stable for its lifetime. Ids are
/// strictly increasing in creation order and never reused within a
/// [`crate::PointStore`].
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(pub u64);

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Two coordinates, one per image, marking the same physical landmark.
///
/// Coordinates are intrinsic pixels of their respective image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointPair {
    /// Identity of the pair.
    pub id: PairId,
    /// Coordinate on side A. Always present.
    pub a: Point,
    /// Coordinate on side B, once the pair is completed.
    pub b: Option<Point>,
}

impl PointPair {
    /// Returns the coordinate on `side`, if set.
    #[inline]
    #[must_use]
    pub fn coord(&self, side: Side) -> Option<Point> {
        match side {
            Side::A => Some(self.a),
            Side::B => self.b,
        }
    }

    /// Returns `true` if both coordinates are set.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.b.is_some()
    }

    /// Returns the pair as a [`CompletePair`] if both coordinates are set.
    #[must_use]
    pub fn complete(&self) -> Option<CompletePair> {
        Some(CompletePair {
            id: self.id,
            a: self.a,
            b: self.b?,
        })
    }
}

/// A pair with both coordinates set, as handed to exporters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompletePair {
    /// Identity of the pair.
    pub id: PairId,
    /// Coordinate on side A.
    pub a: Point,
    /// Coordinate on side B.
    pub b: Point,
}
