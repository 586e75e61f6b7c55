// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_points::CompletePair;
use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::ExportError;

/// A coordinate as it appears in the submission payload.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// Horizontal position in intrinsic pixels.
    pub x: f64,
    /// Vertical position in intrinsic pixels.
    pub y: f64,
}

impl From<Point> for Coord {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Coord> for Point {
    fn from(c: Coord) -> Self {
        Self::new(c.x, c.y)
    }
}

/// One pair in the submission payload.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmittedPair {
    /// Pair id.
    pub id: u64,
    /// Coordinate on side A.
    #[serde(rename = "coordA")]
    pub coord_a: Coord,
    /// Coordinate on side B.
    #[serde(rename = "coordB")]
    pub coord_b: Coord,
}

/// Payload for handing complete pairs to a server.
///
/// Serializes as `{"pairs":[{"id":0,"coordA":{"x":..,"y":..},"coordB":{..}}]}`.
/// Only the payload is produced here; transport is up to the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Complete pairs in creation order.
    pub pairs: Vec<SubmittedPair>,
}

impl Submission {
    /// Builds a payload from complete pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NothingToExport`] when `pairs` is empty.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ExportError>
    where
        I: IntoIterator<Item = CompletePair>,
    {
        let pairs: Vec<_> = pairs
            .into_iter()
            .map(|p| SubmittedPair {
                id: p.id.0,
                coord_a: p.a.into(),
                coord_b: p.b.into(),
            })
            .collect();
        if pairs.is_empty() {
            return Err(ExportError::NothingToExport);
        }
        Ok(Self { pairs })
    }

    /// Encodes the payload as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a payload produced by [`Submission::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of pairs in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the payload has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
