// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_points::CompletePair;
use serde::{Deserialize, Serialize};

use crate::ExportError;

/// Column layout and number formatting of the CSV export.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvFormat {
    /// `id,Ax,Ay,Bx,By`, coordinates with three decimals.
    #[default]
    Indexed,
    /// `FixedX,FixedY,MovingX,MovingY`, coordinates rounded to integers.
    FixedMoving,
}

impl CsvFormat {
    /// Returns the header row, without the trailing newline.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Indexed => "id,Ax,Ay,Bx,By",
            Self::FixedMoving => "FixedX,FixedY,MovingX,MovingY",
        }
    }

    fn row(self, pair: &CompletePair) -> String {
        let CompletePair { id, a, b } = *pair;
        match self {
            Self::Indexed => format!("{id},{:.3},{:.3},{:.3},{:.3}\n", a.x, a.y, b.x, b.y),
            Self::FixedMoving => format!(
                "{},{},{},{}\n",
                round(a.x),
                round(a.y),
                round(b.x),
                round(b.y)
            ),
        }
    }
}

/// Formats complete pairs as CSV text.
///
/// Every row, the header included, ends with `\n`. Rows follow the input
/// order. Incomplete pairs never reach this function: callers pass
/// [`conposel_points::PointStore::completed_pairs`].
///
/// # Errors
///
/// Returns [`ExportError::NothingToExport`] when `pairs` is empty.
pub fn to_csv<I>(pairs: I, format: CsvFormat) -> Result<String, ExportError>
where
    I: IntoIterator<Item = CompletePair>,
{
    let mut out = String::from(format.header());
    out.push('\n');
    let mut rows = 0_usize;
    for pair in pairs {
        out.push_str(&format.row(&pair));
        rows += 1;
    }
    if rows == 0 {
        return Err(ExportError::NothingToExport);
    }
    Ok(out)
}

// Half away from zero, and never `-0`.
fn round(v: f64) -> f64 {
    let r = v.round();
    if r == 0.0 { 0.0 } else { r }
}
