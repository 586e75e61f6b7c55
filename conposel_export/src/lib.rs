// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conposel Export: landmark pairs as CSV text or a JSON submission payload.
//!
//! Both exporters take complete pairs only, usually straight from
//! [`conposel_points::PointStore::completed_pairs`], and refuse to produce
//! an empty result: with zero pairs they return
//! [`ExportError::NothingToExport`].
//!
//! ## CSV
//!
//! [`to_csv`] writes UTF-8, comma separated, newline terminated rows in one
//! of two layouts picked by [`CsvFormat`]:
//!
//! - [`CsvFormat::Indexed`] (default): `id,Ax,Ay,Bx,By`, three decimals.
//! - [`CsvFormat::FixedMoving`]: `FixedX,FixedY,MovingX,MovingY`, integers.
//!
//! ```rust
//! use kurbo::Point;
//! use conposel_export::{CsvFormat, to_csv};
//! use conposel_points::PointStore;
//!
//! let mut store = PointStore::new();
//! let id = store.begin_pair(Point::new(10.0, 10.0)).unwrap();
//! store.complete_pair(id, Point::new(20.25, 19.5)).unwrap();
//!
//! let csv = to_csv(store.completed_pairs(), CsvFormat::Indexed).unwrap();
//! assert_eq!(csv, "id,Ax,Ay,Bx,By\n0,10.000,10.000,20.250,19.500\n");
//!
//! let csv = to_csv(store.completed_pairs(), CsvFormat::FixedMoving).unwrap();
//! assert_eq!(csv, "FixedX,FixedY,MovingX,MovingY\n10,10,20,20\n");
//! ```
//!
//! ## Submission
//!
//! [`Submission`] is the JSON body a host posts to a server. The crate only
//! builds the payload.

mod csv;
mod error;
mod submission;

pub use csv::{CsvFormat, to_csv};
pub use error::ExportError;
pub use submission::{Coord, Submission, SubmittedPair};
