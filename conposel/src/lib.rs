// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conposel: pick corresponding landmarks on two images.
//!
//! A [`Session`] ties the pieces of the workspace together:
//!
//! - [`conposel_points`] keeps the pairs and their invariants.
//! - [`conposel_view`] maps display coordinates and drives the magnifiers.
//! - [`conposel_interaction`] turns pointer input into store mutations.
//! - [`conposel_render`] projects the state to draw operations.
//! - [`conposel_export`] writes CSV and the submission payload.
//!
//! The host owns the windowing, decoding and drawing. It loads images
//! through [`Session::begin_load`] and [`Session::finish_load`], forwards
//! pointer and key events in display coordinates, redraws when a
//! [`Response`](conposel_interaction::Response) asks for it, and shows
//! [`Session::status`] to the user.
//!
//! ## Loading
//!
//! Each side has an [`ImageSlot`] that is empty, loading or loaded. Loads
//! are asynchronous on the host's side; [`Session::begin_load`] hands out a
//! [`LoadTicket`] and [`Session::finish_load`] accepts the result only while
//! that ticket is current. A failed load empties the slot. Pointer input is
//! dropped until both slots are loaded.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use conposel::{Session, SessionConfig, Status};
//! use conposel_interaction::Surface;
//! use conposel_points::Side;
//!
//! let mut session = Session::<&str>::new(SessionConfig::default()).unwrap();
//! for (side, name) in [(Side::A, "fixed.png"), (Side::B, "moving.png")] {
//!     let ticket = session.begin_load(side);
//!     session.finish_load(ticket, Ok((name, Size::new(400.0, 300.0)))).unwrap();
//! }
//! // Canvases are shown at half size.
//! session.set_display_size(Side::A, Surface::Full, Size::new(200.0, 150.0));
//! session.set_display_size(Side::B, Surface::Full, Size::new(200.0, 150.0));
//!
//! session.pointer_down(Side::A, Surface::Full, Point::new(5.0, 5.0));
//! session.pointer_up();
//! assert_eq!(session.status().to_string(), "Click on image B to place point 0.");
//!
//! session.pointer_down(Side::B, Surface::Full, Point::new(10.0, 10.0));
//! session.pointer_up();
//! assert_eq!(
//!     session.export_csv().unwrap(),
//!     "id,Ax,Ay,Bx,By\n0,10.000,10.000,20.000,20.000\n"
//! );
//! ```

mod config;
mod error;
mod session;
mod slot;
mod status;

pub use config::{ConfigError, SessionConfig};
pub use error::SessionError;
pub use session::{Key, Session};
pub use slot::{ImageSlot, LoadTicket};
pub use status::Status;
