// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::pair::PairId;

/// Error returned when a pairing operation would break the store's invariants.
///
/// None of these are fatal; the store is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairingError {
    /// Another pair is still waiting for its side-B coordinate.
    ///
    /// Carries the id of that pair so callers can select it and guide the
    /// user towards completing it.
    IncompletePending(PairId),
    /// No pair with this id exists.
    UnknownPair(PairId),
    /// The pair already has both coordinates.
    AlreadyComplete(PairId),
}

impl fmt::Display for PairingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompletePending(id) => {
                write!(f, "pair {id} must be completed before starting a new one")
            }
            Self::UnknownPair(id) => write!(f, "no pair with id {id}"),
            Self::AlreadyComplete(id) => write!(f, "pair {id} is already complete"),
        }
    }
}

impl core::error::Error for PairingError {}
