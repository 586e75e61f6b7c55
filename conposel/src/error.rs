// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_export::ExportError;
use conposel_points::Side;
use thiserror::Error;

/// Error returned by [`crate::Session`] operations.
///
/// None of these leave the session in a broken state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The image source reported a failure. The slot is empty again.
    #[error("failed to load image {side}: {reason}")]
    ImageLoadFailure {
        /// Slot that failed.
        side: Side,
        /// Reason given by the image source.
        reason: String,
    },
    /// A load finished for a slot that has since been reset or reloaded.
    #[error("ignored a stale load result for image {side}")]
    StaleLoad {
        /// Slot the stale result was meant for.
        side: Side,
    },
    /// Both images must be loaded first.
    #[error("both images must be loaded first")]
    NotReady,
    /// Export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
