// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Error returned by the exporters.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There are no complete pairs, so there is nothing worth writing.
    ///
    /// Returned instead of a header-only file.
    #[error("nothing to export: no complete point pairs")]
    NothingToExport,
    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
