//! Catalog error types.

use std::path::PathBuf;

use crate::domain::StopId;

/// Errors that can occur while loading or publishing the stop catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Seed file could not be read
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid JSON for the expected shape
    #[error("failed to parse seed data: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stops share an identifier
    #[error("duplicate stop id: {0}")]
    DuplicateStop(StopId),
}
