use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Only the filesystem path is fatal for a run. Catalog and generation failures
/// are recovered in place and reported through `CatalogSource` and
/// `GenerationOutcome` instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
