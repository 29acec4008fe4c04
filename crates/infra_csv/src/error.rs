//! Loader error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a tabular extract
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row could not be deserialized into the record type
    #[error("Malformed record in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    /// The source the load was attempted from
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Read { path, .. } => path,
            LoadError::Malformed { path, .. } => path,
        }
    }

    /// Checks whether the source was readable but carried a bad row
    pub fn is_malformed(&self) -> bool {
        matches!(self, LoadError::Malformed { .. })
    }
}
