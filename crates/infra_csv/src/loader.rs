//! Tabular record loading

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::LoadError;

/// Reads every record of type `T` from a headered CSV extract
///
/// Column names are matched against the record type's serde field names;
/// columns the type does not model are ignored. Fields are not trimmed, so
/// value matching downstream stays exact.
///
/// # Errors
///
/// Returns [`LoadError::Read`] when the source cannot be opened and
/// [`LoadError::Malformed`] when any row fails to deserialize. A partial
/// read is never returned.
pub fn read_records<T>(path: impl AsRef<Path>) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: T = row.map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    debug!(path = %path.display(), records = records.len(), "loaded extract");
    Ok(records)
}
