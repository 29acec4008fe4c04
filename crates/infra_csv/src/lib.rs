//! CSV Record Loading
//!
//! This crate is the only way record collections enter the system: it reads
//! a headered CSV extract into a vector of typed records.
//!
//! A source that cannot be read, or a row that cannot be deserialized,
//! surfaces as a [`LoadError`]. A failed load never degrades to an empty or
//! partial collection, so downstream aggregates cannot be silently computed
//! over missing data.

pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::read_records;
