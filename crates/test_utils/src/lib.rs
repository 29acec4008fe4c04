//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the Bookroll test suite.
//!
//! # Modules
//!
//! - `builders`: Builder patterns for record construction
//! - `fixtures`: Pre-built record sets for common scenarios
//! - `extract`: Temp-dir CSV extract writer for path-taking operations

pub mod builders;
pub mod fixtures;
pub mod extract;

pub use builders::*;
pub use fixtures::*;
pub use extract::*;
