//! Analytics errors

use thiserror::Error;

use infra_csv::LoadError;

/// Errors surfaced by the query operations
///
/// A load failure always propagates to the caller of the operation that
/// needed the source; it is never treated as an empty collection.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A record source could not be loaded
    #[error("Load failure: {0}")]
    Load(#[from] LoadError),

    /// The customer source contained no records
    #[error("No customers in source")]
    NoCustomers,

    /// No non-English language mentions among customers in the state
    #[error("No language data for state {state}")]
    NoLanguageData { state: String },
}

impl QueryError {
    /// Creates an empty-aggregate error for the language query
    pub fn no_language_data(state: impl Into<String>) -> Self {
        QueryError::NoLanguageData {
            state: state.into(),
        }
    }

    /// Checks whether this error came from reading a source
    pub fn is_load_failure(&self) -> bool {
        matches!(self, QueryError::Load(_))
    }
}
