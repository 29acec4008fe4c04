//! Agent records

use serde::{Deserialize, Serialize};

use crate::identifiers::AgentId;

/// An agent as it appears in the book-of-business extract
///
/// The extract carries more columns than the queries consume; only the key
/// and the servicing state are modeled, and the rest are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Unique identifier
    pub id: AgentId,
    /// Two-letter state code, e.g. "TX"
    pub state: String,
}
