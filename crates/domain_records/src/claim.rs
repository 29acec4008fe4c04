//! Claim records

use serde::{Deserialize, Serialize};

use crate::identifiers::{ClaimId, PolicyId};

/// A claim as it appears in the book-of-business extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Policy the claim was filed against
    pub policy_id: PolicyId,
    pub is_claim_open: bool,
}

impl Claim {
    /// An open claim is one whose flag is set; there is no further state
    pub fn is_open(&self) -> bool {
        self.is_claim_open
    }
}
