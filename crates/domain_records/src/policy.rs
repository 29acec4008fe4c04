//! Policy records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::identifiers::{CustomerId, PolicyId};

/// A policy as it appears in the book-of-business extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Owning customer
    pub customer_id: CustomerId,
    /// Monthly premium; non-negative in a well-formed extract
    pub premium_per_month: Decimal,
}
