//! Strongly-typed identifiers for book-of-business records
//!
//! The extracts carry plain integer keys. Newtype wrappers keep the four
//! key spaces apart and prevent accidental mixing of different identifier
//! types at a call site.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw key
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the underlying key
            pub fn as_i64(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(CustomerId, "CUST");
define_id!(AgentId, "AGT");
define_id!(PolicyId, "POL");
define_id!(ClaimId, "CLM");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_display() {
        let id = CustomerId::new(42);
        assert_eq!(id.to_string(), "CUST-42");
    }

    #[test]
    fn test_raw_key_conversion() {
        let id = PolicyId::from(7);
        let raw: i64 = id.into();
        assert_eq!(raw, 7);
        assert_eq!(id.as_i64(), 7);
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Same raw key, different key spaces
        let customer = CustomerId::new(1);
        let agent = AgentId::new(1);
        assert_eq!(customer.as_i64(), agent.as_i64());
        assert_ne!(customer.to_string(), agent.to_string());
    }
}
