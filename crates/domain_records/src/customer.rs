//! Customer records

use serde::{Deserialize, Deserializer, Serialize};

use crate::identifiers::{AgentId, CustomerId};

/// A customer as it appears in the book-of-business extract
///
/// Column names in the extract are camelCase. The secondary-language column
/// may be empty, meaning the customer reported no second language; it
/// deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    /// Servicing agent
    pub agent_id: AgentId,
    /// Two-letter state code, e.g. "TX"
    pub state: String,
    /// Always populated in a well-formed extract
    pub primary_language: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub secondary_language: Option<String>,
}

impl Customer {
    /// Exact, case-sensitive match on the (first, last) name pair
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

/// Maps an empty or absent column to `None`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first_name: &str, last_name: &str) -> Customer {
        Customer {
            id: CustomerId::new(1),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            agent_id: AgentId::new(9),
            state: "TX".to_string(),
            primary_language: "Spanish".to_string(),
            secondary_language: None,
        }
    }

    #[test]
    fn test_has_name_exact_match() {
        let c = customer("Jane", "Doe");
        assert!(c.has_name("Jane", "Doe"));
    }

    #[test]
    fn test_has_name_is_case_sensitive() {
        let c = customer("Jane", "Doe");
        assert!(!c.has_name("jane", "Doe"));
        assert!(!c.has_name("Jane", "doe"));
    }

    #[test]
    fn test_has_name_requires_both_parts() {
        let c = customer("Jane", "Doe");
        assert!(!c.has_name("Jane", "Smith"));
        assert!(!c.has_name("John", "Doe"));
    }
}
