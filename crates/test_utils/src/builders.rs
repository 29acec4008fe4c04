//! Record Builders
//!
//! Builder patterns for constructing test records with sensible defaults.
//! Tests specify only the fields they care about.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_records::{Agent, AgentId, Claim, ClaimId, Customer, CustomerId, Policy, PolicyId};

/// Builder for customer records
pub struct CustomerBuilder {
    id: CustomerId,
    first_name: String,
    last_name: String,
    agent_id: AgentId,
    state: String,
    primary_language: String,
    secondary_language: Option<String>,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: CustomerId::new(1),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            agent_id: AgentId::new(1),
            state: "TX".to_string(),
            primary_language: "English".to_string(),
            secondary_language: None,
        }
    }

    /// Sets the customer id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = CustomerId::new(id);
        self
    }

    /// Sets the name pair
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the servicing agent
    pub fn with_agent_id(mut self, agent_id: i64) -> Self {
        self.agent_id = AgentId::new(agent_id);
        self
    }

    /// Sets the state code
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the primary language
    pub fn with_primary_language(mut self, language: impl Into<String>) -> Self {
        self.primary_language = language.into();
        self
    }

    /// Sets the secondary language
    pub fn with_secondary_language(mut self, language: impl Into<String>) -> Self {
        self.secondary_language = Some(language.into());
        self
    }

    /// Builds the customer record
    pub fn build(self) -> Customer {
        Customer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            agent_id: self.agent_id,
            state: self.state,
            primary_language: self.primary_language,
            secondary_language: self.secondary_language,
        }
    }
}

/// Builder for agent records
pub struct AgentBuilder {
    id: AgentId,
    state: String,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: AgentId::new(1),
            state: "TX".to_string(),
        }
    }

    /// Sets the agent id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = AgentId::new(id);
        self
    }

    /// Sets the state code
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builds the agent record
    pub fn build(self) -> Agent {
        Agent {
            id: self.id,
            state: self.state,
        }
    }
}

/// Builder for policy records
pub struct PolicyBuilder {
    id: PolicyId,
    customer_id: CustomerId,
    premium_per_month: Decimal,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: PolicyId::new(100),
            customer_id: CustomerId::new(1),
            premium_per_month: dec!(100.00),
        }
    }

    /// Sets the policy id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = PolicyId::new(id);
        self
    }

    /// Sets the owning customer
    pub fn with_customer_id(mut self, customer_id: i64) -> Self {
        self.customer_id = CustomerId::new(customer_id);
        self
    }

    /// Sets the monthly premium
    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium_per_month = premium;
        self
    }

    /// Builds the policy record
    pub fn build(self) -> Policy {
        Policy {
            id: self.id,
            customer_id: self.customer_id,
            premium_per_month: self.premium_per_month,
        }
    }
}

/// Builder for claim records
pub struct ClaimBuilder {
    id: ClaimId,
    policy_id: PolicyId,
    is_claim_open: bool,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(1000),
            policy_id: PolicyId::new(100),
            is_claim_open: false,
        }
    }

    /// Sets the claim id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = ClaimId::new(id);
        self
    }

    /// Sets the policy the claim was filed against
    pub fn with_policy_id(mut self, policy_id: i64) -> Self {
        self.policy_id = PolicyId::new(policy_id);
        self
    }

    /// Marks the claim open or closed
    pub fn open(mut self, is_open: bool) -> Self {
        self.is_claim_open = is_open;
        self
    }

    /// Builds the claim record
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            policy_id: self.policy_id,
            is_claim_open: self.is_claim_open,
        }
    }
}
