//! Pre-built Record Sets
//!
//! Canned collections for the scenarios the behavioral tests lean on. The
//! fixtures are small enough to reason about by eye and stable across tests.

use domain_records::{Agent, Claim, Customer, Policy};

use crate::builders::{AgentBuilder, ClaimBuilder, CustomerBuilder, PolicyBuilder};

/// A single-customer book: one Spanish-speaking Texan with one policy
/// carrying one open and one closed claim
pub struct SingleCustomerBook;

impl SingleCustomerBook {
    pub fn customers() -> Vec<Customer> {
        vec![CustomerBuilder::new()
            .with_id(1)
            .with_name("Jane", "Doe")
            .with_agent_id(9)
            .with_state("TX")
            .with_primary_language("Spanish")
            .build()]
    }

    pub fn policies() -> Vec<Policy> {
        vec![PolicyBuilder::new()
            .with_id(100)
            .with_customer_id(1)
            .with_premium(rust_decimal_macros::dec!(120.50))
            .build()]
    }

    pub fn claims() -> Vec<Claim> {
        vec![
            ClaimBuilder::new().with_id(1000).with_policy_id(100).open(true).build(),
            ClaimBuilder::new().with_id(1001).with_policy_id(100).open(false).build(),
        ]
    }
}

/// A three-state agent roster for state-count tests
pub struct AgentRoster;

impl AgentRoster {
    pub fn agents() -> Vec<Agent> {
        vec![
            AgentBuilder::new().with_id(1).with_state("TX").build(),
            AgentBuilder::new().with_id(2).with_state("AZ").build(),
            AgentBuilder::new().with_id(3).with_state("TX").build(),
            AgentBuilder::new().with_id(4).with_state("IL").build(),
        ]
    }
}
