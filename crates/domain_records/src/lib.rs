//! Book-of-Business Record Model
//!
//! This crate defines the four record collections that make up an insurance
//! book-of-business extract, along with the strongly-typed identifiers that
//! relate them:
//!
//! ```text
//! Customer *--1 Agent     (agent_id)
//! Policy   *--1 Customer  (customer_id)
//! Claim    *--1 Policy    (policy_id)
//! ```
//!
//! Records are plain data: every field is public, nothing is mutated after
//! load, and `id` uniqueness within a collection is assumed rather than
//! enforced.

pub mod identifiers;
pub mod customer;
pub mod agent;
pub mod policy;
pub mod claim;

pub use identifiers::{AgentId, ClaimId, CustomerId, PolicyId};
pub use customer::Customer;
pub use agent::Agent;
pub use policy::Policy;
pub use claim::Claim;
