//! Book-of-Business Analytics
//!
//! A fixed set of read-only aggregate and lookup operations over the four
//! record collections:
//!
//! - counts: open claims, customers per agent, agents per state
//! - sums: monthly premium per customer, premium totals per agent
//! - lookups: open claims by customer name, highest-premium customer
//! - multi-hop joins: customers with open claims in a state
//!
//! Every operation is a pure function of its inputs. Path-taking operations
//! load their extracts through `infra_csv` and propagate any load failure;
//! nothing is cached or mutated between calls.

pub mod error;
pub mod queries;
pub mod relations;
pub mod tally;

pub use error::QueryError;
pub use queries::{
    agent_premium_totals, count_agents_for_state, count_customers_for_agent, count_open_claims,
    customer_with_highest_total_premium, most_spoken_language_for_state,
    open_claims_for_customer_name, open_claims_for_state, sum_monthly_premium,
};
pub use tally::LanguageTally;
