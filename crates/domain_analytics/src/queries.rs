//! Query operations
//!
//! The fixed operation set over the book of business. Operations keep the
//! call shapes of the reporting tool they serve: some take pre-loaded
//! collections, others take extract paths and go through the record loader
//! first. Each path-taking operation delegates to a pure core over slices,
//! so results are identical however the records arrived.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use rust_decimal::Decimal;

use domain_records::{Agent, AgentId, Claim, Customer, CustomerId, Policy, PolicyId};
use infra_csv::read_records;

use crate::error::QueryError;
use crate::relations;
use crate::tally::LanguageTally;

/// Excluded from every language tally
const ENGLISH: &str = "English";

/// Counts the claims whose open flag is set
pub fn count_open_claims(claims: &[Claim]) -> usize {
    claims.iter().filter(|claim| claim.is_open()).count()
}

/// Counts the customers served by an agent
///
/// Returns 0 when no customer references the agent.
///
/// # Errors
///
/// Returns [`QueryError::Load`] when the customer extract cannot be read.
pub fn count_customers_for_agent(
    customers_path: impl AsRef<Path>,
    agent_id: AgentId,
) -> Result<usize, QueryError> {
    let customers: Vec<Customer> = read_records(customers_path)?;
    Ok(customers_for_agent(&customers, agent_id))
}

/// Counts the agents servicing a state
///
/// The state match is exact and case-sensitive.
///
/// # Errors
///
/// Returns [`QueryError::Load`] when the agent extract cannot be read.
pub fn count_agents_for_state(
    agents_path: impl AsRef<Path>,
    state: &str,
) -> Result<usize, QueryError> {
    let agents: Vec<Agent> = read_records(agents_path)?;
    Ok(agents_for_state(&agents, state))
}

/// Sums the monthly premium over a customer's policies
///
/// Folds left to right in policy load order; returns zero when the customer
/// owns no policies.
pub fn sum_monthly_premium(policies: &[Policy], customer_id: CustomerId) -> Decimal {
    policies
        .iter()
        .filter(|policy| policy.customer_id == customer_id)
        .map(|policy| policy.premium_per_month)
        .sum()
}

/// Counts the open claims of the customer carrying an exact name pair
///
/// When several customers share the name, the first in load order is the
/// one resolved. `Ok(None)` means no customer carries the name and is
/// distinct from `Ok(Some(0))`, a found customer with no open claims.
///
/// # Errors
///
/// Returns [`QueryError::Load`] when any of the three extracts cannot be
/// read.
pub fn open_claims_for_customer_name(
    customers_path: impl AsRef<Path>,
    policies_path: impl AsRef<Path>,
    claims_path: impl AsRef<Path>,
    first_name: &str,
    last_name: &str,
) -> Result<Option<usize>, QueryError> {
    let customers: Vec<Customer> = read_records(customers_path)?;
    let policies: Vec<Policy> = read_records(policies_path)?;
    let claims: Vec<Claim> = read_records(claims_path)?;

    Ok(open_claim_count_for_customer(
        &customers, &policies, &claims, first_name, last_name,
    ))
}

/// Finds the most spoken non-English language among a state's customers
///
/// Primary and secondary mentions fold into one frequency count per
/// language; a customer with no second language contributes a single
/// mention. Ties resolve to the language recorded first, in customer load
/// order (primary before secondary).
///
/// # Errors
///
/// Returns [`QueryError::NoLanguageData`] when the state's customers yield
/// no non-English mentions at all, and [`QueryError::Load`] when the
/// customer extract cannot be read.
pub fn most_spoken_language_for_state(
    customers_path: impl AsRef<Path>,
    state: &str,
) -> Result<String, QueryError> {
    let customers: Vec<Customer> = read_records(customers_path)?;
    most_spoken_language(&customers, state).ok_or_else(|| QueryError::no_language_data(state))
}

/// Finds the customer whose policies carry the highest total premium
///
/// Totals accumulate by customer id: a duplicate entry in the customer
/// collection adds its full per-id premium sum again. On a tie the winning
/// id is the one whose first occurrence comes earliest in load order, and
/// the returned record is that first occurrence.
///
/// # Errors
///
/// Returns [`QueryError::NoCustomers`] when the customer extract is empty
/// and [`QueryError::Load`] when it cannot be read.
pub fn customer_with_highest_total_premium(
    customers_path: impl AsRef<Path>,
    policies: &[Policy],
) -> Result<Customer, QueryError> {
    let customers: Vec<Customer> = read_records(customers_path)?;
    highest_total_premium_customer(&customers, policies)
        .cloned()
        .ok_or(QueryError::NoCustomers)
}

/// Counts the customers in a state with at least one open claim
///
/// Traverses open claims to their policies, policies to their customers,
/// then counts the customers matching the state. A customer with several
/// qualifying open claims is counted once.
///
/// # Errors
///
/// Returns [`QueryError::Load`] when any of the three extracts cannot be
/// read.
pub fn open_claims_for_state(
    customers_path: impl AsRef<Path>,
    policies_path: impl AsRef<Path>,
    claims_path: impl AsRef<Path>,
    state: &str,
) -> Result<usize, QueryError> {
    let customers: Vec<Customer> = read_records(customers_path)?;
    let policies: Vec<Policy> = read_records(policies_path)?;
    let claims: Vec<Claim> = read_records(claims_path)?;

    Ok(customers_with_open_claims_in_state(
        &customers, &policies, &claims, state,
    ))
}

/// Builds the total premium written under each agent
///
/// Keys are exactly the distinct agent ids observed among loaded customers.
/// A customer with no policies still creates or updates their agent's entry
/// with zero; duplicate customer ids accumulate per occurrence, mirroring
/// [`customer_with_highest_total_premium`].
///
/// # Errors
///
/// Returns [`QueryError::Load`] when the customer extract cannot be read.
pub fn agent_premium_totals(
    customers_path: impl AsRef<Path>,
    policies: &[Policy],
) -> Result<HashMap<AgentId, Decimal>, QueryError> {
    let customers: Vec<Customer> = read_records(customers_path)?;
    Ok(premium_totals_by_agent(&customers, policies))
}

// ============================================================================
// Pure cores
// ============================================================================

fn customers_for_agent(customers: &[Customer], agent_id: AgentId) -> usize {
    customers
        .iter()
        .filter(|customer| customer.agent_id == agent_id)
        .count()
}

fn agents_for_state(agents: &[Agent], state: &str) -> usize {
    agents.iter().filter(|agent| agent.state == state).count()
}

fn open_claim_count_for_customer(
    customers: &[Customer],
    policies: &[Policy],
    claims: &[Claim],
    first_name: &str,
    last_name: &str,
) -> Option<usize> {
    let customer = relations::find_customer_by_name(customers, first_name, last_name)?;
    let policy_ids = relations::policy_ids_for_customer(policies, customer.id);

    let count = claims
        .iter()
        .filter(|claim| policy_ids.contains(&claim.policy_id) && claim.is_open())
        .count();
    Some(count)
}

fn most_spoken_language(customers: &[Customer], state: &str) -> Option<String> {
    let mut tally = LanguageTally::new();
    for customer in customers.iter().filter(|c| c.state == state) {
        if customer.primary_language != ENGLISH {
            tally.record(&customer.primary_language);
        }
        if let Some(secondary) = &customer.secondary_language {
            if secondary != ENGLISH {
                tally.record(secondary);
            }
        }
    }
    tally.most_frequent().map(str::to_string)
}

fn highest_total_premium_customer<'a>(
    customers: &'a [Customer],
    policies: &[Policy],
) -> Option<&'a Customer> {
    let by_customer = relations::policies_by_customer(policies);

    let mut totals: HashMap<CustomerId, Decimal> = HashMap::new();
    for customer in customers {
        *totals.entry(customer.id).or_insert(Decimal::ZERO) +=
            total_premium(&by_customer, customer.id);
    }

    // Scan first occurrences in load order; strict greater keeps the
    // earliest id on ties.
    let mut winner: Option<(&Customer, Decimal)> = None;
    let mut seen: HashSet<CustomerId> = HashSet::new();
    for customer in customers {
        if !seen.insert(customer.id) {
            continue;
        }
        let total = totals[&customer.id];
        if winner.map_or(true, |(_, max)| total > max) {
            winner = Some((customer, total));
        }
    }
    winner.map(|(customer, _)| customer)
}

fn customers_with_open_claims_in_state(
    customers: &[Customer],
    policies: &[Policy],
    claims: &[Claim],
    state: &str,
) -> usize {
    let open_policy_ids: HashSet<PolicyId> = claims
        .iter()
        .filter(|claim| claim.is_open())
        .map(|claim| claim.policy_id)
        .collect();
    let claimant_ids = relations::customer_ids_for_policies(policies, &open_policy_ids);

    customers
        .iter()
        .filter(|customer| customer.state == state && claimant_ids.contains(&customer.id))
        .count()
}

fn premium_totals_by_agent(customers: &[Customer], policies: &[Policy]) -> HashMap<AgentId, Decimal> {
    let by_customer = relations::policies_by_customer(policies);

    let mut totals: HashMap<AgentId, Decimal> = HashMap::new();
    for customer in customers {
        *totals.entry(customer.agent_id).or_insert(Decimal::ZERO) +=
            total_premium(&by_customer, customer.id);
    }
    totals
}

/// Total premium for one customer through the policy index, summed in
/// policy load order
fn total_premium(
    by_customer: &HashMap<CustomerId, Vec<&Policy>>,
    customer_id: CustomerId,
) -> Decimal {
    by_customer
        .get(&customer_id)
        .map(|owned| owned.iter().map(|policy| policy.premium_per_month).sum())
        .unwrap_or(Decimal::ZERO)
}

// ============================================================================
// Property tests over the pure cores
// ============================================================================
