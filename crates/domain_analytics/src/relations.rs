//! Relationship traversal between record collections
//!
//! Every join in the system is an equality match on a foreign key. The
//! helpers here make those traversals explicit; an index-backed traversal
//! and a nested scan produce identical results, the index just keeps the
//! multi-hop joins linear in the collection sizes.

use std::collections::{HashMap, HashSet};

use domain_records::{Customer, CustomerId, Policy, PolicyId};

/// Groups policies by owning customer, preserving load order per group
pub fn policies_by_customer(policies: &[Policy]) -> HashMap<CustomerId, Vec<&Policy>> {
    let mut index: HashMap<CustomerId, Vec<&Policy>> = HashMap::new();
    for policy in policies {
        index.entry(policy.customer_id).or_default().push(policy);
    }
    index
}

/// The ids of every policy belonging to one customer
pub fn policy_ids_for_customer(policies: &[Policy], customer_id: CustomerId) -> HashSet<PolicyId> {
    policies
        .iter()
        .filter(|policy| policy.customer_id == customer_id)
        .map(|policy| policy.id)
        .collect()
}

/// The ids of every customer owning at least one policy in the given set
pub fn customer_ids_for_policies(
    policies: &[Policy],
    policy_ids: &HashSet<PolicyId>,
) -> HashSet<CustomerId> {
    policies
        .iter()
        .filter(|policy| policy_ids.contains(&policy.id))
        .map(|policy| policy.customer_id)
        .collect()
}

/// The first customer in load order carrying the exact name pair
pub fn find_customer_by_name<'a>(
    customers: &'a [Customer],
    first_name: &str,
    last_name: &str,
) -> Option<&'a Customer> {
    customers
        .iter()
        .find(|customer| customer.has_name(first_name, last_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(id: i64, customer_id: i64) -> Policy {
        Policy {
            id: PolicyId::new(id),
            customer_id: CustomerId::new(customer_id),
            premium_per_month: rust_decimal::Decimal::ZERO,
        }
    }

    #[test]
    fn test_policies_by_customer_preserves_load_order() {
        let policies = vec![policy(3, 1), policy(1, 1), policy(2, 2)];
        let index = policies_by_customer(&policies);

        let owned: Vec<i64> = index[&CustomerId::new(1)]
            .iter()
            .map(|p| p.id.as_i64())
            .collect();
        assert_eq!(owned, vec![3, 1]);
        assert_eq!(index[&CustomerId::new(2)].len(), 1);
    }

    #[test]
    fn test_customer_ids_for_policies_deduplicates() {
        let policies = vec![policy(1, 1), policy(2, 1), policy(3, 2)];
        let policy_ids: HashSet<PolicyId> =
            [PolicyId::new(1), PolicyId::new(2)].into_iter().collect();

        let customers = customer_ids_for_policies(&policies, &policy_ids);
        assert_eq!(customers.len(), 1);
        assert!(customers.contains(&CustomerId::new(1)));
    }
}
