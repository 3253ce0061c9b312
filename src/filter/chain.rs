//! Ordered narrowing of a candidate list.

use super::SubnetFilter;
use crate::models::{Constraints, Subnet};

/// Keep the subnets matching `filter`, in their original order.
///
/// An empty result is valid.
pub fn narrow(filter: &SubnetFilter, mut subnets: Vec<Subnet>) -> Vec<Subnet> {
    subnets.retain(|s| filter.matches(s));
    subnets
}

/// Filters implied by `constraints`, in application order: name, tag key, zones.
///
/// Absent constraints and an empty zone list produce no filter.
pub fn filters_for(constraints: &Constraints) -> Vec<SubnetFilter> {
    let mut filters = Vec::with_capacity(3);
    if let Some(name) = &constraints.name {
        filters.push(SubnetFilter::ByName(name.clone()));
    }
    if let Some(tag_key) = &constraints.tag_key {
        filters.push(SubnetFilter::ByTagKey(tag_key.clone()));
    }
    if !constraints.zones.is_empty() {
        filters.push(SubnetFilter::ByZones(constraints.zones.clone()));
    }
    filters
}

/// Narrow `subnets` by every stage `constraints` calls for.
///
/// Stages run over borrowed subnets; only the survivors are cloned.
pub fn apply_constraints(subnets: &[Subnet], constraints: &Constraints) -> Vec<Subnet> {
    let mut candidates: Vec<&Subnet> = subnets.iter().collect();
    for filter in filters_for(constraints) {
        let before = candidates.len();
        candidates.retain(|s| filter.matches(s));
        log::debug!(
            "filter by {}: {before} -> {} subnets",
            filter.label(),
            candidates.len()
        );
    }
    candidates.into_iter().cloned().collect()
}
