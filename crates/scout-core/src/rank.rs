//! Final ordering of aggregated leads.

use std::cmp::Ordering;

use crate::lead::Lead;

/// Drops non-operational leads and orders the rest by tier, then by rating
/// descending (a missing rating counts as `0`).
///
/// The sort is stable: leads with equal tier and rating keep the order in
/// which they were discovered.
#[must_use]
pub fn rank<I>(leads: I) -> Vec<Lead>
where
    I: IntoIterator<Item = Lead>,
{
    let mut active: Vec<Lead> = leads.into_iter().filter(Lead::is_active).collect();
    active.sort_by(compare_leads);
    active
}

fn compare_leads(a: &Lead, b: &Lead) -> Ordering {
    a.priority().cmp(&b.priority()).then_with(|| {
        let a_rating = a.rating.unwrap_or(0.0);
        let b_rating = b.rating.unwrap_or(0.0);
        b_rating.total_cmp(&a_rating)
    })
}
