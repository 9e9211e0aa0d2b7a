//! Query-catalog aggregation: search, filter, dedup, normalize.
//!
//! Queries run strictly one after another. A failed query is logged and
//! skipped; it never aborts the run. Once the unique-lead count reaches the
//! configured target, the remaining queries are not issued.

use std::collections::HashSet;

use scout_core::{GeoCircle, Lead, QueryCatalog};

use crate::error::PlacesError;
use crate::normalize::{is_closed_permanently, normalize_place, place_key};
use crate::rate_limit::Pacer;
use crate::search::SearchClient;
use crate::types::RawPlace;

/// Progress is logged each time the unique count crosses a multiple of this.
const MILESTONE_STEP: usize = 50;

/// Default early-stop threshold.
pub const DEFAULT_TARGET_LEADS: usize = 200;

/// Inputs that stay fixed for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct AggregateConfig {
    pub bias: GeoCircle,
    /// Unique-lead count at which remaining queries are skipped. Also bounds
    /// memory: the set stops growing after the query that reaches it.
    pub target: usize,
}

/// What happened to one raw place offered to a [`LeadSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Inserted,
    Duplicate,
    ClosedPermanently,
    MissingIdentifier,
}

/// Unique leads keyed by place identifier, in discovery order.
#[derive(Debug, Default)]
pub struct LeadSet {
    seen: HashSet<String>,
    leads: Vec<Lead>,
}

impl LeadSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers one raw place to the set.
    ///
    /// Permanently closed places are rejected before their identifier is
    /// looked at, so they never occupy a slot. Everything else is inserted
    /// only if its identifier is new.
    pub fn admit(&mut self, place: RawPlace) -> Admission {
        if is_closed_permanently(&place) {
            return Admission::ClosedPermanently;
        }

        let Some(key) = place_key(&place) else {
            return Admission::MissingIdentifier;
        };

        if self.seen.contains(key) {
            return Admission::Duplicate;
        }

        self.seen.insert(key.to_owned());
        self.leads.push(normalize_place(place));
        Admission::Inserted
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    #[must_use]
    pub fn into_leads(self) -> Vec<Lead> {
        self.leads
    }
}

/// A query whose search call failed.
#[derive(Debug)]
pub struct QueryFailure {
    pub query: String,
    pub error: PlacesError,
}

/// Result of driving a catalog through a [`SearchClient`].
#[derive(Debug)]
pub struct AggregateOutcome {
    pub leads: LeadSet,
    /// Number of search calls made, successful or not.
    pub queries_issued: usize,
    pub failures: Vec<QueryFailure>,
    /// `true` when the target was reached with queries still left to run.
    pub stopped_early: bool,
}

/// Runs every query in `catalog` through `client`, in order, pausing on
/// `pacer` between calls, until the catalog is exhausted or the unique-lead
/// count reaches `config.target`.
pub async fn aggregate<S, P>(
    client: &S,
    pacer: &mut P,
    catalog: &QueryCatalog,
    config: &AggregateConfig,
) -> AggregateOutcome
where
    S: SearchClient,
    P: Pacer,
{
    let total = catalog.len();
    let mut leads = LeadSet::new();
    let mut failures = Vec::new();
    let mut queries_issued = 0usize;
    let mut stopped_early = false;

    for (index, query) in catalog.iter().enumerate() {
        if index > 0 {
            pacer.pause().await;
        }

        tracing::info!(query, index = index + 1, total, "searching");
        queries_issued += 1;
        let before = leads.len();

        match client.search(query, &config.bias).await {
            Ok(places) => {
                let returned = places.len();
                for place in places {
                    match leads.admit(place) {
                        Admission::Inserted => {}
                        Admission::Duplicate => {
                            tracing::debug!(query, "skipping duplicate place");
                        }
                        Admission::ClosedPermanently => {
                            tracing::debug!(query, "skipping permanently closed place");
                        }
                        Admission::MissingIdentifier => {
                            tracing::warn!(query, "skipping place with no id or name");
                        }
                    }
                }
                tracing::info!(
                    query,
                    returned,
                    new = leads.len() - before,
                    unique = leads.len(),
                    "query complete"
                );
            }
            Err(error) => {
                tracing::warn!(
                    query,
                    status = ?error.status(),
                    error = %error,
                    "search failed; skipping query"
                );
                failures.push(QueryFailure {
                    query: query.to_owned(),
                    error,
                });
            }
        }

        if leads.len() / MILESTONE_STEP > before / MILESTONE_STEP {
            tracing::info!(
                milestone = leads.len() / MILESTONE_STEP * MILESTONE_STEP,
                unique = leads.len(),
                "progress milestone reached"
            );
        }

        if leads.len() >= config.target {
            stopped_early = index + 1 < total;
            tracing::info!(
                unique = leads.len(),
                target = config.target,
                remaining = total - (index + 1),
                "lead target reached"
            );
            break;
        }
    }

    AggregateOutcome {
        leads,
        queries_issued,
        failures,
        stopped_early,
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
