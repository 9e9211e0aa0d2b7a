//! Operator-facing statistics for a finished run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lead::{Lead, Priority};

/// Number of top-ranked leads echoed back as samples.
pub const SAMPLE_SIZE: usize = 3;

/// Totals reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    /// Unique leads held by the aggregator before ranking.
    pub total_unique: usize,
    /// Leads that survived the operational-status filter.
    pub active: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub with_phone: usize,
    pub with_website: usize,
    pub samples: Vec<Lead>,
}

impl RunSummary {
    /// Builds the summary from the unique-lead count and the ranked output.
    #[must_use]
    pub fn from_run(total_unique: usize, ranked: &[Lead]) -> Self {
        let count_tier = |tier: Priority| ranked.iter().filter(|l| l.priority() == tier).count();

        Self {
            generated_at: Utc::now(),
            total_unique,
            active: ranked.len(),
            high: count_tier(Priority::High),
            medium: count_tier(Priority::Medium),
            low: count_tier(Priority::Low),
            with_phone: ranked.iter().filter(|l| l.phone.is_some()).count(),
            with_website: ranked.iter().filter(|l| l.website.is_some()).count(),
            samples: ranked.iter().take(SAMPLE_SIZE).cloned().collect(),
        }
    }

    /// Share of active leads that have `count` of some attribute, as a
    /// percentage. `0.0` when there are no active leads.
    #[must_use]
    pub fn percent_of_active(&self, count: usize) -> f64 {
        if self.active == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = count as f64 / self.active as f64 * 100.0;
        pct
    }
}
