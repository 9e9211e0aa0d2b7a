//! Operator-facing run summary.

use std::fmt;
use std::path::PathBuf;

use scout_core::RunSummary;

const RULE: &str = "==================================================";

/// Everything printed once a collect run has written its snapshot.
#[derive(Debug)]
pub(crate) struct RunReport {
    pub summary: RunSummary,
    pub catalog_size: usize,
    pub queries_issued: usize,
    pub failed_queries: Vec<String>,
    pub stopped_early: bool,
    pub output_path: PathBuf,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;

        writeln!(f, "{RULE}")?;
        writeln!(f, "LEAD GENERATION COMPLETE")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Generated at:       {}",
            s.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "Total unique leads: {}", s.total_unique)?;
        writeln!(f, "Active leads:       {}", s.active)?;

        writeln!(f, "\nBreakdown by priority:")?;
        writeln!(f, "  High (4.8+):      {}", s.high)?;
        writeln!(f, "  Medium (4.5-4.7): {}", s.medium)?;
        writeln!(f, "  Low (<4.5):       {}", s.low)?;

        writeln!(f, "\nContact info:")?;
        writeln!(
            f,
            "  With phone:   {} ({:.1}%)",
            s.with_phone,
            s.percent_of_active(s.with_phone)
        )?;
        writeln!(
            f,
            "  With website: {} ({:.1}%)",
            s.with_website,
            s.percent_of_active(s.with_website)
        )?;

        if !s.samples.is_empty() {
            writeln!(f, "\nSample leads:")?;
            for (i, lead) in s.samples.iter().enumerate() {
                let rating = lead
                    .rating
                    .map_or_else(|| "N/A".to_string(), |r| r.to_string());
                writeln!(
                    f,
                    "  {}. {} ({}) - {rating}★",
                    i + 1,
                    lead.company_name,
                    lead.priority()
                )?;
            }
        }

        let stop_note = if self.stopped_early {
            " (stopped early: lead target reached)"
        } else {
            ""
        };
        writeln!(
            f,
            "\nQueries issued: {}/{}{stop_note}",
            self.queries_issued, self.catalog_size
        )?;
        if !self.failed_queries.is_empty() {
            writeln!(
                f,
                "Failed queries: {} [{}]",
                self.failed_queries.len(),
                self.failed_queries.join(", ")
            )?;
        }
        writeln!(f, "\nSaved to: {}", self.output_path.display())
    }
}
