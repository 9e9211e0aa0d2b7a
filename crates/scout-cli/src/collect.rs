//! The `collect` command: search, aggregate, rank, write, report.
//!
//! Per-query search failures are logged and skipped rather than propagated
//! so one bad query does not abort the run. Catalog loading and the final
//! snapshot write are fatal.

use std::path::{Path, PathBuf};

use scout_core::{load_queries, rank, AppConfig, ConfigError, QueryCatalog, RunSummary};
use scout_places::{aggregate, AggregateConfig, FixedDelay, Pacer, PlacesClient, SearchClient};

use crate::report::RunReport;
use crate::sink::{write_snapshot, SinkError};

/// Command-line overrides for a collect run.
#[derive(Debug, Default)]
pub(crate) struct CollectOptions {
    pub output: Option<PathBuf>,
    pub queries: Option<PathBuf>,
    pub target: Option<usize>,
    pub dry_run: bool,
}

/// Resolve the query catalog: an explicit path wins over the configured one,
/// and with neither the built-in DFW HVAC catalog is used.
pub(crate) fn resolve_catalog(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> Result<QueryCatalog, ConfigError> {
    match explicit.or(configured) {
        Some(path) => load_queries(path),
        None => Ok(QueryCatalog::dfw_hvac()),
    }
}

/// Run a full collection and print the summary.
///
/// When `dry_run` is set, prints what would be searched and returns without
/// issuing requests or writing a file.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the Places client cannot
/// be built, or the snapshot cannot be written.
pub(crate) async fn run_collect(config: &AppConfig, options: CollectOptions) -> anyhow::Result<()> {
    let catalog = resolve_catalog(options.queries.as_deref(), config.queries_path.as_deref())?;
    let target = options.target.unwrap_or(config.target_leads);
    let output = options
        .output
        .unwrap_or_else(|| config.output_path.clone());

    if options.dry_run {
        println!(
            "dry-run: would run {} queries biased to {} (target {target} leads), writing to {}",
            catalog.len(),
            config.bias,
            output.display()
        );
        for (i, query) in catalog.iter().enumerate() {
            println!("  {:>3}. {query}", i + 1);
        }
        return Ok(());
    }

    let client = PlacesClient::with_base_url(
        &config.places_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Places client: {e}"))?;
    let mut pacer = FixedDelay::from_millis(config.inter_query_delay_ms);
    let aggregate_config = AggregateConfig {
        bias: config.bias,
        target,
    };

    tracing::info!(
        queries = catalog.len(),
        target,
        bias = %config.bias,
        "starting lead collection"
    );

    let report = collect_with(&client, &mut pacer, &catalog, &aggregate_config, &output).await?;
    print!("{report}");

    Ok(())
}

/// Aggregate `catalog` through `client`, rank the result, and write the
/// snapshot to `output`.
///
/// # Errors
///
/// Returns [`SinkError`] if the snapshot cannot be written. Search failures
/// are recorded in the report, not returned.
pub(crate) async fn collect_with<S, P>(
    client: &S,
    pacer: &mut P,
    catalog: &QueryCatalog,
    config: &AggregateConfig,
    output: &Path,
) -> Result<RunReport, SinkError>
where
    S: SearchClient,
    P: Pacer,
{
    let outcome = aggregate(client, pacer, catalog, config).await;

    let total_unique = outcome.leads.len();
    let ranked = rank(outcome.leads.into_leads());
    tracing::info!(
        total_unique,
        active = ranked.len(),
        failed_queries = outcome.failures.len(),
        "aggregation finished"
    );

    write_snapshot(output, &ranked)?;

    Ok(RunReport {
        summary: RunSummary::from_run(total_unique, &ranked),
        catalog_size: catalog.len(),
        queries_issued: outcome.queries_issued,
        failed_queries: outcome.failures.into_iter().map(|f| f.query).collect(),
        stopped_early: outcome.stopped_early,
        output_path: output.to_path_buf(),
    })
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
