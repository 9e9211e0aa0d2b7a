mod collect;
mod report;
mod sink;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(about = "Collect and rank local business leads from Places text search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run every catalog query, then write the ranked lead snapshot
    Collect {
        /// Snapshot path (overrides `SCOUT_OUTPUT_PATH`)
        #[arg(long)]
        output: Option<PathBuf>,
        /// YAML query catalog (overrides `SCOUT_QUERIES_PATH`)
        #[arg(long)]
        queries: Option<PathBuf>,
        /// Stop issuing queries once this many unique leads are held
        #[arg(long, value_parser = parse_target)]
        target: Option<usize>,
        /// Print the queries that would run without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the query catalog in issue order
    Queries {
        /// YAML query catalog (overrides `SCOUT_QUERIES_PATH`)
        #[arg(long)]
        queries: Option<PathBuf>,
    },
}

fn parse_target(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("target must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid target '{raw}': {e}")),
    }
}

/// `RUST_LOG` wins when it parses; otherwise `log_level`, then `info`.
fn log_filter(rust_log: Option<&str>, log_level: &str) -> tracing_subscriber::EnvFilter {
    rust_log
        .and_then(|directives| tracing_subscriber::EnvFilter::try_new(directives).ok())
        .or_else(|| tracing_subscriber::EnvFilter::try_new(log_level).ok())
        .unwrap_or_else(|| tracing_subscriber::EnvFilter::new(scout_core::DEFAULT_LOG_LEVEL))
}

fn init_tracing(log_level: &str) {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), log_level))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Collect {
            output,
            queries,
            target,
            dry_run,
        }) => {
            let config = scout_core::load_app_config()?;
            init_tracing(&config.log_level);
            let options = collect::CollectOptions {
                output,
                queries,
                target,
                dry_run,
            };
            collect::run_collect(&config, options).await?;
        }
        Some(Commands::Queries { queries }) => {
            init_tracing(scout_core::DEFAULT_LOG_LEVEL);
            let configured = std::env::var_os("SCOUT_QUERIES_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from);
            let catalog = collect::resolve_catalog(queries.as_deref(), configured.as_deref())?;
            for (i, query) in catalog.iter().enumerate() {
                println!("{:>3}. {query}", i + 1);
            }
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}
