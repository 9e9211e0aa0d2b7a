pub mod app_config;
pub mod config;
pub mod geo;
pub mod lead;
pub mod queries;
pub mod rank;
pub mod summary;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_LOG_LEVEL};
pub use geo::GeoCircle;
pub use lead::{Lead, Priority, STATUS_CLOSED_PERMANENTLY, STATUS_OPERATIONAL};
pub use queries::{load_queries, QueryCatalog};
pub use rank::rank;
pub use summary::RunSummary;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read queries file {path}: {source}")]
    QueriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse queries file: {0}")]
    QueriesFileParse(#[source] serde_yaml::Error),

    #[error("config validation failed: {0}")]
    Validation(String),
}
