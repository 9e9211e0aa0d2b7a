use std::path::PathBuf;

use crate::geo::GeoCircle;

#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub places_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub inter_query_delay_ms: u64,
    /// Unique-lead count at which remaining queries are skipped.
    pub target_leads: usize,
    pub bias: GeoCircle,
    pub output_path: PathBuf,
    pub queries_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("places_base_url", &self.places_base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("inter_query_delay_ms", &self.inter_query_delay_ms)
            .field("target_leads", &self.target_leads)
            .field("bias", &self.bias)
            .field("output_path", &self.output_path)
            .field("queries_path", &self.queries_path)
            .finish()
    }
}
