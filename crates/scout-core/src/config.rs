use crate::app_config::AppConfig;
use crate::geo::GeoCircle;
use crate::ConfigError;

/// Log filter used when neither `RUST_LOG` nor `SCOUT_LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid(var, "must be a finite number".to_string()))
        }
    };

    let places_api_key = require("GOOGLE_PLACES_API_KEY")?;
    let places_base_url = or_default("SCOUT_PLACES_BASE_URL", "https://places.googleapis.com");
    let log_level = or_default("SCOUT_LOG_LEVEL", DEFAULT_LOG_LEVEL);

    let request_timeout_secs = parse_u64("SCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SCOUT_USER_AGENT", "scout/0.1 (lead-generation)");
    let inter_query_delay_ms = parse_u64("SCOUT_INTER_QUERY_DELAY_MS", "150")?;

    let target_leads = parse_usize("SCOUT_TARGET_LEADS", "200")?;
    if target_leads == 0 {
        return Err(invalid("SCOUT_TARGET_LEADS", "must be at least 1".to_string()));
    }

    let latitude = parse_f64("SCOUT_BIAS_LATITUDE", "32.7767")?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(invalid(
            "SCOUT_BIAS_LATITUDE",
            format!("{latitude} is outside [-90, 90]"),
        ));
    }
    let longitude = parse_f64("SCOUT_BIAS_LONGITUDE", "-96.7970")?;
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(invalid(
            "SCOUT_BIAS_LONGITUDE",
            format!("{longitude} is outside [-180, 180]"),
        ));
    }
    let radius_meters = parse_f64("SCOUT_BIAS_RADIUS_METERS", "50000.0")?;
    if radius_meters <= 0.0 {
        return Err(invalid(
            "SCOUT_BIAS_RADIUS_METERS",
            "must be greater than 0".to_string(),
        ));
    }

    let output_path = PathBuf::from(or_default(
        "SCOUT_OUTPUT_PATH",
        "./research/hvac-leads-dfw.json",
    ));
    let queries_path = lookup("SCOUT_QUERIES_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        places_api_key,
        places_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        inter_query_delay_ms,
        target_leads,
        bias: GeoCircle {
            latitude,
            longitude,
            radius_meters,
        },
        output_path,
        queries_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
