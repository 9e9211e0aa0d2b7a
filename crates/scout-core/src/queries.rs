//! The ordered catalog of text queries a run issues.
//!
//! Query order decides which searches run before the early-stop threshold is
//! reached. Duplicate queries are allowed; result dedup happens downstream.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// HVAC searches across the Dallas-Fort Worth metroplex: the eight core
/// suburbs first, then phrasing variants for the same suburbs, then broad
/// Dallas searches, then the outer ring of cities.
const DFW_HVAC_QUERIES: &[&str] = &[
    "hvac Garland TX",
    "air conditioning Mesquite TX",
    "heating repair Carrollton TX",
    "ac service Richardson TX",
    "hvac company Irving TX",
    "air conditioning Lewisville TX",
    "heating Coppell TX",
    "ac repair Grapevine TX",
    "air conditioning repair Garland TX",
    "heating and cooling Mesquite TX",
    "hvac repair Carrollton TX",
    "air conditioner service Richardson TX",
    "heating company Irving TX",
    "hvac repair Lewisville TX",
    "air conditioning company Coppell TX",
    "heating repair Grapevine TX",
    "hvac contractor Dallas",
    "air conditioning service Dallas TX",
    "heating and air Dallas",
    "ac installation Dallas",
    "hvac maintenance Dallas",
    "hvac Plano TX",
    "ac repair Plano",
    "hvac Frisco TX",
    "air conditioning Allen TX",
    "hvac McKinney TX",
    "ac service Prosper TX",
    "hvac Little Elm TX",
    "air conditioning The Colony TX",
    "hvac Denton TX",
    "ac repair Denton",
    "heating Flower Mound TX",
    "hvac Highland Village TX",
    "ac service Southlake TX",
    "hvac Colleyville TX",
    "air conditioning Bedford TX",
    "hvac Euless TX",
    "ac repair Hurst TX",
    "heating North Richland Hills TX",
    "hvac Keller TX",
    "air conditioning Watauga TX",
    "ac service Haltom City TX",
    "hvac Richland Hills TX",
    "heating Arlington TX",
    "ac repair Grand Prairie TX",
    "hvac Duncanville TX",
    "air conditioning DeSoto TX",
    "ac service Lancaster TX",
    "hvac Cedar Hill TX",
    "heating Mansfield TX",
    "ac repair Burleson TX",
    "hvac Fort Worth TX",
    "air conditioning service Fort Worth",
    "heating repair Fort Worth TX",
];

/// A fixed, ordered, non-empty list of non-blank search queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCatalog {
    queries: Vec<String>,
}

impl QueryCatalog {
    /// Builds a catalog, rejecting an empty list or blank entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `queries` is empty or any query
    /// is blank.
    pub fn new(queries: Vec<String>) -> Result<Self, ConfigError> {
        let catalog = Self { queries };
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    /// The built-in DFW HVAC catalog.
    #[must_use]
    pub fn dfw_hvac() -> Self {
        Self {
            queries: DFW_HVAC_QUERIES.iter().map(|q| (*q).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(String::as_str)
    }
}

impl Default for QueryCatalog {
    fn default() -> Self {
        Self::dfw_hvac()
    }
}

/// Load and validate a query catalog from a YAML file of the form
/// `queries: ["hvac Plano TX", ...]`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_queries(path: &Path) -> Result<QueryCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::QueriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: QueryCatalog =
        serde_yaml::from_str(&content).map_err(ConfigError::QueriesFileParse)?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &QueryCatalog) -> Result<(), ConfigError> {
    if catalog.queries.is_empty() {
        return Err(ConfigError::Validation(
            "query catalog must contain at least one query".to_string(),
        ));
    }

    if let Some(index) = catalog.queries.iter().position(|q| q.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "query at index {index} is blank"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfw_hvac_catalog_is_valid() {
        let catalog = QueryCatalog::dfw_hvac();
        assert_eq!(catalog.len(), 54);
        assert!(validate_catalog(&catalog).is_ok());
        assert_eq!(catalog.iter().next(), Some("hvac Garland TX"));
    }

    #[test]
    fn new_rejects_empty_catalog() {
        let err = QueryCatalog::new(vec![]).unwrap_err();
        assert!(err.to_string().contains("at least one query"));
    }

    #[test]
    fn new_rejects_blank_query() {
        let err = QueryCatalog::new(vec!["hvac Plano TX".to_string(), "   ".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("index 1 is blank"));
    }

    #[test]
    fn new_keeps_duplicates_in_order() {
        let catalog = QueryCatalog::new(vec![
            "hvac Plano TX".to_string(),
            "hvac Plano TX".to_string(),
            "hvac Frisco TX".to_string(),
        ])
        .unwrap();
        let queries: Vec<&str> = catalog.iter().collect();
        assert_eq!(queries, ["hvac Plano TX", "hvac Plano TX", "hvac Frisco TX"]);
    }

    #[test]
    fn parses_yaml_catalog() {
        let catalog: QueryCatalog =
            serde_yaml::from_str("queries:\n  - spa Dallas TX\n  - nail salon Plano TX\n")
                .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn load_queries_missing_file_is_io_error() {
        let err = load_queries(Path::new("/nonexistent/scout/queries.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::QueriesFileIo { .. }));
    }

    #[test]
    fn load_queries_reads_file() {
        let path = std::env::temp_dir().join(format!("scout-queries-{}.yaml", std::process::id()));
        std::fs::write(&path, "queries:\n  - barber shop Frisco TX\n").unwrap();
        let catalog = load_queries(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(catalog.iter().collect::<Vec<_>>(), ["barber shop Frisco TX"]);
    }
}
