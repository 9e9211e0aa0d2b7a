//! The search seam the aggregator drives.

use std::future::Future;

use scout_core::GeoCircle;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::RawPlace;

/// Anything that can answer a biased text query with raw places.
///
/// Implementations return an empty `Vec` for "no matches" and reserve `Err`
/// for failed calls.
pub trait SearchClient {
    fn search(
        &self,
        query: &str,
        bias: &GeoCircle,
    ) -> impl Future<Output = Result<Vec<RawPlace>, PlacesError>> + Send;
}

impl SearchClient for PlacesClient {
    fn search(
        &self,
        query: &str,
        bias: &GeoCircle,
    ) -> impl Future<Output = Result<Vec<RawPlace>, PlacesError>> + Send {
        self.search_text(query, bias)
    }
}
