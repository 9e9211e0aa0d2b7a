//! HTTP client for the Places API (New) text-search endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use scout_core::GeoCircle;

use crate::error::PlacesError;
use crate::types::{
    decode_places, RawPlace, SearchTextRequest, SearchTextResponse, SEARCH_FIELD_MASK,
};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/";

const SEARCH_TEXT_PATH: &str = "v1/places:searchText";

/// Client for `POST /v1/places:searchText`.
///
/// One call is one attempt: there is no retry on any error. Non-2xx answers
/// surface as [`PlacesError::Transport`] carrying the status and body.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    search_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let search_url = Self::search_url(base_url)?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
        })
    }

    /// Runs one text search biased toward `bias`.
    ///
    /// A response without a `places` key is an empty result, not an error.
    /// Individual records that fail to decode are logged and dropped.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Transport`] for any non-2xx status.
    /// - [`PlacesError::Http`] on network failure or timeout.
    /// - [`PlacesError::Deserialize`] if the body is not a JSON object with an
    ///   optional `places` array.
    pub async fn search_text(
        &self,
        query: &str,
        bias: &GeoCircle,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let body = SearchTextRequest::new(query, bias);

        let response = self
            .client
            .post(self.search_url.clone())
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", SEARCH_FIELD_MASK)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let parsed = serde_json::from_str::<SearchTextResponse>(&text).map_err(|e| {
            PlacesError::Deserialize {
                context: format!("searchText(query={query})"),
                source: e,
            }
        })?;

        Ok(decode_places(query, parsed.places))
    }

    /// Builds the `places:searchText` URL under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidBaseUrl`] if `base_url` does not parse.
    fn search_url(base_url: &str) -> Result<Url, PlacesError> {
        // Exactly one trailing slash so the join appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        base.join(SEARCH_TEXT_PATH)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
