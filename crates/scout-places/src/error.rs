use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("places API returned HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid places base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl PlacesError {
    /// HTTP status carried by the error, when the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            PlacesError::Transport { status, .. } => Some(*status),
            PlacesError::Http(e) => e.status().map(|s| s.as_u16()),
            PlacesError::Deserialize { .. } | PlacesError::InvalidBaseUrl { .. } => None,
        }
    }
}
