//! Wire types for the Places API (New) `places:searchText` endpoint.
//!
//! ## Observed response shape
//!
//! ### `id` / `name`
//! `id` is the bare place ID; `name` is the resource name (`places/{id}`).
//! Both are requested; `id` wins when present.
//!
//! ### `displayName`
//! Normally a localized-text object `{"text": "...", "languageCode": "en"}`,
//! but older field masks and cached fixtures carry a plain string. Both
//! shapes are accepted.
//!
//! ### Phone numbers
//! `nationalPhoneNumber` is the domestic format (`(214) 555-0101`);
//! `internationalPhoneNumber` (`+1 214-555-0101`) is the fallback.
//!
//! ### `businessStatus`
//! One of `OPERATIONAL`, `CLOSED_TEMPORARILY`, `CLOSED_PERMANENTLY`. Often
//! absent for newly listed places.
//!
//! ### Empty results
//! When nothing matches, the response is `{}` with no `places` key at all.
//!
//! ### Malformed records
//! `places` entries are decoded one at a time (see [`decode_places`]); an
//! entry whose fields have unexpected types is dropped on its own.

use serde::{Deserialize, Serialize};

use scout_core::GeoCircle;

/// Fields requested through the `X-Goog-FieldMask` header.
pub const SEARCH_FIELD_MASK: &str = "places.id,places.name,places.displayName,\
places.formattedAddress,places.nationalPhoneNumber,places.internationalPhoneNumber,\
places.websiteUri,places.rating,places.businessStatus";

/// Top-level response from `POST /v1/places:searchText`.
///
/// Entries stay as raw JSON until [`decode_places`] so one bad record does
/// not fail the whole page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<serde_json::Value>,
}

/// Decodes each entry of `places` into a [`RawPlace`], skipping (and logging)
/// entries that do not match the expected shape.
#[must_use]
pub fn decode_places(query: &str, places: Vec<serde_json::Value>) -> Vec<RawPlace> {
    places
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<RawPlace>(value) {
            Ok(place) => Some(place),
            Err(error) => {
                tracing::warn!(query, index, error = %error, "skipping malformed place record");
                None
            }
        })
        .collect()
}

/// A single place as returned by the search endpoint. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    pub id: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<DisplayName>,
    pub national_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website_uri: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub business_status: Option<String>,
}

/// `displayName` in either of its observed shapes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DisplayName {
    Localized(LocalizedText),
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: Option<String>,
    pub language_code: Option<String>,
}

impl DisplayName {
    /// The display text, or `None` when it is missing or blank.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        let text = match self {
            DisplayName::Localized(localized) => localized.text.as_deref(),
            DisplayName::Plain(s) => Some(s.as_str()),
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

/// Request body for `places:searchText`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchTextRequest<'a> {
    pub text_query: &'a str,
    pub location_bias: LocationBias,
}

#[derive(Debug, Serialize)]
pub(crate) struct LocationBias {
    pub circle: Circle,
}

#[derive(Debug, Serialize)]
pub(crate) struct Circle {
    pub center: LatLng,
    pub radius: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> SearchTextRequest<'a> {
    pub(crate) fn new(text_query: &'a str, bias: &GeoCircle) -> Self {
        Self {
            text_query,
            location_bias: LocationBias {
                circle: Circle {
                    center: LatLng {
                        latitude: bias.latitude,
                        longitude: bias.longitude,
                    },
                    radius: bias.radius_meters,
                },
            },
        }
    }
}
