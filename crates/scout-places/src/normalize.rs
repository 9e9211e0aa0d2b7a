//! Normalization from raw Places records to [`scout_core::Lead`].

use scout_core::lead::UNKNOWN_COMPANY_NAME;
use scout_core::{Lead, STATUS_CLOSED_PERMANENTLY};

use crate::types::{DisplayName, RawPlace};

/// Stable identifier used for dedup: the place `id`, falling back to the
/// resource `name`. `None` when neither is present.
#[must_use]
pub fn place_key(place: &RawPlace) -> Option<&str> {
    non_blank(place.id.as_deref()).or_else(|| non_blank(place.name.as_deref()))
}

/// `true` when the place reports it has shut down for good.
#[must_use]
pub fn is_closed_permanently(place: &RawPlace) -> bool {
    place.business_status.as_deref() == Some(STATUS_CLOSED_PERMANENTLY)
}

/// Normalizes a raw [`RawPlace`] into a [`Lead`].
///
/// Never fails: every optional field has a fallback. Callers must drop
/// permanently closed places before calling this (see
/// [`is_closed_permanently`]).
#[must_use]
pub fn normalize_place(place: RawPlace) -> Lead {
    let company_name = place
        .display_name
        .as_ref()
        .and_then(DisplayName::text)
        .map_or_else(|| UNKNOWN_COMPANY_NAME.to_string(), str::to_owned);

    // Domestic format first; the international form is only a fallback.
    let phone = non_empty(place.national_phone_number)
        .or_else(|| non_empty(place.international_phone_number));

    Lead::new(
        company_name,
        phone,
        non_empty(place.website_uri),
        non_empty(place.formatted_address),
        // A zero rating means "not yet rated".
        place.rating.filter(|r| r.is_finite() && *r > 0.0),
        non_empty(place.business_status),
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
