use scout_core::{Priority, STATUS_OPERATIONAL};

use super::*;
use crate::types::LocalizedText;

// -----------------------------------------------------------------------
// Fixtures
// -----------------------------------------------------------------------

fn make_place() -> RawPlace {
    RawPlace {
        id: Some("ChIJ-cool-air".to_owned()),
        name: Some("places/ChIJ-cool-air".to_owned()),
        display_name: Some(DisplayName::Localized(LocalizedText {
            text: Some("Cool Air HVAC".to_owned()),
            language_code: Some("en".to_owned()),
        })),
        national_phone_number: Some("(214) 555-0101".to_owned()),
        international_phone_number: Some("+1 214-555-0101".to_owned()),
        website_uri: Some("https://coolairhvac.com/".to_owned()),
        formatted_address: Some("100 Main St, Garland, TX 75040, USA".to_owned()),
        rating: Some(4.8),
        business_status: Some("OPERATIONAL".to_owned()),
    }
}

// -----------------------------------------------------------------------
// normalize_place
// -----------------------------------------------------------------------

#[test]
fn normalize_place_maps_every_field() {
    let lead = normalize_place(make_place());
    assert_eq!(lead.company_name, "Cool Air HVAC");
    assert_eq!(lead.phone.as_deref(), Some("(214) 555-0101"));
    assert_eq!(lead.website.as_deref(), Some("https://coolairhvac.com/"));
    assert_eq!(
        lead.address.as_deref(),
        Some("100 Main St, Garland, TX 75040, USA")
    );
    assert_eq!(lead.rating, Some(4.8));
    assert_eq!(lead.business_status, STATUS_OPERATIONAL);
    assert_eq!(lead.priority(), Priority::High);
}

#[test]
fn normalize_place_falls_back_to_international_phone() {
    let mut place = make_place();
    place.national_phone_number = None;
    let lead = normalize_place(place);
    assert_eq!(lead.phone.as_deref(), Some("+1 214-555-0101"));
}

#[test]
fn normalize_place_treats_empty_national_phone_as_absent() {
    let mut place = make_place();
    place.national_phone_number = Some(String::new());
    let lead = normalize_place(place);
    assert_eq!(lead.phone.as_deref(), Some("+1 214-555-0101"));
}

#[test]
fn normalize_place_without_any_phone() {
    let mut place = make_place();
    place.national_phone_number = None;
    place.international_phone_number = None;
    assert!(normalize_place(place).phone.is_none());
}

#[test]
fn normalize_place_accepts_plain_display_name() {
    let mut place = make_place();
    place.display_name = Some(DisplayName::Plain("Arctic Air Conditioning".to_owned()));
    assert_eq!(normalize_place(place).company_name, "Arctic Air Conditioning");
}

#[test]
fn normalize_place_missing_name_uses_placeholder() {
    let mut place = make_place();
    place.display_name = None;
    assert_eq!(normalize_place(place).company_name, "Unknown");
}

#[test]
fn normalize_place_missing_status_defaults_to_operational() {
    let mut place = make_place();
    place.business_status = None;
    let lead = normalize_place(place);
    assert_eq!(lead.business_status, STATUS_OPERATIONAL);
    assert!(lead.is_active());
}

#[test]
fn normalize_place_keeps_temporarily_closed_status() {
    let mut place = make_place();
    place.business_status = Some("CLOSED_TEMPORARILY".to_owned());
    let lead = normalize_place(place);
    assert_eq!(lead.business_status, "CLOSED_TEMPORARILY");
    assert!(!lead.is_active());
}

#[test]
fn normalize_place_missing_rating_is_low_priority() {
    let mut place = make_place();
    place.rating = None;
    let lead = normalize_place(place);
    assert!(lead.rating.is_none());
    assert_eq!(lead.priority(), Priority::Low);
}

#[test]
fn normalize_place_zero_rating_is_absent() {
    let mut place = make_place();
    place.rating = Some(0.0);
    let lead = normalize_place(place);
    assert!(lead.rating.is_none());
    assert_eq!(lead.priority(), Priority::Low);
}

#[test]
fn normalize_place_drops_non_finite_rating() {
    let mut place = make_place();
    place.rating = Some(f64::INFINITY);
    assert!(normalize_place(place).rating.is_none());
}

#[test]
fn normalize_place_sparse_record() {
    let place = RawPlace {
        id: Some("bare".to_owned()),
        ..RawPlace::default()
    };
    let lead = normalize_place(place);
    assert_eq!(lead.company_name, "Unknown");
    assert!(lead.phone.is_none());
    assert!(lead.website.is_none());
    assert!(lead.address.is_none());
    assert!(lead.rating.is_none());
    assert_eq!(lead.priority(), Priority::Low);
}

// -----------------------------------------------------------------------
// place_key / is_closed_permanently
// -----------------------------------------------------------------------

#[test]
fn place_key_prefers_id() {
    assert_eq!(place_key(&make_place()), Some("ChIJ-cool-air"));
}

#[test]
fn place_key_falls_back_to_resource_name() {
    let mut place = make_place();
    place.id = None;
    assert_eq!(place_key(&place), Some("places/ChIJ-cool-air"));
}

#[test]
fn place_key_none_without_identifiers() {
    let mut place = make_place();
    place.id = Some(String::new());
    place.name = None;
    assert_eq!(place_key(&place), None);
}

#[test]
fn closed_permanently_is_detected() {
    let mut place = make_place();
    place.business_status = Some("CLOSED_PERMANENTLY".to_owned());
    assert!(is_closed_permanently(&place));
}

#[test]
fn temporarily_closed_is_not_permanently_closed() {
    let mut place = make_place();
    place.business_status = Some("CLOSED_TEMPORARILY".to_owned());
    assert!(!is_closed_permanently(&place));
    place.business_status = None;
    assert!(!is_closed_permanently(&place));
}
