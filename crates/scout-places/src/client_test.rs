use super::*;

#[test]
fn search_url_default_base() {
    let url = PlacesClient::search_url(DEFAULT_BASE_URL).unwrap();
    assert_eq!(
        url.as_str(),
        "https://places.googleapis.com/v1/places:searchText"
    );
}

#[test]
fn search_url_without_trailing_slash() {
    let url = PlacesClient::search_url("http://127.0.0.1:8080").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/places:searchText");
}

#[test]
fn search_url_keeps_path_prefix() {
    let url = PlacesClient::search_url("https://proxy.example.com/google/").unwrap();
    assert_eq!(
        url.as_str(),
        "https://proxy.example.com/google/v1/places:searchText"
    );
}

#[test]
fn search_url_rejects_invalid_base() {
    let result = PlacesClient::search_url("not-a-url");
    let err = result.unwrap_err();
    assert!(
        matches!(err, PlacesError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn transport_error_reports_status() {
    let err = PlacesError::Transport {
        status: 403,
        body: "API key not valid".to_owned(),
    };
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        err.to_string(),
        "places API returned HTTP 403: API key not valid"
    );
}
