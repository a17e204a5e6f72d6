//! Decodes raw response bodies into wire structs and applies the service's
//! status policy. Envelope types never leave the client.

use super::types::place_autocomplete_response::{PlaceAutocompleteResponse, PredictionEntry};
use super::types::place_details_response::{PlaceDetailsResponse, PlaceDetailsResult};
use super::types::place_search_response::{PlaceSearchResponse, PlaceSearchResult};
use super::types::places_service_error::PlacesServiceError;
use crate::types::api_status::PlacesApiStatus;

#[derive(Debug)]
pub(crate) struct ParsedSearch {
    pub status: PlacesApiStatus,
    pub results: Vec<PlaceSearchResult>,
    pub html_attributions: Vec<String>,
}

pub(crate) struct ParsedDetails {
    pub status: PlacesApiStatus,
    pub result: Option<PlaceDetailsResult>,
    pub html_attributions: Vec<String>,
}

#[derive(Debug)]
pub(crate) struct ParsedAutocomplete {
    pub status: PlacesApiStatus,
    pub predictions: Vec<PredictionEntry>,
}

pub(crate) fn parse_search_response(body: &str) -> Result<ParsedSearch, PlacesServiceError> {
    let response: PlaceSearchResponse = serde_json::from_str(body)?;
    Ok(ParsedSearch {
        status: PlacesApiStatus::from_wire(&response.status),
        results: response.results,
        html_attributions: response.html_attributions,
    })
}

pub(crate) fn parse_details_response(body: &str) -> Result<ParsedDetails, PlacesServiceError> {
    let response: PlaceDetailsResponse = serde_json::from_str(body)?;
    Ok(ParsedDetails {
        status: PlacesApiStatus::from_wire(&response.status),
        result: response.result,
        html_attributions: response.html_attributions,
    })
}

pub(crate) fn parse_autocomplete_response(
    body: &str,
) -> Result<ParsedAutocomplete, PlacesServiceError> {
    let response: PlaceAutocompleteResponse = serde_json::from_str(body)?;
    Ok(ParsedAutocomplete {
        status: PlacesApiStatus::from_wire(&response.status),
        predictions: response.predictions,
    })
}

/// Turns the rejection statuses into [`PlacesServiceError::Api`].
/// ZERO_RESULTS and OVER_QUERY_LIMIT pass through; they surface as empty
/// result sets instead.
pub(crate) fn ensure_not_rejected(status: &PlacesApiStatus) -> Result<(), PlacesServiceError> {
    if status.is_rejection() {
        return Err(PlacesServiceError::Api(status.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_search_results_in_order() {
        let body = json!({
            "status": "OK",
            "results": [
                {
                    "id": "1",
                    "name": "First",
                    "icon": "http://example.com/a.png",
                    "reference": "ref-a",
                    "types": ["cafe"],
                    "geometry": {"location": {"lat": 1.0, "lng": 2.0}},
                },
                {
                    "id": "2",
                    "name": "Second",
                    "icon": "http://example.com/b.png",
                    "reference": "ref-b",
                    "types": [],
                    "geometry": {"location": {"lat": 3.0, "lng": 4.0}},
                    "rating": 3.5,
                    "vicinity": "Main St"
                }
            ],
            "html_attributions": ["Listings by Example"]
        })
        .to_string();

        let parsed = parse_search_response(&body).unwrap();
        assert!(parsed.status.is_ok());
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].name, "First");
        assert_eq!(parsed.results[1].rating, Some(3.5));
        assert_eq!(parsed.html_attributions, vec!["Listings by Example"]);
    }

    #[test]
    fn missing_payload_sections_default() {
        let body = json!({"status": "REQUEST_DENIED"}).to_string();

        let parsed = parse_search_response(&body).unwrap();
        assert_eq!(parsed.status, PlacesApiStatus::RequestDenied);
        assert!(parsed.results.is_empty());
        assert!(parsed.html_attributions.is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = parse_search_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, PlacesServiceError::Decode(_)));

        let err = parse_autocomplete_response("").unwrap_err();
        assert!(matches!(err, PlacesServiceError::Decode(_)));
    }

    #[test]
    fn details_without_result_parses_to_none() {
        let body = json!({"status": "ZERO_RESULTS", "html_attributions": []}).to_string();

        let parsed = parse_details_response(&body).unwrap();
        assert_eq!(parsed.status, PlacesApiStatus::ZeroResults);
        assert!(parsed.result.is_none());
    }

    #[test]
    fn parses_autocomplete_predictions() {
        let body = json!({
            "status": "OK",
            "predictions": [{
                "id": "p1",
                "reference": "ref-p1",
                "description": "Stockholm, Sweden",
                "matched_substrings": [{"length": 6, "offset": 0}],
                "terms": [{"offset": 0, "value": "Stockholm"}],
                "types": ["locality"]
            }]
        })
        .to_string();

        let parsed = parse_autocomplete_response(&body).unwrap();
        assert_eq!(parsed.predictions.len(), 1);
        assert_eq!(parsed.predictions[0].matched_substrings[0].length, 6);
    }

    #[test]
    fn rejection_statuses_become_api_errors() {
        for status in ["REQUEST_DENIED", "INVALID_REQUEST", "UNKNOWN_ERROR"] {
            let err = ensure_not_rejected(&PlacesApiStatus::from_wire(status)).unwrap_err();
            match err {
                PlacesServiceError::Api(api_status) => assert_eq!(api_status.as_str(), status),
                other => panic!("expected Api error, got {other:?}"),
            }
        }

        assert!(ensure_not_rejected(&PlacesApiStatus::Ok).is_ok());
        assert!(ensure_not_rejected(&PlacesApiStatus::OverQueryLimit).is_ok());
        assert!(ensure_not_rejected(&PlacesApiStatus::Other("NEW".into())).is_ok());
    }
}
