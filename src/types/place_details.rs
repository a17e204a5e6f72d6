use serde::{Deserialize, Serialize};

use crate::services::places_client::types::place_details_response::PlaceDetailsResult;
use crate::services::places_client::types::places_service_error::PlacesServiceError;
use crate::types::place::Place;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

/// A place enriched by a details lookup. Embeds the base [`Place`] rather
/// than extending it; callers branch on `is_details()`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceDetails {
    pub place: Place,
    pub address_components: Option<Vec<AddressComponent>>,
    /// Raw event entries, passed through undecoded.
    pub events: Option<Vec<serde_json::Value>>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    /// Only populated when `events` is present in the response.
    pub url: Option<String>,
}

impl PlaceDetails {
    pub(crate) fn from_details_result(
        result: PlaceDetailsResult,
    ) -> Result<Self, PlacesServiceError> {
        let PlaceDetailsResult {
            base,
            address_components,
            events,
            formatted_address,
            formatted_phone_number,
            international_phone_number,
            url,
        } = result;

        let url = if events.is_some() { url } else { None };

        Ok(PlaceDetails {
            place: Place::from_search_result(base)?,
            address_components,
            events,
            formatted_address,
            formatted_phone_number,
            international_phone_number,
            url,
        })
    }

    pub fn is_details(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::places_client::types::place_search_response::{
        PlaceGeometry, PlaceGeometryLocation, PlaceSearchResult,
    };

    fn details_result() -> PlaceDetailsResult {
        PlaceDetailsResult {
            base: PlaceSearchResult {
                id: "abc123".to_string(),
                name: "Corner Cafe".to_string(),
                icon: "http://example.com/cafe.png".to_string(),
                reference: "ref-1".to_string(),
                types: vec!["cafe".to_string()],
                geometry: PlaceGeometry {
                    location: PlaceGeometryLocation {
                        lat: 40.7128,
                        lng: -74.006,
                    },
                },
                rating: None,
                vicinity: None,
            },
            address_components: None,
            events: None,
            formatted_address: Some("123 Example St, New York".to_string()),
            formatted_phone_number: None,
            international_phone_number: None,
            url: Some("http://example.com/listing".to_string()),
        }
    }

    #[test]
    fn embeds_base_place_fields() {
        let details = PlaceDetails::from_details_result(details_result()).unwrap();

        assert!(details.is_details());
        assert_eq!(details.place.name, "Corner Cafe");
        assert_eq!(
            details.formatted_address.as_deref(),
            Some("123 Example St, New York")
        );
        assert_eq!(details.formatted_phone_number, None);
        assert_eq!(details.address_components, None);
    }

    #[test]
    fn url_is_dropped_without_events() {
        let details = PlaceDetails::from_details_result(details_result()).unwrap();
        assert_eq!(details.events, None);
        assert_eq!(details.url, None);
    }

    #[test]
    fn url_is_kept_alongside_events() {
        let mut result = details_result();
        result.events = Some(vec![serde_json::json!({"event_id": "e1"})]);

        let details = PlaceDetails::from_details_result(result).unwrap();
        assert_eq!(details.url.as_deref(), Some("http://example.com/listing"));
        assert_eq!(details.events.as_ref().map(Vec::len), Some(1));
    }
}
