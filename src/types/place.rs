use crate::services::places_client::types::place_search_response::PlaceSearchResult;
use crate::services::places_client::types::places_service_error::PlacesServiceError;
use crate::types::lat_lng::LatLng;

const STATIC_MAP_BASE_URL: &str = "http://maps.googleapis.com/maps/api/staticmap";

/// One entry of a search response. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub rating: Option<f64>,
    pub reference: String,
    pub place_types: Vec<String>,
    pub vicinity: Option<String>,
    pub location: LatLng,
    /// Static-map image URL centered on the place, derived once at
    /// construction from `location`.
    pub static_map_url: String,
}

impl Place {
    pub(crate) fn from_search_result(result: PlaceSearchResult) -> Result<Self, PlacesServiceError> {
        let location =
            LatLng::from_degrees(result.geometry.location.lat, result.geometry.location.lng)?;
        let static_map_url = static_map_url(&location);

        Ok(Place {
            id: result.id,
            name: result.name,
            icon: result.icon,
            rating: result.rating,
            reference: result.reference,
            place_types: result.types,
            vicinity: result.vicinity,
            location,
            static_map_url,
        })
    }

    pub fn is_details(&self) -> bool {
        false
    }
}

pub(crate) fn static_map_url(location: &LatLng) -> String {
    let position = location.position();
    format!(
        "{STATIC_MAP_BASE_URL}?center={position}&zoom=15&size=300x300&maptype=terrain&sensor=false&markers=color:blue|Clabel:S|{position}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::places_client::types::place_search_response::{
        PlaceGeometry, PlaceGeometryLocation,
    };

    fn search_result() -> PlaceSearchResult {
        PlaceSearchResult {
            id: "abc123".to_string(),
            name: "Corner Cafe".to_string(),
            icon: "http://example.com/cafe.png".to_string(),
            reference: "ref-1".to_string(),
            types: vec!["cafe".to_string(), "food".to_string()],
            geometry: PlaceGeometry {
                location: PlaceGeometryLocation {
                    lat: 40.7128,
                    lng: -74.006,
                },
            },
            rating: Some(4.5),
            vicinity: Some("123 Example St".to_string()),
        }
    }

    #[test]
    fn maps_all_fields_from_search_result() {
        let place = Place::from_search_result(search_result()).unwrap();

        assert_eq!(place.id, "abc123");
        assert_eq!(place.name, "Corner Cafe");
        assert_eq!(place.reference, "ref-1");
        assert_eq!(place.rating, Some(4.5));
        assert_eq!(place.place_types, vec!["cafe", "food"]);
        assert_eq!(place.vicinity.as_deref(), Some("123 Example St"));
        assert_eq!(place.location.position(), "40.7128,-74.006");
        assert!(!place.is_details());
    }

    #[test]
    fn derives_static_map_url_from_location() {
        let place = Place::from_search_result(search_result()).unwrap();

        assert_eq!(
            place.static_map_url,
            "http://maps.googleapis.com/maps/api/staticmap?center=40.7128,-74.006\
             &zoom=15&size=300x300&maptype=terrain&sensor=false\
             &markers=color:blue|Clabel:S|40.7128,-74.006"
        );
    }

    #[test]
    fn missing_optionals_stay_absent() {
        let mut result = search_result();
        result.rating = None;
        result.vicinity = None;

        let place = Place::from_search_result(result).unwrap();
        assert_eq!(place.rating, None);
        assert_eq!(place.vicinity, None);
    }
}
