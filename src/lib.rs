//! Client for the Google Places web service.
//!
//! [`PlacesService`] covers the three operations the service exposes:
//! text/location search, place details lookup and autocomplete. Request
//! parameters are assembled through [`PlacesQuery`], responses are decoded
//! and mapped into [`Place`], [`PlaceDetails`] and [`Prediction`] values.
//! Point `PlacesServiceConfig::host` at a different base URL to run several
//! independently configured clients, or a mock server in tests.

pub mod services;
pub mod types;

pub use services::places_client::places_service::{
    OutputFormat, PlacesService, PlacesServiceConfig, RequestType, DEFAULT_API_HOST,
    DEFAULT_SEARCH_RADIUS_METERS,
};
pub use services::places_client::query::{PlacesQuery, RankBy, MAX_RADIUS_METERS};
pub use services::places_client::types::places_service_error::PlacesServiceError;
pub use types::api_status::PlacesApiStatus;
pub use types::lat_lng::LatLng;
pub use types::place::Place;
pub use types::place_details::{AddressComponent, PlaceDetails};
pub use types::prediction::{MatchedSubstring, Prediction, PredictionTerm};
