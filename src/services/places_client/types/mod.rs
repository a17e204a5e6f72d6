pub(crate) mod place_autocomplete_response;
pub(crate) mod place_details_response;
pub(crate) mod place_search_response;
pub mod places_service_error;
