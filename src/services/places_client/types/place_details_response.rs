use serde::{Deserialize, Serialize};

use super::place_search_response::PlaceSearchResult;
use crate::types::place_details::AddressComponent;

#[derive(Deserialize, Serialize)]
pub struct PlaceDetailsResult {
    #[serde(flatten)]
    pub base: PlaceSearchResult,
    pub address_components: Option<Vec<AddressComponent>>,
    pub events: Option<Vec<serde_json::Value>>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub url: Option<String>,
}

#[derive(Deserialize, Serialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetailsResult>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}
