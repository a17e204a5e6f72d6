use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct PlaceGeometryLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PlaceGeometry {
    pub location: PlaceGeometryLocation,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PlaceSearchResult {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub reference: String,
    pub types: Vec<String>,
    pub geometry: PlaceGeometry,
    pub rating: Option<f64>,
    pub vicinity: Option<String>,
}

// `results` and `html_attributions` are defaulted so failure statuses
// without a payload section still decode.
#[derive(Debug, Deserialize, Serialize)]
pub struct PlaceSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceSearchResult>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}
