use serde::{Deserialize, Serialize};

use crate::types::prediction::{MatchedSubstring, PredictionTerm};

#[derive(Debug, Deserialize, Serialize)]
pub struct PredictionEntry {
    pub id: String,
    pub reference: String,
    pub description: String,
    #[serde(default)]
    pub matched_substrings: Vec<MatchedSubstring>,
    #[serde(default)]
    pub terms: Vec<PredictionTerm>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PlaceAutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<PredictionEntry>,
}
