use serde::{Deserialize, Serialize};

use crate::services::places_client::types::place_autocomplete_response::PredictionEntry;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchedSubstring {
    pub length: u32,
    pub offset: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PredictionTerm {
    pub offset: u32,
    pub value: String,
}

/// One entry of an autocomplete response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prediction {
    pub id: String,
    pub reference: String,
    pub description: String,
    pub matched_substrings: Vec<MatchedSubstring>,
    pub terms: Vec<PredictionTerm>,
    pub place_types: Vec<String>,
}

impl Prediction {
    pub(crate) fn from_entry(entry: PredictionEntry) -> Self {
        Prediction {
            id: entry.id,
            reference: entry.reference,
            description: entry.description,
            matched_substrings: entry.matched_substrings,
            terms: entry.terms,
            place_types: entry.types,
        }
    }
}
