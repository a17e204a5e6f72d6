use thiserror::Error;

use crate::types::api_status::PlacesApiStatus;

#[derive(Debug, Error)]
pub enum PlacesServiceError {
    /// The caller supplied an out-of-range, missing or unrecognized input.
    /// Raised before any request goes out.
    #[error("invalid request input: {0}")]
    Validation(String),

    #[error("error parsing web service response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service rejected the request outright.
    #[error("bad request to API, got response with status: {0}")]
    Api(PlacesApiStatus),

    /// A details lookup completed but produced no usable result object.
    /// Carries the status the service reported for the call.
    #[error("no details result available, response status was: {0}")]
    NotFound(PlacesApiStatus),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}
