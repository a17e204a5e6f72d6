use std::fmt;

/// Outcome reported by the places service in the `status` field of every
/// response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacesApiStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    /// A status string this client does not know about. Treated like a
    /// non-OK success: the call yields no results but does not fail.
    Other(String),
}

impl PlacesApiStatus {
    pub fn from_wire(status: &str) -> Self {
        match status {
            "OK" => PlacesApiStatus::Ok,
            "ZERO_RESULTS" => PlacesApiStatus::ZeroResults,
            "OVER_QUERY_LIMIT" => PlacesApiStatus::OverQueryLimit,
            "REQUEST_DENIED" => PlacesApiStatus::RequestDenied,
            "INVALID_REQUEST" => PlacesApiStatus::InvalidRequest,
            "UNKNOWN_ERROR" => PlacesApiStatus::UnknownError,
            other => PlacesApiStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlacesApiStatus::Ok => "OK",
            PlacesApiStatus::ZeroResults => "ZERO_RESULTS",
            PlacesApiStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            PlacesApiStatus::RequestDenied => "REQUEST_DENIED",
            PlacesApiStatus::InvalidRequest => "INVALID_REQUEST",
            PlacesApiStatus::UnknownError => "UNKNOWN_ERROR",
            PlacesApiStatus::Other(status) => status,
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == PlacesApiStatus::Ok
    }

    /// Statuses the service uses to reject a request. Everything else,
    /// ZERO_RESULTS and OVER_QUERY_LIMIT included, flows through as a
    /// success with an empty result set.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            PlacesApiStatus::RequestDenied
                | PlacesApiStatus::InvalidRequest
                | PlacesApiStatus::UnknownError
        )
    }
}

impl fmt::Display for PlacesApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
