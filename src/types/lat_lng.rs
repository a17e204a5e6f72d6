use crate::services::places_client::types::places_service_error::PlacesServiceError;

/// A latitude/longitude pair, kept in the textual form it was supplied in so
/// the rendered `location` parameter carries the caller's precision verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatLng {
    lat: String,
    lng: String,
}

impl LatLng {
    pub fn new(
        lat: impl Into<String>,
        lng: impl Into<String>,
    ) -> Result<Self, PlacesServiceError> {
        let lat = lat.into();
        let lng = lng.into();

        validate_degrees("lat", &lat)?;
        validate_degrees("lng", &lng)?;

        Ok(LatLng { lat, lng })
    }

    /// Builds a pair from already-numeric degrees, e.g. coordinates decoded
    /// from a response geometry.
    pub fn from_degrees(lat: f64, lng: f64) -> Result<Self, PlacesServiceError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(PlacesServiceError::Validation(
                "lat and lng must be finite numbers".to_string(),
            ));
        }

        Ok(LatLng {
            lat: lat.to_string(),
            lng: lng.to_string(),
        })
    }

    pub fn lat(&self) -> &str {
        &self.lat
    }

    pub fn lng(&self) -> &str {
        &self.lng
    }

    /// Renders the pair as `<lat>,<lng>` for wire transmission.
    pub fn position(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

fn validate_degrees(field: &str, value: &str) -> Result<(), PlacesServiceError> {
    if value.trim().is_empty() {
        return Err(PlacesServiceError::Validation(format!(
            "{field} must not be empty and should be numeric"
        )));
    }

    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(()),
        _ => Err(PlacesServiceError::Validation(format!(
            "{field} must be numeric, got '{value}'"
        ))),
    }
}
