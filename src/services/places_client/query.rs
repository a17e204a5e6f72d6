use crate::services::places_client::types::places_service_error::PlacesServiceError;
use crate::types::lat_lng::LatLng;

const PARAM_KEY: &str = "key";
const PARAM_LOCATION: &str = "location";
const PARAM_RADIUS: &str = "radius";
const PARAM_SENSOR: &str = "sensor";
const PARAM_KEYWORD: &str = "keyword";
const PARAM_LANGUAGE: &str = "language";
const PARAM_NAME: &str = "name";
const PARAM_RANKBY: &str = "rankby";
const PARAM_TYPES: &str = "types";
const PARAM_REFERENCE: &str = "reference";
const PARAM_INPUT: &str = "input";
const PARAM_COMPONENTS: &str = "components";
const PARAM_OFFSET: &str = "offset";

const SENSOR_TRUE: &str = "true";
const SENSOR_FALSE: &str = "false";

/// Maximum allowed `radius`, in meters.
pub const MAX_RADIUS_METERS: u32 = 50_000;

/// Result ordering for search requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBy {
    Prominence,
    Distance,
}

impl RankBy {
    pub fn as_str(self) -> &'static str {
        match self {
            RankBy::Prominence => "prominence",
            RankBy::Distance => "distance",
        }
    }
}

/// Accumulates request parameters and renders the exact parameter list each
/// operation requires. Unset optional fields are omitted from the rendered
/// list entirely, never sent empty.
#[derive(Clone, Debug, Default)]
pub struct PlacesQuery {
    api_key: String,
    location: Option<LatLng>,
    radius: Option<u32>,
    sensor: Option<String>,
    keyword: Option<String>,
    language: Option<String>,
    name: Option<String>,
    rank_by: Option<RankBy>,
    reference: Option<String>,
    input: Option<String>,
    place_types: Option<String>,
    components: Option<String>,
    offset: Option<u32>,
}

impl PlacesQuery {
    pub fn new(api_key: impl Into<String>) -> Self {
        PlacesQuery {
            api_key: api_key.into(),
            ..PlacesQuery::default()
        }
    }

    pub fn location(mut self, location: LatLng) -> Self {
        self.location = Some(location);
        self
    }

    /// Search radius in meters, at most [`MAX_RADIUS_METERS`].
    pub fn radius(mut self, radius: u32) -> Result<Self, PlacesServiceError> {
        if radius > MAX_RADIUS_METERS {
            return Err(PlacesServiceError::Validation(format!(
                "radius can be between 0 and {MAX_RADIUS_METERS}, got {radius}"
            )));
        }
        self.radius = Some(radius);
        Ok(self)
    }

    /// The `sensor` flag takes exactly the literals `"true"` or `"false"`.
    pub fn sensor(mut self, sensor: &str) -> Result<Self, PlacesServiceError> {
        if sensor != SENSOR_TRUE && sensor != SENSOR_FALSE {
            return Err(PlacesServiceError::Validation(format!(
                "cannot set 'sensor' parameter with value '{sensor}'"
            )));
        }
        self.sensor = Some(sensor.to_string());
        Ok(self)
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn rank_by(mut self, rank_by: RankBy) -> Self {
        self.rank_by = Some(rank_by);
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Pipe-separated place type filter, e.g. `"cafe|restaurant"`.
    pub fn place_types(mut self, place_types: impl Into<String>) -> Self {
        self.place_types = Some(place_types.into());
        self
    }

    /// Component filter for autocomplete, e.g. `"country:se"`.
    pub fn components(mut self, components: impl Into<String>) -> Self {
        self.components = Some(components.into());
        self
    }

    /// Caret position within `input` at which predictions are anchored.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn build_search_params(&self) -> Result<Vec<(&'static str, String)>, PlacesServiceError> {
        let location = self.location.as_ref().ok_or_else(|| {
            PlacesServiceError::Validation(
                "cannot create search request without setting location".to_string(),
            )
        })?;

        let mut params = vec![
            (PARAM_KEY, self.api_key.clone()),
            (PARAM_LOCATION, location.position()),
        ];
        if let Some(radius) = self.radius {
            params.push((PARAM_RADIUS, radius.to_string()));
        }
        params.push((PARAM_SENSOR, self.sensor_or_default().to_string()));

        push_optional(&mut params, PARAM_KEYWORD, self.keyword.as_deref());
        push_optional(&mut params, PARAM_LANGUAGE, self.language.as_deref());
        push_optional(&mut params, PARAM_NAME, self.name.as_deref());
        push_optional(
            &mut params,
            PARAM_RANKBY,
            self.rank_by.map(RankBy::as_str),
        );
        push_optional(&mut params, PARAM_TYPES, self.place_types.as_deref());

        Ok(params)
    }

    pub fn build_details_params(&self) -> Result<Vec<(&'static str, String)>, PlacesServiceError> {
        let reference = match self.reference.as_deref() {
            Some(reference) if !reference.is_empty() => reference,
            _ => {
                return Err(PlacesServiceError::Validation(
                    "cannot create details request without setting reference".to_string(),
                ))
            }
        };

        let mut params = vec![
            (PARAM_KEY, self.api_key.clone()),
            (PARAM_REFERENCE, reference.to_string()),
            (PARAM_SENSOR, self.sensor_or_default().to_string()),
        ];
        push_optional(&mut params, PARAM_LANGUAGE, self.language.as_deref());

        Ok(params)
    }

    pub fn build_autocomplete_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (PARAM_KEY, self.api_key.clone()),
            (PARAM_SENSOR, self.sensor_or_default().to_string()),
            // `input` is coerced to a string, empty when unset
            (PARAM_INPUT, self.input.clone().unwrap_or_default()),
        ];

        push_optional(&mut params, PARAM_KEYWORD, self.keyword.as_deref());
        push_optional(&mut params, PARAM_LANGUAGE, self.language.as_deref());
        push_optional(&mut params, PARAM_NAME, self.name.as_deref());
        push_optional(
            &mut params,
            PARAM_RANKBY,
            self.rank_by.map(RankBy::as_str),
        );
        push_optional(&mut params, PARAM_TYPES, self.place_types.as_deref());
        push_optional(&mut params, PARAM_COMPONENTS, self.components.as_deref());
        push_optional(
            &mut params,
            PARAM_OFFSET,
            self.offset.map(|offset| offset.to_string()).as_deref(),
        );

        params
    }

    fn sensor_or_default(&self) -> &str {
        self.sensor.as_deref().unwrap_or(SENSOR_FALSE)
    }
}

fn push_optional(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}
