use std::sync::RwLock;

use tracing::{debug, warn};
use urlencoding::encode;

use super::parser;
use super::query::PlacesQuery;
use super::types::places_service_error::PlacesServiceError;
use crate::types::api_status::PlacesApiStatus;
use crate::types::lat_lng::LatLng;
use crate::types::place::Place;
use crate::types::place_details::PlaceDetails;
use crate::types::prediction::Prediction;

pub const DEFAULT_API_HOST: &str = "https://maps.googleapis.com/maps/api/place";

/// Radius applied by [`PlacesService::search`] when the caller passes none.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestType {
    Search,
    Details,
    Autocomplete,
}

impl RequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::Search => "search",
            RequestType::Details => "details",
            RequestType::Autocomplete => "autocomplete",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    /// Accepted but not parsed; requesting xml yields a decode failure on
    /// the response body.
    Xml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, PlacesServiceError> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            other => Err(PlacesServiceError::Validation(format!(
                "output type '{other}' is not supported, valid options are: json, xml"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlacesServiceConfig {
    pub api_key: String,
    pub host: String,
    pub output_format: String,
}

impl PlacesServiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        PlacesServiceConfig {
            api_key: api_key.into(),
            host: DEFAULT_API_HOST.to_string(),
            output_format: OutputFormat::Json.as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug)]
struct ResponseMeta {
    status: PlacesApiStatus,
    html_attributions: Vec<String>,
}

/// Client for the places web service. Each operation issues exactly one GET
/// to `{host}/{operation}/{output_format}?{params}` and maps the JSON body
/// into result models.
#[derive(Debug)]
pub struct PlacesService {
    config: PlacesServiceConfig,
    output_format: OutputFormat,
    client: reqwest::Client,
    last_response: RwLock<Option<ResponseMeta>>,
}

impl PlacesService {
    pub fn new(config: PlacesServiceConfig) -> Result<Self, PlacesServiceError> {
        let output_format = OutputFormat::parse(&config.output_format)?;

        Ok(PlacesService {
            config,
            output_format,
            client: reqwest::Client::new(),
            last_response: RwLock::new(None),
        })
    }

    /// Status reported by the service on the most recent completed call.
    pub fn last_status(&self) -> Option<PlacesApiStatus> {
        self.last_response
            .read()
            .ok()
            .and_then(|meta| meta.as_ref().map(|meta| meta.status.clone()))
    }

    /// Attribution strings the service asked to be displayed alongside the
    /// most recent results.
    pub fn last_html_attributions(&self) -> Vec<String> {
        self.last_response
            .read()
            .ok()
            .and_then(|meta| meta.as_ref().map(|meta| meta.html_attributions.clone()))
            .unwrap_or_default()
    }

    /// Searches for places matching `name` around `location`. `radius`
    /// defaults to [`DEFAULT_SEARCH_RADIUS_METERS`]. Results keep the
    /// service's ordering.
    pub async fn search(
        &self,
        name: &str,
        location: LatLng,
        radius: Option<u32>,
    ) -> Result<Vec<Place>, PlacesServiceError> {
        let query = PlacesQuery::new(&self.config.api_key)
            .name(name)
            .location(location)
            .radius(radius.unwrap_or(DEFAULT_SEARCH_RADIUS_METERS))?;
        let params = query.build_search_params()?;

        let body = self.perform_request(RequestType::Search, &params).await?;
        let parsed = parser::parse_search_response(&body)?;
        self.record_response(parsed.status.clone(), parsed.html_attributions);
        parser::ensure_not_rejected(&parsed.status)?;

        let mut places = Vec::with_capacity(parsed.results.len());
        if parsed.status.is_ok() {
            for result in parsed.results {
                places.push(Place::from_search_result(result)?);
            }
        } else {
            warn!(status = %parsed.status, "search returned no results");
        }

        Ok(places)
    }

    /// Looks up details for `place`, keyed on its reference. A place without
    /// a reference fails validation before any request is made; a response
    /// without a usable result object is a [`PlacesServiceError::NotFound`].
    pub async fn details(&self, place: &Place) -> Result<PlaceDetails, PlacesServiceError> {
        let query = PlacesQuery::new(&self.config.api_key).reference(&place.reference);
        let params = query.build_details_params()?;

        let body = self.perform_request(RequestType::Details, &params).await?;
        let parsed = parser::parse_details_response(&body)?;
        self.record_response(parsed.status.clone(), parsed.html_attributions);
        parser::ensure_not_rejected(&parsed.status)?;

        match (parsed.status, parsed.result) {
            (PlacesApiStatus::Ok, Some(result)) => PlaceDetails::from_details_result(result),
            (status, _) => {
                warn!(status = %status, reference = %place.reference, "details lookup yielded no result");
                Err(PlacesServiceError::NotFound(status))
            }
        }
    }

    /// Returns predictions for a partial `input` string, in service order.
    pub async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, PlacesServiceError> {
        let query = PlacesQuery::new(&self.config.api_key).input(input);
        let params = query.build_autocomplete_params();

        let body = self
            .perform_request(RequestType::Autocomplete, &params)
            .await?;
        let parsed = parser::parse_autocomplete_response(&body)?;
        self.record_response(parsed.status.clone(), Vec::new());
        parser::ensure_not_rejected(&parsed.status)?;

        let mut predictions = Vec::new();
        if parsed.status.is_ok() {
            predictions.extend(parsed.predictions.into_iter().map(Prediction::from_entry));
        }

        Ok(predictions)
    }

    /// Runs a details lookup for every place, sequentially and in input
    /// order. The first failing lookup aborts the batch.
    pub async fn append_details(
        &self,
        places: &[Place],
    ) -> Result<Vec<PlaceDetails>, PlacesServiceError> {
        let mut details = Vec::with_capacity(places.len());
        for place in places {
            details.push(self.details(place).await?);
        }

        Ok(details)
    }

    async fn perform_request(
        &self,
        request_type: RequestType,
        params: &[(&'static str, String)],
    ) -> Result<String, PlacesServiceError> {
        let url = self.build_request_url(request_type, params);
        debug!(operation = request_type.as_str(), "requesting places api");

        let response = self.client.get(&url).send().await?;
        let body = response.text().await?;

        Ok(body)
    }

    fn build_request_url(
        &self,
        request_type: RequestType,
        params: &[(&'static str, String)],
    ) -> String {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<String>>()
            .join("&");

        format!(
            "{}/{}/{}?{}",
            self.config.host,
            request_type.as_str(),
            self.output_format.as_str(),
            query
        )
    }

    fn record_response(&self, status: PlacesApiStatus, html_attributions: Vec<String>) {
        if let Ok(mut guard) = self.last_response.write() {
            *guard = Some(ResponseMeta {
                status,
                html_attributions,
            });
        }
    }
}
