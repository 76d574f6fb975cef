//! PTV Timetable API HTTP client.
//!
//! Provides async methods for the handful of endpoints the status line
//! needs. Each method issues exactly one signed GET; there is no retry and
//! no caching.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::PtvConfig;
use crate::departures::Departure;
use crate::signing::Signer;

use super::error::PtvError;
use super::types::{
    DeparturesResponse, Direction, DirectionsResponse, Route, RouteType, RoutesResponse, Stop,
    StopsResponse,
};

/// Departures for one stop and route, parsed and raw.
#[derive(Debug, Clone)]
pub struct DepartureBoard {
    /// Parsed departure records, in API order.
    pub departures: Vec<Departure>,
    /// The `departures` array exactly as returned by the API.
    pub raw: serde_json::Value,
}

/// PTV Timetable API client.
#[derive(Debug, Clone)]
pub struct PtvClient {
    http: reqwest::Client,
    signer: Signer,
    log_signed_urls: bool,
}

impl PtvClient {
    /// Create a new PTV client with the given configuration.
    pub fn new(config: PtvConfig) -> Result<Self, PtvError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            signer: Signer::new(config.base_url, config.credentials),
            log_signed_urls: config.log_signed_urls,
        })
    }

    /// List routes of the given type.
    pub async fn routes(&self, route_type: RouteType) -> Result<Vec<Route>, PtvError> {
        let path = format!("/v3/routes?route_types={route_type}");
        let response: RoutesResponse = self.get_json(&path).await?;
        Ok(response.routes)
    }

    /// List stops along a route.
    pub async fn stops_on_route(
        &self,
        route_id: i64,
        route_type: RouteType,
    ) -> Result<Vec<Stop>, PtvError> {
        let path = format!("/v3/stops/route/{route_id}/route_type/{route_type}");
        let response: StopsResponse = self.get_json(&path).await?;
        Ok(response.stops)
    }

    /// List the directions of travel on a route.
    pub async fn directions(&self, route_id: i64) -> Result<Vec<Direction>, PtvError> {
        let path = format!("/v3/directions/route/{route_id}");
        let response: DirectionsResponse = self.get_json(&path).await?;
        Ok(response.directions)
    }

    /// Get departures from a stop on a route.
    ///
    /// # Arguments
    ///
    /// * `route_type` - Transport mode of the route
    /// * `stop_id` - Stop to depart from
    /// * `route_id` - Route to filter by
    /// * `extra_query` - Appended verbatim to the path, e.g. `?expand=All`
    pub async fn departures(
        &self,
        route_type: RouteType,
        stop_id: i64,
        route_id: i64,
        extra_query: &str,
    ) -> Result<DepartureBoard, PtvError> {
        let path = format!(
            "/v3/departures/route_type/{route_type}/stop/{stop_id}/route/{route_id}{extra_query}"
        );
        let response: DeparturesResponse = self.get_json(&path).await?;

        let raw = serde_json::Value::Array(response.departures);
        let departures: Vec<Departure> =
            serde_json::from_value(raw.clone()).map_err(|e| PtvError::Json {
                message: e.to_string(),
                body: None,
            })?;

        debug!(
            stop_id,
            route_id,
            count = departures.len(),
            "Fetched departures"
        );

        Ok(DepartureBoard { departures, raw })
    }

    /// Issue a signed GET for `path` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PtvError> {
        let url = self.signer.url(path)?;

        if self.log_signed_urls {
            debug!(%url, "Signed request URL");
        } else {
            trace!(path, "GET");
        }

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PtvError::HttpStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PtvError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
