//! Name-based lookups on top of the Timetable API.
//!
//! Users name things ("Belgrave", "Bayswater", "City"); the API wants IDs.
//! These functions resolve names to a route, stop and direction, then fetch
//! and select departures.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::departures::{self, SelectError, SelectedDeparture};
use crate::ptv::{DepartureBoard, Direction, PtvClient, PtvError, Route, RouteType, Stop};
use crate::snapshot::{SnapshotError, write_snapshot};

/// Source of timetable data.
///
/// Implemented by [`PtvClient`]; tests substitute an in-memory version.
#[allow(async_fn_in_trait)]
pub trait Timetable {
    /// List routes of the given type.
    async fn routes(&self, route_type: RouteType) -> Result<Vec<Route>, PtvError>;

    /// List stops along a route.
    async fn stops_on_route(
        &self,
        route_id: i64,
        route_type: RouteType,
    ) -> Result<Vec<Stop>, PtvError>;

    /// List directions of travel on a route.
    async fn directions(&self, route_id: i64) -> Result<Vec<Direction>, PtvError>;

    /// Get departures from a stop on a route.
    async fn departures(
        &self,
        route_type: RouteType,
        stop_id: i64,
        route_id: i64,
        extra_query: &str,
    ) -> Result<DepartureBoard, PtvError>;
}

impl Timetable for PtvClient {
    async fn routes(&self, route_type: RouteType) -> Result<Vec<Route>, PtvError> {
        PtvClient::routes(self, route_type).await
    }

    async fn stops_on_route(
        &self,
        route_id: i64,
        route_type: RouteType,
    ) -> Result<Vec<Stop>, PtvError> {
        PtvClient::stops_on_route(self, route_id, route_type).await
    }

    async fn directions(&self, route_id: i64) -> Result<Vec<Direction>, PtvError> {
        PtvClient::directions(self, route_id).await
    }

    async fn departures(
        &self,
        route_type: RouteType,
        stop_id: i64,
        route_id: i64,
        extra_query: &str,
    ) -> Result<DepartureBoard, PtvError> {
        PtvClient::departures(self, route_type, stop_id, route_id, extra_query).await
    }
}

/// Errors from name resolution and departure lookup.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ptv(#[from] PtvError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// A required name was empty
    #[error("missing required information: {0}")]
    MissingInput(&'static str),

    /// No route name contains the search text
    #[error("no route found matching {0:?}")]
    RouteNotFound(String),

    /// Several routes match and none exactly
    #[error("too many routes match {name:?}: {matches}")]
    AmbiguousRoute { name: String, matches: String },

    /// No stop on the route matches
    #[error("no stop matching {stop:?} on the {route} line")]
    StopNotFound { route: String, stop: String },

    /// No direction on the route matches
    #[error("no direction matching {direction:?} on the {route} line; valid directions are: {valid}")]
    DirectionNotFound {
        route: String,
        direction: String,
        valid: String,
    },
}

/// What to look up for a departures query.
#[derive(Debug, Clone)]
pub struct DeparturesQuery {
    /// Text contained in the route name, e.g. `Belgrave`
    pub route_name: String,
    /// Text contained in the stop name, e.g. `Bayswater`
    pub stop_name: String,
    /// Text contained in the direction name, e.g. `City`
    pub direction_name: String,
    /// Maximum number of departures to return
    pub count: usize,
    /// Extra query string for the departures request, e.g. `?expand=All`
    pub extra_query: String,
    /// Where to write the raw departures, if anywhere
    pub snapshot: Option<PathBuf>,
}

impl DeparturesQuery {
    pub fn new(
        route_name: impl Into<String>,
        stop_name: impl Into<String>,
        direction_name: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            route_name: route_name.into(),
            stop_name: stop_name.into(),
            direction_name: direction_name.into(),
            count,
            extra_query: String::new(),
            snapshot: None,
        }
    }

    pub fn with_extra_query(mut self, query: impl Into<String>) -> Self {
        self.extra_query = query.into();
        self
    }

    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot = Some(path.into());
        self
    }
}

/// Train routes whose name contains `name`. An empty `name` returns all.
pub async fn find_routes<T: Timetable>(tt: &T, name: &str) -> Result<Vec<Route>, ServiceError> {
    let routes = tt.routes(RouteType::TRAIN).await?;
    Ok(routes
        .into_iter()
        .filter(|r| r.route_name.contains(name))
        .collect())
}

/// Stops on the named route whose name contains `stop_name`.
pub async fn find_stops<T: Timetable>(
    tt: &T,
    route_name: &str,
    stop_name: &str,
) -> Result<Vec<Stop>, ServiceError> {
    let route = resolve_route(tt, route_name).await?;
    let stops = tt.stops_on_route(route.route_id, route.route_type).await?;
    Ok(stops
        .into_iter()
        .filter(|s| s.stop_name.contains(stop_name))
        .collect())
}

/// Directions of travel on the named route.
pub async fn find_directions<T: Timetable>(
    tt: &T,
    route_name: &str,
) -> Result<Vec<Direction>, ServiceError> {
    let route = resolve_route(tt, route_name).await?;
    Ok(tt.directions(route.route_id).await?)
}

/// Resolve names, fetch departures and select the next `query.count`.
///
/// If `query.snapshot` is set, the raw departures are written there before
/// selection, even if direction lookup then fails.
pub async fn next_departures<T: Timetable>(
    tt: &T,
    query: &DeparturesQuery,
    reference: DateTime<Utc>,
) -> Result<Vec<SelectedDeparture>, ServiceError> {
    if query.route_name.is_empty() {
        return Err(ServiceError::MissingInput("route name"));
    }
    if query.stop_name.is_empty() {
        return Err(ServiceError::MissingInput("stop name"));
    }
    if query.direction_name.is_empty() {
        return Err(ServiceError::MissingInput("direction name"));
    }

    let route = resolve_route(tt, &query.route_name).await?;

    let stop = tt
        .stops_on_route(route.route_id, route.route_type)
        .await?
        .into_iter()
        .find(|s| s.stop_name.contains(&query.stop_name))
        .ok_or_else(|| ServiceError::StopNotFound {
            route: route.route_name.clone(),
            stop: query.stop_name.clone(),
        })?;

    let board = tt
        .departures(
            route.route_type,
            stop.stop_id,
            route.route_id,
            &query.extra_query,
        )
        .await?;

    if let Some(path) = &query.snapshot {
        write_snapshot(path, &board.raw)?;
    }

    let directions = tt.directions(route.route_id).await?;
    let direction = directions
        .iter()
        .find(|d| d.direction_name.contains(&query.direction_name))
        .ok_or_else(|| ServiceError::DirectionNotFound {
            route: route.route_name.clone(),
            direction: query.direction_name.clone(),
            valid: directions
                .iter()
                .map(|d| d.direction_name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    // Ordering is advisory; only records the selector scans can fail the run
    match departures::is_chronological(&board.departures) {
        Ok(true) => {}
        Ok(false) => warn!(
            stop_id = stop.stop_id,
            route_id = route.route_id,
            "Departures are not in scheduled order; selection follows API order"
        ),
        Err(e) => warn!(
            stop_id = stop.stop_id,
            route_id = route.route_id,
            error = %e,
            "Could not check departure order"
        ),
    }

    debug!(
        route = %route.route_name,
        stop = %stop.stop_name,
        direction = %direction.direction_name,
        candidates = board.departures.len(),
        "Selecting departures"
    );

    Ok(departures::select_next(
        &board.departures,
        direction.direction_id,
        query.count,
        reference,
    )?)
}

/// Find the single train route matching `name`.
///
/// A route whose name equals `name` wins over partial matches.
async fn resolve_route<T: Timetable>(tt: &T, name: &str) -> Result<Route, ServiceError> {
    if name.is_empty() {
        return Err(ServiceError::MissingInput("route name"));
    }

    let mut matches = find_routes(tt, name).await?;

    if let Some(pos) = matches.iter().position(|r| r.route_name == name) {
        return Ok(matches.swap_remove(pos));
    }

    match matches.len() {
        0 => Err(ServiceError::RouteNotFound(name.to_string())),
        1 => Ok(matches.remove(0)),
        _ => Err(ServiceError::AmbiguousRoute {
            name: name.to_string(),
            matches: matches
                .iter()
                .map(|r| r.route_name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
