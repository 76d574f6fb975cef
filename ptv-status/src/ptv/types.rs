//! PTV API response DTOs.
//!
//! These types map directly to the Timetable API v3 JSON responses.
//! Fields the API sometimes omits are defaulted; unknown fields are
//! ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::departures::DirectionId;

/// Transport mode of a route.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteType(i64);

impl RouteType {
    pub const TRAIN: RouteType = RouteType(0);
    pub const TRAM: RouteType = RouteType(1);
    pub const BUS: RouteType = RouteType(2);
    pub const VLINE: RouteType = RouteType(3);
    pub const NIGHT_BUS: RouteType = RouteType(4);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Default for RouteType {
    fn default() -> Self {
        Self::TRAIN
    }
}

impl fmt::Debug for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteType({})", self.0)
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A route (line) in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: i64,

    #[serde(default)]
    pub route_type: RouteType,

    pub route_name: String,

    /// Public-facing route number; empty for trains.
    #[serde(default)]
    pub route_number: String,

    #[serde(default)]
    pub route_gtfs_id: String,
}

/// A stop served by a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub stop_id: i64,

    pub stop_name: String,

    #[serde(default)]
    pub stop_suburb: String,

    #[serde(default)]
    pub route_type: RouteType,

    /// Position along the route; zero when the API does not supply one.
    #[serde(default)]
    pub stop_sequence: i64,

    #[serde(default)]
    pub stop_latitude: Option<f64>,

    #[serde(default)]
    pub stop_longitude: Option<f64>,
}

/// A direction of travel on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub direction_id: DirectionId,

    pub direction_name: String,

    #[serde(default)]
    pub route_id: i64,

    #[serde(default)]
    pub route_type: RouteType,

    #[serde(default)]
    pub route_direction_description: String,
}

/// Response from `/v3/routes`.
#[derive(Debug, Deserialize)]
pub(super) struct RoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// Response from `/v3/stops/route/{route_id}/route_type/{route_type}`.
#[derive(Debug, Deserialize)]
pub(super) struct StopsResponse {
    #[serde(default)]
    pub stops: Vec<Stop>,
}

/// Response from `/v3/directions/route/{route_id}`.
#[derive(Debug, Deserialize)]
pub(super) struct DirectionsResponse {
    #[serde(default)]
    pub directions: Vec<Direction>,
}

/// Response from `/v3/departures/...`.
///
/// Departures stay as raw JSON here so the snapshot can record exactly
/// what the API returned.
#[derive(Debug, Deserialize)]
pub(super) struct DeparturesResponse {
    #[serde(default)]
    pub departures: Vec<serde_json::Value>,
}
