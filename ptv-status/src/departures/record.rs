//! Departure record types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::SelectError;

/// A PTV direction identifier.
///
/// Direction IDs are assigned per route by the API and only distinguish
/// directions; they carry no ordering or arithmetic meaning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionId(i64);

impl DirectionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for DirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirectionId({})", self.0)
    }
}

impl fmt::Display for DirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single departure as returned by the departures endpoint.
///
/// Only `scheduled_departure_utc` and `direction_id` take part in
/// selection; everything else is passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    #[serde(default)]
    pub stop_id: i64,

    #[serde(default)]
    pub route_id: i64,

    #[serde(default)]
    pub run_id: i64,

    #[serde(default)]
    pub run_ref: String,

    pub direction_id: DirectionId,

    #[serde(default)]
    pub disruption_ids: Vec<i64>,

    /// Scheduled departure, RFC 3339 in UTC (e.g. `2026-10-19T08:15:00Z`).
    pub scheduled_departure_utc: String,

    /// Real-time estimate, absent when no vehicle is tracked.
    #[serde(default)]
    pub estimated_departure_utc: Option<String>,

    #[serde(default)]
    pub at_platform: bool,

    #[serde(default)]
    pub platform_number: Option<String>,

    #[serde(default)]
    pub flags: String,

    #[serde(default)]
    pub departure_sequence: i64,
}

impl Departure {
    /// Create a departure with only the fields selection depends on.
    pub fn new(scheduled_departure_utc: impl Into<String>, direction_id: DirectionId) -> Self {
        Self {
            stop_id: 0,
            route_id: 0,
            run_id: 0,
            run_ref: String::new(),
            direction_id,
            disruption_ids: Vec::new(),
            scheduled_departure_utc: scheduled_departure_utc.into(),
            estimated_departure_utc: None,
            at_platform: false,
            platform_number: None,
            flags: String::new(),
            departure_sequence: 0,
        }
    }

    /// Parse the scheduled departure time.
    pub fn scheduled_departure(&self) -> Result<DateTime<Utc>, SelectError> {
        parse_utc(&self.scheduled_departure_utc)
    }

    /// Parse the estimated departure time, if the API supplied one.
    pub fn estimated_departure(&self) -> Result<Option<DateTime<Utc>>, SelectError> {
        self.estimated_departure_utc
            .as_deref()
            .map(parse_utc)
            .transpose()
    }
}

fn parse_utc(value: &str) -> Result<DateTime<Utc>, SelectError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| SelectError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// A departure chosen by the selector, with its rank among the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedDeparture {
    #[serde(flatten)]
    pub departure: Departure,

    /// Zero-based position in the selection.
    pub index: usize,
}
