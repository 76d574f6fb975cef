//! PTV Timetable API v3 client.
//!
//! This module provides an HTTP client for the Public Transport Victoria
//! Timetable API, which serves routes, stops, directions and real-time
//! departures.
//!
//! Key characteristics of the API:
//! - Every request is signed (see [`crate::signing`]); the developer key
//!   is never sent
//! - Times are RFC 3339 strings in UTC
//! - Route type `0` is metropolitan train

mod client;
mod error;
mod types;

pub use client::{DepartureBoard, PtvClient};
pub use error::PtvError;
pub use types::{Direction, Route, RouteType, Stop};
