//! PTV departures status line.
//!
//! Answers "when are the next trains from my stop, heading my way?" using
//! the Public Transport Victoria Timetable API.

pub mod config;
pub mod departures;
pub mod output;
pub mod ptv;
pub mod service;
pub mod signing;
pub mod snapshot;
