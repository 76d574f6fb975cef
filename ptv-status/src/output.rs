//! Console rendering.
//!
//! Results print either as pretty JSON or, with a field list, as one
//! delimited line per item suitable for a status bar.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;

use crate::departures::{DirectionId, SelectError, SelectedDeparture};

/// Display format for departure times, e.g. `19-10-2026 07:15 PM`.
pub const TIME_FORMAT: &str = "%d-%m-%Y %I:%M %p";

/// Render items as pretty-printed JSON.
pub fn to_json<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}

/// Render selected fields of each item, one item per line.
///
/// `format` is a whitespace-separated list of JSON field names. Values are
/// joined with `delimiter`; strings print without quotes and missing or null
/// fields print as empty.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use ptv_status::output::to_fields;
///
/// let routes = vec![json!({"route_id": 2, "route_name": "Belgrave"})];
/// let out = to_fields(&routes, "route_id route_name", ",").unwrap();
/// assert_eq!(out, "2,Belgrave");
/// ```
pub fn to_fields<T: Serialize>(
    items: &[T],
    format: &str,
    delimiter: &str,
) -> Result<String, serde_json::Error> {
    let fields: Vec<&str> = format.split_whitespace().collect();

    let lines = items
        .iter()
        .map(|item| {
            let value = serde_json::to_value(item)?;
            let line = fields
                .iter()
                .map(|field| render_scalar(value.get(field)))
                .collect::<Vec<_>>()
                .join(delimiter);
            Ok(line)
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    Ok(lines.join("\n"))
}

fn render_scalar(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// A selected departure with times rendered in a local timezone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartureRow {
    pub index: usize,
    pub route_id: i64,
    pub stop_id: i64,
    pub run_ref: String,
    pub direction_id: DirectionId,
    pub platform_number: Option<String>,
    pub at_platform: bool,
    pub scheduled_departure: String,
    pub estimated_departure: Option<String>,
}

impl DepartureRow {
    /// Build a row with scheduled and estimated times converted to `tz`.
    pub fn localize(selected: &SelectedDeparture, tz: Tz) -> Result<Self, SelectError> {
        let departure = &selected.departure;
        let local = |dt: DateTime<chrono::Utc>| dt.with_timezone(&tz).format(TIME_FORMAT).to_string();

        Ok(Self {
            index: selected.index,
            route_id: departure.route_id,
            stop_id: departure.stop_id,
            run_ref: departure.run_ref.clone(),
            direction_id: departure.direction_id,
            platform_number: departure.platform_number.clone(),
            at_platform: departure.at_platform,
            scheduled_departure: local(departure.scheduled_departure()?),
            estimated_departure: departure.estimated_departure()?.map(local),
        })
    }
}
