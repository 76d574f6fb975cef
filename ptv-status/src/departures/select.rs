//! Next-departure selection.

use chrono::{DateTime, Utc};

use super::error::SelectError;
use super::record::{Departure, DirectionId, SelectedDeparture};

/// Select the next `count` departures heading in `direction` after `reference`.
///
/// `departures` must already be in ascending scheduled order, as the API
/// returns them; the selector takes the first matches in scan order and does
/// not sort. Records at or before `reference`, or in another direction, are
/// skipped. Scanning stops as soon as `count` matches are collected, so
/// records past that point are never parsed.
///
/// Fewer than `count` results is not an error.
///
/// # Errors
///
/// Returns [`SelectError::InvalidTimestamp`] if a scanned record's
/// scheduled time is not valid RFC 3339.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ptv_status::departures::{Departure, DirectionId, select_next};
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
/// let city = DirectionId::new(1);
/// let departures = vec![
///     Departure::new("2026-10-19T07:50:00Z", city),
///     Departure::new("2026-10-19T08:10:00Z", city),
/// ];
///
/// let next = select_next(&departures, city, 2, now).unwrap();
/// assert_eq!(next.len(), 1);
/// assert_eq!(next[0].index, 0);
/// ```
pub fn select_next(
    departures: &[Departure],
    direction: DirectionId,
    count: usize,
    reference: DateTime<Utc>,
) -> Result<Vec<SelectedDeparture>, SelectError> {
    let mut selected = Vec::with_capacity(count.min(departures.len()));
    if count == 0 {
        return Ok(selected);
    }

    for departure in departures {
        let scheduled = departure.scheduled_departure()?;

        if scheduled <= reference || departure.direction_id != direction {
            continue;
        }

        selected.push(SelectedDeparture {
            departure: departure.clone(),
            index: selected.len(),
        });

        if selected.len() == count {
            break;
        }
    }

    Ok(selected)
}

/// Check whether departures are in non-decreasing scheduled order.
pub fn is_chronological(departures: &[Departure]) -> Result<bool, SelectError> {
    let times = departures
        .iter()
        .map(Departure::scheduled_departure)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(times.windows(2).all(|w| w[0] <= w[1]))
}
