use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use ptv_status::output::{DepartureRow, to_fields};
use ptv_status::service::{
    DeparturesQuery, ServiceError, find_directions, find_routes, find_stops, next_departures,
};
use tempfile::tempdir;

use crate::helper::TestHelper;

#[tokio::test]
async fn next_two_citybound_from_bayswater() {
    let helper = TestHelper::new().await;
    helper.mount_belgrave().await;
    let dir = tempdir().unwrap();
    let snapshot = dir.path().join("output.json");

    let query = DeparturesQuery::new("Belgrave", "Bayswater", "City", 2)
        .with_extra_query("?expand=All&include_geopath=true")
        .with_snapshot(&snapshot);
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();

    let next = next_departures(&helper.client, &query, now).await.unwrap();

    assert_eq!(next.len(), 2);
    assert_eq!(next[0].departure.scheduled_departure_utc, "2026-10-19T08:10:00Z");
    assert_eq!(next[1].departure.scheduled_departure_utc, "2026-10-19T08:20:00Z");

    let rows = next
        .iter()
        .map(|s| DepartureRow::localize(s, Tz::Australia__Melbourne))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(
        to_fields(&rows, "index scheduled_departure", " ").unwrap(),
        "0 19-10-2026 07:10 PM\n1 19-10-2026 07:20 PM"
    );

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&snapshot).unwrap()).unwrap();
    assert_eq!(written.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn lookups_by_name() {
    let helper = TestHelper::new().await;
    helper.mount_belgrave().await;

    let routes = find_routes(&helper.client, "Bel").await.unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].route_id, 2);

    let stops = find_stops(&helper.client, "Belgrave", "Bays").await.unwrap();
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].stop_id, 1016);

    let directions = find_directions(&helper.client, "Belgrave").await.unwrap();
    assert_eq!(directions.len(), 2);
}

#[tokio::test]
async fn unknown_direction_reports_choices() {
    let helper = TestHelper::new().await;
    helper.mount_belgrave().await;

    let query = DeparturesQuery::new("Belgrave", "Bayswater", "Lilydale", 2);
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();

    let err = next_departures(&helper.client, &query, now)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::DirectionNotFound { .. }));
    assert!(err.to_string().contains("City (Flinders Street), Belgrave"));
}
