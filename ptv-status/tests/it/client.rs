use ptv_status::config::{Credentials, PtvConfig};
use ptv_status::departures::DirectionId;
use ptv_status::ptv::{PtvClient, PtvError, RouteType};
use ptv_status::signing::signature;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::helper::{DEV_ID, KEY, TestHelper, departure};

#[tokio::test]
async fn requests_are_signed() {
    let helper = TestHelper::new().await;
    let expected = signature(&format!("/v3/routes?route_types=0&devid={DEV_ID}"), KEY).unwrap();

    Mock::given(method("GET"))
        .and(path("/v3/routes"))
        .and(query_param("route_types", "0"))
        .and(query_param("devid", DEV_ID))
        .and(query_param("signature", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"routes": []})))
        .expect(1)
        .mount(&helper.mock_server)
        .await;

    let routes = helper.client.routes(RouteType::TRAIN).await.unwrap();
    assert!(routes.is_empty());
}

#[tokio::test]
async fn departures_keep_raw_array() {
    let helper = TestHelper::new().await;
    helper.mount_belgrave().await;

    let board = helper
        .client
        .departures(RouteType::TRAIN, 1016, 2, "?expand=All")
        .await
        .unwrap();

    assert_eq!(board.departures.len(), 5);
    assert_eq!(board.departures[1].direction_id, DirectionId::new(2));
    assert_eq!(board.raw.as_array().unwrap().len(), 5);
    assert_eq!(board.raw[0]["run_ref"], "951234");
}

#[tokio::test]
async fn stops_and_directions() {
    let helper = TestHelper::new().await;
    helper.mount_belgrave().await;

    let stops = helper
        .client
        .stops_on_route(2, RouteType::TRAIN)
        .await
        .unwrap();
    assert_eq!(stops[0].stop_id, 1016);

    let directions = helper.client.directions(2).await.unwrap();
    assert_eq!(directions.len(), 2);
    assert_eq!(directions[0].direction_name, "City (Flinders Street)");
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/v3/directions/route/2"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&helper.mock_server)
        .await;

    let err = helper.client.directions(2).await.unwrap_err();
    match err {
        PtvError::HttpStatus { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let helper = TestHelper::new().await;

    Mock::given(method("GET"))
        .and(path("/v3/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&helper.mock_server)
        .await;

    let err = helper.client.routes(RouteType::TRAIN).await.unwrap_err();
    match err {
        PtvError::Json { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>maintenance</html>"));
        }
        other => panic!("expected Json, got {other:?}"),
    }
}

#[tokio::test]
async fn departure_without_direction_is_json_error() {
    let helper = TestHelper::new().await;
    let mut bad = departure(1, "2026-10-19T08:10:00Z");
    bad.as_object_mut().unwrap().remove("direction_id");

    helper
        .mount_json(
            "/v3/departures/route_type/0/stop/1016/route/2",
            json!({"departures": [bad]}),
        )
        .await;

    let err = helper
        .client
        .departures(RouteType::TRAIN, 1016, 2, "")
        .await
        .unwrap_err();
    assert!(matches!(err, PtvError::Json { .. }));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let config = PtvConfig::new(Credentials::new(DEV_ID, KEY))
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(5);
    let client = PtvClient::new(config).unwrap();

    let err = client.directions(2).await.unwrap_err();
    assert!(matches!(err, PtvError::Network(_)));
}
