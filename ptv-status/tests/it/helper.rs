use ptv_status::config::{Credentials, PtvConfig};
use ptv_status::ptv::PtvClient;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const DEV_ID: &str = "3000123";
pub const KEY: &str = "9c132d31-6a30-4cac-8d8b-8a1970834799";

pub struct TestHelper {
    pub mock_server: MockServer,
    pub client: PtvClient,
}

impl TestHelper {
    pub async fn new() -> TestHelper {
        let mock_server = MockServer::start().await;
        let config =
            PtvConfig::new(Credentials::new(DEV_ID, KEY)).with_base_url(mock_server.uri());
        let client = PtvClient::new(config).unwrap();
        TestHelper {
            mock_server,
            client,
        }
    }

    pub async fn mount_json(&self, at: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(at))
            .and(query_param("devid", DEV_ID))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_belgrave(&self) {
        self.mount_json(
            "/v3/routes",
            json!({
                "routes": [
                    {"route_type": 0, "route_id": 1, "route_name": "Alamein", "route_number": "", "route_gtfs_id": "2-ALM"},
                    {"route_type": 0, "route_id": 2, "route_name": "Belgrave", "route_number": "", "route_gtfs_id": "2-BEG"}
                ],
                "status": {"version": "3.0", "health": 1}
            }),
        )
        .await;

        self.mount_json(
            "/v3/stops/route/2/route_type/0",
            json!({
                "stops": [
                    {"stop_suburb": "Bayswater", "route_type": 0, "stop_sequence": 0, "stop_id": 1016, "stop_name": "Bayswater Station"},
                    {"stop_suburb": "Belgrave", "route_type": 0, "stop_sequence": 0, "stop_id": 1018, "stop_name": "Belgrave Station"}
                ]
            }),
        )
        .await;

        self.mount_json(
            "/v3/directions/route/2",
            json!({
                "directions": [
                    {"route_direction_description": "Citybound", "direction_id": 1, "direction_name": "City (Flinders Street)", "route_id": 2, "route_type": 0},
                    {"route_direction_description": "Outbound", "direction_id": 2, "direction_name": "Belgrave", "route_id": 2, "route_type": 0}
                ]
            }),
        )
        .await;

        self.mount_json(
            "/v3/departures/route_type/0/stop/1016/route/2",
            json!({
                "departures": [
                    departure(1, "2026-10-19T07:00:00Z"),
                    departure(2, "2026-10-19T08:05:00Z"),
                    departure(1, "2026-10-19T08:10:00Z"),
                    departure(1, "2026-10-19T08:20:00Z"),
                    departure(1, "2026-10-19T08:40:00Z")
                ],
                "stops": {},
                "routes": {},
                "runs": {},
                "directions": {},
                "disruptions": {}
            }),
        )
        .await;
    }
}

pub fn departure(direction_id: i64, scheduled: &str) -> Value {
    json!({
        "stop_id": 1016,
        "route_id": 2,
        "run_id": 951234,
        "run_ref": "951234",
        "direction_id": direction_id,
        "disruption_ids": [],
        "scheduled_departure_utc": scheduled,
        "estimated_departure_utc": null,
        "at_platform": false,
        "platform_number": "1",
        "flags": "S_WCA",
        "departure_sequence": 0
    })
}
