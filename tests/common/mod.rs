#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;

/// Serve `app` on an ephemeral port
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

/// Serve `routes` as the upstream API and return its base URL
pub async fn upstream(routes: Router) -> String {
    let addr = serve(Router::new().nest("/api/v1", routes)).await;
    format!("http://{addr}/api/v1")
}

/// Route answering every request with the same JSON body
pub fn fixed(router: Router, path: &str, body: Value) -> Router {
    router.route(path, get(move || async move { Json(body) }))
}

pub fn failing(router: Router, path: &str, status: StatusCode) -> Router {
    router.route(path, get(move || async move { status }))
}

pub fn rockets() -> Value {
    json!([
        {"id": 1, "name": "Falcon 9", "status": "active", "payload_capacity": "22800.00",
         "organization": {"id": 1, "name": "SpaceX"}},
        {"id": 2, "name": "Falcon Heavy", "status": "active", "payload_capacity": 63800,
         "organization": {"id": 1, "name": "SpaceX"}},
        {"id": 3, "name": "Ariane 5", "status": "retired", "payload_capacity": 21000,
         "organization": {"id": 2, "name": "Arianespace"}},
        {"id": 4, "name": "Electron", "status": "active", "payload_capacity": 300,
         "organization": {"id": 3, "name": "Rocket Lab"}}
    ])
}

/// The eleven analytics endpoints with their real response shapes
pub fn analytics_fixtures() -> Vec<(&'static str, Value)> {
    vec![
        (
            "/dashboard/launch_success_rates",
            json!({"data": [
                {"organization": "SpaceX", "total_launches": 10, "successful": 9,
                 "failed": 1, "other": 0, "success_rate": "90.0"},
                {"organization": "Arianespace", "total_launches": 4, "successful": 4,
                 "failed": 0, "other": 0, "success_rate": 100}
            ]}),
        ),
        (
            "/dashboard/top_rockets_by_payload",
            json!({"data": [
                {"id": 2, "name": "Falcon Heavy", "payload_capacity": 63800, "mass": 1420788,
                 "height": 70, "stages": 2, "organization": "SpaceX", "mass_to_payload_ratio": 22.27}
            ]}),
        ),
        (
            "/dashboard/mission_cost_estimator",
            json!({
                "rockets": [{"id": 1, "name": "Test Rocket", "payload_capacity": 1000, "mass": 1}],
                "satellites": [{"id": 2, "name": "Test Sat", "mass": "200", "purpose": "Science"}],
                "cost_factors": {"rocket_cost_per_kg": 2, "satellite_cost_per_kg": 5,
                                 "launch_services": 1, "insurance": 0.1, "contingency": 0.05}
            }),
        ),
        (
            "/dashboard/human_space_missions",
            json!({"data": [{"id": 3, "name": "Artemis II", "status": "planned", "astronaut_count": 4}]}),
        ),
        (
            "/dashboard/astronaut_statistics",
            json!({
                "nationality_distribution": [{"nationality": "USA", "count": 3}],
                "status_distribution": [{"status": "active", "count": 3}],
                "top_astronauts": []
            }),
        ),
        (
            "/dashboard/launch_trends",
            json!({"data": [{"date": "2024-01", "total": 5, "successful": 5, "failed": 0, "success_rate": 100}]}),
        ),
        ("/dashboard/organization_performance", json!({"data": []})),
        ("/dashboard/mission_progress_visualization", json!({"data": []})),
        ("/dashboard/mission_timeline_visualization", json!({"data": []})),
        (
            "/dashboard/orbit_distribution",
            json!({"categorized": [{"category": "LEO", "count": 7}], "detailed": [], "total_satellites": 7}),
        ),
        ("/dashboard/mission_family_tree", json!({"data": []})),
    ]
}

/// Analytics routes; `broken` answers 500 instead of its fixture
pub fn analytics_routes(broken: Option<&str>) -> Router {
    analytics_fixtures()
        .into_iter()
        .fold(Router::new(), |router, (path, body)| {
            if Some(path) == broken {
                failing(router, path, StatusCode::INTERNAL_SERVER_ERROR)
            } else {
                fixed(router, path, body)
            }
        })
}
