mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use certmgr_web::routes::routes;
use common::{Behavior, FakeApi};
use serde_json::json;

#[tokio::test]
async fn test_health_endpoint_success() {
    let fake = FakeApi::start(Behavior::default()).await;
    let server = TestServer::new(routes(common::create_test_state(&fake.endpoint))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["certificate_api"]["status"], "ok");
    assert_eq!(
        json["checks"]["certificate_api"]["message"],
        "2 permitted domains"
    );
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_upstream_error() {
    let fake = FakeApi::start(
        Behavior::default().with_domains(StatusCode::INTERNAL_SERVER_ERROR, json!({})),
    )
    .await;
    let server = TestServer::new(routes(common::create_test_state(&fake.endpoint))).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["certificate_api"]["status"], "error");
}

#[tokio::test]
async fn test_health_endpoint_unreachable() {
    let endpoint = common::closed_endpoint().await;
    let server = TestServer::new(routes(common::create_test_state(&endpoint))).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert!(json["checks"]["certificate_api"]["message"].is_string());
}
