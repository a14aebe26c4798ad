mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use certmgr_web::routes::routes;
use common::{Behavior, FakeApi, TEST_CERT, TEST_KEY};
use serde_json::json;

async fn setup(behavior: Behavior) -> (FakeApi, TestServer) {
    let fake = FakeApi::start(behavior).await;
    let state = common::create_test_state(&fake.endpoint);
    let server = TestServer::new(routes(state)).unwrap();
    (fake, server)
}

#[tokio::test]
async fn test_permitted_domains() {
    let (_fake, server) = setup(Behavior::default()).await;

    let response = server.get("/api/permitted-domains").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "domains": ["example.com", "example.org"],
        "subzones": [".example.com", ".example.org"],
        "default_subzone": ".example.com"
    }));
}

#[tokio::test]
async fn test_permitted_domains_upstream_failure() {
    let (_fake, server) = setup(
        Behavior::default().with_domains(StatusCode::FORBIDDEN, json!({ "error": "denied" })),
    )
    .await;

    let response = server.get("/api/permitted-domains").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "upstream_error");
    assert_eq!(json["error"]["details"]["upstream_status"], 403);
}

#[tokio::test]
async fn test_listing() {
    let (fake, server) = setup(Behavior::default()).await;

    let response = server.get("/api/listing").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["endpoint"], fake.endpoint);
    assert_eq!(
        json["list"],
        json!({ "endpoints": ["/permittedDomains", "/certificates"] })
    );
}

#[tokio::test]
async fn test_create_certificate() {
    let (fake, server) = setup(Behavior::default()).await;

    let response = server
        .post("/api/certificates")
        .json(&json!({ "server": "foo", "subzone": ".example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["hostname"], "foo.example.com");
    assert_eq!(json["certificate"], TEST_CERT);
    assert_eq!(json["key"], TEST_KEY);
    assert!(json["issued_at"].is_string());

    assert_eq!(
        fake.requests(),
        vec![json!({ "name": ["foo.example.com"], "validFor": 30 })]
    );
}

#[tokio::test]
async fn test_create_certificate_validation() {
    let (fake, server) = setup(Behavior::default()).await;

    let response = server
        .post("/api/certificates")
        .json(&json!({ "server": "foo bar", "subzone": ".example.com" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["server"].is_array());
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_create_certificate_unpermitted_subzone() {
    let (fake, server) = setup(Behavior::default()).await;

    let response = server
        .post("/api/certificates")
        .json(&json!({ "server": "foo", "subzone": ".evil.test" }))
        .await;

    response.assert_status_bad_request();
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_create_certificate_upstream_failure() {
    let (_fake, server) = setup(
        Behavior::default().with_create(StatusCode::BAD_REQUEST, json!({ "error": "bad name" })),
    )
    .await;

    let response = server
        .post("/api/certificates")
        .json(&json!({ "server": "foo", "subzone": ".example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["upstream_status"], 400);
}

#[tokio::test]
async fn test_create_certificate_without_domains_sends_nothing() {
    let (fake, server) = setup(
        Behavior::default().with_domains(StatusCode::SERVICE_UNAVAILABLE, json!({})),
    )
    .await;

    let response = server
        .post("/api/certificates")
        .json(&json!({ "server": "foo", "subzone": ".example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "upstream_error");
    assert_eq!(json["error"]["details"]["upstream_status"], 503);
    assert!(fake.requests().is_empty());
}
