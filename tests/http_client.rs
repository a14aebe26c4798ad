mod common;

use axum::http::StatusCode;
use certmgr_web::domain::entities::{CertificateRequest, Hostname};
use certmgr_web::domain::repositories::{ApiError, CertificateApi};
use certmgr_web::infrastructure::http::{ClientOptions, HttpCertificateApi};
use common::{Behavior, FakeApi, TEST_CERT, TEST_KEY};
use serde_json::json;
use std::time::Duration;

fn request(server: &str, subzone: &str) -> CertificateRequest {
    CertificateRequest::new(Hostname::compose(server, subzone).unwrap(), 30)
}

#[tokio::test]
async fn test_permitted_domains_in_order() {
    let fake = FakeApi::start(Behavior::default()).await;
    let api = common::create_test_api(&fake.endpoint);

    let domains = api.permitted_domains().await.unwrap();

    assert_eq!(domains.domains(), ["example.com", "example.org"]);
    assert_eq!(domains.default_subzone(), ".example.com");
    assert_eq!(fake.domain_calls(), 1);
}

#[tokio::test]
async fn test_empty_domain_list_is_an_error() {
    let fake =
        FakeApi::start(Behavior::default().with_domains(StatusCode::OK, json!({ "domains": [] })))
            .await;
    let api = common::create_test_api(&fake.endpoint);

    let result = api.permitted_domains().await;

    assert_eq!(result.unwrap_err(), ApiError::EmptyDomainList);
}

#[tokio::test]
async fn test_malformed_domain_list_is_decode_error() {
    let fake = FakeApi::start(
        Behavior::default().with_domains(StatusCode::OK, json!({ "zones": ["example.com"] })),
    )
    .await;
    let api = common::create_test_api(&fake.endpoint);

    let result = api.permitted_domains().await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let fake = FakeApi::start(
        Behavior::default().with_domains(StatusCode::NOT_FOUND, json!({ "error": "nope" })),
    )
    .await;
    let options = ClientOptions {
        timeout: Duration::from_secs(5),
        retry_attempts: 3,
    };
    let api = HttpCertificateApi::new(&fake.endpoint, options).unwrap();

    let result = api.permitted_domains().await;

    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    assert_eq!(fake.domain_calls(), 1);
}

#[tokio::test]
async fn test_server_errors_are_retried() {
    let fake = FakeApi::start(
        Behavior::default().with_domains(StatusCode::SERVICE_UNAVAILABLE, json!({})),
    )
    .await;
    let options = ClientOptions {
        timeout: Duration::from_secs(5),
        retry_attempts: 2,
    };
    let api = HttpCertificateApi::new(&fake.endpoint, options).unwrap();

    let result = api.permitted_domains().await;

    assert!(matches!(result, Err(ApiError::Status { status: 503, .. })));
    assert_eq!(fake.domain_calls(), 3);
}

#[tokio::test]
async fn test_create_certificate_posts_exact_body() {
    let fake = FakeApi::start(Behavior::default()).await;
    let api = common::create_test_api(&fake.endpoint);

    let issued = api
        .create_certificate(&request("foo", ".example.com"))
        .await
        .unwrap();

    assert_eq!(issued.hostname, "foo.example.com");
    assert_eq!(issued.certificate, TEST_CERT);
    assert_eq!(issued.key, TEST_KEY);
    assert_eq!(
        fake.requests(),
        vec![json!({ "name": ["foo.example.com"], "validFor": 30 })]
    );
}

#[tokio::test]
async fn test_create_certificate_failure_is_not_retried() {
    let fake = FakeApi::start(
        Behavior::default()
            .with_create(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" })),
    )
    .await;
    let options = ClientOptions {
        timeout: Duration::from_secs(5),
        retry_attempts: 3,
    };
    let api = HttpCertificateApi::new(&fake.endpoint, options).unwrap();

    let result = api.create_certificate(&request("foo", ".example.com")).await;

    match result {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(fake.requests().len(), 1);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let endpoint = common::closed_endpoint().await;
    let api = common::create_test_api(&endpoint);

    let result = api.permitted_domains().await;

    match result {
        Err(e @ ApiError::Transport(_)) => assert!(e.is_transient()),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_listing_passthrough() {
    let fake = FakeApi::start(Behavior::default()).await;
    let api = common::create_test_api(&fake.endpoint);

    let listing = api.listing().await.unwrap();

    assert_eq!(
        listing,
        json!({ "endpoints": ["/permittedDomains", "/certificates"] })
    );
}
