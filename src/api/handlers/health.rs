//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The certificate API answers
/// - **503 Service Unavailable**: The certificate API is unreachable or misbehaving
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "certificate_api": {
///       "status": "ok",
///       "message": "2 permitted domains"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let api_check = check_certificate_api(&state).await;
    let healthy = api_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            certificate_api: api_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the certificate API through the permitted domains endpoint.
async fn check_certificate_api(state: &AppState) -> CheckStatus {
    match state.certificate_service.permitted_domains().await {
        Ok(domains) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} permitted domains", domains.domains().len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.to_string()),
        },
    }
}
