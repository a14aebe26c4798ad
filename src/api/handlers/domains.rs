//! Handler for the permitted domain list.

use axum::{Json, extract::State};

use crate::api::dto::domains::PermittedDomainsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the domains certificates may be issued under.
///
/// # Endpoint
///
/// `GET /api/permitted-domains`
pub async fn permitted_domains_handler(
    State(state): State<AppState>,
) -> Result<Json<PermittedDomainsResponse>, AppError> {
    let domains = state.certificate_service.permitted_domains().await?;
    Ok(Json(domains.into()))
}
