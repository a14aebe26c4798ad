//! Handler for the certificate API listing.

use axum::{Json, extract::State};

use crate::api::dto::listing::ListingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the certificate API root listing verbatim.
///
/// # Endpoint
///
/// `GET /api/listing`
///
/// # Errors
///
/// Returns 502 if the certificate API fails or answers with invalid JSON.
pub async fn listing_handler(
    State(state): State<AppState>,
) -> Result<Json<ListingResponse>, AppError> {
    let list = state.certificate_service.listing().await?;

    Ok(Json(ListingResponse {
        endpoint: state.certificate_service.endpoint(),
        list,
    }))
}
