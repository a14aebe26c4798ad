//! API route configuration.

use crate::api::handlers::{
    create_certificate_handler, listing_handler, permitted_domains_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET  /listing`           - Certificate API root listing, verbatim
/// - `GET  /permitted-domains` - Domains certificates may be issued under
/// - `POST /certificates`      - Request a certificate
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/listing", get(listing_handler))
        .route("/permitted-domains", get(permitted_domains_handler))
        .route("/certificates", post(create_certificate_handler))
}
