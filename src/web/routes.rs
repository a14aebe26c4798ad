//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{form_handler, submit_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Certificate page routes.
///
/// # Endpoints
///
/// - `GET  /`             - Request form
/// - `POST /certificates` - Form submission, renders the result
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(form_handler))
        .route("/certificates", post(submit_handler))
}
