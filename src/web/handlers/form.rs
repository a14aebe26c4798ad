//! Certificate form page handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::page::CertificatePage;
use crate::state::AppState;

/// Renders the certificate request form with freshly loaded domains.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response Codes
///
/// - **200 OK**: Form ready, default subzone preselected
/// - **502 Bad Gateway**: Permitted domains could not be loaded; the page
///   shows the error and the submit button is disabled
pub async fn form_handler(State(state): State<AppState>) -> Response {
    let service = &state.certificate_service;
    let form = service.load_form().await;

    let status = if form.can_submit() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    let page = CertificatePage::new(&form, service.endpoint(), service.valid_for_days());
    (status, page).into_response()
}
