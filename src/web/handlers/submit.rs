//! Certificate form submission handler.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use super::page::CertificatePage;
use crate::api::dto::certificate::CertificateInput;
use crate::error::validation_message;
use crate::state::AppState;

/// Submits the certificate form and renders the outcome on the same page.
///
/// # Endpoint
///
/// `POST /certificates` (`application/x-www-form-urlencoded`)
///
/// # Flow
///
/// 1. Load permitted domains; without them nothing is submitted
/// 2. Validate `server` and `subzone`
/// 3. Request the certificate for `server + subzone`
/// 4. Render the result panel, or the form with the error
///
/// # Response Codes
///
/// - **200 OK**: Certificate issued, result panel shown
/// - **422 Unprocessable Entity**: Invalid fields, form shown with error
/// - **502 Bad Gateway**: Certificate API failed, form shown with error
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(input): Form<CertificateInput>,
) -> Response {
    let service = &state.certificate_service;
    let mut form = service.load_form().await;

    form.set_server(input.server.clone());
    form.set_subzone(input.subzone.clone());

    let status = if !form.can_submit() {
        StatusCode::BAD_GATEWAY
    } else if let Err(errors) = input.validate() {
        form.reject(validation_message(&errors));
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        match service.submit(&mut form).await {
            Ok(()) => StatusCode::OK,
            Err(e) if e.is_upstream() => StatusCode::BAD_GATEWAY,
            Err(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    };

    let page = CertificatePage::new(&form, service.endpoint(), service.valid_for_days());
    (status, page).into_response()
}
