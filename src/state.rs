//! Shared application state injected into all handlers.

use crate::application::services::CertificateService;
use crate::infrastructure::http::HttpCertificateApi;
use std::sync::Arc;

/// Certificate service backed by the HTTP client.
pub type HttpCertificateService = CertificateService<HttpCertificateApi>;

#[derive(Clone)]
pub struct AppState {
    pub certificate_service: Arc<HttpCertificateService>,
}

impl AppState {
    pub fn new(certificate_service: Arc<HttpCertificateService>) -> Self {
        Self {
            certificate_service,
        }
    }
}
