//! The certificate request page, rendered from a [`CertificateForm`].

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::form::{CertificateForm, ViewState};

/// One entry of the subzone selector.
pub struct SubzoneOption {
    pub value: String,
    pub selected: bool,
}

/// Template for the single certificate page.
///
/// Renders `templates/certificate.html` showing either:
/// - The request form (server input, subzone selector)
/// - The issued certificate and private key
///
/// An error banner is shown above either panel when the form carries one.
#[derive(Template, WebTemplate)]
#[template(path = "certificate.html")]
pub struct CertificatePage {
    pub endpoint: String,
    pub valid_for_days: u32,
    pub server: String,
    pub subzones: Vec<SubzoneOption>,
    pub can_submit: bool,
    pub show_result: bool,
    pub hostname: String,
    pub certificate: String,
    pub key: String,
    pub issued_at: String,
    pub has_error: bool,
    pub error: String,
}

impl CertificatePage {
    pub fn new(form: &CertificateForm, endpoint: String, valid_for_days: u32) -> Self {
        let subzones = form
            .subzones()
            .into_iter()
            .map(|value| SubzoneOption {
                selected: value == form.subzone(),
                value,
            })
            .collect();

        let issued = form.certificate();
        let error = form.error().map(|e| e.to_string()).unwrap_or_default();

        Self {
            endpoint,
            valid_for_days,
            server: form.server().to_string(),
            subzones,
            can_submit: form.can_submit(),
            show_result: form.state() == ViewState::Result,
            hostname: issued.map(|c| c.hostname.clone()).unwrap_or_default(),
            certificate: issued.map(|c| c.certificate.clone()).unwrap_or_default(),
            key: issued.map(|c| c.key.clone()).unwrap_or_default(),
            issued_at: issued
                .map(|c| c.issued_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_default(),
            has_error: !error.is_empty(),
            error,
        }
    }
}
