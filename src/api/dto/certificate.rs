//! DTOs for certificate requests.

use crate::domain::entities::IssuedCertificate;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Dot-separated DNS labels: alphanumerics and inner hyphens, 1-63 chars each.
static SERVER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .unwrap()
});

/// Certificate request fields, submitted as a web form or as JSON.
///
/// Missing fields deserialize as empty strings so they are reported by
/// validation instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CertificateInput {
    /// Host name prefix, e.g. `foo` in `foo.example.com`.
    #[serde(default)]
    #[validate(length(min = 1, max = 190, message = "Server name must be 1-190 characters"))]
    #[validate(regex(
        path = *SERVER_NAME_REGEX,
        message = "Server name may only contain letters, digits, hyphens and dots"
    ))]
    pub server: String,

    /// Selected permitted domain with its leading dot, e.g. `.example.com`.
    #[serde(default)]
    #[validate(length(min = 1, message = "Subzone is required"))]
    pub subzone: String,
}

/// A freshly issued certificate.
#[derive(Debug, Serialize)]
pub struct CertificateResponse {
    pub hostname: String,
    pub certificate: String,
    pub key: String,
    pub issued_at: DateTime<Utc>,
}

impl From<&IssuedCertificate> for CertificateResponse {
    fn from(issued: &IssuedCertificate) -> Self {
        Self {
            hostname: issued.hostname.clone(),
            certificate: issued.certificate.clone(),
            key: issued.key.clone(),
            issued_at: issued.issued_at,
        }
    }
}
