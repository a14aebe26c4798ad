//! Client interface to the remote certificate-manager API.

use crate::domain::entities::{CertificateRequest, DomainList, IssuedCertificate};
use async_trait::async_trait;
use serde_json::Value;

/// Failures talking to the certificate API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("Certificate API unreachable: {0}")]
    Transport(String),

    /// The API answered with a non-success status code.
    #[error("Certificate API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Unexpected response from certificate API: {0}")]
    Decode(String),

    #[error("Certificate API returned an empty domain list")]
    EmptyDomainList,

    #[error("Invalid certificate API endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ApiError {
    /// Whether repeating the same idempotent request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) | Self::EmptyDomainList | Self::InvalidEndpoint(_) => false,
        }
    }
}

/// Operations offered by the certificate API.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpCertificateApi`] - `reqwest` client
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/http_client.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificateApi: Send + Sync {
    /// Fetches the domains under which certificates may be issued.
    ///
    /// `GET {base}/permittedDomains`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyDomainList`] if the API returns no domains.
    /// Returns [`ApiError::Decode`] if the body is not `{"domains": [..]}`.
    async fn permitted_domains(&self) -> Result<DomainList, ApiError>;

    /// Fetches the API root listing, passed through without interpretation.
    ///
    /// `GET {base}`
    async fn listing(&self) -> Result<Value, ApiError>;

    /// Requests a new certificate.
    ///
    /// `POST {base}/certificates`. Every call issues a new certificate.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] unless the body carries both
    /// `certificate` and `key`.
    async fn create_certificate(
        &self,
        request: &CertificateRequest,
    ) -> Result<IssuedCertificate, ApiError>;

    /// Base address requests are sent to, for display and logging.
    fn endpoint(&self) -> String;
}
