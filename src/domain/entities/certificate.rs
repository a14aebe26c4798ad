//! Certificate issuance request and response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Hostname;

/// Validity requested when nothing else is configured.
pub const DEFAULT_VALID_FOR_DAYS: u32 = 30;

/// Longest validity the issuing CA accepts.
pub const MAX_VALID_FOR_DAYS: u32 = 365;

/// Body of `POST {base}/certificates`.
///
/// Serializes as `{"name": ["<hostname>"], "validFor": <days>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateRequest {
    pub name: Vec<String>,
    #[serde(rename = "validFor")]
    pub valid_for: u32,
}

impl CertificateRequest {
    /// Creates a single-name request for `hostname`.
    pub fn new(hostname: Hostname, valid_for: u32) -> Self {
        Self {
            name: vec![hostname.into_string()],
            valid_for,
        }
    }

    /// The certificate subject, i.e. the first requested name.
    pub fn hostname(&self) -> &str {
        self.name.first().map(String::as_str).unwrap_or_default()
    }
}

/// Wire shape of a successful issuance response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CertificatePayload {
    pub certificate: String,
    pub key: String,
}

/// A certificate and private key returned by the API, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCertificate {
    pub hostname: String,
    pub certificate: String,
    pub key: String,
    pub issued_at: DateTime<Utc>,
}

impl IssuedCertificate {
    /// Pairs an upstream payload with the request it answered.
    pub fn new(request: &CertificateRequest, payload: CertificatePayload) -> Self {
        Self {
            hostname: request.hostname().to_string(),
            certificate: payload.certificate,
            key: payload.key,
            issued_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let hostname = Hostname::compose("foo", ".example.com").unwrap();
        let request = CertificateRequest::new(hostname, DEFAULT_VALID_FOR_DAYS);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "name": ["foo.example.com"], "validFor": 30 })
        );
        assert_eq!(request.hostname(), "foo.example.com");
    }

    #[test]
    fn test_payload_requires_certificate_and_key() {
        let missing_key: Result<CertificatePayload, _> =
            serde_json::from_value(json!({ "certificate": "CERT" }));
        assert!(missing_key.is_err());

        let wrong_type: Result<CertificatePayload, _> =
            serde_json::from_value(json!({ "certificate": "CERT", "key": 42 }));
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_issued_certificate_keeps_values_verbatim() {
        let hostname = Hostname::compose("foo", ".example.com").unwrap();
        let request = CertificateRequest::new(hostname, 30);
        let issued = IssuedCertificate::new(
            &request,
            CertificatePayload {
                certificate: "CERT".to_string(),
                key: "KEY".to_string(),
            },
        );

        assert_eq!(issued.hostname, "foo.example.com");
        assert_eq!(issued.certificate, "CERT");
        assert_eq!(issued.key, "KEY");
    }
}
