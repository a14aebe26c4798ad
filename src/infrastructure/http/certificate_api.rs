//! `reqwest` implementation of the certificate API.

use crate::domain::entities::{
    CertificatePayload, CertificateRequest, DomainList, IssuedCertificate,
    PermittedDomainsPayload,
};
use crate::domain::repositories::{ApiError, CertificateApi};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error as _;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Upper bound on how much of an error body is kept for display.
const MAX_ERROR_BODY: usize = 512;

/// Tunables for [`HttpCertificateApi`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Total time allowed for a single request, including the body.
    pub timeout: Duration,
    /// Extra attempts for idempotent GETs that failed transiently.
    pub retry_attempts: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            retry_attempts: 2,
        }
    }
}

/// Certificate API client over HTTP(S).
///
/// Paths are appended to the configured base address verbatim:
/// `{base}/permittedDomains`, `{base}/certificates`, and `{base}` itself
/// for the listing.
///
/// # Retries
///
/// GET requests are retried on transport errors and 5xx responses with
/// jittered exponential backoff. Certificate creation is never retried:
/// each POST issues a new certificate.
#[derive(Debug, Clone)]
pub struct HttpCertificateApi {
    client: Client,
    base: String,
    retry_attempts: usize,
}

impl HttpCertificateApi {
    /// Creates a client for the API at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] unless `endpoint` is an absolute
    /// `http` or `https` URL.
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: &str, options: ClientOptions) -> Result<Self, ApiError> {
        let url = Url::parse(endpoint)
            .map_err(|e| ApiError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::InvalidEndpoint(format!(
                "{endpoint}: scheme must be http or https"
            )));
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            base: endpoint.trim_end_matches('/').to_string(),
            retry_attempts: options.retry_attempts,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// GETs `url` as JSON, retrying transient failures.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let strategy = ExponentialBackoff::from_millis(10)
            .factor(5)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(self.retry_attempts);

        RetryIf::spawn(
            strategy,
            || self.fetch_json(url),
            |e: &ApiError| {
                let retry = e.is_transient();
                if retry {
                    warn!(url, error = %e, "Certificate API request failed, retrying");
                }
                retry
            },
        )
        .await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

#[async_trait]
impl CertificateApi for HttpCertificateApi {
    async fn permitted_domains(&self) -> Result<DomainList, ApiError> {
        let payload: PermittedDomainsPayload = self.get_json(&self.url("permittedDomains")).await?;
        debug!(count = payload.domains.len(), "Permitted domains loaded");
        DomainList::new(payload.domains).ok_or(ApiError::EmptyDomainList)
    }

    async fn listing(&self) -> Result<Value, ApiError> {
        self.get_json(&self.base).await
    }

    async fn create_certificate(
        &self,
        request: &CertificateRequest,
    ) -> Result<IssuedCertificate, ApiError> {
        let url = self.url("certificates");
        debug!(url, hostname = request.hostname(), "POST");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let payload: CertificatePayload = decode(response).await?;
        info!(
            hostname = request.hostname(),
            valid_for = request.valid_for,
            "Certificate issued"
        );

        Ok(IssuedCertificate::new(request, payload))
    }

    fn endpoint(&self) -> String {
        self.base.clone()
    }
}

/// Maps a response to `T`, turning non-2xx statuses and shape mismatches into errors.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY).collect(),
        });
    }

    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Flattens a `reqwest` error and its sources into one message.
fn transport_error(e: reqwest::Error) -> ApiError {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    ApiError::Transport(message)
}
