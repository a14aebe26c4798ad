//! Certificate request workflow service.

use crate::domain::entities::DomainList;
use crate::domain::form::{CertificateForm, FormError};
use crate::domain::repositories::{ApiError, CertificateApi};
use serde_json::Value;
use std::sync::Arc;

/// Drives a [`CertificateForm`] against the certificate API.
///
/// Handles:
/// - Loading permitted domains into a fresh form
/// - Submitting the form and recording the outcome
/// - Passing through the API listing
pub struct CertificateService<A: CertificateApi> {
    api: Arc<A>,
    valid_for_days: u32,
}

impl<A: CertificateApi> CertificateService<A> {
    /// Creates a new certificate service requesting `valid_for_days` of validity.
    pub fn new(api: Arc<A>, valid_for_days: u32) -> Self {
        Self {
            api,
            valid_for_days,
        }
    }

    pub fn valid_for_days(&self) -> u32 {
        self.valid_for_days
    }

    /// Base address of the certificate API.
    pub fn endpoint(&self) -> String {
        self.api.endpoint()
    }

    /// Returns a new form seeded with the permitted domains.
    ///
    /// A failed fetch is recorded on the form instead of being returned, so
    /// the page can still render with the error and submit disabled.
    pub async fn load_form(&self) -> CertificateForm {
        let mut form = CertificateForm::new();
        self.refresh_domains(&mut form).await;
        form
    }

    /// Fetches the domain list into `form`.
    ///
    /// Returns whether the form can now be submitted.
    pub async fn refresh_domains(&self, form: &mut CertificateForm) -> bool {
        match self.api.permitted_domains().await {
            Ok(domains) => {
                form.domains_loaded(domains);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load permitted domains");
                form.domains_failed(e);
                false
            }
        }
    }

    /// Submits the form's current fields to the issuance endpoint.
    ///
    /// On success the form shows the new certificate. On failure the form
    /// keeps its view state and carries the error.
    ///
    /// # Errors
    ///
    /// Returns the [`FormError`] also stored on the form: a validation error
    /// (no request was sent) or [`FormError::IssueFailed`].
    pub async fn submit(&self, form: &mut CertificateForm) -> Result<(), FormError> {
        let request = form.submit(self.valid_for_days)?;

        match self.api.create_certificate(&request).await {
            Ok(certificate) => {
                form.issued(certificate);
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    hostname = request.hostname(),
                    error = %e,
                    "Certificate request failed"
                );
                form.issue_failed(e.clone());
                Err(FormError::IssueFailed(e))
            }
        }
    }

    /// Fetches the permitted domains without touching any form.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the client.
    pub async fn permitted_domains(&self) -> Result<DomainList, ApiError> {
        self.api.permitted_domains().await
    }

    /// Fetches the API root listing verbatim.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the client.
    pub async fn listing(&self) -> Result<Value, ApiError> {
        self.api.listing().await
    }
}
