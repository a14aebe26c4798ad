//! View model of the certificate request page.
//!
//! [`CertificateForm`] holds everything the page renders and changes only
//! through discrete events:
//!
//! 1. [`CertificateForm::domains_loaded`] / [`CertificateForm::domains_failed`]
//! 2. [`CertificateForm::set_server`] / [`CertificateForm::set_subzone`]
//! 3. [`CertificateForm::submit`] builds the outbound request
//! 4. [`CertificateForm::issued`] / [`CertificateForm::issue_failed`]
//! 5. [`CertificateForm::reset`] returns to the form
//!
//! The view only reaches [`ViewState::Result`] through a successful issuance,
//! and submit is refused until the domain list has loaded.

use crate::domain::entities::{
    CertificateRequest, DomainList, Hostname, HostnameError, IssuedCertificate,
};
use crate::domain::repositories::ApiError;

/// Which panel of the page is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Form,
    Result,
}

/// User-visible errors of the request workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Permitted domains have not been loaded yet")]
    DomainsNotLoaded,

    #[error("Unable to load permitted domains: {0}")]
    DomainsUnavailable(ApiError),

    #[error("{0} is not a permitted subzone")]
    SubzoneNotPermitted(String),

    #[error(transparent)]
    Hostname(#[from] HostnameError),

    #[error("{0}")]
    Invalid(String),

    #[error("Certificate request failed: {0}")]
    IssueFailed(ApiError),
}

impl FormError {
    /// Whether the error came from the certificate API rather than user input.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::DomainsUnavailable(_) | Self::IssueFailed(_))
    }
}

/// State of a single certificate request page.
#[derive(Debug, Clone, Default)]
pub struct CertificateForm {
    state: ViewState,
    domains: Option<DomainList>,
    server: String,
    subzone: String,
    issued: Option<IssuedCertificate>,
    error: Option<FormError>,
}

impl CertificateForm {
    /// An empty form waiting for the domain list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the form from a freshly fetched domain list.
    ///
    /// The subzone defaults to the first permitted domain and the server
    /// field is cleared.
    pub fn domains_loaded(&mut self, domains: DomainList) {
        self.subzone = domains.default_subzone();
        self.server.clear();
        self.domains = Some(domains);
        if matches!(self.error, Some(FormError::DomainsUnavailable(_))) {
            self.error = None;
        }
    }

    /// Records that the domain list could not be fetched.
    ///
    /// Submit stays disabled until a later [`CertificateForm::domains_loaded`].
    pub fn domains_failed(&mut self, error: ApiError) {
        self.error = Some(FormError::DomainsUnavailable(error));
    }

    pub fn set_server(&mut self, server: impl Into<String>) {
        self.server = server.into();
    }

    pub fn set_subzone(&mut self, subzone: impl Into<String>) {
        self.subzone = subzone.into();
    }

    /// Attaches a validation error raised outside the form (e.g. by DTO checks).
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(FormError::Invalid(message.into()));
    }

    /// Whether the submit action is available.
    pub fn can_submit(&self) -> bool {
        self.domains.is_some()
    }

    /// Builds the issuance request from the current fields.
    ///
    /// Leaves the view state untouched; on failure the error is also stored
    /// for display.
    ///
    /// # Errors
    ///
    /// - [`FormError::DomainsNotLoaded`] before the domain list is available
    /// - [`FormError::Hostname`] if server or subzone is missing or the
    ///   composed name is not acceptable as a certificate subject
    /// - [`FormError::SubzoneNotPermitted`] if the subzone is not in the list
    pub fn submit(&mut self, valid_for: u32) -> Result<CertificateRequest, FormError> {
        let result = self.build_request(valid_for);
        match &result {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.clone()),
        }
        result
    }

    fn build_request(&self, valid_for: u32) -> Result<CertificateRequest, FormError> {
        let domains = self.domains.as_ref().ok_or(FormError::DomainsNotLoaded)?;

        let hostname = Hostname::compose(&self.server, &self.subzone)?;

        if !domains.permits_subzone(&self.subzone) {
            return Err(FormError::SubzoneNotPermitted(self.subzone.clone()));
        }

        Ok(CertificateRequest::new(hostname, valid_for))
    }

    /// Shows a freshly issued certificate, replacing any previous one.
    pub fn issued(&mut self, certificate: IssuedCertificate) {
        self.issued = Some(certificate);
        self.error = None;
        self.state = ViewState::Result;
    }

    /// Records a failed issuance. The view state is left as it was.
    pub fn issue_failed(&mut self, error: ApiError) {
        self.error = Some(FormError::IssueFailed(error));
    }

    /// Returns to the form for another request, keeping the domain list.
    pub fn reset(&mut self) {
        self.state = ViewState::Form;
        self.issued = None;
        self.error = None;
        self.server.clear();
        if let Some(domains) = &self.domains {
            self.subzone = domains.default_subzone();
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn domains(&self) -> Option<&DomainList> {
        self.domains.as_ref()
    }

    /// Selectable subzones, empty until the domain list has loaded.
    pub fn subzones(&self) -> Vec<String> {
        self.domains
            .as_ref()
            .map(DomainList::subzones)
            .unwrap_or_default()
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn subzone(&self) -> &str {
        &self.subzone
    }

    pub fn certificate(&self) -> Option<&IssuedCertificate> {
        self.issued.as_ref()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }
}
