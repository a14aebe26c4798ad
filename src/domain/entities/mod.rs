//! Core data model of the certificate request workflow.
//!
//! Entities are plain data structures with the wire shapes of the certificate
//! API kept separate from the values the application works with:
//!
//! - [`DomainList`] - Permitted DNS suffixes (from [`PermittedDomainsPayload`])
//! - [`Hostname`] - Certificate subject composed from server + subzone
//! - [`CertificateRequest`] - Issuance request body
//! - [`IssuedCertificate`] - Certificate and key received (from [`CertificatePayload`])

pub mod certificate;
pub mod domain_list;
pub mod hostname;

pub use certificate::{
    CertificatePayload, CertificateRequest, DEFAULT_VALID_FOR_DAYS, IssuedCertificate,
    MAX_VALID_FOR_DAYS,
};
pub use domain_list::{DomainList, PermittedDomainsPayload};
pub use hostname::{Hostname, HostnameError};
