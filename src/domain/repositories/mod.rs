//! Interfaces to external collaborators.
//!
//! The only collaborator is the remote certificate API. The trait is
//! implemented in `crate::infrastructure::http`; mock implementations are
//! auto-generated via `mockall` for testing.

pub mod certificate_api;

pub use certificate_api::{ApiError, CertificateApi};

#[cfg(test)]
pub use certificate_api::MockCertificateApi;
