//! Application layer services implementing the request workflow.
//!
//! Services consume the [`crate::domain::repositories::CertificateApi`] trait
//! and drive the [`crate::domain::form::CertificateForm`] view model, giving
//! the web and terminal front ends one shared implementation.
//!
//! # Available Services
//!
//! - [`services::certificate_service::CertificateService`] - Domain loading and issuance

pub mod services;
