//! HTTP client for the certificate API.
//!
//! Provides [`HttpCertificateApi`], the `reqwest` implementation of
//! [`crate::domain::repositories::CertificateApi`].

mod certificate_api;

pub use certificate_api::{ClientOptions, HttpCertificateApi};
