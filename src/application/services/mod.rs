//! Business logic services for the application layer.

pub mod certificate_service;

pub use certificate_service::CertificateService;
