//! Web layer serving the certificate request page.
//!
//! Uses Askama templates for server-side rendering; the page is driven by
//! [`crate::domain::form::CertificateForm`].
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
