//! # certmgr-web
//!
//! A certificate request front end for a certificate-manager HTTP API.
//!
//! Fetches the permitted domains, lets a user combine a server name with one
//! of them, requests a certificate and shows the returned certificate and
//! private key. Ships as a web page (`certmgr-web`) and a terminal tool
//! (`certreq`).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Request model, view model and API trait
//! - **Application Layer** ([`application`]) - Request workflow service
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` API client
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered certificate page
//!
//! ## Quick Start
//!
//! ```bash
//! export API_ENDPOINT="https://certs.example.com/api/v1"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CertificateService;
    pub use crate::domain::entities::{CertificateRequest, DomainList, IssuedCertificate};
    pub use crate::domain::form::{CertificateForm, FormError, ViewState};
    pub use crate::domain::repositories::{ApiError, CertificateApi};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::{ClientOptions, HttpCertificateApi};
    pub use crate::state::AppState;
}
