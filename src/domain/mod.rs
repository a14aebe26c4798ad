//! Domain layer containing the certificate request model.
//!
//! Independent of HTTP frameworks and clients; the web and terminal front
//! ends both drive the same [`form::CertificateForm`].
//!
//! # Architecture
//!
//! - [`entities`] - Domain list, hostname, request and certificate values
//! - [`form`] - View model and its state transitions
//! - [`repositories`] - Certificate API trait definition
//!
//! # Request Flow
//!
//! 1. Permitted domains are fetched via [`repositories::CertificateApi`]
//! 2. [`form::CertificateForm::domains_loaded`] seeds the default subzone
//! 3. [`form::CertificateForm::submit`] composes the [`entities::CertificateRequest`]
//! 4. The issued certificate (or the failure) is fed back into the form

pub mod entities;
pub mod form;
pub mod repositories;
