//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` client for the remote certificate API

pub mod http;
