//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod certificates;
pub mod domains;
pub mod health;
pub mod listing;

pub use certificates::create_certificate_handler;
pub use domains::permitted_domains_handler;
pub use health::health_handler;
pub use listing::listing_handler;
