//! DTOs for the API listing passthrough.

use serde::Serialize;
use serde_json::Value;

/// Upstream root listing, returned verbatim alongside the endpoint it came from.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub endpoint: String,
    pub list: Value,
}
