//! DTOs for the permitted domain list.

use crate::domain::entities::DomainList;
use serde::Serialize;

/// Permitted domains with the subzones derived from them.
#[derive(Debug, Serialize)]
pub struct PermittedDomainsResponse {
    pub domains: Vec<String>,
    pub subzones: Vec<String>,
    pub default_subzone: String,
}

impl From<DomainList> for PermittedDomainsResponse {
    fn from(list: DomainList) -> Self {
        Self {
            subzones: list.subzones(),
            default_subzone: list.default_subzone(),
            domains: list.domains().to_vec(),
        }
    }
}
