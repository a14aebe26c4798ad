//! Permitted DNS suffixes under which certificates may be issued.

use serde::{Deserialize, Serialize};

/// Ordered list of permitted domains as returned by the certificate API.
///
/// The list is guaranteed to be non-empty: the first entry seeds the default
/// subzone of the request form, so an empty list is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainList {
    domains: Vec<String>,
}

impl DomainList {
    /// Builds a domain list from the upstream payload.
    ///
    /// Returns `None` when `domains` is empty.
    pub fn new(domains: Vec<String>) -> Option<Self> {
        if domains.is_empty() {
            return None;
        }
        Some(Self { domains })
    }

    /// Permitted domains in upstream order, without a leading dot.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// The subzone preselected in the form: `"." + domains[0]`.
    pub fn default_subzone(&self) -> String {
        to_subzone(&self.domains[0])
    }

    /// Every permitted domain rendered as a selectable subzone.
    pub fn subzones(&self) -> Vec<String> {
        self.domains.iter().map(|d| to_subzone(d)).collect()
    }

    /// Returns whether `subzone` is one of [`DomainList::subzones`].
    pub fn permits_subzone(&self, subzone: &str) -> bool {
        subzone
            .strip_prefix('.')
            .is_some_and(|suffix| self.domains.iter().any(|d| d.eq_ignore_ascii_case(suffix)))
    }
}

fn to_subzone(domain: &str) -> String {
    format!(".{domain}")
}

/// Wire shape of `GET {base}/permittedDomains`.
#[derive(Debug, Deserialize)]
pub struct PermittedDomainsPayload {
    pub domains: Vec<String>,
}
