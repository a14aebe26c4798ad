//! Hostname composition from the form's server and subzone fields.

use std::fmt;
use std::net::IpAddr;

/// Reasons a server/subzone pair cannot form a certificate subject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostnameError {
    #[error("Server name is required")]
    MissingServer,

    #[error("Subzone is required")]
    MissingSubzone,

    #[error("www. host names are not supported")]
    WwwPrefix,

    #[error("Host names starting with '.' are not supported")]
    LeadingDot,

    #[error("Subject name of a certificate must not be an IP address")]
    IpAddress,
}

/// Fully qualified host name requested as the certificate subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname(String);

impl Hostname {
    /// Concatenates `server` and `subzone` verbatim.
    ///
    /// The issuing CA rejects `www.` names, names with a leading dot and IP
    /// literals, so those are refused here before any request is sent.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let host = Hostname::compose("foo", ".example.com").unwrap();
    /// assert_eq!(host.as_str(), "foo.example.com");
    /// ```
    pub fn compose(server: &str, subzone: &str) -> Result<Self, HostnameError> {
        if server.trim().is_empty() {
            return Err(HostnameError::MissingServer);
        }
        if subzone.trim().is_empty() {
            return Err(HostnameError::MissingSubzone);
        }

        let hostname = format!("{server}{subzone}");

        if hostname.starts_with('.') {
            return Err(HostnameError::LeadingDot);
        }
        if hostname.to_ascii_lowercase().starts_with("www.") {
            return Err(HostnameError::WwwPrefix);
        }
        if hostname.parse::<IpAddr>().is_ok() {
            return Err(HostnameError::IpAddress);
        }

        Ok(Self(hostname))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
