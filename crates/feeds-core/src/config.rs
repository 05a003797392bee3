//! Provider configuration.
//!
//! Each provider crate declares a `const` [`ProviderConfig`] describing its
//! base URLs, how the API key is passed, and how rows are wrapped in its
//! responses.

use std::time::Duration;

use crate::error::ConfigError;
use crate::response::PayloadShape;

/// Default time allowed to establish a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default time allowed for a response once connected.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect and read timeout pair applied to every request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Timeouts {
    /// Time allowed to establish a connection.
    pub connect: Duration,
    /// Time allowed for the response.
    pub read: Duration,
}

impl Timeouts {
    /// Creates a new timeout pair.
    #[must_use]
    pub const fn new(connect: Duration, read: Duration) -> Self {
        Self { connect, read }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }
}

/// One of a provider's base-URL families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostVariant {
    /// Identifier used by endpoints (e.g. `"v3"`).
    pub id: &'static str,
    /// Base URL, without trailing slash.
    pub base_url: &'static str,
}

impl HostVariant {
    /// Declares a host variant.
    #[must_use]
    pub const fn new(id: &'static str, base_url: &'static str) -> Self {
        Self { id, base_url }
    }
}

/// Static description of a remote provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Human-readable provider name, used in errors and logs.
    pub name: &'static str,
    /// Mutually exclusive base URL families.
    pub hosts: &'static [HostVariant],
    /// Query parameter that carries the API key.
    pub auth_param: &'static str,
    /// How the provider wraps rows in its responses.
    pub shape: PayloadShape,
    /// Default timeouts for this provider.
    pub timeouts: Timeouts,
}

impl ProviderConfig {
    /// Looks up a host variant by id.
    pub fn host(&self, id: &str) -> Result<&HostVariant, ConfigError> {
        self.hosts
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| ConfigError::UnknownHostVariant {
                provider: self.name.to_string(),
                variant: id.to_string(),
                declared: self.host_ids(),
            })
    }

    /// Returns the declared host variant ids.
    #[must_use]
    pub fn host_ids(&self) -> Vec<&'static str> {
        self.hosts.iter().map(|h| h.id).collect()
    }
}
