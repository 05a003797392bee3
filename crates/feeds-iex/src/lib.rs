#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/feeds/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! IEX Cloud reader.
//!
//! # Usage
//!
//! ```rust,ignore
//! use feeds_iex::IexReader;
//!
//! #[tokio::main]
//! async fn main() -> feeds_core::Result<()> {
//!     let iex = IexReader::new("your_token")?.sandbox(true);
//!
//!     let expirations = iex.option_expirations("aapl").await?;
//!     let calls = iex.option_chain("aapl", "20221118", "call").await?;
//!
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use feeds_core::config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use feeds_core::{
    Client, Endpoint, HostVariant, HttpTransport, PayloadShape, ProviderConfig, Reader, Result,
    Table, Timeouts,
};
use tracing::debug;

mod company;
mod options;
mod quote;

pub use options::OPTION_SIDES;

/// Host variant for production data.
pub const STABLE: &str = "stable";

/// Host variant for the sandbox (test data, test tokens).
pub const SANDBOX: &str = "sandbox";

const HOSTS: &[HostVariant] = &[
    HostVariant::new(STABLE, "https://cloud.iexapis.com/stable"),
    HostVariant::new(SANDBOX, "https://sandbox.iexapis.com/stable"),
];

/// Provider configuration for IEX Cloud.
pub const CONFIG: ProviderConfig = ProviderConfig {
    name: "IEX",
    hosts: HOSTS,
    auth_param: "token",
    shape: PayloadShape::Records,
    timeouts: Timeouts::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT),
};

/// Environment variable read by [`IexReader::from_env`].
pub const API_KEY_ENV: &str = "IEX_TOKEN";

/// IEX Cloud reader.
pub struct IexReader {
    client: Client,
    host: &'static str,
}

impl fmt::Debug for IexReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IexReader")
            .field("client", &self.client)
            .field("host", &self.host)
            .finish()
    }
}

impl IexReader {
    fn from_client(client: Client) -> Self {
        Self {
            client,
            host: STABLE,
        }
    }

    /// Create a new IEX reader with the given token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(Client::new(CONFIG, token)?))
    }

    /// Create a new IEX reader with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(Client::with_client(CONFIG, token, client)?))
    }

    /// Create a new IEX reader on top of any transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(Client::with_transport(
            CONFIG, token, transport,
        )?))
    }

    /// Create a new IEX reader with the token stored in `IEX_TOKEN`.
    pub fn from_env() -> Result<Self> {
        debug!(var = API_KEY_ENV, "Reading IEX token from environment");
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Sends requests to the sandbox host instead of production.
    #[must_use]
    pub fn sandbox(mut self, enabled: bool) -> Self {
        self.host = if enabled { SANDBOX } else { STABLE };
        self
    }

    /// Overrides the default timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.client = self.client.with_timeouts(timeouts);
        self
    }

    /// Raises decode failures and unexpected statuses instead of returning `Ok(None)`.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.client = self.client.strict(strict);
        self
    }

    /// Host variant requests are sent to.
    #[must_use]
    pub const fn host(&self) -> &'static str {
        self.host
    }

    async fn get(&self, endpoint: Endpoint) -> Result<Option<Table>> {
        self.client.fetch(&endpoint).await
    }

    fn endpoint(&self, path: impl Into<String>) -> Endpoint {
        Endpoint::new(self.host, path)
    }
}

impl Reader for IexReader {
    fn client(&self) -> &Client {
        &self.client
    }

    fn description(&self) -> &str {
        "IEX Cloud - Real-time quotes, company data and options"
    }
}
