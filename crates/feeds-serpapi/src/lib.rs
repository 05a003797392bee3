#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/feeds/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SerpApi reader.
//!
//! # Usage
//!
//! ```rust,ignore
//! use feeds_serpapi::SerpApiReader;
//!
//! #[tokio::main]
//! async fn main() -> feeds_core::Result<()> {
//!     let serp = SerpApiReader::from_env()?;
//!
//!     let jobs = serp.google_jobs("rust developer").await?;
//!     let coffee = serp.local_results("coffee", 40.7455, -74.0083, None).await?;
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

mod google;

pub use google::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// The only host variant.
pub const SEARCH: &str = "search";

const HOSTS: &[HostVariant] = &[HostVariant::new(SEARCH, "https://serpapi.com/search.json")];

/// Provider configuration for SerpApi.
pub const CONFIG: ProviderConfig = ProviderConfig {
    name: "SerpApi",
    hosts: HOSTS,
    auth_param: "api_key",
    shape: PayloadShape::Records,
    timeouts: Timeouts::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT),
};

/// Environment variable read by [`SerpApiReader::from_env`].
pub const API_KEY_ENV: &str = "SERPAPI_API_KEY";

/// SerpApi reader.
pub struct SerpApiReader {
    client: Client,
}

impl fmt::Debug for SerpApiReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiReader")
            .field("client", &self.client)
            .finish()
    }
}

impl SerpApiReader {
    /// Create a new SerpApi reader with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(CONFIG, api_key)?,
        })
    }

    /// Create a new SerpApi reader with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::with_client(CONFIG, api_key, client)?,
        })
    }

    /// Create a new SerpApi reader on top of any transport.
    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::with_transport(CONFIG, api_key, transport)?,
        })
    }

    /// Create a new SerpApi reader with the key stored in `SERPAPI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        debug!(var = API_KEY_ENV, "Reading SerpApi key from environment");
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
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

    /// Runs one search `engine` and reads its rows from `key`.
    async fn search(&self, engine: &str, key: &'static str, endpoint: Endpoint) -> Result<Option<Table>> {
        let endpoint = endpoint
            .param("engine", engine)
            .shape(PayloadShape::NamedArray(key));
        self.client.fetch(&endpoint).await
    }
}

impl Reader for SerpApiReader {
    fn client(&self) -> &Client {
        &self.client
    }

    fn description(&self) -> &str {
        "SerpApi - Google search results as data"
    }
}
