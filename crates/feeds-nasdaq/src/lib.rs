#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/feeds/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Nasdaq Data Link reader.
//!
//! # Example
//!
//! ```rust,ignore
//! use feeds_nasdaq::NasdaqReader;
//!
//! #[tokio::main]
//! async fn main() -> feeds_core::Result<()> {
//!     let nasdaq = NasdaqReader::from_env()?.with_default_limit(10);
//!
//!     let curve = nasdaq.yield_curve(None).await?;
//!     let ten_year = nasdaq.treasury_yield("10yr", Some(250)).await?;
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

mod blockchain;
mod bonds;
mod dataset;
mod lbma;
mod opec;
mod sp500;
mod treasury;

pub use bonds::BOND_GRADINGS;
pub use sp500::{SP500_MONTHLY_TIMEFRAMES, SP500_QUARTERLY_TIMEFRAMES, Sp500Series};
pub use treasury::{
    MARKETABLE_BORROWING_TYPES, NON_MARKETABLE_BORROWING_TYPES, REAL_YIELD_DURATIONS,
    TBILL_DURATIONS, TREASURY_DURATIONS,
};

/// Host variant for time-series datasets.
pub const DATASETS: &str = "datasets";

/// Host variant for datatables.
pub const DATATABLES: &str = "datatables";

const HOSTS: &[HostVariant] = &[
    HostVariant::new(DATASETS, "https://data.nasdaq.com/api/v3/datasets"),
    HostVariant::new(DATATABLES, "https://data.nasdaq.com/api/v3/datatables"),
];

/// Provider configuration for Nasdaq Data Link.
pub const CONFIG: ProviderConfig = ProviderConfig {
    name: "Nasdaq",
    hosts: HOSTS,
    auth_param: "api_key",
    shape: PayloadShape::Dataset,
    timeouts: Timeouts::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT),
};

/// Environment variable read by [`NasdaqReader::from_env`].
pub const API_KEY_ENV: &str = "NASDAQ_API_KEY";

/// Rows returned when a method is called without a limit.
pub const DEFAULT_LIMIT: u32 = 25;

/// Nasdaq Data Link reader.
pub struct NasdaqReader {
    client: Client,
    limit: u32,
}

impl fmt::Debug for NasdaqReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NasdaqReader")
            .field("client", &self.client)
            .field("limit", &self.limit)
            .finish()
    }
}

impl NasdaqReader {
    /// Creates a new reader with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(Client::new(CONFIG, api_key)?))
    }

    /// Creates a new reader with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(Client::with_client(CONFIG, api_key, client)?))
    }

    /// Creates a new reader on top of any transport.
    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::from_client(Client::with_transport(
            CONFIG, api_key, transport,
        )?))
    }

    /// Creates a new reader with the key stored in `NASDAQ_API_KEY`.
    pub fn from_env() -> Result<Self> {
        debug!(var = API_KEY_ENV, "Reading Nasdaq api key from environment");
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    fn from_client(client: Client) -> Self {
        Self {
            client,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the number of rows returned when a method is called without a limit.
    #[must_use]
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
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

    /// Rows requested when a method is called without a limit.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.limit
    }

    /// Fetches a dataset series, capped at `limit` rows.
    async fn series(
        &self,
        code: &str,
        column_index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let endpoint = Endpoint::new(DATASETS, code)
            .param("rows", limit.unwrap_or(self.limit))
            .param_opt("column_index", column_index);

        self.client.fetch(&endpoint).await
    }
}

impl Reader for NasdaqReader {
    fn client(&self) -> &Client {
        &self.client
    }

    fn description(&self) -> &str {
        "Nasdaq Data Link - Economic and financial time-series datasets"
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use feeds_core::mock::MockTransport;

    pub(crate) fn reader(mock: &Arc<MockTransport>) -> NasdaqReader {
        NasdaqReader::with_transport(mock.clone(), "test_key").unwrap()
    }

    /// A one-row dataset envelope.
    pub(crate) fn dataset(column: &str, value: f64) -> String {
        format!(
            r#"{{"dataset":{{"column_names":["Date","{column}"],"data":[["2022-10-28",{value}]]}}}}"#
        )
    }
}
