#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/feeds/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial Modeling Prep (FMP) reader.
//!
//! # Usage
//!
//! ```rust,ignore
//! use feeds_fmp::FmpReader;
//!
//! #[tokio::main]
//! async fn main() -> feeds_core::Result<()> {
//!     let fmp = FmpReader::new("your_api_key")?;
//!
//!     if let Some(profile) = fmp.profile("aapl").await? {
//!         println!("{:?}", profile.to_dataframe());
//!     }
//!
//!     let earnings = fmp.earnings_calendar("2022-01-01", "2022-03-01").await?;
//!
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use feeds_core::config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use feeds_core::{
    Client, HostVariant, HttpTransport, PayloadShape, ProviderConfig, Reader, Result, Timeouts,
};
use tracing::debug;

mod analysts;
mod calendar;
mod company;
mod filings;
mod fundamentals;
mod funds;
mod institutions;
mod news;
mod ownership;
mod performance;
mod quote;
mod sentiment;
mod statements;
mod symbols;

pub use filings::FILING_TYPES;
pub use funds::Fund;
pub use performance::DEFAULT_EXCHANGE;
pub use quote::MARKETS;
pub use sentiment::{SENTIMENT_SOURCES, SENTIMENT_TYPES};
pub use statements::Statement;
pub use symbols::SymbolList;

/// Host variant for the `v3` API.
pub const V3: &str = "v3";

/// Host variant for the `v4` API.
pub const V4: &str = "v4";

const HOSTS: &[HostVariant] = &[
    HostVariant::new(V3, "https://financialmodelingprep.com/api/v3"),
    HostVariant::new(V4, "https://financialmodelingprep.com/api/v4"),
];

/// Provider configuration for FMP.
pub const CONFIG: ProviderConfig = ProviderConfig {
    name: "FMP",
    hosts: HOSTS,
    auth_param: "apikey",
    shape: PayloadShape::Records,
    timeouts: Timeouts::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT),
};

/// Environment variable read by [`FmpReader::from_env`].
pub const API_KEY_ENV: &str = "FMP_API_KEY";

/// Maximum span, in days, of a calendar query.
pub const CALENDAR_MAX_DAYS: i64 = 90;

/// Financial Modeling Prep reader.
///
/// Provides access to:
/// - Real-time quotes and historical prices
/// - Earnings, dividend, split, IPO and economic calendars
/// - Company profiles, executives, ratings and ESG data
/// - Income statements, balance sheets, cash flow statements
/// - SEC filings, social sentiment and news
pub struct FmpReader {
    client: Client,
}

impl fmt::Debug for FmpReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpReader")
            .field("client", &self.client)
            .finish()
    }
}

impl FmpReader {
    /// Create a new FMP reader with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(CONFIG, api_key)?,
        })
    }

    /// Create a new FMP reader with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::with_client(CONFIG, api_key, client)?,
        })
    }

    /// Create a new FMP reader on top of any transport.
    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::with_transport(CONFIG, api_key, transport)?,
        })
    }

    /// Create a new FMP reader with the key stored in `FMP_API_KEY`.
    pub fn from_env() -> Result<Self> {
        debug!(var = API_KEY_ENV, "Reading FMP api key from environment");
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
}

impl Reader for FmpReader {
    fn client(&self) -> &Client {
        &self.client
    }

    fn description(&self) -> &str {
        "Financial Modeling Prep - Financial data and stock market API"
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use feeds_core::mock::MockTransport;

    pub(crate) fn reader(mock: &Arc<MockTransport>) -> FmpReader {
        FmpReader::with_transport(mock.clone(), "test_key").unwrap()
    }
}
