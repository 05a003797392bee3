//! News and press releases.

use feeds_core::validate::symbol;
use feeds_core::{Endpoint, Result, Table};

use crate::{FmpReader, V3, V4};

impl FmpReader {
    async fn news(&self, endpoint: Endpoint, limit: Option<u32>) -> Result<Option<Table>> {
        self.client.fetch(&endpoint.param_opt("limit", limit)).await
    }

    /// Latest general market news.
    pub async fn general_news(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.news(Endpoint::new(V4, "general_news"), limit).await
    }

    /// Latest stock news across all symbols.
    pub async fn stock_news(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.news(Endpoint::new(V3, "stock_news"), limit).await
    }

    /// Latest crypto news.
    pub async fn crypto_news(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.news(Endpoint::new(V4, "crypto_news"), limit).await
    }

    /// Latest forex news.
    pub async fn forex_news(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.news(Endpoint::new(V4, "forex_news"), limit).await
    }

    /// News for one stock.
    pub async fn symbol_news(&self, ticker: &str, limit: Option<u32>) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.news(Endpoint::new(V3, "stock_news").param("tickers", &ticker), limit)
            .await
    }

    /// News for one crypto pair (e.g. `BTCUSD`).
    pub async fn crypto_symbol_news(
        &self,
        ticker: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.news(Endpoint::new(V4, "crypto_news").param("symbol", &ticker), limit)
            .await
    }

    /// News for one currency pair (e.g. `EURUSD`).
    pub async fn forex_symbol_news(
        &self,
        ticker: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.news(Endpoint::new(V4, "forex_news").param("symbol", &ticker), limit)
            .await
    }

    /// Press releases published by one company.
    pub async fn press_releases(&self, ticker: &str, limit: Option<u32>) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.news(Endpoint::new(V3, format!("press-releases/{ticker}")), limit)
            .await
    }
}
