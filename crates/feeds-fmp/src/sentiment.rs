//! Social sentiment.

use feeds_core::validate::{one_of, symbol};
use feeds_core::{Endpoint, Result, Table};

use crate::{FmpReader, V4};

/// Accepted sentiment types.
pub const SENTIMENT_TYPES: &[&str] = &["bullish", "bearish"];

/// Accepted sentiment sources.
pub const SENTIMENT_SOURCES: &[&str] = &["twitter", "stocktwits"];

impl FmpReader {
    /// Hourly social sentiment for one symbol. `page` starts at 0.
    pub async fn social_sentiment(&self, ticker: &str, page: u32) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V4, "social-sentiment")
            .param("symbol", &ticker)
            .param("page", page);

        self.client.fetch(&endpoint).await
    }

    /// Symbols trending by sentiment.
    pub async fn trending_sentiment(&self, kind: &str, source: &str) -> Result<Option<Table>> {
        self.sentiment("social-sentiments/trending", kind, source)
            .await
    }

    /// Largest changes in sentiment.
    pub async fn sentiment_change(&self, kind: &str, source: &str) -> Result<Option<Table>> {
        self.sentiment("social-sentiments/change", kind, source).await
    }

    async fn sentiment(&self, path: &str, kind: &str, source: &str) -> Result<Option<Table>> {
        let kind = one_of("type", kind, SENTIMENT_TYPES)?;
        let source = one_of("source", source, SENTIMENT_SOURCES)?;
        let endpoint = Endpoint::new(V4, path)
            .param("type", kind)
            .param("source", source);

        self.client.fetch(&endpoint).await
    }
}
