//! Quotes and price history.

use feeds_core::validate::{date_range, one_of, symbol, symbol_list};
use feeds_core::{Endpoint, PayloadShape, Result, Table, Timeframe};

use crate::{FmpReader, V3};

/// Markets accepted by [`FmpReader::market_quotes`].
pub const MARKETS: &[&str] = &["index", "commodity", "forex", "crypto", "nyse", "tsx", "euronext"];

/// Daily price history nests its rows under this key.
const HISTORICAL: PayloadShape = PayloadShape::NamedArray("historical");

/// Batch price history nests one entry per symbol under this key.
const HISTORICAL_LIST: PayloadShape = PayloadShape::NamedArray("historicalStockList");

impl FmpReader {
    /// Latest quote for one symbol (stock, crypto, fx, etf, ...).
    pub async fn quote(&self, ticker: &str) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.client.fetch(&Endpoint::new(V3, format!("quote/{ticker}"))).await
    }

    /// Latest quotes for several symbols in one request.
    pub async fn quotes<S: AsRef<str>>(&self, tickers: &[S]) -> Result<Option<Table>> {
        let tickers = symbol_list(tickers)?;
        self.client.fetch(&Endpoint::new(V3, format!("quote/{tickers}"))).await
    }

    /// Latest quotes for every instrument of a market (see [`MARKETS`]).
    pub async fn market_quotes(&self, market: &str) -> Result<Option<Table>> {
        let market = one_of("market", market, MARKETS)?;
        self.client.fetch(&Endpoint::new(V3, format!("quotes/{market}"))).await
    }

    /// Latest bid/ask for every currency pair.
    pub async fn currency_exchange_rates(&self) -> Result<Option<Table>> {
        self.client.fetch(&Endpoint::new(V3, "fx")).await
    }

    /// Intraday bars. `timeframe` is one of `1m 5m 15m 30m 1h 4h`.
    pub async fn historical_chart(&self, ticker: &str, timeframe: &str) -> Result<Option<Table>> {
        let timeframe: Timeframe = timeframe.parse()?;
        let ticker = symbol(ticker)?;
        self.client
            .fetch(&Endpoint::new(V3, format!("historical-chart/{timeframe}/{ticker}")))
            .await
    }

    /// Daily bars for the last `days` trading days.
    pub async fn historical_daily(&self, ticker: &str, days: u32) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("historical-price-full/{ticker}"))
            .param("timeseries", days)
            .param("serietype", "bar")
            .shape(HISTORICAL);

        self.client.fetch(&endpoint).await
    }

    /// Daily bars between two `YYYY-MM-DD` dates.
    pub async fn historical_daily_range(
        &self,
        ticker: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<Option<Table>> {
        let (from, to) = date_range(from_date, to_date)?;
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("historical-price-full/{ticker}"))
            .param("from", from)
            .param("to", to)
            .param("serietype", "bar")
            .shape(HISTORICAL);

        self.client.fetch(&endpoint).await
    }

    /// Daily bars for several symbols. Each row holds one symbol and its
    /// nested `historical` list.
    pub async fn batch_historical_daily<S: AsRef<str>>(
        &self,
        tickers: &[S],
        days: u32,
    ) -> Result<Option<Table>> {
        let tickers = symbol_list(tickers)?;
        let endpoint = Endpoint::new(V3, format!("historical-price-full/{tickers}"))
            .param("timeseries", days)
            .param("serietype", "bar")
            .shape(HISTORICAL_LIST);

        self.client.fetch(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::reader;
    use feeds_core::mock::MockTransport;
    use feeds_core::{ErrorKind, FeedError, ValidationError};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_quote_embeds_uppercase_symbol() {
        let mock = Arc::new(MockTransport::new().respond(200, r#"[{"symbol":"AAPL","price":155.74}]"#));
        let fmp = reader(&mock);

        let table = fmp.quote("aapl").await.unwrap().unwrap();
        assert_eq!(table.value(0, "symbol"), Some(&json!("AAPL")));
        assert_eq!(
            mock.last_request().unwrap().url,
            "https://financialmodelingprep.com/api/v3/quote/AAPL"
        );
    }

    #[tokio::test]
    async fn test_quotes_joins_symbols() {
        let mock = Arc::new(
            MockTransport::new().respond(200, r#"[{"symbol":"AMD"},{"symbol":"TSLA"}]"#),
        );
        let fmp = reader(&mock);

        let table = fmp.quotes(&["amd", "tsla"]).await.unwrap().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            mock.last_request().unwrap().url,
            "https://financialmodelingprep.com/api/v3/quote/AMD,TSLA"
        );
    }

    #[tokio::test]
    async fn test_invalid_timeframe_sends_nothing() {
        let mock = Arc::new(MockTransport::new());
        let fmp = reader(&mock);

        let err = fmp.historical_chart("AAPL", "2h").await.unwrap_err();
        assert!(matches!(
            err,
            FeedError::Validation(ValidationError::InvalidEnumValue { field: "timeframe", .. })
        ));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_market_quotes() {
        let mock = Arc::new(MockTransport::new().respond(200, r#"[{"symbol":"^VIX"}]"#));
        let fmp = reader(&mock);

        fmp.market_quotes("index").await.unwrap();
        assert!(mock.last_request().unwrap().url.ends_with("/api/v3/quotes/index"));

        let err = fmp.market_quotes("nasdaq").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_historical_daily_unwraps_named_array() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"symbol":"AAPL","historical":[
                {"date":"2022-10-28","open":148.2,"close":155.74},
                {"date":"2022-10-27","open":148.07,"close":144.8}
            ]}"#,
        ));
        let fmp = reader(&mock);

        let table = fmp.historical_daily("aapl", 2).await.unwrap().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), &["date", "open", "close"]);

        let request = mock.last_request().unwrap();
        assert_eq!(request.query_value("timeseries"), Some("2"));
        assert_eq!(request.query_value("serietype"), Some("bar"));
    }

    #[tokio::test]
    async fn test_historical_daily_range_validates_dates() {
        let mock = Arc::new(MockTransport::new().respond(200, r#"{"historical":[{"date":"2022-01-03"}]}"#));
        let fmp = reader(&mock);

        let err = fmp
            .historical_daily_range("AAPL", "2022-06-01", "2022-01-01")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeedError::Validation(ValidationError::InvalidDateRange { .. })
        ));
        assert!(mock.requests().is_empty());

        // Price history has no span limit.
        fmp.historical_daily_range("AAPL", "2020-01-01", "2022-01-01")
            .await
            .unwrap();
        let request = mock.last_request().unwrap();
        assert_eq!(request.query_value("from"), Some("2020-01-01"));
        assert_eq!(request.query_value("to"), Some("2022-01-01"));
    }

    #[tokio::test]
    async fn test_empty_symbol_list_rejected() {
        let mock = Arc::new(MockTransport::new());
        let fmp = reader(&mock);

        let err = fmp.batch_historical_daily::<&str>(&[], 5).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(mock.requests().is_empty());
    }
}
