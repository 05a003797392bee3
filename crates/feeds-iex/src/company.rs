//! Company information.

use feeds_core::validate::symbol;
use feeds_core::{Result, Table};

use crate::IexReader;

impl IexReader {
    /// Company name, exchange, industry, website, CEO and description.
    pub async fn company(&self, ticker: &str) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.get(self.endpoint(format!("stock/{ticker}/company")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::reader;
    use feeds_core::mock::MockTransport;
    use feeds_core::{FeedError, Reader};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_company() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"symbol":"AAPL","companyName":"Apple Inc","exchange":"NASDAQ","tags":["Electronic Technology"]}"#,
        ));
        let iex = reader(&mock);

        let table = iex.company("aapl").await.unwrap().unwrap();
        assert_eq!(table.value(0, "companyName"), Some(&json!("Apple Inc")));
        assert_eq!(
            table.value(0, "tags"),
            Some(&json!(["Electronic Technology"]))
        );
        assert_eq!(mock.close_count(), 1);
    }

    #[tokio::test]
    async fn test_forbidden_company() {
        let mock = Arc::new(MockTransport::new().respond(403, "Forbidden"));
        let iex = reader(&mock);

        let err = iex.company("AAPL").await.unwrap_err();
        assert!(matches!(err, FeedError::Forbidden { .. }));
        assert_eq!(iex.name(), "IEX");
    }
}
