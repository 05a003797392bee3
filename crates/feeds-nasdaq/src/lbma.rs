//! London Bullion Market Association prices (`LBMA` datasets).

use feeds_core::{Result, Table};

use crate::NasdaqReader;

impl NasdaqReader {
    /// Gold price fixings in USD, GBP and EUR.
    pub async fn gold_price(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("LBMA/GOLD", None, limit).await
    }

    /// Silver price fixings in USD, GBP and EUR.
    pub async fn silver_price(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("LBMA/SILVER", None, limit).await
    }

    /// Gold forward offered rates.
    pub async fn gold_forward_rates(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("LBMA/GOFO", None, limit).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::reader;
    use feeds_core::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_gold_price() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"dataset":{"column_names":["Date","USD (AM)","USD (PM)"],
                "data":[["2022-10-28",1656.7,1648.1],["2022-10-27",1665.9,null]]}}"#,
        ));
        let nasdaq = reader(&mock);

        let table = nasdaq.gold_price(Some(2)).await.unwrap().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "USD (PM)"), Some(&json!(null)));
        assert!(
            mock.last_request()
                .unwrap()
                .url
                .ends_with("/datasets/LBMA/GOLD")
        );
    }

    #[tokio::test]
    async fn test_row_width_mismatch_is_lenient() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"dataset":{"column_names":["Date","USD (AM)"],"data":[["2022-10-28"]]}}"#,
        ));
        let nasdaq = reader(&mock);

        assert!(nasdaq.silver_price(None).await.unwrap().is_none());
        assert_eq!(mock.close_count(), 1);
    }
}
