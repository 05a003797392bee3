//! OPEC reference basket (`OPEC` datasets).

use feeds_core::{Result, Table};

use crate::NasdaqReader;

impl NasdaqReader {
    /// Daily OPEC reference basket price, in USD per barrel.
    pub async fn crude_oil_price(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("OPEC/ORB", None, limit).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{dataset, reader};
    use feeds_core::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_crude_oil_price() {
        let mock = Arc::new(MockTransport::new().respond(200, dataset("Value", 93.52)));
        let nasdaq = reader(&mock);

        let table = nasdaq.crude_oil_price(Some(1)).await.unwrap().unwrap();
        assert_eq!(table.columns(), &["Date", "Value"]);
        assert_eq!(table.value(0, "Value"), Some(&json!(93.52)));

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "https://data.nasdaq.com/api/v3/datasets/OPEC/ORB");
        assert_eq!(request.query_value("rows"), Some("1"));
    }
}
