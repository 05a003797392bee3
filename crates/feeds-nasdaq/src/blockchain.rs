//! Bitcoin network statistics (`BCHAIN` datasets).

use feeds_core::{Result, Table};

use crate::NasdaqReader;

impl NasdaqReader {
    /// Mining difficulty.
    pub async fn difficulty(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("BCHAIN/DIFF", None, limit).await
    }

    /// Average block size in MB.
    pub async fn average_block_size(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("BCHAIN/AVBLS", None, limit).await
    }

    /// Market price in USD.
    pub async fn market_price(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("BCHAIN/MKPRU", None, limit).await
    }

    /// Estimated network hash rate.
    pub async fn hash_rate(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("BCHAIN/HRATE", None, limit).await
    }

    /// Miners' revenue in USD.
    pub async fn miner_revenue(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("BCHAIN/MIREV", None, limit).await
    }

    /// Estimated transaction volume, in BTC or USD.
    pub async fn transaction_volume(&self, as_usd: bool, limit: Option<u32>) -> Result<Option<Table>> {
        let code = if as_usd { "BCHAIN/ETRVU" } else { "BCHAIN/ETRAV" };
        self.series(code, None, limit).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{dataset, reader};
    use feeds_core::mock::MockTransport;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_blockchain_codes() {
        let mock = Arc::new(
            MockTransport::new()
                .respond(200, dataset("Value", 3.5e13))
                .respond(200, dataset("Value", 1.2e9))
                .respond(200, dataset("Value", 20_595.0)),
        );
        let nasdaq = reader(&mock);

        nasdaq.difficulty(None).await.unwrap();
        nasdaq.transaction_volume(true, None).await.unwrap();
        nasdaq.market_price(Some(1)).await.unwrap();

        let requests = mock.requests();
        assert!(requests[0].url.ends_with("/BCHAIN/DIFF"));
        assert!(requests[1].url.ends_with("/BCHAIN/ETRVU"));
        assert!(requests[2].url.ends_with("/BCHAIN/MKPRU"));
        assert_eq!(requests[2].query_value("rows"), Some("1"));
    }
}
