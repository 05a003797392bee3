//! Analyst price targets and rating changes.

use feeds_core::validate::required;
use feeds_core::{Endpoint, Result, Table};

use crate::{FmpReader, V4};

impl FmpReader {
    async fn by_text_param(&self, path: &str, field: &'static str, value: &str) -> Result<Option<Table>> {
        let value = required(field, value)?;
        self.client
            .fetch(&Endpoint::new(V4, path).param(field, value))
            .await
    }

    /// Every published price target for a symbol.
    pub async fn price_target(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("price-target", ticker).await
    }

    /// Average price target over the last month, quarter, year and all time.
    pub async fn price_target_summary(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("price-target-summary", ticker).await
    }

    /// High, low, median and consensus price target.
    pub async fn price_target_consensus(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("price-target-consensus", ticker).await
    }

    /// Price targets published by one analyst, e.g. `"Tim Anderson"`.
    pub async fn price_target_by_analyst(&self, analyst: &str) -> Result<Option<Table>> {
        self.by_text_param("price-target-analyst-name", "name", analyst)
            .await
    }

    /// Price targets published by one firm, e.g. `"Barclays"`.
    pub async fn price_target_by_company(&self, company: &str) -> Result<Option<Table>> {
        self.by_text_param("price-target-analyst-company", "company", company)
            .await
    }

    /// Rating upgrades and downgrades for a symbol.
    pub async fn upgrades_downgrades(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("upgrades-downgrades", ticker).await
    }

    /// Count of buy, hold and sell ratings and the resulting consensus.
    pub async fn upgrades_downgrades_consensus(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("upgrades-downgrades-consensus", ticker)
            .await
    }

    /// Rating changes published by one firm.
    pub async fn upgrades_downgrades_by_company(&self, company: &str) -> Result<Option<Table>> {
        self.by_text_param("upgrades-downgrades-grading-company", "company", company)
            .await
    }
}
