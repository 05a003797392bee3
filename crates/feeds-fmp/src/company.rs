//! Company information.

use feeds_core::validate::symbol;
use feeds_core::{Endpoint, Result, Table};

use crate::{FmpReader, V3, V4};

impl FmpReader {
    pub(crate) async fn by_path_symbol(&self, prefix: &str, ticker: &str) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.client
            .fetch(&Endpoint::new(V3, format!("{prefix}/{ticker}")))
            .await
    }

    pub(crate) async fn by_symbol_param(&self, path: &str, ticker: &str) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.client
            .fetch(&Endpoint::new(V4, path).param("symbol", &ticker))
            .await
    }

    /// Company profile: price, beta, sector, description, etc.
    pub async fn profile(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("profile", ticker).await
    }

    /// Executives and their pay.
    pub async fn key_executives(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("key-executives", ticker).await
    }

    /// Financial rating and the scores behind it.
    pub async fn rating(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("rating", ticker).await
    }

    /// Free float and outstanding shares.
    pub async fn shares_float(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("shares_float", ticker).await
    }

    /// Executive compensation filings.
    pub async fn executive_compensation(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("governance/executive_compensation", ticker)
            .await
    }

    /// Acquisitions of beneficial ownership (13D/13G).
    pub async fn beneficial_ownership(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("insider/ownership/acquisition_of_beneficial_ownership", ticker)
            .await
    }

    /// Companies trading on the same exchange, in the same sector, with a similar market cap.
    pub async fn stock_peers(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("stock_peers", ticker).await
    }

    /// CIK, exchange, SIC code, addresses and fiscal year end.
    pub async fn core_information(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("company-core-information", ticker)
            .await
    }

    /// Outstanding notes and their due dates.
    pub async fn notes_due(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("company-notes", ticker).await
    }

    /// Environmental, social and governance scores.
    pub async fn esg_score(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("esg-environmental-social-governance-data", ticker)
            .await
    }

    /// ESG risk rating by year.
    pub async fn esg_risk_rating(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("esg-environmental-social-governance-data-ratings", ticker)
            .await
    }
}
