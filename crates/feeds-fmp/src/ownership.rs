//! Who owns and trades a stock: insiders, institutions, funds and senators.

use feeds_core::validate::{parse_date, symbol};
use feeds_core::{Endpoint, Result, Table};

use crate::{FmpReader, V4};

impl FmpReader {
    /// Insider transactions (Form 4), one page of 100 at a time starting at 0.
    pub async fn insider_trading(&self, ticker: &str, page: u32) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V4, "insider-trading")
            .param("symbol", &ticker)
            .param("page", page);

        self.client.fetch(&endpoint).await
    }

    /// Current insiders with their position and latest filing.
    pub async fn insider_roster(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("insider-roaster", ticker).await
    }

    /// Quarterly insider buy/sell statistics.
    pub async fn insider_roster_stats(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("insider-roaster-statistic", ticker)
            .await
    }

    /// Institutions holding the stock, from their latest 13F.
    pub async fn institutional_holders(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("institutional-holder", ticker).await
    }

    /// Mutual funds holding the stock.
    pub async fn mutual_fund_holders(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("mutual-fund-holder", ticker).await
    }

    /// ETFs holding the stock and its weight in each.
    pub async fn etf_holders(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("etf-stock-exposure", ticker).await
    }

    /// Quarterly institutional ownership statistics: holders, shares, put/call ratio.
    pub async fn institutional_ownership_stats(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("institutional-ownership/symbol-ownership", ticker)
            .await
    }

    /// Holders on a 13F report date, ranked by their share of the company.
    pub async fn ownership_by_holders(
        &self,
        ticker: &str,
        report_date: &str,
        page: u32,
    ) -> Result<Option<Table>> {
        self.holders_on(
            "institutional-ownership/institutional-holders/symbol-ownership-percent",
            ticker,
            report_date,
            page,
        )
        .await
    }

    /// Holders on a 13F report date, ranked by the stock's weight in their portfolio.
    pub async fn ownership_by_portfolio_weight(
        &self,
        ticker: &str,
        report_date: &str,
        page: u32,
    ) -> Result<Option<Table>> {
        self.holders_on(
            "institutional-ownership/institutional-holders/symbol-ownership",
            ticker,
            report_date,
            page,
        )
        .await
    }

    async fn holders_on(
        &self,
        path: &str,
        ticker: &str,
        report_date: &str,
        page: u32,
    ) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let date = parse_date("date", report_date)?;
        let endpoint = Endpoint::new(V4, path)
            .param("symbol", &ticker)
            .param("date", date)
            .param("page", page);

        self.client.fetch(&endpoint).await
    }

    /// Trades reported by US senators.
    pub async fn senate_trading(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("senate-trading", ticker).await
    }

    /// Periodic transaction disclosures filed by US senators.
    pub async fn senate_disclosures(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("senate-disclosure", ticker).await
    }
}
