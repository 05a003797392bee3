//! ETF and mutual fund holdings.

use feeds_core::validate::{cik, parse_date, symbol};
use feeds_core::{Endpoint, Result, Table, ValidationError};

use crate::{FmpReader, V4};

/// How a fund is identified in holdings queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fund<'a> {
    /// Ticker symbol, e.g. `"SPY"`.
    Symbol(&'a str),
    /// SEC Central Index Key.
    Cik(&'a str),
}

impl Fund<'_> {
    fn apply(self, endpoint: Endpoint) -> std::result::Result<Endpoint, ValidationError> {
        Ok(match self {
            Self::Symbol(ticker) => endpoint.param("symbol", &symbol(ticker)?),
            Self::Cik(code) => endpoint.param("cik", cik(code)?),
        })
    }
}

impl FmpReader {
    async fn portfolio_dates(&self, path: &str, fund: Fund<'_>) -> Result<Option<Table>> {
        let endpoint = fund.apply(Endpoint::new(V4, path))?;
        self.client.fetch(&endpoint).await
    }

    async fn holdings(&self, path: &str, fund: Fund<'_>, date: &str) -> Result<Option<Table>> {
        let date = parse_date("date", date)?;
        let endpoint = fund.apply(Endpoint::new(V4, path).param("date", date))?;
        self.client.fetch(&endpoint).await
    }

    /// Dates with a published ETF portfolio.
    pub async fn etf_portfolio_dates(&self, fund: Fund<'_>) -> Result<Option<Table>> {
        self.portfolio_dates("etf-holdings/portfolio-date", fund)
            .await
    }

    /// ETF holdings on a `YYYY-MM-DD` portfolio date.
    pub async fn etf_holdings(&self, fund: Fund<'_>, date: &str) -> Result<Option<Table>> {
        self.holdings("etf-holdings", fund, date).await
    }

    /// Expense ratio, assets under management and inception date of an ETF.
    pub async fn etf_info(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("etf-info", ticker).await
    }

    /// ETF weight per country.
    pub async fn etf_country_weightings(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("etf-country-weightings", ticker).await
    }

    /// ETF weight per sector.
    pub async fn etf_sector_weightings(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("etf-sector-weightings", ticker).await
    }

    /// Dates with a published mutual fund portfolio.
    pub async fn mutual_fund_portfolio_dates(&self, fund: Fund<'_>) -> Result<Option<Table>> {
        self.portfolio_dates("mutual-fund-holdings/portfolio-date", fund)
            .await
    }

    /// Mutual fund holdings on a `YYYY-MM-DD` portfolio date.
    pub async fn mutual_fund_holdings(&self, fund: Fund<'_>, date: &str) -> Result<Option<Table>> {
        self.holdings("mutual-fund-holdings", fund, date).await
    }
}
