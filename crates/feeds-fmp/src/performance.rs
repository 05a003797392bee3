//! Market performance: movers, sector returns and valuation multiples.

use feeds_core::validate::parse_date;
use feeds_core::{Endpoint, Result, Table, ValidationError};

use crate::{FmpReader, V3, V4};

/// Exchange used by the price earnings queries when none is given.
pub const DEFAULT_EXCHANGE: &str = "NYSE";

fn exchange_code(value: Option<&str>) -> std::result::Result<String, ValidationError> {
    let Some(raw) = value else {
        return Ok(DEFAULT_EXCHANGE.to_string());
    };
    let code = raw.trim();
    if code.is_empty() {
        return Err(ValidationError::InvalidType {
            field: "exchange",
            value: format!("{raw:?}"),
            expected: "an exchange code such as \"NYSE\"",
        });
    }
    Ok(code.to_uppercase())
}

impl FmpReader {
    /// Stocks with the largest gain today.
    pub async fn biggest_gainers(&self) -> Result<Option<Table>> {
        self.client.fetch(&Endpoint::new(V3, "stock_market/gainers")).await
    }

    /// Stocks with the largest loss today.
    pub async fn biggest_losers(&self) -> Result<Option<Table>> {
        self.client.fetch(&Endpoint::new(V3, "stock_market/losers")).await
    }

    /// Stocks with the highest volume today.
    pub async fn most_active(&self) -> Result<Option<Table>> {
        self.client.fetch(&Endpoint::new(V3, "stock_market/actives")).await
    }

    /// Today's change per sector.
    pub async fn sector_performance(&self) -> Result<Option<Table>> {
        self.client.fetch(&Endpoint::new(V3, "sector-performance")).await
    }

    /// Daily change per sector, newest first.
    pub async fn historical_sector_performance(&self, limit: Option<u32>) -> Result<Option<Table>> {
        let endpoint = Endpoint::new(V3, "historical-sectors-performance").param_opt("limit", limit);
        self.client.fetch(&endpoint).await
    }

    /// Price earnings ratio per sector on a `YYYY-MM-DD` date.
    ///
    /// `exchange` defaults to [`DEFAULT_EXCHANGE`].
    pub async fn sector_pe_ratio(&self, date: &str, exchange: Option<&str>) -> Result<Option<Table>> {
        self.pe_ratio("sector_price_earning_ratio", date, exchange)
            .await
    }

    /// Price earnings ratio per industry on a `YYYY-MM-DD` date.
    pub async fn industry_pe_ratio(
        &self,
        date: &str,
        exchange: Option<&str>,
    ) -> Result<Option<Table>> {
        self.pe_ratio("industry_price_earning_ratio", date, exchange)
            .await
    }

    async fn pe_ratio(&self, path: &str, date: &str, exchange: Option<&str>) -> Result<Option<Table>> {
        let date = parse_date("date", date)?;
        let exchange = exchange_code(exchange)?;
        let endpoint = Endpoint::new(V4, path)
            .param("date", date)
            .param("exchange", exchange);

        self.client.fetch(&endpoint).await
    }
}
