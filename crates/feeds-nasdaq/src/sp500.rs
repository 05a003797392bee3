//! S&P 500 valuation ratios (`MULTPL` datasets).
//!
//! Every series is published once per timeframe, as `MULTPL/{SERIES}_{TIMEFRAME}`.

use std::fmt;

use feeds_core::validate::one_of;
use feeds_core::{Result, Table};

use crate::NasdaqReader;

/// Timeframes of series sampled monthly.
pub const SP500_MONTHLY_TIMEFRAMES: &[&str] = &["month", "year"];

/// Timeframes of series sampled quarterly.
pub const SP500_QUARTERLY_TIMEFRAMES: &[&str] = &["quarter", "year"];

/// An S&P 500 series published by MULTPL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sp500Series {
    /// Cyclically adjusted price earnings ratio (CAPE, PE 10).
    ShillerPe,
    /// 12-month real dividend per share.
    Dividend,
    /// 12-month real earnings per share.
    Earnings,
    /// Inflation-adjusted index level.
    InflationAdjusted,
    /// Trailing 12-month dividend yield.
    DividendYield,
    /// Inverse of the trailing price earnings ratio.
    EarningsYield,
    /// Trailing 12-month price earnings ratio.
    PriceToEarnings,
    /// Monthly average price in current dollars.
    RealPrice,
    /// Year-over-year growth of the trailing dividend.
    DividendGrowth,
    /// Year-over-year growth of trailing earnings.
    EarningsGrowth,
    /// Book value per share.
    BookValuePerShare,
    /// Price to book value ratio.
    PriceToBook,
    /// Price to sales ratio.
    PriceToSales,
    /// Inflation-adjusted earnings growth.
    RealEarningsGrowth,
    /// Trailing 12-month sales per share.
    Sales,
    /// Inflation-adjusted sales per share.
    RealSales,
    /// Year-over-year growth of sales per share.
    SalesGrowth,
    /// Inflation-adjusted sales growth.
    RealSalesGrowth,
}

impl Sp500Series {
    /// Dataset code without the timeframe suffix.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ShillerPe => "SHILLER_PE_RATIO",
            Self::Dividend => "SP500_DIV",
            Self::Earnings => "SP500_EARNINGS",
            Self::InflationAdjusted => "SP500_INFLADJ",
            Self::DividendYield => "SP500_DIV_YIELD",
            Self::EarningsYield => "SP500_EARNINGS_YIELD",
            Self::PriceToEarnings => "SP500_PE_RATIO",
            Self::RealPrice => "SP500_REAL_PRICE",
            Self::DividendGrowth => "SP500_DIV_GROWTH",
            Self::EarningsGrowth => "SP500_EARNINGS_GROWTH",
            Self::BookValuePerShare => "SP500_BVPS",
            Self::PriceToBook => "SP500_PBV_RATIO",
            Self::PriceToSales => "SP500_PSR",
            Self::RealEarningsGrowth => "SP500_REAL_EARNINGS_GROWTH",
            Self::Sales => "SP500_SALES",
            Self::RealSales => "SP500_REAL_SALES",
            Self::SalesGrowth => "SP500_SALES_GROWTH",
            Self::RealSalesGrowth => "SP500_REAL_SALES_GROWTH",
        }
    }

    /// Timeframes the series is published in.
    #[must_use]
    pub const fn timeframes(&self) -> &'static [&'static str] {
        match self {
            Self::ShillerPe
            | Self::Dividend
            | Self::Earnings
            | Self::InflationAdjusted
            | Self::DividendYield
            | Self::EarningsYield
            | Self::PriceToEarnings
            | Self::RealPrice => SP500_MONTHLY_TIMEFRAMES,
            _ => SP500_QUARTERLY_TIMEFRAMES,
        }
    }
}

impl fmt::Display for Sp500Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl NasdaqReader {
    /// One S&P 500 series at `timeframe`, which must be one of
    /// [`Sp500Series::timeframes`].
    pub async fn sp500(
        &self,
        series: Sp500Series,
        timeframe: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let timeframe = one_of("timeframe", timeframe, series.timeframes())?;
        let code = format!("MULTPL/{series}_{}", timeframe.to_uppercase());
        self.series(&code, None, limit).await
    }

    /// Shiller PE ratio, by `"month"` or `"year"`.
    pub async fn shiller_pe(&self, timeframe: &str, limit: Option<u32>) -> Result<Option<Table>> {
        self.sp500(Sp500Series::ShillerPe, timeframe, limit).await
    }

    /// Trailing price earnings ratio, by `"month"` or `"year"`.
    pub async fn sp500_pe_ratio(&self, timeframe: &str, limit: Option<u32>) -> Result<Option<Table>> {
        self.sp500(Sp500Series::PriceToEarnings, timeframe, limit)
            .await
    }

    /// Dividend yield, by `"month"` or `"year"`.
    pub async fn sp500_dividend_yield(
        &self,
        timeframe: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.sp500(Sp500Series::DividendYield, timeframe, limit)
            .await
    }

    /// Price to book ratio, by `"quarter"` or `"year"`.
    pub async fn sp500_price_to_book(
        &self,
        timeframe: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.sp500(Sp500Series::PriceToBook, timeframe, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dataset, reader};
    use feeds_core::mock::MockTransport;
    use feeds_core::{FeedError, ValidationError};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_shiller_pe_code() {
        let mock = Arc::new(MockTransport::new().respond(200, dataset("Value", 28.55)));
        let nasdaq = reader(&mock);

        let table = nasdaq.shiller_pe("month", Some(12)).await.unwrap().unwrap();
        assert_eq!(table.value(0, "Value"), Some(&json!(28.55)));

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://data.nasdaq.com/api/v3/datasets/MULTPL/SHILLER_PE_RATIO_MONTH"
        );
        assert_eq!(request.query_value("rows"), Some("12"));
        assert_eq!(request.query_value("column_index"), None);
    }

    #[tokio::test]
    async fn test_quarterly_series_code() {
        let mock = Arc::new(
            MockTransport::new()
                .respond(200, dataset("Value", 4.01))
                .respond(200, dataset("Value", 2.35)),
        );
        let nasdaq = reader(&mock);

        nasdaq.sp500_price_to_book("quarter", None).await.unwrap();
        nasdaq
            .sp500(Sp500Series::RealSalesGrowth, "year", None)
            .await
            .unwrap();

        let requests = mock.requests();
        assert!(requests[0].url.ends_with("/MULTPL/SP500_PBV_RATIO_QUARTER"));
        assert!(requests[1].url.ends_with("/MULTPL/SP500_REAL_SALES_GROWTH_YEAR"));
    }

    #[tokio::test]
    async fn test_timeframe_must_match_series() {
        let mock = Arc::new(MockTransport::new());
        let nasdaq = reader(&mock);

        let err = nasdaq.shiller_pe("quarter", None).await.unwrap_err();
        assert!(matches!(
            err,
            FeedError::Validation(ValidationError::InvalidEnumValue { field: "timeframe", accepted, .. })
                if accepted == SP500_MONTHLY_TIMEFRAMES
        ));

        let err = nasdaq
            .sp500(Sp500Series::Sales, "month", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeedError::Validation(ValidationError::InvalidEnumValue { accepted, .. })
                if accepted == SP500_QUARTERLY_TIMEFRAMES
        ));

        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_series_timeframes() {
        assert_eq!(Sp500Series::RealPrice.timeframes(), SP500_MONTHLY_TIMEFRAMES);
        assert_eq!(Sp500Series::BookValuePerShare.timeframes(), SP500_QUARTERLY_TIMEFRAMES);
        assert_eq!(Sp500Series::PriceToSales.to_string(), "SP500_PSR");
    }
}
