//! Fundamental analysis: ratios, key metrics, growth and discounted cash flow.

use feeds_core::validate::symbol;
use feeds_core::{Endpoint, PeriodType, Result, Table};

use crate::{FmpReader, V3};

impl FmpReader {
    async fn by_period(
        &self,
        prefix: &str,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("{prefix}/{ticker}"))
            .param("period", period.as_str())
            .param_opt("limit", limit);

        self.client.fetch(&endpoint).await
    }

    /// Liquidity, profitability, leverage and valuation ratios per period.
    pub async fn financial_ratios(
        &self,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.by_period("ratios", ticker, period, limit).await
    }

    /// Trailing twelve month ratios.
    pub async fn ttm_ratios(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("ratios-ttm", ticker).await
    }

    /// Enterprise value and its components per period.
    pub async fn enterprise_value(
        &self,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.by_period("enterprise-values", ticker, period, limit)
            .await
    }

    /// Altman Z-score and Piotroski score.
    pub async fn financial_score(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("score", ticker).await
    }

    /// Owner earnings as defined by Warren Buffett.
    pub async fn owner_earnings(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("owner_earnings", ticker).await
    }

    /// Per-share metrics and valuation multiples per period.
    pub async fn key_metrics(
        &self,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.by_period("key-metrics", ticker, period, limit).await
    }

    /// Trailing twelve month key metrics.
    pub async fn key_metrics_ttm(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("key-metrics-ttm", ticker).await
    }

    /// Growth of statement items per period.
    pub async fn financial_growth(
        &self,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.by_period("financial-growth", ticker, period, limit)
            .await
    }

    /// Current discounted cash flow valuation next to the share price.
    pub async fn discounted_cash_flow(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_path_symbol("discounted-cash-flow", ticker).await
    }

    /// Daily history of the discounted cash flow valuation.
    pub async fn historical_daily_dcf(&self, ticker: &str, limit: Option<u32>) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("historical-daily-discounted-cash-flow/{ticker}"))
            .param_opt("limit", limit);

        self.client.fetch(&endpoint).await
    }

    /// Discounted cash flow valuation per reporting period.
    pub async fn historical_dcf(
        &self,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.by_period("historical-discounted-cash-flow-statement", ticker, period, limit)
            .await
    }

    /// Unlevered DCF model with its inputs (WACC, projected free cash flow).
    pub async fn advanced_dcf(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("advanced_discounted_cash_flow", ticker)
            .await
    }

    /// Levered DCF model with its inputs.
    pub async fn advanced_levered_dcf(&self, ticker: &str) -> Result<Option<Table>> {
        self.by_symbol_param("advanced_levered_discounted_cash_flow", ticker)
            .await
    }
}
