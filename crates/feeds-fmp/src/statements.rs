//! Financial statements.

use std::fmt;

use feeds_core::validate::symbol;
use feeds_core::{Endpoint, PeriodType, Result, Table};

use crate::{FmpReader, V3};

/// A financial statement FMP can return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Statement {
    /// Income statement.
    Income,
    /// Period-over-period growth of the income statement.
    IncomeGrowth,
    /// Income statement exactly as filed.
    IncomeAsReported,
    /// Balance sheet.
    BalanceSheet,
    /// Period-over-period growth of the balance sheet.
    BalanceSheetGrowth,
    /// Balance sheet exactly as filed.
    BalanceSheetAsReported,
    /// Cash flow statement.
    CashFlow,
    /// Period-over-period growth of the cash flow statement.
    CashFlowGrowth,
    /// Cash flow statement exactly as filed.
    CashFlowAsReported,
}

impl Statement {
    /// Path prefix; the symbol is appended.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Income => "income-statement",
            Self::IncomeGrowth => "income-statement-growth",
            Self::IncomeAsReported => "income-statement-as-reported",
            Self::BalanceSheet => "balance-sheet-statement",
            Self::BalanceSheetGrowth => "balance-sheet-statement-growth",
            Self::BalanceSheetAsReported => "balance-sheet-statement-as-reported",
            Self::CashFlow => "cash-flow-statement",
            Self::CashFlowGrowth => "cash-flow-statement-growth",
            Self::CashFlowAsReported => "cash-flow-statement-as-reported",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FmpReader {
    /// Any statement for one symbol.
    ///
    /// `limit` is the number of periods; `None` uses the provider default.
    pub async fn statement(
        &self,
        statement: Statement,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("{statement}/{ticker}"))
            .param("period", period.as_str())
            .param_opt("limit", limit);

        self.client.fetch(&endpoint).await
    }

    /// Income statements.
    pub async fn income_statement(
        &self,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.statement(Statement::Income, ticker, period, limit).await
    }

    /// Balance sheets.
    pub async fn balance_sheet(
        &self,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.statement(Statement::BalanceSheet, ticker, period, limit)
            .await
    }

    /// Cash flow statements.
    pub async fn cash_flow(
        &self,
        ticker: &str,
        period: PeriodType,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        self.statement(Statement::CashFlow, ticker, period, limit)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::reader;
    use feeds_core::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_income_statement_params() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"[{"date":"2022-09-24","symbol":"AAPL","revenue":394328000000,"eps":6.15}]"#,
        ));
        let fmp = reader(&mock);

        let table = fmp
            .income_statement("aapl", PeriodType::Quarterly, Some(4))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(table.value(0, "revenue"), Some(&json!(394_328_000_000_i64)));

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://financialmodelingprep.com/api/v3/income-statement/AAPL"
        );
        assert_eq!(request.query_value("period"), Some("quarter"));
        assert_eq!(request.query_value("limit"), Some("4"));
    }

    #[tokio::test]
    async fn test_statement_paths() {
        let mock = Arc::new(
            MockTransport::new()
                .respond(200, r#"[{"date":"2022-09-24"}]"#)
                .respond(200, r#"[{"date":"2022-09-24"}]"#),
        );
        let fmp = reader(&mock);

        fmp.statement(Statement::CashFlowGrowth, "msft", PeriodType::Annual, None)
            .await
            .unwrap();
        fmp.balance_sheet("msft", PeriodType::default(), None)
            .await
            .unwrap();

        let requests = mock.requests();
        assert!(requests[0].url.ends_with("/cash-flow-statement-growth/MSFT"));
        assert_eq!(requests[0].query_value("period"), Some("annual"));
        assert_eq!(requests[0].query_value("limit"), None);
        assert!(requests[1].url.ends_with("/balance-sheet-statement/MSFT"));
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("quarter".parse::<PeriodType>().unwrap(), PeriodType::Quarterly);
        assert!("monthly".parse::<PeriodType>().is_err());
    }
}
