//! 13F institutional investors, keyed by CIK.

use feeds_core::validate::{cik, parse_date, required};
use feeds_core::{Endpoint, Result, Table};

use crate::{FmpReader, V4};

impl FmpReader {
    /// Every institution that files a 13F.
    pub async fn institutions(&self) -> Result<Option<Table>> {
        self.client
            .fetch(&Endpoint::new(V4, "institutional-ownership/list"))
            .await
    }

    /// Institutions whose name contains `name`, with their CIK.
    pub async fn search_institutions(&self, name: &str) -> Result<Option<Table>> {
        let name = required("name", name)?;
        self.client
            .fetch(&Endpoint::new(V4, "institutional-ownership/name").param("name", name))
            .await
    }

    /// 13F report dates available for an institution.
    pub async fn institution_report_dates(&self, cik_code: &str) -> Result<Option<Table>> {
        let cik_code = cik(cik_code)?;
        let endpoint =
            Endpoint::new(V4, "institutional-ownership/portfolio-date").param("cik", cik_code);

        self.client.fetch(&endpoint).await
    }

    /// Portfolio size, turnover and performance on a report date.
    pub async fn institution_portfolio_summary(
        &self,
        cik_code: &str,
        report_date: &str,
    ) -> Result<Option<Table>> {
        self.portfolio_on(
            "institutional-ownership/portfolio-holdings-summary",
            cik_code,
            report_date,
        )
        .await
    }

    /// Portfolio weight per industry on a report date.
    pub async fn institution_industry_summary(
        &self,
        cik_code: &str,
        report_date: &str,
    ) -> Result<Option<Table>> {
        self.portfolio_on(
            "institutional-ownership/industry/portfolio-holdings-summary",
            cik_code,
            report_date,
        )
        .await
    }

    async fn portfolio_on(&self, path: &str, cik_code: &str, report_date: &str) -> Result<Option<Table>> {
        let cik_code = cik(cik_code)?;
        let date = parse_date("date", report_date)?;
        let endpoint = Endpoint::new(V4, path)
            .param("cik", cik_code)
            .param("date", date);

        self.client.fetch(&endpoint).await
    }
}
