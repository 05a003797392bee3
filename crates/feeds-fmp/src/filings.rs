//! SEC filings.

use feeds_core::validate::{one_of, symbol};
use feeds_core::{Endpoint, Result, Table};

use crate::{FmpReader, V3};

/// SEC form types FMP returns filings for.
pub const FILING_TYPES: &[&str] = &[
    "10-Q", "8-K", "4", "13F-HR", "3", "SD", "PX14A6G", "DEFA14A", "DEF 14A", "424B5", "FWP",
    "PRE 14A", "SC 13G/A", "UPLOAD", "CORRESP", "SC 13G", "10-K", "424B2", "IRANNOTICE", "S-8",
    "S-3ASR", "3/A", "5", "POS AM", "424B3", "S-4", "S-8 POS", "8-K/A", "CT ORDER", "NO ACT",
    "ARS",
];

impl FmpReader {
    /// Every SEC filing for one symbol, newest first. `page` starts at 0.
    pub async fn filings(&self, ticker: &str, page: u32) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("sec_filings/{ticker}")).param("page", page);
        self.client.fetch(&endpoint).await
    }

    /// SEC filings of one form type (see [`FILING_TYPES`]).
    pub async fn filings_by_type(
        &self,
        ticker: &str,
        filing_type: &str,
        page: u32,
    ) -> Result<Option<Table>> {
        let filing_type = one_of("filing type", filing_type, FILING_TYPES)?;
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("sec_filings/{ticker}"))
            .param("type", filing_type)
            .param("page", page);

        self.client.fetch(&endpoint).await
    }
}
