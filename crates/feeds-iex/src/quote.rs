//! Quotes.

use feeds_core::validate::{symbol, symbol_list};
use feeds_core::{PayloadShape, Result, Table};

use crate::IexReader;

impl IexReader {
    /// Latest quote for one symbol.
    pub async fn quote(&self, ticker: &str) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.get(self.endpoint(format!("stock/{ticker}/quote")))
            .await
    }

    /// Latest quotes for several symbols in one batch request, one row per symbol.
    pub async fn quotes<S: AsRef<str>>(&self, tickers: &[S]) -> Result<Option<Table>> {
        let tickers = symbol_list(tickers)?;
        self.get(
            self.endpoint("stock/market/batch")
                .param("symbols", tickers)
                .param("types", "quote")
                .shape(PayloadShape::Keyed("quote")),
        )
        .await
    }
}
