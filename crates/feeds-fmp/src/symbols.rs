//! Symbol directories.

use feeds_core::{Endpoint, Result, Table};

use crate::{FmpReader, V3};

/// A directory of symbols FMP has data for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolList {
    /// Every stock symbol.
    Stocks,
    /// Stocks actively traded on an exchange.
    Tradable,
    /// Every ETF.
    Etfs,
    /// Toronto Stock Exchange listings.
    Tsx,
    /// Euronext listings.
    Euronext,
    /// Market indexes.
    Indexes,
    /// Commodities.
    Commodities,
    /// Cryptocurrencies.
    Cryptocurrencies,
    /// Currency pairs.
    ForexPairs,
}

impl SymbolList {
    /// Endpoint path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Stocks => "stock/list",
            Self::Tradable => "available-traded/list",
            Self::Etfs => "etf/list",
            Self::Tsx => "symbol/available-tsx",
            Self::Euronext => "symbol/available-euronext",
            Self::Indexes => "symbol/available-indexes",
            Self::Commodities => "symbol/available-commodities",
            Self::Cryptocurrencies => "symbol/available-cryptocurrencies",
            Self::ForexPairs => "symbol/available-forex-currency-pairs",
        }
    }
}

impl FmpReader {
    /// Every symbol in a directory.
    pub async fn available_symbols(&self, list: SymbolList) -> Result<Option<Table>> {
        self.client.fetch(&Endpoint::new(V3, list.path())).await
    }
}
