//! Listed options.

use feeds_core::validate::{one_of, symbol};
use feeds_core::{PayloadShape, Result, Table, ValidationError};

use crate::IexReader;

/// Accepted sides of an option chain. `both` returns calls and puts.
pub const OPTION_SIDES: &[&str] = &["both", "call", "put"];

/// Accepts `YYYYMM` (monthly) or `YYYYMMDD` expirations.
fn expiration(value: &str) -> std::result::Result<&str, ValidationError> {
    let value = value.trim();
    if matches!(value.len(), 6 | 8) && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidType {
            field: "expiration",
            value: format!("{value:?}"),
            expected: "a YYYYMM or YYYYMMDD expiration",
        })
    }
}

impl IexReader {
    /// Expiration dates with listed options, one row per expiration.
    pub async fn option_expirations(&self, ticker: &str) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        self.get(
            self.endpoint(format!("stock/{ticker}/options"))
                .shape(PayloadShape::Values("expiration")),
        )
        .await
    }

    /// Option chain for one expiration and side (see [`OPTION_SIDES`]).
    pub async fn option_chain(
        &self,
        ticker: &str,
        expiry: &str,
        side: &str,
    ) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let expiry = expiration(expiry)?;
        let path = match one_of("side", side, OPTION_SIDES)? {
            "both" => format!("stock/{ticker}/options/{expiry}"),
            side => format!("stock/{ticker}/options/{expiry}/{side}"),
        };

        self.get(self.endpoint(path)).await
    }
}
