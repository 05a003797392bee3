//! ICE BofA corporate bond indexes (`ML` datasets).

use feeds_core::validate::one_of;
use feeds_core::{Result, Table};

use crate::NasdaqReader;

/// Accepted credit gradings.
pub const BOND_GRADINGS: &[&str] = &["AAA", "AA", "A", "BBB", "BB", "B", "CCC"];

/// Effective yield code for a grading. Two-letter gradings and `CCC` drop the `E`.
fn yield_code(grading: &str) -> String {
    if grading.len() == 2 || grading == "CCC" {
        format!("ML/{grading}Y")
    } else {
        format!("ML/{grading}EY")
    }
}

impl NasdaqReader {
    /// Effective yield of the US corporate index for one grading (see [`BOND_GRADINGS`]).
    pub async fn bond_index_yield(&self, grading: &str, limit: Option<u32>) -> Result<Option<Table>> {
        let grading = one_of("grading", &grading.to_uppercase(), BOND_GRADINGS)?;
        self.series(&yield_code(grading), None, limit).await
    }

    /// Total return index of the US corporate index for one grading.
    pub async fn total_return_index(
        &self,
        grading: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let grading = one_of("grading", &grading.to_uppercase(), BOND_GRADINGS)?;
        self.series(&format!("ML/{grading}TRI"), None, limit).await
    }

    /// Emerging markets corporate plus index, option-adjusted spread.
    pub async fn emerging_markets_oas(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("ML/EMCBI", None, limit).await
    }

    /// Emerging markets corporate plus index, total return.
    pub async fn emerging_markets_tri(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("ML/EMCTRI", None, limit).await
    }

    /// Emerging markets high grade corporate plus index, effective yield.
    pub async fn emerging_markets_high_grade(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("ML/EMHGY", None, limit).await
    }

    /// Emerging markets high yield corporate plus index, effective yield.
    pub async fn emerging_markets_high_yield(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("ML/EMHYY", None, limit).await
    }

    /// Euro emerging markets corporate plus index, option-adjusted spread.
    pub async fn euro_emerging_markets_oas(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("ML/EEMCBI", None, limit).await
    }

    /// US high yield master II index, option-adjusted spread.
    pub async fn us_high_yield_oas(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("ML/HYOAS", None, limit).await
    }

    /// US high yield master II index, total return.
    pub async fn us_high_yield_tri(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("ML/USTRI", None, limit).await
    }
}
