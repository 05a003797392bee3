//! US Treasury rates (`USTREASURY` datasets).

use feeds_core::{Result, Table};

use crate::NasdaqReader;
use crate::dataset::column_of;

/// Maturities of the nominal yield curve, in column order.
pub const TREASURY_DURATIONS: &[&str] = &[
    "1mo", "2mo", "3mo", "6mo", "1yr", "2yr", "3yr", "5yr", "7yr", "10yr", "20yr", "30yr",
];

/// Maturities of the real yield curve, in column order.
pub const REAL_YIELD_DURATIONS: &[&str] = &["5yr", "7yr", "10yr", "20yr", "30yr"];

/// T-bill maturities. Each has a discount and a coupon-equivalent column.
pub const TBILL_DURATIONS: &[&str] = &["4wk", "8wk", "13wk", "26wk", "52wk"];

/// Columns of net marketable borrowing, in column order.
pub const MARKETABLE_BORROWING_TYPES: &[&str] =
    &["bills", "2-5", "5-10", ">10", "5-10 tips", ">10 tips", "buybacks"];

/// Columns of net non-marketable borrowing, in column order.
pub const NON_MARKETABLE_BORROWING_TYPES: &[&str] =
    &["foreign series", "slgs", "savings bond", "total"];

impl NasdaqReader {
    /// Daily T-bill discount and coupon-equivalent rates.
    pub async fn tbill_rates(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("USTREASURY/BILLRATES", None, limit).await
    }

    /// Bank discount rate of one T-bill maturity (see [`TBILL_DURATIONS`]).
    pub async fn tbill_discount_rate(
        &self,
        duration: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let column = column_of("duration", duration, TBILL_DURATIONS)? * 2 - 1;
        self.series("USTREASURY/BILLRATES", Some(column), limit).await
    }

    /// Coupon-equivalent rate of one T-bill maturity (see [`TBILL_DURATIONS`]).
    pub async fn tbill_coupon_rate(
        &self,
        duration: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let column = column_of("duration", duration, TBILL_DURATIONS)? * 2;
        self.series("USTREASURY/BILLRATES", Some(column), limit).await
    }

    /// Daily nominal par yield curve.
    pub async fn yield_curve(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("USTREASURY/YIELD", None, limit).await
    }

    /// Daily real (TIPS) par yield curve.
    pub async fn real_yield_curve(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("USTREASURY/REALYIELD", None, limit).await
    }

    /// Nominal yield of one maturity (see [`TREASURY_DURATIONS`]).
    pub async fn treasury_yield(&self, duration: &str, limit: Option<u32>) -> Result<Option<Table>> {
        let column = column_of("treasury", duration, TREASURY_DURATIONS)?;
        self.series("USTREASURY/YIELD", Some(column), limit).await
    }

    /// Real yield of one maturity (see [`REAL_YIELD_DURATIONS`]).
    pub async fn real_yield(&self, duration: &str, limit: Option<u32>) -> Result<Option<Table>> {
        let column = column_of("treasury", duration, REAL_YIELD_DURATIONS)?;
        self.series("USTREASURY/REALYIELD", Some(column), limit).await
    }

    /// Long-term composite rate and extrapolation factors.
    pub async fn long_term_rates(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("USTREASURY/LONGTERMRATES", None, limit).await
    }

    /// Real long-term average rate (maturities over 10 years).
    pub async fn real_long_term_average(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("USTREASURY/REALLONGTERM", None, limit).await
    }

    /// Net marketable borrowing by instrument.
    pub async fn net_marketable_borrowing(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("USTREASURY/TMBOR", None, limit).await
    }

    /// Net marketable borrowing of one instrument (see [`MARKETABLE_BORROWING_TYPES`]).
    pub async fn marketable_borrowing(&self, kind: &str, limit: Option<u32>) -> Result<Option<Table>> {
        let column = column_of("type", kind, MARKETABLE_BORROWING_TYPES)?;
        self.series("USTREASURY/TMBOR", Some(column), limit).await
    }

    /// Net non-marketable borrowing by instrument.
    pub async fn net_non_marketable_borrowing(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("USTREASURY/TNMBOR", None, limit).await
    }

    /// Net non-marketable borrowing of one instrument (see [`NON_MARKETABLE_BORROWING_TYPES`]).
    pub async fn non_marketable_borrowing(
        &self,
        kind: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let column = column_of("type", kind, NON_MARKETABLE_BORROWING_TYPES)?;
        self.series("USTREASURY/TNMBOR", Some(column), limit).await
    }

    /// Breakdown of marketable securities issued at auction.
    pub async fn marketable_issuance(&self, limit: Option<u32>) -> Result<Option<Table>> {
        self.series("USTREASURY/BRDNM", None, limit).await
    }
}
