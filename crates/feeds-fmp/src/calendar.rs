//! Earnings, dividend, split, IPO and economic calendars.
//!
//! FMP caps every calendar query at [`CALENDAR_MAX_DAYS`] between `from` and
//! `to`; wider ranges are rejected before a request is made.

use feeds_core::validate::{bounded_date_range, symbol};
use feeds_core::{Endpoint, PayloadShape, Result, Table};

use crate::{CALENDAR_MAX_DAYS, FmpReader, V3, V4};

impl FmpReader {
    async fn calendar(
        &self,
        host: &str,
        path: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<Option<Table>> {
        let (from, to) = bounded_date_range(from_date, to_date, CALENDAR_MAX_DAYS)?;
        let endpoint = Endpoint::new(host, path).param("from", from).param("to", to);
        self.client.fetch(&endpoint).await
    }

    /// Earnings announcements between two dates.
    pub async fn earnings_calendar(&self, from_date: &str, to_date: &str) -> Result<Option<Table>> {
        self.calendar(V3, "earning_calendar", from_date, to_date).await
    }

    /// Confirmed earnings announcements between two dates.
    pub async fn confirmed_earnings_calendar(
        &self,
        from_date: &str,
        to_date: &str,
    ) -> Result<Option<Table>> {
        self.calendar(V4, "earning-calendar-confirmed", from_date, to_date)
            .await
    }

    /// Economic data releases between two dates.
    pub async fn economic_calendar(&self, from_date: &str, to_date: &str) -> Result<Option<Table>> {
        self.calendar(V3, "economic_calendar", from_date, to_date).await
    }

    /// Dividend dates between two dates.
    pub async fn dividend_calendar(&self, from_date: &str, to_date: &str) -> Result<Option<Table>> {
        self.calendar(V3, "stock_dividend_calendar", from_date, to_date)
            .await
    }

    /// Stock splits between two dates.
    pub async fn split_calendar(&self, from_date: &str, to_date: &str) -> Result<Option<Table>> {
        self.calendar(V3, "stock_split_calendar", from_date, to_date)
            .await
    }

    /// IPOs between two dates.
    pub async fn ipo_calendar(&self, from_date: &str, to_date: &str) -> Result<Option<Table>> {
        self.calendar(V3, "ipo_calendar", from_date, to_date).await
    }

    /// Confirmed IPOs between two dates.
    pub async fn confirmed_ipo_calendar(
        &self,
        from_date: &str,
        to_date: &str,
    ) -> Result<Option<Table>> {
        self.calendar(V4, "ipo-calendar-confirmed", from_date, to_date)
            .await
    }

    /// IPOs with a filed prospectus between two dates.
    pub async fn ipo_prospectus_calendar(
        &self,
        from_date: &str,
        to_date: &str,
    ) -> Result<Option<Table>> {
        self.calendar(V4, "ipo-calendar-prospectus", from_date, to_date)
            .await
    }

    /// Past and upcoming earnings for one symbol.
    pub async fn historical_earnings(
        &self,
        ticker: &str,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("historical/earning_calendar/{ticker}"))
            .param_opt("limit", limit);
        self.client.fetch(&endpoint).await
    }

    /// Dividend history for one symbol.
    pub async fn historical_dividends(&self, ticker: &str) -> Result<Option<Table>> {
        let ticker = symbol(ticker)?;
        let endpoint = Endpoint::new(V3, format!("historical-price-full/stock_dividend/{ticker}"))
            .shape(PayloadShape::NamedArray("historical"));
        self.client.fetch(&endpoint).await
    }
}
