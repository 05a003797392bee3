//! Google engines: jobs, maps and trends.

use feeds_core::validate::{in_range, required};
use feeds_core::{Endpoint, Result, Table};

use crate::{SEARCH, SerpApiReader};

/// Zoom used by [`SerpApiReader::local_results`] when none is given.
pub const DEFAULT_ZOOM: i64 = 14;

/// Most zoomed-out map level.
pub const MIN_ZOOM: i64 = 3;

/// Most zoomed-in map level.
pub const MAX_ZOOM: i64 = 21;

impl SerpApiReader {
    /// Job listings matching `query`.
    pub async fn google_jobs(&self, query: &str) -> Result<Option<Table>> {
        let query = required("query", query)?;
        self.search(
            "google_jobs",
            "jobs_results",
            Endpoint::new(SEARCH, "").param("q", query),
        )
        .await
    }

    /// Places matching `query` around a coordinate.
    ///
    /// `zoom` ranges from 3 (fully zoomed out) to 21 (fully zoomed in) and
    /// defaults to [`DEFAULT_ZOOM`].
    pub async fn local_results(
        &self,
        query: &str,
        lat: f64,
        lon: f64,
        zoom: Option<i64>,
    ) -> Result<Option<Table>> {
        let query = required("query", query)?;
        let zoom = in_range("zoom", zoom.unwrap_or(DEFAULT_ZOOM), MIN_ZOOM, MAX_ZOOM)?;
        self.search(
            "google_maps",
            "local_results",
            Endpoint::new(SEARCH, "")
                .param("q", query)
                .param("ll", format!("@{lat},{lon},{zoom}z"))
                .param("type", "search"),
        )
        .await
    }

    /// Photos of a place, by its `data_id` from [`local_results`](Self::local_results).
    pub async fn map_photos(&self, data_id: &str) -> Result<Option<Table>> {
        let data_id = required("data_id", data_id)?;
        self.search(
            "google_maps_photos",
            "photos",
            Endpoint::new(SEARCH, "").param("data_id", data_id),
        )
        .await
    }

    /// Reviews of a place, by its `data_id`.
    pub async fn map_reviews(&self, data_id: &str) -> Result<Option<Table>> {
        let data_id = required("data_id", data_id)?;
        self.search(
            "google_maps_reviews",
            "reviews",
            Endpoint::new(SEARCH, "").param("data_id", data_id),
        )
        .await
    }

    /// Search interest in `query` over time.
    pub async fn interest_over_time(&self, query: &str) -> Result<Option<Table>> {
        let query = required("query", query)?;
        self.search(
            "google_trends",
            "interest_over_time",
            Endpoint::new(SEARCH, "")
                .param("q", query)
                .param("data_type", "TIMESERIES"),
        )
        .await
    }
}
