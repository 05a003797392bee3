//! Generic dataset and datatable access.

use feeds_core::validate::one_of;
use feeds_core::{Endpoint, PayloadShape, Result, Table, ValidationError};

use crate::{DATATABLES, NasdaqReader};

/// Validates a `PUBLISHER/CODE` pair and uppercases it.
fn code(value: &str) -> std::result::Result<String, ValidationError> {
    let mut parts = value.trim().split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(publisher), Some(name), None) if !publisher.is_empty() && !name.is_empty() => {
            Ok(format!("{publisher}/{name}").to_uppercase())
        }
        _ => Err(ValidationError::InvalidType {
            field: "code",
            value: format!("{value:?}"),
            expected: "a PUBLISHER/CODE string",
        }),
    }
}

/// One-based column position of `value` in `accepted`.
pub(crate) fn column_of(
    field: &'static str,
    value: &str,
    accepted: &'static [&'static str],
) -> std::result::Result<u32, ValidationError> {
    let value = one_of(field, value, accepted)?;
    Ok(accepted
        .iter()
        .zip(1_u32..)
        .find_map(|(candidate, index)| (*candidate == value).then_some(index))
        .unwrap_or_default())
}

impl NasdaqReader {
    /// Any time-series dataset, e.g. `"FRED/GDP"`.
    ///
    /// `column_index` selects a single value column; `None` returns all of them.
    pub async fn dataset(
        &self,
        code_name: &str,
        column_index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<Table>> {
        let code_name = code(code_name)?;
        self.series(&code_name, column_index, limit).await
    }

    /// Any datatable, e.g. `"ZACKS/FC"`, filtered by column values.
    pub async fn datatable(&self, code_name: &str, filters: &[(&str, &str)]) -> Result<Option<Table>> {
        let code_name = code(code_name)?;
        let endpoint = filters.iter().fold(
            Endpoint::new(DATATABLES, format!("{code_name}.json")).shape(PayloadShape::Datatable),
            |endpoint, (name, value)| endpoint.param(*name, *value),
        );

        self.client.fetch(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dataset, reader};
    use feeds_core::mock::MockTransport;
    use feeds_core::{ErrorKind, FeedError};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_code_validation() {
        assert_eq!(code("fred/gdp").unwrap(), "FRED/GDP");
        assert!(code("FRED").is_err());
        assert!(code("FRED/").is_err());
        assert!(code("A/B/C").is_err());
    }

    #[test]
    fn test_column_of() {
        const SIDES: &[&str] = &["a", "b", "c"];
        assert_eq!(column_of("x", "a", SIDES).unwrap(), 1);
        assert_eq!(column_of("x", "c", SIDES).unwrap(), 3);
        assert!(column_of("x", "d", SIDES).is_err());
    }

    #[tokio::test]
    async fn test_dataset_by_code() {
        let mock = Arc::new(MockTransport::new().respond(200, dataset("Value", 25_723.941)));
        let nasdaq = reader(&mock);

        let table = nasdaq.dataset("fred/gdp", None, Some(1)).await.unwrap().unwrap();
        assert_eq!(table.value(0, "Value"), Some(&json!(25_723.941)));

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "https://data.nasdaq.com/api/v3/datasets/FRED/GDP");
        assert_eq!(request.query_value("rows"), Some("1"));
    }

    #[tokio::test]
    async fn test_bad_code_sends_nothing() {
        let mock = Arc::new(MockTransport::new());
        let nasdaq = reader(&mock);

        let err = nasdaq.dataset("GDP", None, None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_datatable_envelope() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"datatable":{"data":[["AAPL","2022-09-30",394328.0]],
                "columns":[{"name":"ticker","type":"String"},{"name":"per_end_date","type":"Date"},{"name":"tot_revnu","type":"double"}]},
                "meta":{"next_cursor_id":null}}"#,
        ));
        let nasdaq = reader(&mock);

        let table = nasdaq
            .datatable("zacks/fc", &[("ticker", "AAPL")])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(table.columns(), &["ticker", "per_end_date", "tot_revnu"]);
        assert_eq!(table.value(0, "ticker"), Some(&json!("AAPL")));

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://data.nasdaq.com/api/v3/datatables/ZACKS/FC.json"
        );
        assert_eq!(request.query_value("ticker"), Some("AAPL"));
        assert_eq!(request.query_value("rows"), None);
    }

    #[tokio::test]
    async fn test_empty_datatable_is_no_data() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"datatable":{"data":[],"columns":[{"name":"ticker","type":"String"}]}}"#,
        ));
        let nasdaq = reader(&mock);

        let err = nasdaq.datatable("ZACKS/FC", &[]).await.unwrap_err();
        assert!(matches!(err, FeedError::NoData { .. }));
    }
}
