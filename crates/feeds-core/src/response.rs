//! Response decoding.
//!
//! Providers wrap their rows in a handful of ways. [`PayloadShape`] names the
//! convention a provider (or a single endpoint) uses, and [`decode`] unwraps a
//! body accordingly. [`settle`] combines the status check and decoding into
//! the terminal [`Outcome`] of one call.

use serde_json::{Map, Value};

use crate::classify::{StatusClass, classify_status};
use crate::error::DecodeError;
use crate::session::HttpResponse;
use crate::table::Table;

/// How a provider wraps row data in its JSON response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// A bare list of row objects. A single top-level object is one row.
    Records,
    /// `{"dataset": {"column_names": [..], "data": [[..], ..]}}`.
    Dataset,
    /// `{"datatable": {"columns": [{"name": ..}, ..], "data": [[..], ..]}}`.
    Datatable,
    /// A top-level object whose named key holds the list of row objects.
    /// A single object under the key is one row.
    NamedArray(&'static str),
    /// A bare list of scalars, tabulated as one column with the given name.
    Values(&'static str),
    /// An object keyed by id whose members each hold one row under the named key.
    Keyed(&'static str),
}

/// Terminal state of one request.
#[derive(Debug)]
pub enum Outcome {
    /// 2xx with at least one row.
    Success(Table),
    /// 2xx with zero rows.
    EmptyResult,
    /// 2xx whose body could not be tabulated.
    DecodeFailure(DecodeError),
    /// 403: the endpoint is not available to this key.
    Forbidden,
    /// Any other non-2xx status.
    UnexpectedStatus(u16),
}

/// Classifies a response and, for 2xx, decodes its body.
///
/// A 403 is reported without looking at the body.
#[must_use]
pub fn settle(response: &HttpResponse, shape: PayloadShape) -> Outcome {
    match classify_status(response.status) {
        StatusClass::Forbidden => Outcome::Forbidden,
        StatusClass::Unexpected(status) => Outcome::UnexpectedStatus(status),
        StatusClass::Success => match decode(shape, &response.body) {
            Ok(table) if table.is_empty() => Outcome::EmptyResult,
            Ok(table) => Outcome::Success(table),
            Err(e) => Outcome::DecodeFailure(e),
        },
    }
}

/// Parses `body` and unwraps it according to `shape`.
///
/// An empty top-level object or list decodes to an empty table.
pub fn decode(shape: PayloadShape, body: &str) -> Result<Table, DecodeError> {
    let value: Value = serde_json::from_str(body)?;

    match &value {
        Value::Array(items) if items.is_empty() => return Ok(Table::default()),
        Value::Object(obj) if obj.is_empty() => return Ok(Table::default()),
        Value::Object(obj) => {
            if let Some(message) = provider_message(obj) {
                return Err(DecodeError::ProviderMessage(message));
            }
        }
        _ => {}
    }

    match shape {
        PayloadShape::Records => records(value),
        PayloadShape::NamedArray(key) => match value {
            Value::Object(mut obj) => match obj.remove(key) {
                Some(inner @ (Value::Array(_) | Value::Object(_))) => records(inner),
                _ => Err(DecodeError::MissingEnvelope(key)),
            },
            _ => Err(DecodeError::MissingEnvelope(key)),
        },
        PayloadShape::Values(column) => match value {
            Value::Array(items) => Ok(Table::from_records(
                items
                    .into_iter()
                    .map(|item| Map::from_iter([(column.to_string(), item)]))
                    .collect(),
            )),
            _ => Err(DecodeError::MissingEnvelope(column)),
        },
        PayloadShape::Keyed(key) => match value {
            Value::Object(members) => {
                let rows = members
                    .into_iter()
                    .enumerate()
                    .map(|(index, (_, member))| match member {
                        Value::Object(mut member) => match member.remove(key) {
                            Some(Value::Object(row)) => Ok(row),
                            _ => Err(DecodeError::MissingEnvelope(key)),
                        },
                        _ => Err(DecodeError::NotARecord { index }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Table::from_records(rows))
            }
            _ => Err(DecodeError::MissingEnvelope(key)),
        },
        PayloadShape::Dataset => {
            let mut dataset = envelope(value, "dataset")?;
            let columns = string_list(dataset.remove("column_names"), "column_names")?;
            let data = positional_rows(dataset.remove("data"), "data")?;
            Table::from_rows(columns, data)
        }
        PayloadShape::Datatable => {
            let mut datatable = envelope(value, "datatable")?;
            let columns = match datatable.remove("columns") {
                Some(Value::Array(cols)) => cols
                    .into_iter()
                    .map(|c| match c {
                        Value::Object(mut c) => match c.remove("name") {
                            Some(Value::String(name)) => Ok(name),
                            _ => Err(DecodeError::MissingEnvelope("columns")),
                        },
                        _ => Err(DecodeError::MissingEnvelope("columns")),
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                _ => return Err(DecodeError::MissingEnvelope("columns")),
            };
            let data = positional_rows(datatable.remove("data"), "data")?;
            Table::from_rows(columns, data)
        }
    }
}

/// Error objects returned with a 2xx status, e.g. `{"Error Message": ".."}`.
fn provider_message(obj: &Map<String, Value>) -> Option<String> {
    ["Error Message", "error"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn records(value: Value) -> Result<Table, DecodeError> {
    let items = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => return Err(DecodeError::NotARecord { index: 0 }),
    };

    let rows = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(row) => Ok(row),
            _ => Err(DecodeError::NotARecord { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Table::from_records(rows))
}

fn envelope(value: Value, key: &'static str) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(mut obj) => match obj.remove(key) {
            Some(Value::Object(inner)) => Ok(inner),
            _ => Err(DecodeError::MissingEnvelope(key)),
        },
        _ => Err(DecodeError::MissingEnvelope(key)),
    }
}

fn string_list(value: Option<Value>, key: &'static str) -> Result<Vec<String>, DecodeError> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|v| match v {
                Value::String(s) => Ok(s),
                _ => Err(DecodeError::MissingEnvelope(key)),
            })
            .collect(),
        _ => Err(DecodeError::MissingEnvelope(key)),
    }
}

fn positional_rows(value: Option<Value>, key: &'static str) -> Result<Vec<Vec<Value>>, DecodeError> {
    match value {
        Some(Value::Array(rows)) => rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| match row {
                Value::Array(values) => Ok(values),
                _ => Err(DecodeError::NotARecord { index }),
            })
            .collect(),
        _ => Err(DecodeError::MissingEnvelope(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_decode_records() {
        let table = decode(
            PayloadShape::Records,
            r#"[{"symbol":"AAPL","price":155.74}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.columns(), &["symbol", "price"]);
    }

    #[test]
    fn test_decode_single_object_is_one_row() {
        let table = decode(PayloadShape::Records, r#"{"symbol":"AAPL","latestPrice":1.5}"#).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_decode_dataset_envelope() {
        let body = r#"{"dataset":{"column_names":["date","1mo"],"data":[["2022-01-01",0.1]]}}"#;
        let table = decode(PayloadShape::Dataset, body).unwrap();
        assert_eq!(table.columns(), &["date", "1mo"]);
        assert_eq!(table.value(0, "1mo"), Some(&json!(0.1)));
    }

    #[test]
    fn test_decode_datatable_envelope() {
        let body = r#"{"datatable":{"columns":[{"name":"ticker","type":"text"},{"name":"eps","type":"double"}],"data":[["AAPL",1.2],["MSFT",2.3]]},"meta":{"next_cursor_id":null}}"#;
        let table = decode(PayloadShape::Datatable, body).unwrap();
        assert_eq!(table.columns(), &["ticker", "eps"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_decode_named_array() {
        let body = r#"{"symbol":"AAPL","historical":[{"date":"2022-01-03","close":182.01},{"date":"2022-01-04","close":179.7}]}"#;
        let table = decode(PayloadShape::NamedArray("historical"), body).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), &["date", "close"]);

        let body = r#"{"interest_over_time":{"timeline_data":[{"date":"Jan 2, 2022"}]}}"#;
        let table = decode(PayloadShape::NamedArray("interest_over_time"), body).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.columns(), &["timeline_data"]);
    }

    #[test]
    fn test_decode_values() {
        let table = decode(PayloadShape::Values("expiration"), r#"["202211","20221118"]"#).unwrap();
        assert_eq!(table.columns(), &["expiration"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "expiration"), Some(&json!("20221118")));
    }

    #[test]
    fn test_decode_keyed() {
        let body = r#"{"AAPL":{"quote":{"symbol":"AAPL","latestPrice":150.2}},
                       "MSFT":{"quote":{"symbol":"MSFT","latestPrice":241.0}}}"#;
        let table = decode(PayloadShape::Keyed("quote"), body).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "symbol"), Some(&json!("MSFT")));

        let err = decode(PayloadShape::Keyed("quote"), r#"{"AAPL":{"news":[]}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingEnvelope("quote")));
    }

    #[test]
    fn test_decode_missing_envelope() {
        let err = decode(PayloadShape::NamedArray("jobs_results"), r#"{"search_metadata":{}}"#)
            .unwrap_err();
        assert!(matches!(err, DecodeError::MissingEnvelope("jobs_results")));

        let err = decode(PayloadShape::Dataset, r#"[{"a":1}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingEnvelope("dataset")));
    }

    #[test]
    fn test_decode_empty_payloads() {
        assert!(decode(PayloadShape::Records, "[]").unwrap().is_empty());
        assert!(decode(PayloadShape::NamedArray("historical"), "{}").unwrap().is_empty());
        let body = r#"{"dataset":{"column_names":["date"],"data":[]}}"#;
        assert!(decode(PayloadShape::Dataset, body).unwrap().is_empty());
    }

    #[test]
    fn test_decode_provider_message() {
        let body = r#"{"Error Message":"Invalid API KEY."}"#;
        let err = decode(PayloadShape::Records, body).unwrap_err();
        assert!(matches!(err, DecodeError::ProviderMessage(m) if m == "Invalid API KEY."));
    }

    #[test]
    fn test_decode_not_a_record() {
        let err = decode(PayloadShape::Records, r#"[{"a":1}, 5]"#).unwrap_err();
        assert!(matches!(err, DecodeError::NotARecord { index: 1 }));
    }

    #[test]
    fn test_settle_forbidden_ignores_body() {
        let outcome = settle(&response(403, "<html>not json"), PayloadShape::Records);
        assert!(matches!(outcome, Outcome::Forbidden));
    }

    #[test]
    fn test_settle_states() {
        assert!(matches!(
            settle(&response(200, "[]"), PayloadShape::Records),
            Outcome::EmptyResult
        ));
        assert!(matches!(
            settle(&response(200, "not json"), PayloadShape::Records),
            Outcome::DecodeFailure(DecodeError::Json(_))
        ));
        assert!(matches!(
            settle(&response(500, "oops"), PayloadShape::Records),
            Outcome::UnexpectedStatus(500)
        ));
        assert!(matches!(
            settle(&response(204, r#"[{"a":1}]"#), PayloadShape::Records),
            Outcome::Success(_)
        ));
    }
}
