//! Tabular result type.
//!
//! A [`Table`] is an ordered list of rows that all share the same columns.
//! Rows are JSON objects whose keys follow the column order, so a table can be
//! re-serialized, filtered, or converted into a polars [`DataFrame`].

use std::collections::HashSet;

use polars::prelude::{Column, DataFrame, PlSmallStr, PolarsResult};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// A single row, keyed by column name in column order.
pub type Row = Map<String, Value>;

/// Ordered sequence of uniform-shape rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table from JSON objects.
    ///
    /// Columns are the union of all keys in first-seen order. Cells a record
    /// does not have are filled with `null`.
    #[must_use]
    pub fn from_records(records: Vec<Row>) -> Self {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for record in &records {
            for key in record.keys() {
                if seen.insert(key.as_str()) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|c| (c.clone(), record.remove(c).unwrap_or(Value::Null)))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Builds a table from a column header and positional rows.
    ///
    /// Column names must be unique and every row must match the header width.
    pub fn from_rows(columns: Vec<String>, data: Vec<Vec<Value>>) -> Result<Self, DecodeError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(DecodeError::DuplicateColumn(duplicate.clone()));
        }

        let mut rows = Vec::with_capacity(data.len());
        for (index, values) in data.into_iter().enumerate() {
            if values.len() != columns.len() {
                return Err(DecodeError::RowWidth {
                    index,
                    expected: columns.len(),
                    found: values.len(),
                });
            }
            rows.push(columns.iter().cloned().zip(values).collect());
        }

        Ok(Self { columns, rows })
    }

    /// Column names, in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Returns the cell at `row` / `column`, if both exist.
    #[must_use]
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row)?.get(column)
    }

    /// Returns every value of one column, or `None` if there is no such column.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        if !self.columns.iter().any(|c| c == name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|r| r.get(name).unwrap_or(&Value::Null))
                .collect(),
        )
    }

    /// Consumes the table and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Converts the table into a polars DataFrame.
    ///
    /// Column types are inferred from the non-null cells: all booleans become a
    /// boolean column, all integers an `i64` column, all numbers an `f64`
    /// column. Anything else becomes a string column, with nested values kept
    /// as JSON text.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns
            .iter()
            .map(|name| {
                let values: Vec<&Value> = self
                    .rows
                    .iter()
                    .map(|r| r.get(name).unwrap_or(&Value::Null))
                    .collect();
                infer_column(name, &values)
            })
            .collect();

        DataFrame::new(columns)
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn infer_column(name: &str, values: &[&Value]) -> Column {
    let name = PlSmallStr::from(name);
    let mut present = values.iter().filter(|v| !v.is_null()).peekable();

    if present.peek().is_none() {
        return Column::new(name, vec![None::<String>; values.len()]);
    }

    let present: Vec<&&Value> = present.collect();
    if present.iter().all(|v| v.is_boolean()) {
        Column::new(name, values.iter().map(|v| v.as_bool()).collect::<Vec<_>>())
    } else if present.iter().all(|v| v.is_i64()) {
        Column::new(name, values.iter().map(|v| v.as_i64()).collect::<Vec<_>>())
    } else if present.iter().all(|v| v.is_number()) {
        Column::new(name, values.iter().map(|v| v.as_f64()).collect::<Vec<_>>())
    } else {
        let strings: Vec<Option<String>> = values
            .iter()
            .map(|v| match v {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect();
        Column::new(name, strings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use serde_json::json;

    fn record(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_records_unions_columns() {
        let table = Table::from_records(vec![
            record(json!({"symbol": "AAPL", "price": 155.74})),
            record(json!({"symbol": "MSFT", "volume": 1000})),
        ]);

        assert_eq!(table.columns(), &["symbol", "price", "volume"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "price"), Some(&Value::Null));
        assert_eq!(table.value(0, "volume"), Some(&Value::Null));
        let keys: Vec<&String> = table.rows()[1].keys().collect();
        assert_eq!(keys, ["symbol", "price", "volume"]);
    }

    #[test]
    fn test_from_rows() {
        let table = Table::from_rows(
            vec!["date".to_string(), "1mo".to_string()],
            vec![vec![json!("2022-01-01"), json!(0.1)]],
        )
        .unwrap();

        assert_eq!(table.value(0, "1mo"), Some(&json!(0.1)));
        assert_eq!(table.column("date").unwrap(), vec![&json!("2022-01-01")]);
        assert!(table.column("2mo").is_none());
    }

    #[test]
    fn test_from_rows_width_mismatch() {
        let err = Table::from_rows(
            vec!["date".to_string(), "1mo".to_string()],
            vec![vec![json!("2022-01-01")]],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            DecodeError::RowWidth {
                index: 0,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_from_rows_duplicate_column() {
        let err = Table::from_rows(
            vec!["Date".to_string(), "Value".to_string(), "Value".to_string()],
            vec![vec![json!("2022-01-01"), json!(1.0), json!(2.0)]],
        )
        .unwrap_err();

        assert!(matches!(err, DecodeError::DuplicateColumn(ref name) if name == "Value"));
    }

    #[test]
    fn test_to_dataframe_infers_types() {
        let table = Table::from_records(vec![
            record(json!({"symbol": "AAPL", "price": 155.74, "volume": 10, "active": true})),
            record(json!({"symbol": "MSFT", "price": 301, "volume": null, "active": false})),
        ]);

        let df = table.to_dataframe().unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("symbol").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("price").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("volume").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("active").unwrap().dtype(), &DataType::Boolean);
    }

    #[test]
    fn test_serializes_rows_in_column_order() {
        let table = Table::from_records(vec![record(json!({"b": 1, "a": 2}))]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"columns":["b","a"],"rows":[{"b":1,"a":2}]}"#);
    }
}
