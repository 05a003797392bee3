//! Parameter validators.
//!
//! Every validator is a pure function that either returns the normalized
//! value or a [`ValidationError`]. Reader methods run them before building an
//! endpoint, so a rejected argument never produces a request.
//!
//! The `*_value` variants accept loosely typed [`serde_json::Value`] input for
//! callers that forward arguments from configuration files or user input.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::ValidationError;
use crate::types::Symbol;

/// Date format accepted by every date argument.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDateFormat {
            field,
            value: value.to_string(),
        }
    })
}

/// Validates a `from`/`to` pair and returns both dates.
///
/// Fails if either date is unparseable or `from` is after `to`.
pub fn date_range(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let from = parse_date("from_date", from)?;
    let to = parse_date("to_date", to)?;

    if from > to {
        return Err(ValidationError::InvalidDateRange { from, to });
    }

    Ok((from, to))
}

/// Validates a `from`/`to` pair whose span may not exceed `max_days`.
pub fn bounded_date_range(
    from: &str,
    to: &str,
    max_days: i64,
) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let (from, to) = date_range(from, to)?;
    let days = (to - from).num_days();

    if days > max_days {
        return Err(ValidationError::RangeTooWide {
            from,
            to,
            days,
            max_days,
        });
    }

    Ok((from, to))
}

/// Checks that `value` is one of `accepted` and returns the matching entry.
pub fn one_of(
    field: &'static str,
    value: &str,
    accepted: &'static [&'static str],
) -> Result<&'static str, ValidationError> {
    accepted
        .iter()
        .copied()
        .find(|candidate| *candidate == value)
        .ok_or_else(|| ValidationError::InvalidEnumValue {
            field,
            value: value.to_string(),
            accepted,
        })
}

/// Checks that `value` lies within `min..=max`.
pub fn in_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Normalizes a single ticker symbol, rejecting a blank one.
pub fn symbol(value: &str) -> Result<Symbol, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidType {
            field: "symbol",
            value: format!("{value:?}"),
            expected: "a non-empty string",
        });
    }

    Ok(Symbol::new(trimmed))
}

/// Trims a free-text argument, rejecting a blank one.
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidType {
            field,
            value: format!("{value:?}"),
            expected: "a non-empty string",
        });
    }

    Ok(trimmed)
}

/// Normalizes a SEC Central Index Key to its ten digit, zero padded form.
pub fn cik(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.len() > 10 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidType {
            field: "cik",
            value: format!("{value:?}"),
            expected: "up to ten digits",
        });
    }

    Ok(format!("{trimmed:0>10}"))
}

/// Joins symbols into a comma separated, uppercased list.
///
/// Each element is uppercased on its own; duplicates are kept.
#[must_use]
pub fn symbols<S: AsRef<str>>(symbols: &[S]) -> String {
    symbols
        .iter()
        .map(|s| s.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(",")
}

/// Joins a symbol list like [`symbols`], rejecting an empty list.
pub fn symbol_list<S: AsRef<str>>(list: &[S]) -> Result<String, ValidationError> {
    if list.is_empty() || list.iter().any(|s| s.as_ref().trim().is_empty()) {
        return Err(ValidationError::InvalidType {
            field: "symbols",
            value: format!("{:?}", list.iter().map(AsRef::as_ref).collect::<Vec<_>>()),
            expected: "a non-empty list of non-empty strings",
        });
    }

    Ok(symbols(list))
}

/// Validates a loosely typed symbol list and joins it like [`symbols`].
///
/// Fails with [`ValidationError::InvalidType`] if `value` is not an array, or
/// names the first element that is not a string.
pub fn symbols_value(value: &Value) -> Result<String, ValidationError> {
    let items = value.as_array().ok_or_else(|| ValidationError::InvalidType {
        field: "symbols",
        value: value.to_string(),
        expected: "a list of strings",
    })?;

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => out.push(s.as_str()),
            other => {
                return Err(ValidationError::InvalidType {
                    field: "symbol",
                    value: other.to_string(),
                    expected: "a string",
                });
            }
        }
    }

    Ok(symbols(&out))
}

/// Validates a loosely typed row-count limit.
///
/// `None` and JSON `null` mean "use the provider default".
pub fn limit_value(value: Option<&Value>) -> Result<Option<i64>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_i64().map(Some).ok_or_else(|| ValidationError::InvalidType {
            field: "limit",
            value: v.to_string(),
            expected: "an integer",
        }),
    }
}
