//! Error types for reader operations.
//!
//! [`FeedError`] is what every reader method returns. Its variants fall into
//! the categories reported by [`FeedError::kind`](crate::classify::ErrorKind):
//! configuration and validation problems are raised before any request is
//! sent, network problems are raised as they happen, and data availability
//! problems are raised once the provider has answered.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while building or running a request.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The client or endpoint is misconfigured.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// A caller-supplied argument was rejected.
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered successfully but returned no rows.
    #[error("Request from: {reader} returned no data; check if URL is invalid. Request url: {url}")]
    NoData {
        /// Provider name of the issuing reader (its
        /// [`ProviderConfig::name`](crate::config::ProviderConfig::name), e.g. `"FMP"`).
        reader: String,
        /// The request URL, without query string.
        url: String,
    },

    /// The provider refused the request for this access tier (HTTP 403).
    #[error("The url: {url} is not available to this access tier")]
    Forbidden {
        /// The request URL, without query string.
        url: String,
    },

    /// Non-success status other than 403. Only raised by strict clients.
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The request URL, without query string.
        url: String,
    },

    /// The body could not be turned into a table. Only raised by strict clients.
    #[error("Could not decode response from {url}: {source}")]
    Decode {
        /// The request URL, without query string.
        url: String,
        /// The underlying decode failure.
        #[source]
        source: DecodeError,
    },
}

/// Programmer errors: never retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No API key was supplied.
    #[error("{provider} api key needed")]
    MissingApiKey {
        /// The provider the key is for.
        provider: String,
    },

    /// The endpoint named a host variant the provider does not declare.
    #[error("Invalid host variant for {provider}: {variant}. Declared variants: {declared:?}")]
    UnknownHostVariant {
        /// The provider being queried.
        provider: String,
        /// The requested variant.
        variant: String,
        /// The variants the provider declares.
        declared: Vec<&'static str>,
    },

    /// The default HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Rejected caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A date string could not be parsed.
    #[error("Invalid date format for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The argument name.
        field: &'static str,
        /// The raw input.
        value: String,
    },

    /// The start of a range is after its end.
    #[error("Start date {from} must not be after end date {to}")]
    InvalidDateRange {
        /// Start of the range.
        from: NaiveDate,
        /// End of the range.
        to: NaiveDate,
    },

    /// The range is longer than the endpoint allows.
    #[error("Date range {from} to {to} spans {days} days; at most {max_days} days are allowed")]
    RangeTooWide {
        /// Start of the range.
        from: NaiveDate,
        /// End of the range.
        to: NaiveDate,
        /// Requested span in days.
        days: i64,
        /// Maximum span in days.
        max_days: i64,
    },

    /// The value is not a member of the accepted set.
    #[error("Invalid {field}: {value}. Accepted values: {accepted:?}")]
    InvalidEnumValue {
        /// The argument name.
        field: &'static str,
        /// The raw input.
        value: String,
        /// Every accepted value, in declaration order.
        accepted: &'static [&'static str],
    },

    /// The value has the wrong type.
    #[error("Invalid type for {field}: {value} is not {expected}")]
    InvalidType {
        /// The argument name.
        field: &'static str,
        /// The offending value, rendered as JSON.
        value: String,
        /// Description of the expected type.
        expected: &'static str,
    },

    /// A numeric value is outside its allowed bounds.
    #[error("Invalid {field}: {value}. Value must be between {min}-{max}")]
    OutOfRange {
        /// The argument name.
        field: &'static str,
        /// The raw input.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

/// Failure to turn a 2xx body into a [`Table`](crate::Table).
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body is not JSON.
    #[error("JSON conversion exception: {0}")]
    Json(#[from] serde_json::Error),

    /// The expected envelope key is absent or has the wrong type.
    #[error("Missing or malformed '{0}' envelope")]
    MissingEnvelope(&'static str),

    /// A record is not a JSON object.
    #[error("Record {index} is not an object")]
    NotARecord {
        /// Position of the record in the payload.
        index: usize,
    },

    /// A positional row does not match the column header.
    #[error("Row {index} has {found} values but {expected} columns were declared")]
    RowWidth {
        /// Position of the row in the payload.
        index: usize,
        /// Number of declared columns.
        expected: usize,
        /// Number of values in the row.
        found: usize,
    },

    /// The column header names the same column twice.
    #[error("Column {0:?} is declared more than once")]
    DuplicateColumn(String),

    /// The provider returned an error object with a success status.
    #[error("Provider error message: {0}")]
    ProviderMessage(String),
}

/// Result type alias using [`FeedError`].
pub type Result<T> = std::result::Result<T, FeedError>;
