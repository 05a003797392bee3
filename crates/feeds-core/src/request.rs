//! Endpoint descriptors and request building.
//!
//! An [`Endpoint`] names a host variant, a path, and query parameters. The
//! builder resolves the host against a [`ProviderConfig`], joins the path,
//! and appends the API key as the provider's authentication parameter.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::config::{ProviderConfig, Timeouts};
use crate::error::ConfigError;
use crate::response::PayloadShape;
use crate::types::{ApiKey, Symbol};

/// A query parameter value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// Text value.
    Text(String),
    /// Integer value.
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&Symbol> for ParamValue {
    fn from(s: &Symbol) -> Self {
        Self::Text(s.as_str().to_string())
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(d: NaiveDate) -> Self {
        Self::Text(d.format("%Y-%m-%d").to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Text(b.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

/// Logical description of one call: host variant, path, and parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    path: String,
    params: BTreeMap<String, ParamValue>,
    shape: Option<PayloadShape>,
}

impl Endpoint {
    /// Creates an endpoint on the given host variant.
    ///
    /// `path` is appended to the variant's base URL; it may be empty.
    #[must_use]
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            params: BTreeMap::new(),
            shape: None,
        }
    }

    /// Adds a query parameter, replacing any previous value for `name`.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Adds a query parameter only if `value` is `Some`.
    #[must_use]
    pub fn param_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    /// Overrides the provider's payload shape for this endpoint.
    #[must_use]
    pub fn shape(mut self, shape: PayloadShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Host variant id.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path below the host's base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters, excluding the API key.
    #[must_use]
    pub const fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    /// Payload shape override, if any.
    #[must_use]
    pub const fn payload_shape(&self) -> Option<PayloadShape> {
        self.shape
    }

    /// Builds the outgoing request.
    ///
    /// The API key is added under `config.auth_param`, replacing any parameter
    /// of the same name, so every request carries exactly one key.
    pub fn build(
        &self,
        config: &ProviderConfig,
        api_key: &ApiKey,
        timeouts: Timeouts,
    ) -> Result<HttpRequest, ConfigError> {
        let host = config.host(&self.host)?;
        let path = self.path.trim_matches('/');
        let url = if path.is_empty() {
            host.base_url.to_string()
        } else {
            format!("{}/{path}", host.base_url.trim_end_matches('/'))
        };

        let mut query: Vec<(String, String)> = self
            .params
            .iter()
            .filter(|(name, _)| name.as_str() != config.auth_param)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        query.push((
            config.auth_param.to_string(),
            api_key.expose().to_string(),
        ));

        Ok(HttpRequest {
            url,
            query,
            headers: Vec::new(),
            timeouts,
        })
    }
}

/// A fully resolved GET request.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL without query string.
    pub url: String,
    /// Query parameters, authentication included.
    pub query: Vec<(String, String)>,
    /// Extra request headers.
    pub headers: Vec<(String, String)>,
    /// Connect and read timeouts.
    pub timeouts: Timeouts,
}

impl HttpRequest {
    /// Returns the value of a query parameter.
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("url", &self.url)
            .field(
                "query",
                &self.query.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            )
            .field("headers", &self.headers)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}
