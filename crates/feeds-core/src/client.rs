//! Client handle and request pipeline.
//!
//! A [`Client`] holds one provider's configuration, its API key, and a
//! [`Session`]. [`Client::fetch`] runs one endpoint through the pipeline:
//!
//! 1. build the request (host variant, path, parameters, API key)
//! 2. acquire the transport and send a single GET
//! 3. classify the status and decode the body into a [`Table`]
//! 4. release the transport, on every exit path
//!
//! Decode failures and unexpected statuses are logged and reported as
//! `Ok(None)`. A client built with [`Client::strict`] turns them into errors.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, instrument, warn};

use crate::config::{ProviderConfig, Timeouts};
use crate::error::{ConfigError, FeedError, Result};
use crate::request::{Endpoint, HttpRequest};
use crate::response::{Outcome, settle};
use crate::session::{HttpTransport, Session};
use crate::table::Table;
use crate::types::ApiKey;

/// Long-lived handle for one provider.
pub struct Client {
    config: ProviderConfig,
    api_key: ApiKey,
    session: Session,
    headers: Vec<(String, String)>,
    strict: bool,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("provider", &self.config.name)
            .field("api_key", &"[REDACTED]")
            .field("session", &self.session)
            .field("strict", &self.strict)
            .finish()
    }
}

impl Client {
    /// Creates a client that builds its own HTTP transport on first use.
    pub fn new(config: ProviderConfig, api_key: impl Into<String>) -> Result<Self> {
        let session = Session::new(config.timeouts);
        Self::with_session(config, api_key, session)
    }

    /// Creates a client around a caller-supplied transport.
    pub fn with_transport(
        config: ProviderConfig,
        api_key: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        Self::with_session(config, api_key, Session::with_transport(transport))
    }

    /// Creates a client around a caller-supplied reqwest client.
    pub fn with_client(
        config: ProviderConfig,
        api_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Result<Self> {
        Self::with_session(config, api_key, Session::with_client(client))
    }

    fn with_session(
        config: ProviderConfig,
        api_key: impl Into<String>,
        mut session: Session,
    ) -> Result<Self> {
        let api_key = ApiKey::new(api_key).ok_or_else(|| ConfigError::MissingApiKey {
            provider: config.name.to_string(),
        })?;
        session.timeouts = config.timeouts;

        Ok(Self {
            config,
            api_key,
            session,
            headers: Vec::new(),
            strict: false,
        })
    }

    /// Overrides the provider's default timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.config.timeouts = timeouts;
        self.session.timeouts = timeouts;
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Raises decode failures and unexpected statuses instead of returning `Ok(None)`.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Provider name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.config.name
    }

    /// Provider configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// The underlying session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Builds the request for an endpoint without sending it.
    pub fn request(&self, endpoint: &Endpoint) -> Result<HttpRequest> {
        let mut request = endpoint.build(&self.config, &self.api_key, self.config.timeouts)?;
        request.headers.extend(self.headers.iter().cloned());
        Ok(request)
    }

    /// Runs one endpoint through the pipeline.
    ///
    /// Returns `Ok(Some(table))` with at least one row, or:
    /// - `Err(Configuration)` for an unknown host variant or unusable client
    /// - `Err(Network)` if the request could not be completed
    /// - `Err(Forbidden)` for a 403
    /// - `Err(NoData)` for a 2xx with zero rows
    /// - `Ok(None)` for a decode failure or any other status (errors when strict)
    #[instrument(skip(self, endpoint), fields(provider = self.config.name, path = endpoint.path()))]
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Option<Table>> {
        let transport = self.session.scoped()?;
        let request = self.request(endpoint)?;

        debug!(url = %request.url, "Sending request");
        let response = transport.get(&request).await?;

        let shape = endpoint.payload_shape().unwrap_or(self.config.shape);
        let url = request.url;

        match settle(&response, shape) {
            Outcome::Success(table) => {
                debug!(rows = table.len(), "Request succeeded");
                Ok(Some(table))
            }
            Outcome::EmptyResult => {
                warn!(url = %url, "Request returned no data");
                Err(FeedError::NoData {
                    reader: self.config.name.to_string(),
                    url,
                })
            }
            Outcome::Forbidden => {
                warn!(url = %url, "Endpoint not available to this access tier");
                Err(FeedError::Forbidden { url })
            }
            Outcome::DecodeFailure(source) => {
                error!(url = %url, error = %source, "Failed to decode response");
                if self.strict {
                    Err(FeedError::Decode { url, source })
                } else {
                    Ok(None)
                }
            }
            Outcome::UnexpectedStatus(status) => {
                error!(url = %url, status, "UnexpectedStatus during http request");
                if self.strict {
                    Err(FeedError::UnexpectedStatus { status, url })
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Closes the session. The client can still be used afterwards.
    pub fn close(&self) {
        self.session.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ErrorKind;
    use crate::config::HostVariant;
    use crate::mock::MockTransport;
    use crate::response::PayloadShape;
    use serde_json::json;

    const FMP_HOSTS: &[HostVariant] = &[
        HostVariant::new("A", "https://financialmodelingprep.com/api/v3"),
        HostVariant::new("B", "https://financialmodelingprep.com/api/v4"),
    ];

    const FMP: ProviderConfig = ProviderConfig {
        name: "FMP",
        hosts: FMP_HOSTS,
        auth_param: "apikey",
        shape: PayloadShape::Records,
        timeouts: Timeouts::new(
            crate::config::DEFAULT_CONNECT_TIMEOUT,
            crate::config::DEFAULT_READ_TIMEOUT,
        ),
    };

    const NASDAQ_HOSTS: &[HostVariant] = &[HostVariant::new(
        "datasets",
        "https://data.nasdaq.com/api/v3/datasets",
    )];

    const NASDAQ: ProviderConfig = ProviderConfig {
        name: "Nasdaq",
        hosts: NASDAQ_HOSTS,
        auth_param: "api_key",
        shape: PayloadShape::Dataset,
        ..FMP
    };

    fn client(config: ProviderConfig, mock: &Arc<MockTransport>) -> Client {
        Client::with_transport(config, "test_key", mock.clone()).unwrap()
    }

    #[test]
    fn test_missing_api_key() {
        let err = Client::new(FMP, "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("FMP api key needed"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = Client::new(FMP, "secret_key_12345").unwrap();
        let debug_str = format!("{client:?}");
        assert!(!debug_str.contains("secret_key_12345"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_profile_records() {
        let mock = Arc::new(MockTransport::new().respond(200, r#"[{"symbol":"AAPL","price":155.74}]"#));
        let client = client(FMP, &mock);

        let table = client
            .fetch(&Endpoint::new("A", "profile/AAPL"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.columns(), &["symbol", "price"]);
        assert_eq!(table.value(0, "price"), Some(&json!(155.74)));

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "https://financialmodelingprep.com/api/v3/profile/AAPL");
        assert_eq!(request.query_value("apikey"), Some("test_key"));
        assert_eq!(request.timeouts, Timeouts::default());
    }

    #[tokio::test]
    async fn test_dataset_envelope() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"dataset":{"column_names":["date","1mo"],"data":[["2022-01-01",0.1]]}}"#,
        ));
        let client = client(NASDAQ, &mock);

        let table = client
            .fetch(&Endpoint::new("datasets", "USTREASURY/YIELD"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.columns(), &["date", "1mo"]);
        assert_eq!(table.value(0, "1mo"), Some(&json!(0.1)));
        assert_eq!(
            mock.last_request().unwrap().query_value("api_key"),
            Some("test_key")
        );
    }

    #[tokio::test]
    async fn test_forbidden_before_parsing() {
        let mock = Arc::new(MockTransport::new().respond(403, "{not json at all"));
        let client = client(FMP, &mock);

        let err = client
            .fetch(&Endpoint::new("B", "insider-trading"))
            .await
            .unwrap_err();

        assert!(matches!(err, FeedError::Forbidden { ref url } if url.ends_with("/api/v4/insider-trading")));
        assert_eq!(err.kind(), ErrorKind::DataAvailability);
    }

    #[tokio::test]
    async fn test_empty_result_is_no_data() {
        let mock = Arc::new(MockTransport::new().respond(200, "[]"));
        let client = client(FMP, &mock);

        let err = client
            .fetch(&Endpoint::new("A", "quote/NOPE"))
            .await
            .unwrap_err();

        match err {
            FeedError::NoData { reader, url } => {
                assert_eq!(reader, "FMP");
                assert_eq!(url, "https://financialmodelingprep.com/api/v3/quote/NOPE");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_failure_is_lenient() {
        let mock = Arc::new(MockTransport::new().respond(200, "<html>maintenance</html>"));
        let client = client(FMP, &mock);

        let result = client.fetch(&Endpoint::new("A", "quote/AAPL")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_unexpected_status_is_lenient() {
        let mock = Arc::new(MockTransport::new().respond(500, "Internal Server Error"));
        let client = client(FMP, &mock);

        let result = client.fetch(&Endpoint::new("A", "quote/AAPL")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_strict_client_raises() {
        let mock = Arc::new(
            MockTransport::new()
                .respond(200, "<html>maintenance</html>")
                .respond(502, "Bad Gateway"),
        );
        let client = client(FMP, &mock).strict(true);

        let err = client.fetch(&Endpoint::new("A", "quote/AAPL")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);

        let err = client.fetch(&Endpoint::new("A", "quote/AAPL")).await.unwrap_err();
        assert!(matches!(err, FeedError::UnexpectedStatus { status: 502, .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        let mock = Arc::new(MockTransport::new().fail("connection refused"));
        let client = client(FMP, &mock);

        let err = client.fetch(&Endpoint::new("A", "quote/AAPL")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_unknown_host_sends_nothing_and_releases() {
        let mock = Arc::new(MockTransport::new());
        let client = client(FMP, &mock);

        let err = client.fetch(&Endpoint::new("C", "quote/AAPL")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(mock.requests().is_empty());
        assert_eq!(mock.close_count(), 1);
    }

    #[tokio::test]
    async fn test_close_hook_runs_once_per_call() {
        let mock = Arc::new(
            MockTransport::new()
                .respond(200, r#"[{"symbol":"AAPL"}]"#)
                .respond(200, "[]")
                .respond(403, "")
                .respond(200, "garbage")
                .respond(404, "")
                .fail("timed out"),
        );
        let client = client(FMP, &mock);
        let endpoint = Endpoint::new("A", "quote/AAPL");

        for expected in 1..=6 {
            let _ = client.fetch(&endpoint).await;
            assert_eq!(mock.close_count(), expected);
        }
    }

    #[tokio::test]
    async fn test_endpoint_shape_override() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"symbol":"AAPL","historical":[{"date":"2022-01-03","close":182.01}]}"#,
        ));
        let client = client(FMP, &mock);

        let table = client
            .fetch(
                &Endpoint::new("A", "historical-price-full/AAPL")
                    .shape(PayloadShape::NamedArray("historical")),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(table.columns(), &["date", "close"]);
    }

    #[tokio::test]
    async fn test_headers_and_timeouts_forwarded() {
        let mock = Arc::new(MockTransport::new().respond(200, r#"[{"a":1}]"#));
        let timeouts = Timeouts::new(
            std::time::Duration::from_secs(1),
            std::time::Duration::from_secs(2),
        );
        let client = client(FMP, &mock)
            .with_timeouts(timeouts)
            .with_header("Accept", "application/json");

        client.fetch(&Endpoint::new("A", "quote/AAPL")).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.timeouts, timeouts);
        assert_eq!(
            request.headers,
            vec![("Accept".to_string(), "application/json".to_string())]
        );
    }
}
