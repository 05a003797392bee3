//! Session management and HTTP transport.
//!
//! [`HttpTransport`] is the seam between the pipeline and the network. A
//! [`Session`] hands out the transport for one call and releases it again
//! when the call ends, whichever way it ends.

use std::fmt::Debug;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::config::Timeouts;
use crate::error::{ConfigError, FeedError, Result};
use crate::request::HttpRequest;

/// User agent for HTTP requests.
const USER_AGENT: &str = concat!("feeds/", env!("CARGO_PKG_VERSION"));

/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// A pooled HTTP client capable of issuing GET requests.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    /// Sends a GET request and returns the status and body.
    ///
    /// Connection failures and timeouts are reported as [`FeedError::Network`].
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;

    /// Releases pooled connections. Called once at the end of every call.
    fn close(&self) {}
}

/// Default transport backed by [`reqwest::Client`].
///
/// The connect timeout is set on the client; the read timeout is applied to
/// each request.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with the given connect timeout.
    pub fn new(timeouts: Timeouts) -> std::result::Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .get(&request.url)
            .query(&request.query)
            .timeout(request.timeouts.read);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Network(format!("request timeout: {}", e.without_url()))
            } else if e.is_connect() {
                FeedError::Network(format!("connection failed: {}", e.without_url()))
            } else {
                FeedError::Network(e.without_url().to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Network(format!("failed to read response body: {}", e.without_url())))?;

        Ok(HttpResponse { status, body })
    }
}

/// Owner of the transport used by one client.
///
/// A session either builds its own [`ReqwestTransport`] on first use (and
/// drops it on release, so the next call builds a fresh one) or wraps an
/// injected transport whose lifecycle belongs to the caller (release only
/// invokes its close hook).
#[derive(Debug)]
pub struct Session {
    slot: Mutex<Option<Arc<dyn HttpTransport>>>,
    owned: bool,
    pub(crate) timeouts: Timeouts,
}

impl Session {
    /// Creates a session that lazily builds a default transport.
    #[must_use]
    pub fn new(timeouts: Timeouts) -> Self {
        Self {
            slot: Mutex::new(None),
            owned: true,
            timeouts,
        }
    }

    /// Creates a session around a caller-supplied transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            slot: Mutex::new(Some(transport)),
            owned: false,
            timeouts: Timeouts::default(),
        }
    }

    /// Creates a session around a caller-supplied reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::with_client(client)))
    }

    fn slot(&self) -> MutexGuard<'_, Option<Arc<dyn HttpTransport>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the live transport, building the default one if needed.
    ///
    /// Repeated calls return the same transport until it is released.
    pub fn acquire(&self) -> std::result::Result<Arc<dyn HttpTransport>, ConfigError> {
        let mut slot = self.slot();
        if let Some(transport) = slot.as_ref() {
            return Ok(Arc::clone(transport));
        }

        debug!("Building default HTTP transport");
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(self.timeouts)?);
        *slot = Some(Arc::clone(&transport));
        Ok(transport)
    }

    /// Closes the transport.
    ///
    /// An owned transport is dropped; an injected one is kept for reuse.
    pub fn release(&self) {
        let mut slot = self.slot();
        if self.owned {
            if let Some(transport) = slot.take() {
                transport.close();
            }
        } else if let Some(transport) = slot.as_ref() {
            transport.close();
        }
    }

    /// Acquires the transport for the duration of one call.
    ///
    /// The returned guard releases the session when dropped.
    pub fn scoped(&self) -> std::result::Result<SessionGuard<'_>, ConfigError> {
        let transport = self.acquire()?;
        Ok(SessionGuard {
            session: self,
            transport,
        })
    }

    /// Returns true if a transport is currently held.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slot().is_some()
    }

    /// Returns true if the session built its own transport.
    #[must_use]
    pub const fn is_owned(&self) -> bool {
        self.owned
    }
}

/// Transport handle that releases its session on drop.
#[derive(Debug)]
pub struct SessionGuard<'a> {
    session: &'a Session,
    transport: Arc<dyn HttpTransport>,
}

impl Deref for SessionGuard<'_> {
    type Target = dyn HttpTransport;

    fn deref(&self) -> &Self::Target {
        self.transport.as_ref()
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.session.release();
    }
}
