//! Registry holding one reader per enabled provider.

use std::sync::Arc;

use feeds_core::Reader;
use tracing::debug;
#[cfg(any(feature = "fmp", feature = "nasdaq", feature = "iex", feature = "serpapi"))]
use tracing::warn;

/// One reader per provider, built from explicit keys or from the environment.
///
/// Readers are stored behind [`Arc`] so they can be handed to spawned tasks.
///
/// # Example
///
/// ```rust,ignore
/// use feeds::FeedRegistry;
///
/// let feeds = FeedRegistry::new().with_fmp("fmp_key")?;
/// let profile = feeds.fmp().unwrap().profile("AAPL").await?;
/// feeds.close_all();
/// ```
#[derive(Debug, Default)]
pub struct FeedRegistry {
    #[cfg(feature = "fmp")]
    fmp: Option<Arc<feeds_fmp::FmpReader>>,
    #[cfg(feature = "nasdaq")]
    nasdaq: Option<Arc<feeds_nasdaq::NasdaqReader>>,
    #[cfg(feature = "iex")]
    iex: Option<Arc<feeds_iex::IexReader>>,
    #[cfg(feature = "serpapi")]
    serpapi: Option<Arc<feeds_serpapi::SerpApiReader>>,
}

/// Builds a reader when its key variable is set, logging and skipping it otherwise.
#[cfg(any(feature = "fmp", feature = "nasdaq", feature = "iex", feature = "serpapi"))]
fn load<R: Reader>(var: &str, build: fn() -> feeds_core::Result<R>) -> Option<Arc<R>> {
    if std::env::var_os(var).is_none() {
        debug!(var, "Key not set, skipping reader");
        return None;
    }

    match build() {
        Ok(reader) => {
            debug!(provider = reader.name(), "Registering reader");
            Some(Arc::new(reader))
        }
        Err(e) => {
            warn!(var, error = %e, "Could not build reader");
            None
        }
    }
}

impl FeedRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every enabled reader whose key variable is set.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            #[cfg(feature = "fmp")]
            fmp: load(feeds_fmp::API_KEY_ENV, feeds_fmp::FmpReader::from_env),
            #[cfg(feature = "nasdaq")]
            nasdaq: load(
                feeds_nasdaq::API_KEY_ENV,
                feeds_nasdaq::NasdaqReader::from_env,
            ),
            #[cfg(feature = "iex")]
            iex: load(feeds_iex::API_KEY_ENV, feeds_iex::IexReader::from_env),
            #[cfg(feature = "serpapi")]
            serpapi: load(
                feeds_serpapi::API_KEY_ENV,
                feeds_serpapi::SerpApiReader::from_env,
            ),
        }
    }

    /// Every registered reader, in provider order.
    #[must_use]
    pub fn readers(&self) -> Vec<&dyn Reader> {
        #[allow(unused_mut)]
        let mut readers: Vec<&dyn Reader> = Vec::new();
        #[cfg(feature = "fmp")]
        if let Some(reader) = &self.fmp {
            readers.push(&**reader);
        }
        #[cfg(feature = "nasdaq")]
        if let Some(reader) = &self.nasdaq {
            readers.push(&**reader);
        }
        #[cfg(feature = "iex")]
        if let Some(reader) = &self.iex {
            readers.push(&**reader);
        }
        #[cfg(feature = "serpapi")]
        if let Some(reader) = &self.serpapi {
            readers.push(&**reader);
        }
        readers
    }

    /// Names of the registered readers.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.readers().into_iter().map(|r| r.name()).collect()
    }

    /// Releases the connection pool of every registered reader.
    pub fn close_all(&self) {
        for reader in self.readers() {
            debug!(provider = reader.name(), "Closing reader");
            reader.close();
        }
    }

    /// Add a Financial Modeling Prep reader.
    #[cfg(feature = "fmp")]
    pub fn with_fmp(self, api_key: &str) -> feeds_core::Result<Self> {
        Ok(self.with_fmp_reader(feeds_fmp::FmpReader::new(api_key)?))
    }

    /// Add an already configured Financial Modeling Prep reader.
    #[cfg(feature = "fmp")]
    #[must_use]
    pub fn with_fmp_reader(mut self, reader: feeds_fmp::FmpReader) -> Self {
        debug!(provider = reader.name(), "Registering reader");
        self.fmp = Some(Arc::new(reader));
        self
    }

    /// The Financial Modeling Prep reader, if registered.
    #[cfg(feature = "fmp")]
    #[must_use]
    pub fn fmp(&self) -> Option<Arc<feeds_fmp::FmpReader>> {
        self.fmp.clone()
    }

    /// Add a Nasdaq Data Link reader.
    #[cfg(feature = "nasdaq")]
    pub fn with_nasdaq(self, api_key: &str) -> feeds_core::Result<Self> {
        Ok(self.with_nasdaq_reader(feeds_nasdaq::NasdaqReader::new(api_key)?))
    }

    /// Add an already configured Nasdaq Data Link reader.
    #[cfg(feature = "nasdaq")]
    #[must_use]
    pub fn with_nasdaq_reader(mut self, reader: feeds_nasdaq::NasdaqReader) -> Self {
        debug!(provider = reader.name(), "Registering reader");
        self.nasdaq = Some(Arc::new(reader));
        self
    }

    /// The Nasdaq Data Link reader, if registered.
    #[cfg(feature = "nasdaq")]
    #[must_use]
    pub fn nasdaq(&self) -> Option<Arc<feeds_nasdaq::NasdaqReader>> {
        self.nasdaq.clone()
    }

    /// Add an IEX Cloud reader.
    #[cfg(feature = "iex")]
    pub fn with_iex(self, token: &str) -> feeds_core::Result<Self> {
        Ok(self.with_iex_reader(feeds_iex::IexReader::new(token)?))
    }

    /// Add an already configured IEX Cloud reader, e.g. one on the sandbox host.
    #[cfg(feature = "iex")]
    #[must_use]
    pub fn with_iex_reader(mut self, reader: feeds_iex::IexReader) -> Self {
        debug!(provider = reader.name(), "Registering reader");
        self.iex = Some(Arc::new(reader));
        self
    }

    /// The IEX Cloud reader, if registered.
    #[cfg(feature = "iex")]
    #[must_use]
    pub fn iex(&self) -> Option<Arc<feeds_iex::IexReader>> {
        self.iex.clone()
    }

    /// Add a SerpApi reader.
    #[cfg(feature = "serpapi")]
    pub fn with_serpapi(self, api_key: &str) -> feeds_core::Result<Self> {
        Ok(self.with_serpapi_reader(feeds_serpapi::SerpApiReader::new(api_key)?))
    }

    /// Add an already configured SerpApi reader.
    #[cfg(feature = "serpapi")]
    #[must_use]
    pub fn with_serpapi_reader(mut self, reader: feeds_serpapi::SerpApiReader) -> Self {
        debug!(provider = reader.name(), "Registering reader");
        self.serpapi = Some(Arc::new(reader));
        self
    }

    /// The SerpApi reader, if registered.
    #[cfg(feature = "serpapi")]
    #[must_use]
    pub fn serpapi(&self) -> Option<Arc<feeds_serpapi::SerpApiReader>> {
        self.serpapi.clone()
    }
}
