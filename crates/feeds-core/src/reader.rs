//! Reader trait implemented by provider catalogs.

use std::fmt::Debug;

use crate::client::Client;

/// Base trait for all provider readers.
///
/// A reader wraps a [`Client`] and exposes one async method per remote
/// endpoint. Every such method returns `Result<Option<Table>>`; see
/// [`Client::fetch`] for the meaning of each outcome.
///
/// [`Table`]: crate::Table
pub trait Reader: Send + Sync + Debug {
    /// Returns the client this reader sends requests through.
    fn client(&self) -> &Client;

    /// Returns a description of this provider.
    fn description(&self) -> &str;

    /// Returns the name of this provider (e.g., "FMP").
    fn name(&self) -> &str {
        self.client().name()
    }

    /// Closes the underlying session.
    fn close(&self) {
        self.client().close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HostVariant, ProviderConfig, Timeouts};
    use crate::mock::MockTransport;
    use crate::response::PayloadShape;
    use std::sync::Arc;

    const HOSTS: &[HostVariant] = &[HostVariant::new("search", "https://serpapi.com/search.json")];

    const CONFIG: ProviderConfig = ProviderConfig {
        name: "SerpApi",
        hosts: HOSTS,
        auth_param: "api_key",
        shape: PayloadShape::Records,
        timeouts: Timeouts::new(
            crate::config::DEFAULT_CONNECT_TIMEOUT,
            crate::config::DEFAULT_READ_TIMEOUT,
        ),
    };

    #[derive(Debug)]
    struct Dummy {
        client: Client,
    }

    impl Reader for Dummy {
        fn client(&self) -> &Client {
            &self.client
        }

        fn description(&self) -> &str {
            "Dummy reader"
        }
    }

    #[test]
    fn test_default_methods() {
        let mock = Arc::new(MockTransport::new());
        let reader = Dummy {
            client: Client::with_transport(CONFIG, "key", mock.clone()).unwrap(),
        };

        assert_eq!(reader.name(), "SerpApi");
        assert_eq!(reader.description(), "Dummy reader");

        reader.close();
        assert_eq!(mock.close_count(), 1);
    }
}
