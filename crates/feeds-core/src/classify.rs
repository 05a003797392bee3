//! Error classification.
//!
//! Maps HTTP statuses and [`FeedError`] variants onto the small set of
//! categories callers act on. Nothing here retries; callers own retry policy.

use crate::error::FeedError;

/// Category of a reader failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad key, unknown host variant, unusable HTTP client.
    Configuration,
    /// Bad caller-supplied argument.
    Validation,
    /// Network-level failure.
    Transport,
    /// The provider was reachable but returned nothing usable for this request.
    DataAvailability,
    /// The provider's body could not be tabulated.
    Decode,
}

impl ErrorKind {
    /// Returns true if repeating the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport)
    }
}

/// Coarse classification of an HTTP status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// Any 2xx status.
    Success,
    /// 403.
    Forbidden,
    /// Anything else.
    Unexpected(u16),
}

/// Classifies an HTTP status code.
#[must_use]
pub const fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        403 => StatusClass::Forbidden,
        other => StatusClass::Unexpected(other),
    }
}

impl FeedError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Network(_) => ErrorKind::Transport,
            Self::NoData { .. } | Self::Forbidden { .. } => ErrorKind::DataAvailability,
            // Throttling and server errors behave like transport failures.
            Self::UnexpectedStatus { status, .. } if *status == 429 || *status >= 500 => {
                ErrorKind::Transport
            }
            Self::UnexpectedStatus { .. } => ErrorKind::DataAvailability,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Returns true if repeating the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, DecodeError, ValidationError};

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), StatusClass::Success);
        assert_eq!(classify_status(204), StatusClass::Success);
        assert_eq!(classify_status(403), StatusClass::Forbidden);
        assert_eq!(classify_status(401), StatusClass::Unexpected(401));
        assert_eq!(classify_status(502), StatusClass::Unexpected(502));
    }

    #[test]
    fn test_error_kinds() {
        let config = FeedError::from(ConfigError::MissingApiKey {
            provider: "FMP".to_string(),
        });
        assert_eq!(config.kind(), ErrorKind::Configuration);
        assert!(!config.is_retryable());

        let validation = FeedError::from(ValidationError::OutOfRange {
            field: "zoom",
            value: 40,
            min: 3,
            max: 21,
        });
        assert_eq!(validation.kind(), ErrorKind::Validation);

        let network = FeedError::Network("connection refused".to_string());
        assert_eq!(network.kind(), ErrorKind::Transport);
        assert!(network.is_retryable());

        let no_data = FeedError::NoData {
            reader: "FMP".to_string(),
            url: "https://example.com".to_string(),
        };
        assert_eq!(no_data.kind(), ErrorKind::DataAvailability);
        assert!(!no_data.is_retryable());

        let forbidden = FeedError::Forbidden {
            url: "https://example.com".to_string(),
        };
        assert_eq!(forbidden.kind(), ErrorKind::DataAvailability);

        let decode = FeedError::Decode {
            url: "https://example.com".to_string(),
            source: DecodeError::MissingEnvelope("dataset"),
        };
        assert_eq!(decode.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_unexpected_status_kinds() {
        let status = |status| FeedError::UnexpectedStatus {
            status,
            url: String::new(),
        };
        assert_eq!(status(503).kind(), ErrorKind::Transport);
        assert_eq!(status(429).kind(), ErrorKind::Transport);
        assert_eq!(status(404).kind(), ErrorKind::DataAvailability);
    }
}
