#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/feeds/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core pipeline for REST financial data readers.
//!
//! This crate provides the pieces every provider crate is built from:
//!
//! - [`validate`] - Argument validators run before any request is made
//! - [`Session`](session::Session) - Scoped access to the HTTP transport
//! - [`Endpoint`](request::Endpoint) - Endpoint descriptor and request builder
//! - [`PayloadShape`](response::PayloadShape) - Response decoding per provider
//! - [`ErrorKind`](classify::ErrorKind) - Error classification
//! - [`Table`](table::Table) - Tabular result returned to callers
//! - [`Client`](client::Client) - Client handle tying it all together

/// Error classification helpers.
pub mod classify;
/// Client handle and request pipeline.
pub mod client;
/// Provider configuration and timeouts.
pub mod config;
/// Error types for reader operations.
pub mod error;
/// Typed enumerations shared by several providers.
pub mod frequency;
/// Offline transport for tests.
pub mod mock;
/// Reader trait implemented by provider catalogs.
pub mod reader;
/// Endpoint descriptors and request building.
pub mod request;
/// Response decoding.
pub mod response;
/// Session management and HTTP transport.
pub mod session;
/// Tabular result type.
pub mod table;
/// Core value types (Symbol, ApiKey).
pub mod types;
/// Parameter validators.
pub mod validate;

// Re-export commonly used items at crate root
pub use classify::{ErrorKind, StatusClass, classify_status};
pub use client::Client;
pub use config::{HostVariant, ProviderConfig, Timeouts};
pub use error::{ConfigError, DecodeError, FeedError, Result, ValidationError};
pub use frequency::{PeriodType, Timeframe};
pub use reader::Reader;
pub use request::{Endpoint, HttpRequest, ParamValue};
pub use response::{Outcome, PayloadShape};
pub use session::{HttpResponse, HttpTransport, ReqwestTransport, Session};
pub use table::{Row, Table};
pub use types::{ApiKey, Symbol};
