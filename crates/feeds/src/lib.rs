#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/feeds/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Typed readers for financial REST data APIs.
//!
//! This crate re-exports the core pipeline types and every reader enabled by
//! a cargo feature, and provides a [`FeedRegistry`] holding one reader per
//! provider.
//!
//! # Features
//!
//! - `fmp` - Financial Modeling Prep reader
//! - `nasdaq` - Nasdaq Data Link reader
//! - `iex` - IEX Cloud reader
//! - `serpapi` - SerpApi reader
//!
//! # Example
//!
//! ```rust,ignore
//! use feeds::{FeedRegistry, Reader};
//!
//! #[tokio::main]
//! async fn main() -> feeds::Result<()> {
//!     let feeds = FeedRegistry::new()
//!         .with_fmp("fmp_key")?
//!         .with_nasdaq("nasdaq_key")?;
//!
//!     if let Some(nasdaq) = feeds.nasdaq() {
//!         let ten_year = nasdaq.treasury_yield("10yr", Some(5)).await?;
//!     }
//!
//!     feeds.close_all();
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use feeds_core::*;

// Readers
#[cfg(feature = "fmp")]
pub use feeds_fmp::FmpReader;
#[cfg(feature = "iex")]
pub use feeds_iex::IexReader;
#[cfg(feature = "nasdaq")]
pub use feeds_nasdaq::NasdaqReader;
#[cfg(feature = "serpapi")]
pub use feeds_serpapi::SerpApiReader;

mod registry;
pub use registry::FeedRegistry;
