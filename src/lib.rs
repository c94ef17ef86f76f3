//! # CoinGecko Client
//!
//! A fluent async Rust client for the CoinGecko REST API.
//!
//! ## Features
//!
//! - Chainable request builder: endpoint, query parameters, headers, timeout
//! - Catalog of every public route, as named accessors and as a data table
//! - Query parameter reference table for introspection
//! - Typed errors, plus a `None`-on-failure mode with user-facing messages
//! - Opt-in retries with exponential backoff and client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coingecko_api_client::rest::CoinGeckoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = CoinGeckoClient::new();
//!     let prices = client
//!         .endpoints()
//!         .simple_price()
//!         .with_params([("ids", "bitcoin"), ("vs_currencies", "usd")])
//!         .try_execute()
//!         .await?;
//!     println!("BTC: {}", prices["bitcoin"]["usd"]);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rate_limit;
pub mod rest;

// Re-export commonly used types at crate root
pub use config::ClientConfig;
pub use error::{CoinGeckoError, FailureKind, StatusClass};
pub use rest::{CoinGeckoClient, Endpoint};

/// Result type alias using CoinGeckoError
pub type Result<T> = std::result::Result<T, CoinGeckoError>;
