//! CoinGecko REST API client.
//!
//! - [`CoinGeckoClient`] is the request builder and executor.
//! - [`Endpoints`] gives one named accessor per route.
//! - [`Endpoint`] and [`ROUTES`] describe the routes as data.
//! - [`params`] documents the query parameters each route accepts.
//!
//! ```rust,no_run
//! use coingecko_api_client::rest::CoinGeckoClient;
//!
//! # async fn run() -> Result<(), coingecko_api_client::CoinGeckoError> {
//! let mut client = CoinGeckoClient::new();
//! let coin = client
//!     .endpoints()
//!     .coins("bitcoin")
//!     .with_params([("localization", "false"), ("tickers", "false")])
//!     .try_execute()
//!     .await?;
//! println!("{}", coin["name"]);
//! # Ok(())
//! # }
//! ```

mod catalog;
mod client;
pub mod diagnostics;
mod endpoints;
pub mod params;

pub use catalog::Endpoints;
pub use client::{CoinGeckoClient, CoinGeckoClientBuilder};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use endpoints::*;
