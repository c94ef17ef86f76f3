//! API key handling for the CoinGecko API.
//!
//! The key is sent as a plain request header, there is no request signing.

mod credentials;

pub use credentials::{API_KEY_HEADER, ApiKey};
