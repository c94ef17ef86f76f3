//! Example: Telling failure kinds apart with `try_execute`.
//!
//! Run with: cargo run --example error_handling

use coingecko_api_client::config;
use coingecko_api_client::error::{FailureKind, StatusClass};
use coingecko_api_client::rest::CoinGeckoClient;

#[tokio::main]
async fn main() {
    let mut client = CoinGeckoClient::new();

    // No endpoint selected yet.
    if let Err(err) = client.try_execute().await {
        println!("{:?}: {}", err.kind(), err.diagnostic(false));
    }

    config::set_debug(true);
    match client.endpoints().coins("invalid_coin_xyz").try_execute().await {
        Ok(body) => println!("unexpected success: {body}"),
        Err(err) => match err.kind() {
            FailureKind::HttpStatus(StatusClass::NotFound) => {
                println!("not found: {}", err.diagnostic(config::debug_enabled()))
            }
            FailureKind::HttpStatus(StatusClass::RateLimited) => {
                println!("slow down: {}", err.diagnostic(true))
            }
            other => println!("{other:?}: {err}"),
        },
    }
}
