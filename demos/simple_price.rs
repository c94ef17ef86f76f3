//! Example: Fetch spot prices with the fluent builder.
//!
//! Run with: cargo run --example simple_price
//! Set COINGECKO_API_KEY to send a demo API key.

use coingecko_api_client::rest::CoinGeckoClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut client = match std::env::var("COINGECKO_API_KEY") {
        Ok(key) => CoinGeckoClient::with_credential(key),
        Err(_) => CoinGeckoClient::new(),
    };

    let prices = client
        .endpoints()
        .simple_price()
        .with_params([("ids", "bitcoin,ethereum"), ("vs_currencies", "usd")])
        .execute()
        .await;

    if let Some(prices) = prices {
        println!("BTC: ${}", prices["bitcoin"]["usd"]);
        println!("ETH: ${}", prices["ethereum"]["usd"]);
    }

    // Query parameters were cleared, the client is ready for the next route.
    if let Some(pong) = client.endpoints().ping().execute().await {
        println!("{}", pong["gecko_says"]);
    }
}
