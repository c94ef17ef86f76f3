//! Example: Browsing the route table and parameter reference.
//!
//! Run with: cargo run --example catalog

use coingecko_api_client::rest::{Endpoint, EndpointFamily, params};

fn main() {
    for endpoint in Endpoint::all().filter(|e| e.family() == EndpointFamily::Coins) {
        println!("{:<32} {}", endpoint.key(), endpoint.template());
        for param in endpoint.query_params() {
            println!("    {:<28} {}", param, params::describe(param).unwrap_or("-"));
        }
    }
}
