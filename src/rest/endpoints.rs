//! CoinGecko REST API route table.
//!
//! Every route is a row in [`ROUTES`]: an [`Endpoint`] key, the accessor name
//! used by [`Endpoints`](crate::rest::Endpoints), the path template and its
//! resource family. Path templates use `{name}` placeholders which are filled
//! positionally by [`render_path`].

use crate::error::CoinGeckoError;
use crate::rest::params;

pub use crate::config::DEFAULT_BASE_URL;

/// Resource family an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointFamily {
    /// Ping, simple prices and coin data.
    Coins,
    /// NFT collections.
    Nfts,
    /// Spot exchanges.
    ExchangesSpot,
    /// Derivatives exchanges.
    ExchangesDerivatives,
    /// Public company treasuries.
    Treasury,
    /// Search, trending and asset platforms.
    Search,
    /// On-chain DEX data (GeckoTerminal).
    Onchain,
}

/// A route of the CoinGecko REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /ping`
    Ping,
    /// `GET /simple/price`
    SimplePrice,
    /// `GET /simple/token_price/{id}`
    SimpleTokenPrice,
    /// `GET /simple/supported_vs_currencies`
    SimpleSupportedVsCurrencies,
    /// `GET /coins/list`
    CoinsList,
    /// `GET /coins/markets`
    CoinsMarkets,
    /// `GET /coins/{id}`
    Coin,
    /// `GET /coins/{id}/tickers`
    CoinTickers,
    /// `GET /coins/{id}/history`
    CoinHistory,
    /// `GET /coins/{id}/market_chart`
    CoinMarketChart,
    /// `GET /coins/{id}/market_chart/range`
    CoinMarketChartRange,
    /// `GET /coins/{id}/ohlc`
    CoinOhlc,
    /// `GET /coins/categories/list`
    CoinCategoriesList,
    /// `GET /coins/categories`
    CoinCategories,
    /// `GET /nfts/list`
    NftsList,
    /// `GET /nfts/{id}`
    Nft,
    /// `GET /nfts/{asset_platform_id}/contract/{contract_address}`
    NftContract,
    /// `GET /exchanges`
    Exchanges,
    /// `GET /exchanges/list`
    ExchangesList,
    /// `GET /exchanges/{id}`
    Exchange,
    /// `GET /exchanges/{id}/tickers`
    ExchangeTickers,
    /// `GET /exchanges/{id}/volume_chart`
    ExchangeVolumeChart,
    /// `GET /derivatives`
    Derivatives,
    /// `GET /derivatives/exchanges`
    DerivativesExchanges,
    /// `GET /derivatives/exchanges/{id}`
    DerivativesExchange,
    /// `GET /derivatives/exchanges/list`
    DerivativesExchangesList,
    /// `GET /entities/list`
    EntitiesList,
    /// `GET /{entity}/public_treasury/{coin_id}`
    PublicTreasuryEntityCoin,
    /// `GET /public_treasury/{entity_id}`
    PublicTreasuryEntity,
    /// `GET /public_treasury/{entity_id}/{coin_id}/holding_chart`
    PublicTreasuryHoldingChart,
    /// `GET /public_treasury/{entity_id}/transaction_history`
    PublicTreasuryTransactionHistory,
    /// `GET /search`
    Search,
    /// `GET /search/trending`
    SearchTrending,
    /// `GET /asset_platforms`
    AssetPlatforms,
    /// `GET /token_lists/{asset_platform_id}/all.json`
    TokenLists,
    /// `GET /onchain/networks`
    OnchainNetworks,
    /// `GET /onchain/networks/{network}/dexes`
    OnchainDexes,
    /// `GET /onchain/networks/{network}/tokens/{token_address}/info`
    OnchainTokenInfo,
    /// `GET /onchain/networks/{network}/pools/{pool_address}`
    OnchainPool,
    /// `GET /onchain/networks/{network}/pools/multi/{pool_addresses}`
    OnchainPoolsMulti,
    /// `GET /onchain/networks/trending_pools`
    OnchainTrendingPools,
    /// `GET /onchain/networks/{network}/trending_pools`
    OnchainNetworkTrendingPools,
    /// `GET /onchain/networks/{network}/pools`
    OnchainTopPools,
    /// `GET /onchain/networks/{network}/dexes/{dex}/pools`
    OnchainDexPools,
    /// `GET /onchain/networks/new_pools`
    OnchainNewPools,
    /// `GET /onchain/networks/{network}/new_pools`
    OnchainNetworkNewPools,
    /// `GET /onchain/search/pools`
    OnchainSearchPools,
    /// `GET /onchain/networks/{network}/pools/{pool_address}/info`
    OnchainPoolInfo,
    /// `GET /onchain/simple/networks/{network}/token_price/{token_addresses}`
    OnchainSimpleTokenPrice,
    /// `GET /onchain/networks/{network}/tokens/{token_address}/pools`
    OnchainTokenPools,
    /// `GET /onchain/networks/{network}/tokens/{token_address}`
    OnchainToken,
    /// `GET /onchain/tokens/info_recently_updated`
    OnchainTokensRecentlyUpdated,
    /// `GET /onchain/networks/{network}/pools/{pool_address}/ohlcv/{timeframe}`
    OnchainPoolOhlcv,
    /// `GET /onchain/networks/{network}/pools/{pool_address}/trades`
    OnchainPoolTrades,
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Route key.
    pub endpoint: Endpoint,
    /// Snake-case accessor name.
    pub key: &'static str,
    /// Path template relative to the base URL.
    pub template: &'static str,
    /// Resource family.
    pub family: EndpointFamily,
}

const fn route(
    endpoint: Endpoint,
    key: &'static str,
    template: &'static str,
    family: EndpointFamily,
) -> Route {
    Route {
        endpoint,
        key,
        template,
        family,
    }
}

use Endpoint as E;
use EndpointFamily as F;

/// The full route table, in [`Endpoint`] declaration order.
pub const ROUTES: &[Route] = &[
    // Coins
    route(E::Ping, "ping", "/ping", F::Coins),
    route(E::SimplePrice, "simple_price", "/simple/price", F::Coins),
    route(E::SimpleTokenPrice, "simple_token_price", "/simple/token_price/{id}", F::Coins),
    route(E::SimpleSupportedVsCurrencies, "simple_supported_vs_currencies", "/simple/supported_vs_currencies", F::Coins),
    route(E::CoinsList, "coins_list", "/coins/list", F::Coins),
    route(E::CoinsMarkets, "coins_markets", "/coins/markets", F::Coins),
    route(E::Coin, "coins", "/coins/{id}", F::Coins),
    route(E::CoinTickers, "coins_tickers", "/coins/{id}/tickers", F::Coins),
    route(E::CoinHistory, "coins_history", "/coins/{id}/history", F::Coins),
    route(E::CoinMarketChart, "coins_market_chart", "/coins/{id}/market_chart", F::Coins),
    route(E::CoinMarketChartRange, "coins_market_chart_range", "/coins/{id}/market_chart/range", F::Coins),
    route(E::CoinOhlc, "coins_ohlc", "/coins/{id}/ohlc", F::Coins),
    route(E::CoinCategoriesList, "coins_categories_list", "/coins/categories/list", F::Coins),
    route(E::CoinCategories, "coins_categories", "/coins/categories", F::Coins),
    // NFTs
    route(E::NftsList, "nfts_list", "/nfts/list", F::Nfts),
    route(E::Nft, "nfts", "/nfts/{id}", F::Nfts),
    route(E::NftContract, "nfts_contract", "/nfts/{asset_platform_id}/contract/{contract_address}", F::Nfts),
    // Spot exchanges
    route(E::Exchanges, "exchanges", "/exchanges", F::ExchangesSpot),
    route(E::ExchangesList, "exchanges_list", "/exchanges/list", F::ExchangesSpot),
    route(E::Exchange, "exchanges_id", "/exchanges/{id}", F::ExchangesSpot),
    route(E::ExchangeTickers, "exchanges_tickers", "/exchanges/{id}/tickers", F::ExchangesSpot),
    route(E::ExchangeVolumeChart, "exchanges_volume_chart", "/exchanges/{id}/volume_chart", F::ExchangesSpot),
    // Derivatives
    route(E::Derivatives, "derivatives", "/derivatives", F::ExchangesDerivatives),
    route(E::DerivativesExchanges, "derivatives_exchanges", "/derivatives/exchanges", F::ExchangesDerivatives),
    route(E::DerivativesExchange, "derivatives_exchanges_id", "/derivatives/exchanges/{id}", F::ExchangesDerivatives),
    route(E::DerivativesExchangesList, "derivatives_exchanges_list", "/derivatives/exchanges/list", F::ExchangesDerivatives),
    // Treasury
    route(E::EntitiesList, "entities_list", "/entities/list", F::Treasury),
    route(E::PublicTreasuryEntityCoin, "public_treasury_entity_coin", "/{entity}/public_treasury/{coin_id}", F::Treasury),
    route(E::PublicTreasuryEntity, "public_treasury_entity", "/public_treasury/{entity_id}", F::Treasury),
    route(E::PublicTreasuryHoldingChart, "public_treasury_holding_chart", "/public_treasury/{entity_id}/{coin_id}/holding_chart", F::Treasury),
    route(E::PublicTreasuryTransactionHistory, "public_treasury_transaction_history", "/public_treasury/{entity_id}/transaction_history", F::Treasury),
    // Search
    route(E::Search, "search", "/search", F::Search),
    route(E::SearchTrending, "search_trending", "/search/trending", F::Search),
    route(E::AssetPlatforms, "asset_platforms", "/asset_platforms", F::Search),
    route(E::TokenLists, "token_lists", "/token_lists/{asset_platform_id}/all.json", F::Search),
    // On-chain
    route(E::OnchainNetworks, "onchain_networks", "/onchain/networks", F::Onchain),
    route(E::OnchainDexes, "onchain_networks_dexes", "/onchain/networks/{network}/dexes", F::Onchain),
    route(E::OnchainTokenInfo, "onchain_networks_token_info", "/onchain/networks/{network}/tokens/{token_address}/info", F::Onchain),
    route(E::OnchainPool, "onchain_networks_pools", "/onchain/networks/{network}/pools/{pool_address}", F::Onchain),
    route(E::OnchainPoolsMulti, "onchain_networks_pools_multi", "/onchain/networks/{network}/pools/multi/{pool_addresses}", F::Onchain),
    route(E::OnchainTrendingPools, "onchain_trending_pools", "/onchain/networks/trending_pools", F::Onchain),
    route(E::OnchainNetworkTrendingPools, "onchain_networks_trending_pools", "/onchain/networks/{network}/trending_pools", F::Onchain),
    route(E::OnchainTopPools, "onchain_networks_top_pools", "/onchain/networks/{network}/pools", F::Onchain),
    route(E::OnchainDexPools, "onchain_networks_dex_pools", "/onchain/networks/{network}/dexes/{dex}/pools", F::Onchain),
    route(E::OnchainNewPools, "onchain_new_pools", "/onchain/networks/new_pools", F::Onchain),
    route(E::OnchainNetworkNewPools, "onchain_networks_new_pools", "/onchain/networks/{network}/new_pools", F::Onchain),
    route(E::OnchainSearchPools, "onchain_search_pools", "/onchain/search/pools", F::Onchain),
    route(E::OnchainPoolInfo, "onchain_networks_pools_info", "/onchain/networks/{network}/pools/{pool_address}/info", F::Onchain),
    route(E::OnchainSimpleTokenPrice, "onchain_simple_token_price", "/onchain/simple/networks/{network}/token_price/{token_addresses}", F::Onchain),
    route(E::OnchainTokenPools, "onchain_networks_token_pools", "/onchain/networks/{network}/tokens/{token_address}/pools", F::Onchain),
    route(E::OnchainToken, "onchain_networks_token", "/onchain/networks/{network}/tokens/{token_address}", F::Onchain),
    route(E::OnchainTokensRecentlyUpdated, "onchain_tokens_recently_updated", "/onchain/tokens/info_recently_updated", F::Onchain),
    route(E::OnchainPoolOhlcv, "onchain_networks_pools_ohlcv", "/onchain/networks/{network}/pools/{pool_address}/ohlcv/{timeframe}", F::Onchain),
    route(E::OnchainPoolTrades, "onchain_networks_pools_trades", "/onchain/networks/{network}/pools/{pool_address}/trades", F::Onchain),
];

impl Endpoint {
    /// Iterate over every endpoint in table order.
    pub fn all() -> impl Iterator<Item = Endpoint> {
        ROUTES.iter().map(|r| r.endpoint)
    }

    /// Look an endpoint up by its accessor name (e.g. `"coins_tickers"`).
    pub fn from_key(key: &str) -> Option<Endpoint> {
        ROUTES.iter().find(|r| r.key == key).map(|r| r.endpoint)
    }

    /// Get the table row for this endpoint.
    pub fn route(self) -> &'static Route {
        &ROUTES[self as usize]
    }

    /// Path template, e.g. `/coins/{id}/tickers`.
    pub fn template(self) -> &'static str {
        self.route().template
    }

    /// Accessor name, e.g. `coins_tickers`.
    pub fn key(self) -> &'static str {
        self.route().key
    }

    /// Resource family.
    pub fn family(self) -> EndpointFamily {
        self.route().family
    }

    /// Number of path arguments the template takes.
    pub fn arity(self) -> usize {
        placeholder_count(self.template())
    }

    /// Query parameters documented for this endpoint.
    pub fn query_params(self) -> &'static [&'static str] {
        params::query_params_for(self.template()).unwrap_or(&[])
    }

    /// Render the path with exactly [`arity`](Self::arity) arguments.
    pub fn path(self, args: &[&str]) -> Result<String, CoinGeckoError> {
        let expected = self.arity();
        if args.len() != expected {
            return Err(CoinGeckoError::PathArity {
                template: self.template(),
                expected,
                got: args.len(),
            });
        }
        Ok(render_path(self.template(), args))
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.template())
    }
}

/// Byte ranges of the `{name}` placeholders in a template, in order.
///
/// A `{` without a closing `}` ends the scan; the rest is literal text.
fn placeholders(template: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        let open = pos + template[pos..].find('{')?;
        let close = open + template[open..].find('}')?;
        pos = close + 1;
        Some((open, close))
    })
}

/// Count `{name}` placeholders in a template.
pub fn placeholder_count(template: &str) -> usize {
    placeholders(template).count()
}

/// Substitute `args` into the `{name}` placeholders of `template`, in order.
///
/// Values are inserted verbatim, nothing is percent-encoded. Placeholders
/// without a matching argument are left as they are and surplus arguments
/// are ignored.
pub fn render_path(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut args = args.iter();
    let mut copied = 0;

    for (open, close) in placeholders(template) {
        out.push_str(&template[copied..open]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&template[open..=close]),
        }
        copied = close + 1;
    }
    out.push_str(&template[copied..]);
    out
}
