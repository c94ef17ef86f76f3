//! Named accessors for every CoinGecko REST route.

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::Endpoint;

/// The endpoint catalog, bound to one [`CoinGeckoClient`].
///
/// Each accessor selects its route on the client (clearing query parameters)
/// and hands the client back so the chain can continue with parameters,
/// headers and execution. Path arguments are inserted verbatim; callers must
/// percent-encode values containing `/`, `?` or `#` themselves.
///
/// ```rust
/// use coingecko_api_client::rest::CoinGeckoClient;
///
/// let mut client = CoinGeckoClient::new();
/// client.endpoints().onchain_networks_pools("eth", "0xabc");
/// assert_eq!(client.endpoint(), Some("/onchain/networks/eth/pools/0xabc"));
/// ```
pub struct Endpoints<'a> {
    client: &'a mut CoinGeckoClient,
}

impl<'a> Endpoints<'a> {
    pub(crate) fn new(client: &'a mut CoinGeckoClient) -> Self {
        Self { client }
    }

    /// Select any catalog endpoint by key, checking the number of path arguments.
    pub fn select(self, endpoint: Endpoint, args: &[&str]) -> Result<&'a mut CoinGeckoClient, CoinGeckoError> {
        self.client.select(endpoint, args)
    }

    fn route(self, endpoint: Endpoint, args: &[&str]) -> &'a mut CoinGeckoClient {
        self.client.select_endpoint(endpoint.template(), args)
    }

    // ========== Coins ==========
    /// `GET /ping`
    pub fn ping(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::Ping, &[])
    }

    /// `GET /simple/price`
    pub fn simple_price(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::SimplePrice, &[])
    }

    /// `GET /simple/token_price/{id}`
    pub fn simple_token_price(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::SimpleTokenPrice, &[id])
    }

    /// `GET /simple/supported_vs_currencies`
    pub fn simple_supported_vs_currencies(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::SimpleSupportedVsCurrencies, &[])
    }

    /// `GET /coins/list`
    pub fn coins_list(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinsList, &[])
    }

    /// `GET /coins/markets`
    pub fn coins_markets(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinsMarkets, &[])
    }

    /// `GET /coins/{id}`
    pub fn coins(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::Coin, &[id])
    }

    /// `GET /coins/{id}/tickers`
    pub fn coins_tickers(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinTickers, &[id])
    }

    /// `GET /coins/{id}/history`
    pub fn coins_history(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinHistory, &[id])
    }

    /// `GET /coins/{id}/market_chart`
    pub fn coins_market_chart(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinMarketChart, &[id])
    }

    /// `GET /coins/{id}/market_chart/range`
    pub fn coins_market_chart_range(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinMarketChartRange, &[id])
    }

    /// `GET /coins/{id}/ohlc`
    pub fn coins_ohlc(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinOhlc, &[id])
    }

    /// `GET /coins/categories/list`
    pub fn coins_categories_list(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinCategoriesList, &[])
    }

    /// `GET /coins/categories`
    pub fn coins_categories(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::CoinCategories, &[])
    }

    // ========== NFTs ==========
    /// `GET /nfts/list`
    pub fn nfts_list(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::NftsList, &[])
    }

    /// `GET /nfts/{id}`
    pub fn nfts(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::Nft, &[id])
    }

    /// `GET /nfts/{asset_platform_id}/contract/{contract_address}`
    pub fn nfts_contract(self, asset_platform_id: &str, contract_address: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::NftContract, &[asset_platform_id, contract_address])
    }

    // ========== Spot exchanges ==========
    /// `GET /exchanges`
    pub fn exchanges(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::Exchanges, &[])
    }

    /// `GET /exchanges/list`
    pub fn exchanges_list(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::ExchangesList, &[])
    }

    /// `GET /exchanges/{id}`
    pub fn exchanges_id(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::Exchange, &[id])
    }

    /// `GET /exchanges/{id}/tickers`
    pub fn exchanges_tickers(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::ExchangeTickers, &[id])
    }

    /// `GET /exchanges/{id}/volume_chart`
    pub fn exchanges_volume_chart(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::ExchangeVolumeChart, &[id])
    }

    // ========== Derivatives ==========
    /// `GET /derivatives`
    pub fn derivatives(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::Derivatives, &[])
    }

    /// `GET /derivatives/exchanges`
    pub fn derivatives_exchanges(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::DerivativesExchanges, &[])
    }

    /// `GET /derivatives/exchanges/{id}`
    pub fn derivatives_exchanges_id(self, id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::DerivativesExchange, &[id])
    }

    /// `GET /derivatives/exchanges/list`
    pub fn derivatives_exchanges_list(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::DerivativesExchangesList, &[])
    }

    // ========== Treasury ==========
    /// `GET /entities/list`
    pub fn entities_list(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::EntitiesList, &[])
    }

    /// `GET /{entity}/public_treasury/{coin_id}`
    pub fn public_treasury_entity_coin(self, entity: &str, coin_id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::PublicTreasuryEntityCoin, &[entity, coin_id])
    }

    /// `GET /public_treasury/{entity_id}`
    pub fn public_treasury_entity(self, entity_id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::PublicTreasuryEntity, &[entity_id])
    }

    /// `GET /public_treasury/{entity_id}/{coin_id}/holding_chart`
    pub fn public_treasury_holding_chart(self, entity_id: &str, coin_id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::PublicTreasuryHoldingChart, &[entity_id, coin_id])
    }

    /// `GET /public_treasury/{entity_id}/transaction_history`
    pub fn public_treasury_transaction_history(self, entity_id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::PublicTreasuryTransactionHistory, &[entity_id])
    }

    // ========== Search ==========
    /// `GET /search`
    pub fn search(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::Search, &[])
    }

    /// `GET /search/trending`
    pub fn search_trending(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::SearchTrending, &[])
    }

    /// `GET /asset_platforms`
    pub fn asset_platforms(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::AssetPlatforms, &[])
    }

    /// `GET /token_lists/{asset_platform_id}/all.json`
    pub fn token_lists(self, asset_platform_id: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::TokenLists, &[asset_platform_id])
    }

    // ========== On-chain ==========
    /// `GET /onchain/networks`
    pub fn onchain_networks(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainNetworks, &[])
    }

    /// `GET /onchain/networks/{network}/dexes`
    pub fn onchain_networks_dexes(self, network: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainDexes, &[network])
    }

    /// `GET /onchain/networks/{network}/tokens/{token_address}/info`
    pub fn onchain_networks_token_info(self, network: &str, token_address: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainTokenInfo, &[network, token_address])
    }

    /// `GET /onchain/networks/{network}/pools/{pool_address}`
    pub fn onchain_networks_pools(self, network: &str, pool_address: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainPool, &[network, pool_address])
    }

    /// `GET /onchain/networks/{network}/pools/multi/{pool_addresses}`
    pub fn onchain_networks_pools_multi(self, network: &str, pool_addresses: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainPoolsMulti, &[network, pool_addresses])
    }

    /// `GET /onchain/networks/trending_pools`
    pub fn onchain_trending_pools(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainTrendingPools, &[])
    }

    /// `GET /onchain/networks/{network}/trending_pools`
    pub fn onchain_networks_trending_pools(self, network: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainNetworkTrendingPools, &[network])
    }

    /// `GET /onchain/networks/{network}/pools`
    pub fn onchain_networks_top_pools(self, network: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainTopPools, &[network])
    }

    /// `GET /onchain/networks/{network}/dexes/{dex}/pools`
    pub fn onchain_networks_dex_pools(self, network: &str, dex: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainDexPools, &[network, dex])
    }

    /// `GET /onchain/networks/new_pools`
    pub fn onchain_new_pools(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainNewPools, &[])
    }

    /// `GET /onchain/networks/{network}/new_pools`
    pub fn onchain_networks_new_pools(self, network: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainNetworkNewPools, &[network])
    }

    /// `GET /onchain/search/pools`
    pub fn onchain_search_pools(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainSearchPools, &[])
    }

    /// `GET /onchain/networks/{network}/pools/{pool_address}/info`
    pub fn onchain_networks_pools_info(self, network: &str, pool_address: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainPoolInfo, &[network, pool_address])
    }

    /// `GET /onchain/simple/networks/{network}/token_price/{token_addresses}`
    pub fn onchain_simple_token_price(self, network: &str, token_addresses: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainSimpleTokenPrice, &[network, token_addresses])
    }

    /// `GET /onchain/networks/{network}/tokens/{token_address}/pools`
    pub fn onchain_networks_token_pools(self, network: &str, token_address: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainTokenPools, &[network, token_address])
    }

    /// `GET /onchain/networks/{network}/tokens/{token_address}`
    pub fn onchain_networks_token(self, network: &str, token_address: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainToken, &[network, token_address])
    }

    /// `GET /onchain/tokens/info_recently_updated`
    pub fn onchain_tokens_recently_updated(self) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainTokensRecentlyUpdated, &[])
    }

    /// `GET /onchain/networks/{network}/pools/{pool_address}/ohlcv/{timeframe}`
    pub fn onchain_networks_pools_ohlcv(self, network: &str, pool_address: &str, timeframe: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainPoolOhlcv, &[network, pool_address, timeframe])
    }

    /// `GET /onchain/networks/{network}/pools/{pool_address}/trades`
    pub fn onchain_networks_pools_trades(self, network: &str, pool_address: &str) -> &'a mut CoinGeckoClient {
        self.route(Endpoint::OnchainPoolTrades, &[network, pool_address])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_returns_client_for_chaining() {
        let mut client = CoinGeckoClient::new();
        client
            .endpoints()
            .coins_market_chart("bitcoin")
            .with_params([("vs_currency", "usd"), ("days", "7")]);

        assert_eq!(client.endpoint(), Some("/coins/bitcoin/market_chart"));
        assert_eq!(client.query_params().len(), 2);
    }

    #[test]
    fn test_accessor_clears_params() {
        let mut client = CoinGeckoClient::new();
        client.endpoints().search().with_params([("query", "eth")]);
        client.endpoints().search_trending();
        assert!(client.query_params().is_empty());
    }

    #[test]
    fn test_multi_argument_accessors() {
        let mut client = CoinGeckoClient::new();

        client.endpoints().public_treasury_holding_chart("strategy", "bitcoin");
        assert_eq!(client.endpoint(), Some("/public_treasury/strategy/bitcoin/holding_chart"));

        client.endpoints().onchain_networks_pools_ohlcv("solana", "pool1", "hour");
        assert_eq!(client.endpoint(), Some("/onchain/networks/solana/pools/pool1/ohlcv/hour"));

        client.endpoints().nfts_contract("ethereum", "0xbc4c");
        assert_eq!(client.endpoint(), Some("/nfts/ethereum/contract/0xbc4c"));

        client.endpoints().token_lists("ethereum");
        assert_eq!(client.endpoint(), Some("/token_lists/ethereum/all.json"));
    }

    #[test]
    fn test_coins_ohlc_takes_coin_id() {
        let mut client = CoinGeckoClient::new();
        client.endpoints().coins_ohlc("bitcoin");
        assert_eq!(client.endpoint(), Some("/coins/bitcoin/ohlc"));
    }

    #[test]
    fn test_select_by_key() {
        let mut client = CoinGeckoClient::new();
        let endpoint = Endpoint::from_key("exchanges_tickers").unwrap();
        client.endpoints().select(endpoint, &["binance"]).unwrap();
        assert_eq!(client.endpoint(), Some("/exchanges/binance/tickers"));

        assert!(client.endpoints().select(endpoint, &["a", "b"]).is_err());
    }
}
