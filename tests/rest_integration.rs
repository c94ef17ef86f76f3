use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Deserialize;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coingecko_api_client::error::{CoinGeckoError, FailureKind, StatusClass};
use coingecko_api_client::rest::{CoinGeckoClient, DiagnosticSink};

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<(FailureKind, String)>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<(FailureKind, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, error: &CoinGeckoError, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((error.kind(), message.to_string()));
    }
}

fn build_client(server: &MockServer) -> CoinGeckoClient {
    CoinGeckoClient::builder().base_url(server.uri()).build()
}

fn build_recording_client(server: &MockServer) -> (CoinGeckoClient, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let client = CoinGeckoClient::builder()
        .base_url(server.uri())
        .api_key("CG-test-key")
        .diagnostics(sink.clone())
        .build();
    (client, sink)
}

#[tokio::test]
async fn test_simple_price_end_to_end() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "bitcoin": { "usd": 50000 } });

    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .and(query_param("ids", "bitcoin,ethereum"))
        .and(query_param("vs_currencies", "usd"))
        .and(header("x-cg-demo-api-key", "CG-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (mut client, sink) = build_recording_client(&server);
    let result = client
        .endpoints()
        .simple_price()
        .with_params([("ids", "bitcoin,ethereum"), ("vs_currencies", "usd")])
        .execute()
        .await;

    assert_eq!(result, Some(response));
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn test_body_returned_unchanged() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "id": "bitcoin",
        "symbol": "btc",
        "market_data": { "current_price": { "usd": 64123.45, "eur": 59000.1 } },
        "categories": ["Cryptocurrency", "Layer 1 (L1)"],
        "genesis_date": null
    });

    Mock::given(method("GET"))
        .and(path("/coins/bitcoin"))
        .and(query_param("localization", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let mut client = build_client(&server);
    let body = client
        .endpoints()
        .coins("bitcoin")
        .with_params([("localization", false)])
        .try_execute()
        .await
        .unwrap();

    assert_eq!(body, response);
}

#[tokio::test]
async fn test_missing_endpoint_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, sink) = build_recording_client(&server);
    assert_eq!(client.execute().await, None);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, FailureKind::Precondition);
    assert_eq!(
        events[0].1,
        "Please ensure that endpoint, params, and headers are set before making a request."
    );

    let err = client.try_execute().await.unwrap_err();
    assert!(matches!(err, CoinGeckoError::MissingEndpoint));
}

#[tokio::test]
async fn test_status_failures_classified() {
    let cases = [
        (429, StatusClass::RateLimited, "Rate limit exceeded. Please try again later.", "Error 429, Rate limit exceeded. Please try again later."),
        (401, StatusClass::Unauthorized, "Unauthorized access. Please check if you have a valid API key.", "Error 401, Unauthorized access. Please check your API key."),
        (404, StatusClass::NotFound, "Endpoint not found. Please enter a valid endpoint URL.", "Error 404, Endpoint not found. Please check the endpoint URL."),
        (403, StatusClass::Forbidden, "Forbidden access. You are restricted from accessing this resource.", "Error 403, Forbidden access. You do not have permission to access this resource."),
        (500, StatusClass::Other(500), "An error occurred while processing your request.", "HTTP error occurred: 500"),
    ];

    for (status, class, terse, verbose) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/invalid_coin_xyz"))
            .respond_with(ResponseTemplate::new(status).set_body_json(
                serde_json::json!({ "error": "something went wrong" }),
            ))
            .mount(&server)
            .await;

        let (mut client, sink) = build_recording_client(&server);
        client.endpoints().coins("invalid_coin_xyz");

        assert_eq!(client.execute().await, None, "status {status}");
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, FailureKind::HttpStatus(class));
        assert_eq!(events[0].1, terse);

        let err = client.try_execute().await.unwrap_err();
        assert_eq!(err.status(), Some(status));
        assert!(err.diagnostic(true).starts_with(verbose), "{}", err.diagnostic(true));
    }
}

#[tokio::test]
async fn test_headers_persist_across_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("x-request-source", "tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "gecko_says": "(V3) To the Moon!" }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/trending"))
        .and(header("x-request-source", "tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "coins": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = build_client(&server);
    client
        .endpoints()
        .ping()
        .with_headers([("x-request-source", "tests")]);
    assert!(client.execute().await.is_some());

    let trending = client.endpoints().search_trending().execute().await;
    assert_eq!(trending, Some(serde_json::json!({ "coins": [] })));
}

#[tokio::test]
async fn test_custom_header_overrides_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("x-cg-demo-api-key", "CG-override"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let (mut client, _sink) = build_recording_client(&server);
    let result = client
        .endpoints()
        .ping()
        .with_headers([("x-cg-demo-api-key", "CG-override")])
        .try_execute()
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_invalid_json_is_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let (mut client, sink) = build_recording_client(&server);
    assert_eq!(client.endpoints().ping().execute().await, None);
    assert_eq!(
        sink.events(),
        vec![(
            FailureKind::Transport,
            "An error occurred while making the request. Please check your network connection and try again."
                .to_string()
        )]
    );

    let err = client.try_execute().await.unwrap_err();
    assert!(matches!(err, CoinGeckoError::Json(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let sink = Arc::new(RecordingSink::default());
    let mut client = CoinGeckoClient::builder()
        .base_url("http://127.0.0.1:1")
        .diagnostics(sink.clone())
        .build();

    assert_eq!(client.endpoints().ping().execute().await, None);
    assert_eq!(sink.events()[0].0, FailureKind::Transport);
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut client = build_client(&server);
    let err = client
        .endpoints()
        .ping()
        .with_timeout(Duration::from_millis(50))
        .try_execute()
        .await
        .unwrap_err();

    assert!(matches!(err, CoinGeckoError::Timeout), "{err:?}");
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn test_typed_response() {
    #[derive(Debug, Deserialize)]
    struct Ping {
        gecko_says: String,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "gecko_says": "(V3) To the Moon!" }),
        ))
        .mount(&server)
        .await;

    let mut client = build_client(&server);
    let ping: Ping = client.endpoints().ping().try_execute_as().await.unwrap();
    assert_eq!(ping.gecko_says, "(V3) To the Moon!");
}

#[tokio::test]
async fn test_onchain_path_and_query() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "data": { "attributes": { "ohlcv_list": [] } } });

    Mock::given(method("GET"))
        .and(path("/onchain/networks/eth/pools/0xpool/ohlcv/day"))
        .and(query_param("from", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let mut client = build_client(&server);
    let body = client
        .endpoints()
        .onchain_networks_pools_ohlcv("eth", "0xpool", "day")
        .with_params([("from", 1_700_000_000u64)])
        .execute()
        .await;

    assert_eq!(body, Some(response));
}

#[tokio::test]
async fn test_retries_disabled_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = build_client(&server);
    let err = client.endpoints().ping().try_execute().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_retries_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = CoinGeckoClient::builder()
        .base_url(server.uri())
        .enable_retries(true)
        .retry_attempts(2)
        .retry_delay(Duration::from_millis(10))
        .build();

    let body = client.endpoints().ping().try_execute().await.unwrap();
    assert_eq!(body, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn test_enforced_rate_limit_allows_within_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = CoinGeckoClient::builder()
        .base_url(server.uri())
        .rate_limit_per_minute(2)
        .enforce_rate_limit(true)
        .build();

    client.endpoints().ping();
    assert!(client.try_execute().await.is_ok());
    assert!(client.try_execute().await.is_ok());
}
