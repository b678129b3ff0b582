use kaiascan_client::{
    BlockRange, Endpoint, Error, KaiascanClient, Network, NetworkProfile, Paging, Request, network,
};
use serde_json::{Value, json};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serializes tests that flip the process-wide network selection.
static SELECTION: Mutex<()> = Mutex::new(());

fn client_for(server: &MockServer) -> KaiascanClient {
    let profile = NetworkProfile::custom(&server.uri(), "1001").unwrap();
    KaiascanClient::new(profile).unwrap()
}

fn envelope(code: i64, data: Value, msg: &str) -> Value {
    json!({"code": code, "data": data, "msg": msg})
}

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(envelope(0, data, "Success"))
}

async fn received_urls(server: &MockServer) -> Vec<url::Url> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|request| request.url)
        .collect()
}

#[tokio::test]
async fn test_get_fungible_token() -> kaiascan_client::Result<()> {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tokens"))
        .and(query_param("tokenAddress", "0x1234567890abcdef"))
        .and(header("content-type", "application/json"))
        .respond_with(ok(json!({
            "contractType": "ERC20",
            "name": "TestToken",
            "symbol": "TT",
            "decimal": 18,
            "totalSupply": 1000000,
            "totalTransfers": 500,
            "officialSite": "https://example.com",
            "burnAmount": 1000,
            "totalBurns": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server)
        .fungible_token("0x1234567890abcdef")
        .await?;

    assert_eq!(token.name, "TestToken");
    assert_eq!(token.symbol, "TT");
    assert_eq!(token.total_transfers, 500);
    log::info!("token: {token:?}");
    Ok(())
}

#[tokio::test]
async fn test_get_fungible_token_error() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tokens"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(1, json!({}), "Invalid token address")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fungible_token("0xInvalidAddress")
        .await
        .unwrap_err();

    let api = err.api_error().expect("API error");
    assert_eq!(api.code, 1);
    assert_eq!(api.message, "Invalid token address");
    assert!(!err.is_decode());
}

#[tokio::test]
async fn non_2xx_is_a_transport_error_even_with_an_envelope_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(envelope(0, json!({}), "Success")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).latest_block().await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).latest_block().await.unwrap_err();
    assert!(err.is_decode(), "{err:?}");
}

#[tokio::test]
async fn invalid_paging_never_reaches_the_network() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    for paging in [Paging::new(0, 20), Paging::new(1, 0), Paging::new(1, 2001)] {
        let err = client
            .account_token_balances("0xabc", paging)
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");

        let err = client
            .blocks(100, BlockRange::ALL, paging)
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
    }

    assert!(client.account_info("").await.unwrap_err().is_validation());
    assert!(
        client
            .contracts_info::<&str>(&[])
            .await
            .unwrap_err()
            .is_validation()
    );
    assert!(client.blocks_by_timestamp(0).await.unwrap_err().is_validation());
    assert!(client.transaction("..").await.unwrap_err().is_validation());
    assert!(
        client
            .account_key_histories(".", Paging::default())
            .await
            .unwrap_err()
            .is_validation()
    );

    assert!(received_urls(&server).await.is_empty());
}

#[tokio::test]
async fn valid_paging_is_sent_verbatim_and_absent_filters_are_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(json!([])))
        .mount(&server)
        .await;
    let client = client_for(&server);

    client
        .account_token_transfers("0xabc", Paging::new(1, 2000), None, BlockRange::ALL)
        .await
        .unwrap();
    client
        .account_nft_transfers(
            "0xabc",
            Paging::new(4, 1),
            Some("0xnft"),
            BlockRange::between(10, 20),
        )
        .await
        .unwrap();

    let urls = received_urls(&server).await;
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0].path(), "/api/v1/accounts/0xabc/token-transfers");
    assert_eq!(urls[0].query(), Some("page=1&size=2000"));
    assert_eq!(urls[1].path(), "/api/v1/accounts/0xabc/nft-transfers");
    assert_eq!(
        urls[1].query(),
        Some("page=4&size=1&contractAddress=0xnft&blockNumberStart=10&blockNumberEnd=20")
    );
}

#[tokio::test]
async fn endpoint_methods_hit_catalog_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(json!({})))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let page = Paging::new(2, 10);

    client.token_holders("0xt", page, Some("0xh")).await.unwrap();
    client.nft_item("0xn", "7").await.unwrap();
    client.nft_inventories("0xn", page, None).await.unwrap();
    client.contracts_info(&["0xa", "0xb"]).await.unwrap();
    client.latest_block_rewards(42).await.unwrap();
    client
        .block_transactions(42, Some("legacy"), page)
        .await
        .unwrap();
    client.blocks_by_timestamp(1_700_000_000).await.unwrap();
    client.transaction_status("0xhash").await.unwrap();
    client.transaction_receipt_status("0xhash").await.unwrap();
    client
        .account_transactions(
            "0xabc",
            page,
            BlockRange::from_block(5),
            None,
            &["from", "to"],
        )
        .await
        .unwrap();
    client
        .account_kip37_nft_balances("0xabc", page)
        .await
        .unwrap();

    let urls: Vec<String> = received_urls(&server)
        .await
        .iter()
        .map(|url| match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        })
        .collect();

    assert_eq!(
        urls,
        vec![
            "/api/v1/tokens/0xt/holders?page=2&size=10&holderAddress=0xh",
            "/api/v1/nfts?nftAddress=0xn&tokenId=7",
            "/api/v1/nfts/0xn/inventories?page=2&size=10",
            "/api/v1/contracts?contractAddresses=0xa%2C0xb",
            "/api/v1/blocks/latest/rewards?blockNumber=42",
            "/api/v1/blocks/42/transactions?type=legacy&page=2&size=10",
            "/api/v1/blocks/timestamps/1700000000",
            "/api/v1/transactions/0xhash/status",
            "/api/v1/transaction-receipts/status?transactionHash=0xhash",
            "/api/v1/accounts/0xabc/transactions?page=2&size=10&blockNumberStart=5&directions=from%2Cto",
            "/api/v1/accounts/0xabc/nft-balances/kip37?page=2&size=10",
        ]
    );
}

#[tokio::test]
async fn generic_fetch_decodes_into_caller_types() {
    #[derive(Debug, serde::Deserialize)]
    struct Latest {
        #[serde(rename = "blockNumber")]
        block_number: u64,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blocks/latest"))
        .respond_with(ok(json!({"blockNumber": 160_000_000u64, "hash": "0x01"})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let latest: Latest = client
        .fetch(Request::new(Endpoint::LatestBlock))
        .await
        .unwrap();
    assert_eq!(latest.block_number, 160_000_000);

    let envelope = client
        .fetch_envelope::<Value>(Request::new(Endpoint::LatestBlock))
        .await
        .unwrap();
    assert_eq!(envelope.code, 0);
    assert_eq!(envelope.message, "Success");
    assert_eq!(envelope.data["hash"], "0x01");
}

#[tokio::test]
async fn deadline_and_timeout_are_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(json!({})).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let deadline = tokio::time::Instant::now() + Duration::from_millis(100);
    let err = client_for(&server)
        .fetch_before::<Value>(Request::new(Endpoint::LatestBlock), deadline)
        .await
        .unwrap_err();
    match &err {
        Error::Transport(transport) => assert!(transport.is_timeout()),
        other => panic!("expected transport error, got {other:?}"),
    }

    let profile = NetworkProfile::custom(&server.uri(), "1001").unwrap();
    let client = KaiascanClient::with_timeout(profile, Duration::from_millis(100)).unwrap();
    let err = client.latest_block().await.unwrap_err();
    match &err {
        Error::Transport(transport) => assert!(transport.is_timeout(), "{transport:?}"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn clients_on_different_servers_run_concurrently() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(json!({"from": "first"})).set_delay(Duration::from_millis(200)))
        .mount(&first)
        .await;
    Mock::given(method("GET"))
        .respond_with(ok(json!({"from": "second"})))
        .mount(&second)
        .await;

    let slow = client_for(&first);
    let in_flight = tokio::spawn(async move { slow.latest_block().await });

    let fast = client_for(&second);
    assert_eq!(fast.latest_block().await.unwrap()["from"], "second");
    assert_eq!(in_flight.await.unwrap().unwrap()["from"], "first");

    assert_eq!(received_urls(&first).await.len(), 1);
    assert_eq!(received_urls(&second).await.len(), 1);
}

/// Stands in for `KaiascanClient::from_selected` with each network served by a mock.
fn client_for_selection(mainnet: &MockServer, kairos: &MockServer) -> KaiascanClient {
    let selected = network::selected();
    let server = match selected {
        Network::Mainnet => mainnet,
        Network::Kairos => kairos,
    };
    let profile = NetworkProfile::custom(&server.uri(), selected.chain_id()).unwrap();
    KaiascanClient::new(profile).unwrap()
}

#[tokio::test]
async fn switching_networks_redirects_later_calls_only() {
    let _selection = SELECTION.lock().unwrap_or_else(PoisonError::into_inner);
    let mainnet = MockServer::start().await;
    let kairos = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blocks/latest"))
        .respond_with(ok(json!({"from": "mainnet"})).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&mainnet)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blocks/latest"))
        .respond_with(ok(json!({"from": "kairos"})))
        .expect(1)
        .mount(&kairos)
        .await;

    network::configure(false);
    let before = client_for_selection(&mainnet, &kairos);
    assert_eq!(before.network().chain_id(), "8217");
    let in_flight = tokio::spawn(async move { before.latest_block().await });

    // Switch only once the first request has reached its server.
    for _ in 0..100 {
        if !received_urls(&mainnet).await.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(received_urls(&mainnet).await.len(), 1);

    network::configure(true);
    let after = client_for_selection(&mainnet, &kairos);
    assert_eq!(after.network().chain_id(), "1001");
    assert_eq!(after.latest_block().await.unwrap()["from"], "kairos");

    assert_eq!(in_flight.await.unwrap().unwrap()["from"], "mainnet");
    assert_eq!(received_urls(&mainnet).await.len(), 1);
    assert_eq!(received_urls(&kairos).await.len(), 1);

    network::configure(false);
}

#[test]
fn selected_network_applies_to_clients_built_afterwards() {
    let _selection = SELECTION.lock().unwrap_or_else(PoisonError::into_inner);
    network::configure(true);
    assert_eq!(network::selected(), Network::Kairos);
    let testnet = KaiascanClient::from_selected().unwrap();

    network::configure(false);
    assert_eq!(network::selected(), Network::Mainnet);
    let mainnet = KaiascanClient::from_selected().unwrap();

    assert_eq!(testnet.network().chain_id(), "1001");
    assert_eq!(
        testnet.network().base_url().as_str(),
        "https://kairos-oapi.kaiascan.io/"
    );
    assert_eq!(mainnet.network().chain_id(), "8217");

    let request = Request::new(Endpoint::LatestBlock);
    assert!(
        testnet
            .url_for(&request)
            .unwrap()
            .as_str()
            .starts_with("https://kairos-oapi.kaiascan.io/")
    );
    assert!(
        mainnet
            .url_for(&request)
            .unwrap()
            .as_str()
            .starts_with("https://mainnet-oapi.kaiascan.io/")
    );
}
