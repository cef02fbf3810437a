//! Tests for the RPC client.

use neo_primitives::chainhash::Hash;
use neo_primitives::Fixed8;
use neo_script::Address;
use neo_transaction::asset::{GAS_ASSET_ID, NEO_ASSET_ID};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::{NeoRpc, RpcClient};
use crate::error::RpcError;
use crate::types::RpcConfig;

const ADDRESS: &str = "AMpupnF6QweQXLfCtF4dR45FDdKbTXkLsr";
const NEO: &str = "0xc56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b";
const GAS: &str = "0x602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7";

fn test_config(base_url: &str) -> RpcConfig {
    RpcConfig {
        url: format!("{}/node", base_url),
        extension_url: format!("{}/ext", base_url),
    }
}

fn address() -> Address {
    Address::from_string(ADDRESS).unwrap()
}

fn utxo_json(txid: &str, n: u16, asset: &str, value: &str) -> serde_json::Value {
    serde_json::json!({
        "txid": txid,
        "vout": { "Address": ADDRESS, "Asset": asset, "N": n, "Value": value },
        "createTime": "2018-01-01T00:00:00Z",
        "block": 1_000_000
    })
}

#[tokio::test]
async fn test_get_balance() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ext"))
        .and(body_partial_json(serde_json::json!({
            "jsonrpc": "2.0",
            "method": "getbalance",
            "params": [ADDRESS, NEO]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [
                utxo_json("0x9e7cbb92289553ee1320d58bb2d274a199285ed9ec152a84735badd69637c764", 0, NEO, "5"),
                utxo_json("0101010101010101010101010101010101010101010101010101010101010101", 3, NEO, "2"),
            ]
        })))
        .mount(&server)
        .await;

    let client = RpcClient::new(test_config(&server.uri()));
    let utxos = client.get_balance(&address(), &NEO_ASSET_ID).await.unwrap();

    assert_eq!(utxos.len(), 2);
    assert_eq!(
        utxos[0].tx_id,
        Hash::from_hex("9e7cbb92289553ee1320d58bb2d274a199285ed9ec152a84735badd69637c764").unwrap()
    );
    assert_eq!(utxos[0].asset, NEO_ASSET_ID);
    assert_eq!(utxos[0].value, "5".parse::<Fixed8>().unwrap());
    assert_eq!(utxos[1].index, 3);
    assert_eq!(utxos[1].address, address());
}

#[tokio::test]
async fn test_get_claim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ext"))
        .and(body_partial_json(serde_json::json!({ "method": "getclaim", "params": [ADDRESS] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "available": "0.00013874",
                "unavailable": "0.1",
                "claims": [utxo_json("0202020202020202020202020202020202020202020202020202020202020202", 0, NEO, "10")]
            }
        })))
        .mount(&server)
        .await;

    let client = RpcClient::new(test_config(&server.uri()));
    let claims = client.get_claim(&address()).await.unwrap();

    assert_eq!(claims.available, Fixed8::from_raw(13874));
    assert_eq!(claims.claims.len(), 1);
    assert_eq!(claims.claims[0].tx_id, Hash::new([2; 32]));
}

#[tokio::test]
async fn test_send_raw_transaction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/node"))
        .and(body_partial_json(serde_json::json!({
            "method": "sendrawtransaction",
            "params": ["80000001"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": true
        })))
        .mount(&server)
        .await;

    let client = RpcClient::new(test_config(&server.uri()));
    assert!(client.send_raw_transaction(&[0x80, 0x00, 0x00, 0x01]).await.unwrap());
}

#[tokio::test]
async fn test_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/node"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -501, "message": "Block or transaction already exists" }
        })))
        .mount(&server)
        .await;

    let client = RpcClient::new(test_config(&server.uri()));
    let err = client.send_raw_transaction(&[0x80]).await.unwrap_err();

    match err {
        RpcError::Remote { code, message } => {
            assert_eq!(code, -501);
            assert!(message.contains("already exists"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ext"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = RpcClient::new(test_config(&server.uri()));
    let result = client.get_claim(&address()).await;
    assert!(matches!(result, Err(RpcError::HttpError(_))));
}

#[tokio::test]
async fn test_malformed_utxo_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ext"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [utxo_json("not-a-hash", 0, GAS, "1")]
        })))
        .mount(&server)
        .await;

    let client = RpcClient::new(test_config(&server.uri()));
    let result = client.get_balance(&address(), &GAS_ASSET_ID).await;
    assert!(matches!(result, Err(RpcError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_wrong_result_shape_is_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/node"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "yes"
        })))
        .mount(&server)
        .await;

    let client = RpcClient::new(test_config(&server.uri()));
    let result = client.send_raw_transaction(&[0x80]).await;
    assert!(matches!(result, Err(RpcError::SerializationError(_))));
}

#[test]
fn test_config_defaults() {
    let config = RpcConfig::default();
    assert_eq!(config.url, "http://127.0.0.1:10332");
    assert_eq!(config.extension_url, config.url);
}
