//! JSON-RPC client for balance and claim queries and raw transaction
//! submission.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use neo_primitives::chainhash::Hash;
use neo_script::Address;
use neo_transaction::Utxo;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::RpcError;
use crate::types::{Claims, JsonRpcRequest, JsonRpcResponse, RpcClaims, RpcConfig, RpcUtxo};

/// The node operations a transaction builder needs.
pub trait NeoRpc {
    /// Unspent outputs of `asset` owned by `address`.
    fn get_balance(
        &self,
        address: &Address,
        asset: &Hash,
    ) -> impl std::future::Future<Output = Result<Vec<Utxo>, RpcError>> + Send;

    /// Claimable GAS for `address`.
    fn get_claim(
        &self,
        address: &Address,
    ) -> impl std::future::Future<Output = Result<Claims, RpcError>> + Send;

    /// Submit a signed transaction. Returns the node's verdict.
    fn send_raw_transaction(
        &self,
        raw: &[u8],
    ) -> impl std::future::Future<Output = Result<bool, RpcError>> + Send;
}

/// HTTP client for a node's JSON-RPC interface.
#[derive(Debug, Clone)]
pub struct RpcClient {
    /// Client configuration.
    config: RpcConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
    /// Request id counter, shared between clones.
    next_id: Arc<AtomicU64>,
}

impl RpcClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RpcConfig) -> Self {
        let client = reqwest::Client::new();
        Self {
            config,
            client,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Perform one JSON-RPC call against `url` and decode its result.
    pub async fn call<T: DeserializeOwned>(
        &self,
        url: &str,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<T, RpcError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
        };
        debug!(method, id = request.id, url, "rpc request");

        let resp = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let response: JsonRpcResponse = resp.json().await?;

        if let Some(err) = response.error {
            warn!(method, code = err.code, message = %err.message, "rpc error");
            return Err(RpcError::Remote {
                code: err.code,
                message: err.message,
            });
        }

        let result = response
            .result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{} returned no result", method)))?;
        Ok(serde_json::from_value(result)?)
    }

    /// Fetch unspent outputs of `asset` owned by `address`.
    pub async fn get_balance_async(&self, address: &Address, asset: &Hash) -> Result<Vec<Utxo>, RpcError> {
        let utxos: Vec<RpcUtxo> = self
            .call(
                &self.config.extension_url,
                "getbalance",
                vec![json!(address.to_string()), json!(format!("0x{}", asset))],
            )
            .await?;
        debug!(address = %address, asset = %asset, count = utxos.len(), "fetched utxos");
        utxos.iter().map(Utxo::try_from).collect()
    }

    /// Fetch claimable GAS for `address`.
    pub async fn get_claim_async(&self, address: &Address) -> Result<Claims, RpcError> {
        let claims: RpcClaims = self
            .call(&self.config.extension_url, "getclaim", vec![json!(address.to_string())])
            .await?;
        debug!(address = %address, available = %claims.available, count = claims.claims.len(), "fetched claims");
        Claims::try_from(&claims)
    }

    /// Submit a signed transaction, hex-encoded as the node expects.
    pub async fn send_raw_transaction_async(&self, raw: &[u8]) -> Result<bool, RpcError> {
        self.call(&self.config.url, "sendrawtransaction", vec![json!(hex::encode(raw))])
            .await
    }
}

impl NeoRpc for RpcClient {
    async fn get_balance(&self, address: &Address, asset: &Hash) -> Result<Vec<Utxo>, RpcError> {
        self.get_balance_async(address, asset).await
    }

    async fn get_claim(&self, address: &Address) -> Result<Claims, RpcError> {
        self.get_claim_async(address).await
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<bool, RpcError> {
        self.send_raw_transaction_async(raw).await
    }
}
