//! RPC data types: configuration, JSON-RPC envelopes, and the node's
//! UTXO and claim shapes.

use neo_primitives::chainhash::Hash;
use neo_primitives::Fixed8;
use neo_script::Address;
use neo_transaction::Utxo;
use serde::{Deserialize, Serialize};

use crate::error::RpcError;

/// Configuration for an [`RpcClient`](crate::RpcClient).
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Node endpoint, used for `sendrawtransaction`.
    pub url: String,
    /// Endpoint serving the UTXO extension methods (`getbalance`,
    /// `getclaim`). Often the same host as `url`.
    pub extension_url: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:10332".to_string(),
            extension_url: "http://127.0.0.1:10332".to_string(),
        }
    }
}

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: Vec<serde_json::Value>,
    pub id: u64,
}

/// A JSON-RPC 2.0 response. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// The error object of a failed call.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JsonRpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// An unspent output as the extension endpoint reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcUtxo {
    /// Id of the creating transaction, display hex with optional `0x`.
    pub txid: String,
    /// The output itself.
    pub vout: RpcVout,
    /// Unclaimed GAS generated by this output, if reported.
    #[serde(default)]
    pub gas: Option<String>,
    /// Height of the block that created the output.
    #[serde(default)]
    pub block: Option<u64>,
}

/// The output part of an [`RpcUtxo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcVout {
    /// Owning address.
    #[serde(rename = "Address")]
    pub address: String,
    /// Asset id, display hex with optional `0x`.
    #[serde(rename = "Asset")]
    pub asset: String,
    /// Output index.
    #[serde(rename = "N")]
    pub n: u16,
    /// Decimal amount.
    #[serde(rename = "Value")]
    pub value: String,
}

/// The `getclaim` result as the node reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcClaims {
    /// Claimable GAS as a decimal string.
    pub available: String,
    /// GAS generated by still-unspent outputs, not yet claimable.
    #[serde(default)]
    pub unavailable: Option<String>,
    /// The spent outputs that can be claimed.
    #[serde(default)]
    pub claims: Vec<RpcUtxo>,
}

/// Claimable GAS for an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Total GAS the claims yield.
    pub available: Fixed8,
    /// The outputs to claim.
    pub claims: Vec<Utxo>,
}

impl TryFrom<&RpcUtxo> for Utxo {
    type Error = RpcError;

    fn try_from(u: &RpcUtxo) -> Result<Self, Self::Error> {
        Ok(Utxo {
            tx_id: parse_hash("txid", &u.txid)?,
            index: u.vout.n,
            asset: parse_hash("asset", &u.vout.asset)?,
            value: parse_amount("value", &u.vout.value)?,
            address: Address::from_string(&u.vout.address)
                .map_err(|e| RpcError::InvalidResponse(format!("address {}: {}", u.vout.address, e)))?,
        })
    }
}

impl TryFrom<&RpcClaims> for Claims {
    type Error = RpcError;

    fn try_from(c: &RpcClaims) -> Result<Self, Self::Error> {
        Ok(Claims {
            available: parse_amount("available", &c.available)?,
            claims: c.claims.iter().map(Utxo::try_from).collect::<Result<_, _>>()?,
        })
    }
}

fn parse_hash(field: &str, s: &str) -> Result<Hash, RpcError> {
    Hash::from_hex(s).map_err(|e| RpcError::InvalidResponse(format!("{} {}: {}", field, s, e)))
}

fn parse_amount(field: &str, s: &str) -> Result<Fixed8, RpcError> {
    s.parse()
        .map_err(|e| RpcError::InvalidResponse(format!("{} {}: {}", field, s, e)))
}
