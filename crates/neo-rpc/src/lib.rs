#![deny(missing_docs)]

//! # neo-rpc
//!
//! JSON-RPC client for fetching unspent outputs and claimable GAS, and for
//! submitting signed transactions.
//!
//! The client is async-first. It never interprets the node's protocol
//! beyond turning responses into the core types of `neo-transaction`.
//!
//! # Example
//!
//! ```no_run
//! use neo_rpc::{RpcClient, RpcConfig};
//!
//! let client = RpcClient::new(RpcConfig {
//!     url: "http://seed1.neo.org:10332".to_string(),
//!     ..Default::default()
//! });
//! ```

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{NeoRpc, RpcClient};
pub use error::RpcError;
pub use types::{Claims, RpcConfig};
