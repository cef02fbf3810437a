//! Error types for RPC operations.

/// Errors that can occur when talking to a node.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The node answered with a JSON-RPC error object.
    #[error("rpc error ({code}): {message}")]
    Remote {
        /// The JSON-RPC error code.
        code: i64,
        /// Human-readable error message.
        message: String,
    },

    /// The response was well-formed JSON but not what the method returns.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
