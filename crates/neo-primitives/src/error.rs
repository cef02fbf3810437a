/// Unified error type for all primitives operations.
///
/// Covers errors from wire decoding, Base58Check text encodings, fixed-point
/// parsing, and P-256 key handling.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    /// Truncated or malformed wire data. Always fatal to the current decode.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Bad Base58Check checksum, unexpected version byte, or unknown suffix.
    #[error("checksum error: {0}")]
    Checksum(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("invalid WIF format: {0}")]
    InvalidWif(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl PrimitivesError {
    /// Error for a read past the end of the buffer.
    pub fn truncated() -> Self {
        PrimitivesError::Encoding("truncated".to_string())
    }
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}

impl From<p256::ecdsa::Error> for PrimitivesError {
    fn from(e: p256::ecdsa::Error) -> Self {
        PrimitivesError::InvalidPublicKey(e.to_string())
    }
}
