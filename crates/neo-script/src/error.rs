/// Error types for script operations.
///
/// Covers script decoding, push encoding, script hash and address parsing.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Generic invalid script error.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// Invalid opcode data encountered during ASM parsing.
    #[error("invalid opcode data")]
    InvalidOpcodeData,

    /// Not enough data in script to complete a push operation.
    #[error("not enough data")]
    DataTooSmall,

    /// Push data exceeds maximum allowed size.
    #[error("data too big")]
    DataTooBig,

    /// Script is not `PUSHBYTES33 <key> CHECKSIG`.
    #[error("not a single-signature verification script")]
    NotSignatureContract,

    #[error("invalid script hash: {0}")]
    InvalidScriptHash(String),

    /// Address decoded to a payload that is not a 20-byte script hash.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] neo_primitives::PrimitivesError),
}
