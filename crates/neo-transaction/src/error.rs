use neo_primitives::chainhash::Hash;
use neo_primitives::Fixed8;

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction structure is invalid (e.g. a contract with no inputs).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    /// Signing failed or a witness does not verify.
    #[error("signing error: {0}")]
    Signing(String),
    /// An error occurred during binary/hex serialization or deserialization.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Coin selection could not cover the required amount of an asset.
    #[error("insufficient funds for asset {asset}: required {required}, available {available}")]
    InsufficientFunds {
        asset: Hash,
        required: Fixed8,
        available: Fixed8,
    },
    /// The transaction already carries witnesses and can no longer be changed.
    #[error("transaction is already signed")]
    AlreadySigned,
    /// An underlying script error (forwarded from `neo-script`).
    #[error("script error: {0}")]
    Script(#[from] neo_script::ScriptError),
    /// An underlying primitives error (forwarded from `neo-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] neo_primitives::PrimitivesError),
}

impl TransactionError {
    /// Wrap a wire decoding failure with the field being read.
    pub(crate) fn reading(field: &str, err: neo_primitives::PrimitivesError) -> Self {
        TransactionError::Serialization(format!("reading {}: {}", field, err))
    }
}
