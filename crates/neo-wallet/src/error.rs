/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("primitives error: {0}")]
    Primitives(#[from] neo_primitives::PrimitivesError),
    #[error("invalid keystore: {0}")]
    InvalidKeyStore(String),
    #[error("wrong passphrase")]
    WrongPassphrase,
}
