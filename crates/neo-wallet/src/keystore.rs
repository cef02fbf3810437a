//! Interface for encrypted keystore formats.
//!
//! The file formats themselves (scrypt/AES JSON keystores, NEP-2) live
//! outside this crate; anything that can turn stored bytes and a
//! passphrase back into a `Key` plugs in here.

use crate::key::Key;
use crate::WalletError;

/// A keystore format.
pub trait KeyStore {
    /// Decrypt `data` with `passphrase`.
    ///
    /// # Returns
    /// The stored key, `WrongPassphrase` if the passphrase does not open
    /// it, or `InvalidKeyStore` if `data` is not in this format.
    fn read_key_store(&self, data: &[u8], passphrase: &str) -> Result<Key, WalletError>;
}
