//! A signing key bundled with the address it controls.

use neo_primitives::ec::PrivateKey;
use neo_script::Address;

use crate::WalletError;

/// A private key and its single-signature address.
#[derive(Clone, Debug)]
pub struct Key {
    pub private_key: PrivateKey,
    pub address: Address,
}

impl Key {
    /// Generate a fresh random key.
    pub fn new() -> Self {
        Self::from(PrivateKey::new())
    }

    /// Import a key from its WIF text.
    pub fn from_wif(wif: &str) -> Result<Self, WalletError> {
        Ok(Self::from(PrivateKey::from_wif(wif)?))
    }

    /// Import a key from a raw 32-byte scalar.
    pub fn from_private_key(bytes: &[u8]) -> Result<Self, WalletError> {
        Ok(Self::from(PrivateKey::from_bytes(bytes)?))
    }

    pub fn to_wif(&self) -> String {
        self.private_key.to_wif()
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.private_key.to_bytes()
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PrivateKey> for Key {
    fn from(private_key: PrivateKey) -> Self {
        let address = Address::from_public_key(&private_key.pub_key());
        Key { private_key, address }
    }
}
