//! P-256 private key with WIF encoding.
//!
//! Wraps the p256 signing key and adds WIF import/export and message
//! signing with the SHA-256 prehash the network verifies against.

use p256::ecdsa::signature::hazmat::PrehashSigner;
use p256::ecdsa::SigningKey;
use rand::rngs::OsRng;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::hash::sha256;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// WIF version byte.
pub const WIF_VERSION: u8 = 0x80;

/// Suffix byte marking a WIF key whose public key is compressed.
const COMPRESS_MAGIC: u8 = 0x01;

/// A P-256 private key.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    pub fn new() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte big-endian scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the scalar is in `[1, n)`, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let inner = SigningKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner })
    }

    /// Create a private key from a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Decode a WIF string.
    ///
    /// The Base58Check payload must carry version `0x80`. A 33-byte key
    /// payload must end in the `0x01` compression marker, which is stripped.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success; a `Checksum` error for a bad checksum,
    /// a wrong version, or an unknown suffix byte.
    pub fn from_wif(wif: &str) -> Result<Self, PrimitivesError> {
        let payload = base58::check_decode_version(wif, WIF_VERSION)?;
        let key_bytes = match payload.len() {
            PRIVATE_KEY_BYTES_LEN => &payload[..],
            33 => {
                if payload[PRIVATE_KEY_BYTES_LEN] != COMPRESS_MAGIC {
                    return Err(PrimitivesError::Checksum(format!(
                        "unrecognized WIF suffix 0x{:02x}",
                        payload[PRIVATE_KEY_BYTES_LEN]
                    )));
                }
                &payload[..PRIVATE_KEY_BYTES_LEN]
            }
            n => {
                return Err(PrimitivesError::InvalidWif(format!(
                    "invalid key payload length {}",
                    n
                )))
            }
        };
        Self::from_bytes(key_bytes)
    }

    /// Encode the private key as WIF.
    ///
    /// Always carries the compression marker; the network only uses
    /// compressed public keys.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(PRIVATE_KEY_BYTES_LEN + 1);
        payload.extend_from_slice(&self.to_bytes());
        payload.push(COMPRESS_MAGIC);
        base58::check_encode_version(WIF_VERSION, &payload)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(*self.inner.verifying_key())
    }

    /// Sign a message.
    ///
    /// The message is hashed with SHA-256 and signed with an RFC 6979
    /// deterministic nonce, so the same key and message always produce the
    /// same signature.
    ///
    /// # Arguments
    /// * `message` - The bytes to sign (for transactions, the unsigned
    ///   serialization).
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or a `Signing` error.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, PrimitivesError> {
        let digest = sha256(message);
        let sig: p256::ecdsa::Signature = self
            .inner
            .sign_prehash(&digest)
            .map_err(|e| PrimitivesError::Signing(e.to_string()))?;
        Signature::from_bytes(&sig.to_bytes())
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("pub_key", &self.pub_key().to_hex())
            .finish_non_exhaustive()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;

    const WIF: &str = "L4Ns4Uh4WegsHxgDG49hohAYxuhj41hhxG6owjjTWg95GSrRRbLL";
    const KEY_HEX: &str = "d59208b9228bff23009a666262a800f20f9dad38b0d9291f445215a0d4542beb";
    const PUB_HEX: &str = "0398b8d209365a197311d1b288424eaea556f6235f5730598dede5647f6a11d99a";

    #[test]
    fn test_wif_vector() {
        let key = PrivateKey::from_wif(WIF).unwrap();
        assert_eq!(key.to_hex(), KEY_HEX);
        assert_eq!(key.pub_key().to_hex(), PUB_HEX);
        assert_eq!(key.to_wif(), WIF);
    }

    #[test]
    fn test_private_key_serialization_and_deserialization() {
        let pk = PrivateKey::new();

        let deserialized = PrivateKey::from_bytes(&pk.to_bytes()).unwrap();
        assert_eq!(pk, deserialized);

        let deserialized = PrivateKey::from_hex(&pk.to_hex()).unwrap();
        assert_eq!(pk, deserialized);

        let deserialized = PrivateKey::from_wif(&pk.to_wif()).unwrap();
        assert_eq!(pk, deserialized);
    }

    #[test]
    fn test_uncompressed_wif_payload_accepted() {
        let key_bytes = hex::decode(KEY_HEX).unwrap();
        let wif = base58::check_encode_version(WIF_VERSION, &key_bytes);
        assert_eq!(PrivateKey::from_wif(&wif).unwrap().to_hex(), KEY_HEX);
    }

    #[test]
    fn test_wif_wrong_version() {
        let mut payload = hex::decode(KEY_HEX).unwrap();
        payload.push(COMPRESS_MAGIC);
        let wif = base58::check_encode_version(0xef, &payload);
        assert!(matches!(PrivateKey::from_wif(&wif), Err(PrimitivesError::Checksum(_))));
    }

    #[test]
    fn test_wif_unknown_suffix() {
        let mut payload = hex::decode(KEY_HEX).unwrap();
        payload.push(0x02);
        let wif = base58::check_encode_version(WIF_VERSION, &payload);
        assert!(matches!(PrivateKey::from_wif(&wif), Err(PrimitivesError::Checksum(_))));
    }

    #[test]
    fn test_wif_bad_checksum() {
        let mut corrupted = WIF.to_string();
        corrupted.replace_range(10..11, if &WIF[10..11] == "a" { "b" } else { "a" });
        assert!(PrivateKey::from_wif(&corrupted).is_err());
        assert!(PrivateKey::from_wif(&WIF[..WIF.len() - 1]).is_err());
    }

    #[test]
    fn test_private_key_from_invalid_input() {
        assert!(PrivateKey::from_hex("").is_err());
        assert!(PrivateKey::from_hex(WIF).is_err());
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
        assert!(PrivateKey::from_bytes(&[1u8; 31]).is_err());
    }

    #[test]
    fn test_sign_is_deterministic_and_verifies() {
        let key = PrivateKey::from_hex(KEY_HEX).unwrap();
        let a = key.sign(b"neo").unwrap();
        let b = key.sign(b"neo").unwrap();
        assert_eq!(a, b);
        assert!(key.pub_key().verify(b"neo", &a));
        assert!(!key.pub_key().verify(b"gas", &a));
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = PrivateKey::from_hex(KEY_HEX).unwrap();
        let dbg = format!("{:?}", key);
        assert!(!dbg.contains(KEY_HEX));
        assert!(dbg.contains(PUB_HEX));
    }
}
