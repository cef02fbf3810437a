//! P-256 public key.
//!
//! Supports SEC1 parsing (compressed or uncompressed), the 33-byte
//! compressed encoding used in verification scripts, and verification of
//! signatures produced by `PrivateKey::sign`.

use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::VerifyingKey;
use p256::elliptic_curve::sec1::ToEncodedPoint;

use crate::ec::signature::Signature;
use crate::hash::sha256;
use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
pub const COMPRESSED_LEN: usize = 33;

/// A P-256 public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    pub(crate) fn from_verifying_key(inner: VerifyingKey) -> Self {
        PublicKey { inner }
    }

    /// Parse a public key from SEC1 bytes.
    ///
    /// # Arguments
    /// * `bytes` - 33 compressed or 65 uncompressed bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` if the bytes encode a point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let inner = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize to the 33-byte compressed form.
    ///
    /// The prefix is `0x02` for an even Y coordinate and `0x03` for odd,
    /// followed by the X coordinate as 32 big-endian bytes.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = p256::PublicKey::from(&self.inner).to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Compressed form as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Verify a signature over `message` (hashed with SHA-256).
    ///
    /// # Returns
    /// `true` if the signature is valid for this key.
    pub fn verify(&self, message: &[u8], sig: &Signature) -> bool {
        let Ok(sig) = p256::ecdsa::Signature::from_slice(&sig.to_bytes()) else {
            return false;
        };
        self.inner.verify_prehash(&sha256(message), &sig).is_ok()
    }
}

impl std::str::FromStr for PublicKey {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
