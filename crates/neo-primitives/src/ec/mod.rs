/// Elliptic curve cryptography on NIST P-256 (secp256r1).
///
/// Provides private keys with WIF encoding, compressed public keys, and
/// 64-byte `r || s` ECDSA signatures.

pub mod private_key;
pub mod public_key;
pub mod signature;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::Signature;
