/// NEO SDK - Cryptographic primitives, wire codec, and text encodings.
///
/// This crate provides the foundational building blocks for the NEO SDK:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - 32-byte `Hash` for transaction and asset identifiers
/// - Variable-length integers and the binary reader/writer
/// - `Fixed8` decimal amounts
/// - Base58 / Base58Check encoding
/// - P-256 private keys, public keys, ECDSA signatures, and WIF

pub mod hash;
pub mod chainhash;
pub mod util;
pub mod fixed8;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
pub use fixed8::Fixed8;
