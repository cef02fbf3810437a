/// NEO SDK - Key material for signing.
///
/// Loads a private key together with its derived address, from WIF or raw
/// bytes, and defines the interface encrypted keystore formats implement.

mod error;
pub use error::WalletError;

pub mod key;
pub mod keystore;

pub use key::Key;
pub use keystore::KeyStore;
