/// NEO SDK - Transaction building, signing, and serialization.
///
/// Provides the Transaction envelope with its three payload kinds, binary
/// and hex serialization, multi-asset coin selection, a staged builder,
/// witness templates, and signing.

pub mod asset;
pub mod attribute;
pub mod builder;
pub mod input;
pub mod output;
pub mod payload;
pub mod selection;
pub mod signer;
pub mod template;
pub mod transaction;
pub mod utxo;
pub mod witness;

mod error;
pub use error::TransactionError;
pub use attribute::TransactionAttribute;
pub use builder::TransactionBuilder;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use payload::{ClaimData, InvocationData, TransactionPayload, TransactionType};
pub use selection::{CoinSelector, Selection};
pub use transaction::Transaction;
pub use utxo::Utxo;
pub use witness::Witness;
