//! Unspent outputs as reported by a node, the raw material of coin selection.

use neo_primitives::chainhash::Hash;
use neo_primitives::Fixed8;
use neo_script::Address;

use crate::input::TransactionInput;

/// An unspent output owned by some address.
///
/// A read-only snapshot: selection never mutates the pool it is given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utxo {
    /// Id of the transaction that created the output.
    pub tx_id: Hash,
    /// Index of the output within that transaction.
    pub index: u16,
    pub asset: Hash,
    pub value: Fixed8,
    /// The owning address.
    pub address: Address,
}

impl Utxo {
    /// The input that spends this output.
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput::new(self.tx_id, self.index)
    }
}
