//! Transaction input referencing a previous output.

use std::fmt;

use neo_primitives::chainhash::Hash;
use neo_primitives::util::{NeoReader, NeoWriter};
use serde::{Deserialize, Serialize};

use crate::TransactionError;

/// A reference to a spent output (`Vin`).
///
/// Used both for ordinary inputs and for the claimed outputs of a claim
/// transaction.
///
/// # Wire format
///
/// | Field      | Size                  |
/// |------------|-----------------------|
/// | prev_hash  | 32 bytes (wire order) |
/// | prev_index | 2 bytes (LE)          |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Id of the transaction that created the output.
    #[serde(rename = "txid")]
    pub prev_hash: Hash,
    /// Index of the output within that transaction.
    #[serde(rename = "vout")]
    pub prev_index: u16,
}

impl TransactionInput {
    pub fn new(prev_hash: Hash, prev_index: u16) -> Self {
        TransactionInput { prev_hash, prev_index }
    }

    /// Deserialize a `TransactionInput` from a `NeoReader`.
    pub fn read_from(reader: &mut NeoReader) -> Result<Self, TransactionError> {
        let prev_hash = Hash::new(
            reader
                .read_array::<32>()
                .map_err(|e| TransactionError::reading("input hash", e))?,
        );
        let prev_index = reader
            .read_u16_le()
            .map_err(|e| TransactionError::reading("input index", e))?;
        Ok(TransactionInput { prev_hash, prev_index })
    }

    /// Serialize this `TransactionInput` into a `NeoWriter`.
    pub fn write_to(&self, writer: &mut NeoWriter) {
        writer.write_bytes(self.prev_hash.as_bytes());
        writer.write_u16_le(self.prev_index);
    }
}

impl fmt::Display for TransactionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prev_hash, self.prev_index)
    }
}
