//! Transaction output assigning an amount of an asset to a script hash.

use std::fmt;

use neo_primitives::chainhash::Hash;
use neo_primitives::util::{NeoReader, NeoWriter};
use neo_primitives::Fixed8;
use neo_script::ScriptHash;
use serde::{Deserialize, Serialize};

use crate::TransactionError;

/// A new output (`Vout`).
///
/// # Wire format
///
/// | Field       | Size                  |
/// |-------------|-----------------------|
/// | asset_id    | 32 bytes (wire order) |
/// | value       | 8 bytes (LE Fixed8)   |
/// | script_hash | 20 bytes (wire order) |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    #[serde(rename = "asset")]
    pub asset_id: Hash,
    pub value: Fixed8,
    /// The account that can spend this output.
    #[serde(rename = "scripthash")]
    pub script_hash: ScriptHash,
}

impl TransactionOutput {
    pub fn new(asset_id: Hash, value: Fixed8, script_hash: ScriptHash) -> Self {
        TransactionOutput { asset_id, value, script_hash }
    }

    /// Deserialize a `TransactionOutput` from a `NeoReader`.
    pub fn read_from(reader: &mut NeoReader) -> Result<Self, TransactionError> {
        let asset_id = Hash::new(
            reader
                .read_array::<32>()
                .map_err(|e| TransactionError::reading("output asset", e))?,
        );
        let value = reader
            .read_fixed8()
            .map_err(|e| TransactionError::reading("output value", e))?;
        let script_hash = ScriptHash::new(
            reader
                .read_array::<20>()
                .map_err(|e| TransactionError::reading("output script hash", e))?,
        );
        Ok(TransactionOutput { asset_id, value, script_hash })
    }

    /// Serialize this `TransactionOutput` into a `NeoWriter`.
    pub fn write_to(&self, writer: &mut NeoWriter) {
        writer.write_bytes(self.asset_id.as_bytes());
        writer.write_fixed8(self.value);
        writer.write_bytes(self.script_hash.as_bytes());
    }
}

impl fmt::Display for TransactionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.asset_id, self.value, self.script_hash.to_address())
    }
}
