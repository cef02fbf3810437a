//! Type-specific transaction payloads.
//!
//! The envelope is the same for every transaction kind; what differs is
//! the type byte and the payload written between the version and the
//! attributes. The set of kinds is closed, so reads and writes dispatch
//! with a `match`.

use std::fmt;

use neo_primitives::util::{NeoReader, NeoWriter, VarInt};
use neo_primitives::Fixed8;
use neo_script::Script;

use crate::input::TransactionInput;
use crate::TransactionError;

/// Transaction type byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionType {
    Claim = 0x02,
    Contract = 0x80,
    Invocation = 0xd1,
}

impl TransactionType {
    pub fn from_u8(b: u8) -> Result<Self, TransactionError> {
        match b {
            0x02 => Ok(TransactionType::Claim),
            0x80 => Ok(TransactionType::Contract),
            0xd1 => Ok(TransactionType::Invocation),
            other => Err(TransactionError::Serialization(format!(
                "unsupported transaction type 0x{:02x}",
                other
            ))),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Claim => "ClaimTransaction",
            TransactionType::Contract => "ContractTransaction",
            TransactionType::Invocation => "InvocationTransaction",
        };
        f.write_str(name)
    }
}

/// Claim payload: the spent outputs whose generated GAS is being claimed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimData {
    pub claims: Vec<TransactionInput>,
}

/// Invocation payload: bytecode to run and the GAS paid for running it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationData {
    pub script: Script,
    pub gas: Fixed8,
}

/// The type-specific part of a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionPayload {
    Contract,
    Claim(ClaimData),
    Invocation(InvocationData),
}

impl TransactionPayload {
    pub fn tx_type(&self) -> TransactionType {
        match self {
            TransactionPayload::Contract => TransactionType::Contract,
            TransactionPayload::Claim(_) => TransactionType::Claim,
            TransactionPayload::Invocation(_) => TransactionType::Invocation,
        }
    }

    /// Read the payload for a transaction of type `tx_type`.
    ///
    /// | Type       | Layout                               |
    /// |------------|--------------------------------------|
    /// | Contract   | nothing                              |
    /// | Claim      | varint count, then that many inputs  |
    /// | Invocation | varint-length script, Fixed8 gas     |
    pub fn read_from(tx_type: TransactionType, reader: &mut NeoReader) -> Result<Self, TransactionError> {
        match tx_type {
            TransactionType::Contract => Ok(TransactionPayload::Contract),
            TransactionType::Claim => {
                let count = reader
                    .read_varint()
                    .map_err(|e| TransactionError::reading("claim count", e))?;
                let claims = read_list(reader, count, TransactionInput::read_from)?;
                Ok(TransactionPayload::Claim(ClaimData { claims }))
            }
            TransactionType::Invocation => {
                let script = reader
                    .read_var_bytes()
                    .map_err(|e| TransactionError::reading("invocation script", e))?;
                let gas = reader
                    .read_fixed8()
                    .map_err(|e| TransactionError::reading("invocation gas", e))?;
                Ok(TransactionPayload::Invocation(InvocationData {
                    script: Script::from_bytes(script),
                    gas,
                }))
            }
        }
    }

    pub fn write_to(&self, writer: &mut NeoWriter) {
        match self {
            TransactionPayload::Contract => {}
            TransactionPayload::Claim(data) => {
                writer.write_varint(VarInt::from(data.claims.len()));
                for claim in &data.claims {
                    claim.write_to(writer);
                }
            }
            TransactionPayload::Invocation(data) => {
                writer.write_var_bytes(data.script.to_bytes());
                writer.write_fixed8(data.gas);
            }
        }
    }
}

/// Read `count` items, failing before allocation if the count cannot
/// possibly fit in what remains of the buffer.
pub(crate) fn read_list<T>(
    reader: &mut NeoReader,
    count: VarInt,
    mut read_item: impl FnMut(&mut NeoReader) -> Result<T, TransactionError>,
) -> Result<Vec<T>, TransactionError> {
    if count.value() > reader.remaining() as u64 {
        return Err(TransactionError::Serialization(format!(
            "list of {} items exceeds remaining {} bytes: truncated",
            count.value(),
            reader.remaining()
        )));
    }
    let mut items = Vec::with_capacity(count.value() as usize);
    for _ in 0..count.value() {
        items.push(read_item(reader)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_primitives::chainhash::Hash;

    #[test]
    fn test_type_bytes() {
        assert_eq!(TransactionType::from_u8(0x80).unwrap(), TransactionType::Contract);
        assert_eq!(TransactionType::from_u8(0x02).unwrap(), TransactionType::Claim);
        assert_eq!(TransactionType::from_u8(0xd1).unwrap(), TransactionType::Invocation);
        assert!(TransactionType::from_u8(0x00).is_err());
        assert_eq!(TransactionType::Invocation.as_u8(), 0xd1);
    }

    #[test]
    fn test_claim_payload_roundtrip() {
        let payload = TransactionPayload::Claim(ClaimData {
            claims: vec![
                TransactionInput::new(Hash::new([1u8; 32]), 0),
                TransactionInput::new(Hash::new([2u8; 32]), 7),
            ],
        });
        let mut w = NeoWriter::new();
        payload.write_to(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 1 + 2 * 34);
        let mut r = NeoReader::new(&bytes);
        assert_eq!(TransactionPayload::read_from(TransactionType::Claim, &mut r).unwrap(), payload);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_invocation_payload_layout() {
        let payload = TransactionPayload::Invocation(InvocationData {
            script: Script::from_hex("51").unwrap(),
            gas: Fixed8::from_raw(1),
        });
        let mut w = NeoWriter::new();
        payload.write_to(&mut w);
        assert_eq!(hex::encode(w.as_bytes()), "01510100000000000000");
    }

    #[test]
    fn test_contract_payload_is_empty() {
        let mut w = NeoWriter::new();
        TransactionPayload::Contract.write_to(&mut w);
        assert!(w.is_empty());
    }

    #[test]
    fn test_claim_count_past_end() {
        let mut r = NeoReader::new(&[0xfd, 0xff, 0xff]);
        assert!(TransactionPayload::read_from(TransactionType::Claim, &mut r).is_err());
    }
}
