//! The transaction envelope.
//!
//! Holds the fields every transaction kind shares (version, attributes,
//! inputs, outputs, witnesses) around a type-specific payload. Supports
//! binary and hex serialization, transaction id computation, witness
//! attachment, and a diagnostic text dump.

use std::fmt;

use neo_primitives::chainhash::{double_hash_h, Hash};
use neo_primitives::util::{NeoReader, NeoWriter, VarInt};
use neo_primitives::Fixed8;
use neo_script::{Script, ScriptHash};
use tracing::debug;

use crate::attribute::TransactionAttribute;
use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::payload::{read_list, ClaimData, InvocationData, TransactionPayload, TransactionType};
use crate::witness::Witness;
use crate::TransactionError;

/// A NEO transaction.
///
/// # Wire format
///
/// | Field      | Size                                  |
/// |------------|---------------------------------------|
/// | type       | 1 byte                                |
/// | version    | 1 byte                                |
/// | payload    | per type, see `TransactionPayload`    |
/// | attributes | VarInt count, then each attribute     |
/// | inputs     | VarInt count, then 34 bytes each      |
/// | outputs    | VarInt count, then 60 bytes each      |
/// | witnesses  | VarInt count, then each witness       |
///
/// Everything before the witnesses is the unsigned form. Signatures and
/// the transaction id are both computed over it, so attaching witnesses
/// never changes the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: u8,
    pub payload: TransactionPayload,
    pub attributes: Vec<TransactionAttribute>,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub witnesses: Vec<Witness>,
}

impl Transaction {
    /// Create an empty transaction around `payload`.
    ///
    /// Invocation transactions get version 1 (the version that carries
    /// gas); the other kinds get version 0.
    pub fn new(payload: TransactionPayload) -> Self {
        let version = match payload {
            TransactionPayload::Invocation(_) => 1,
            _ => 0,
        };
        Transaction {
            version,
            payload,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    pub fn new_contract() -> Self {
        Self::new(TransactionPayload::Contract)
    }

    pub fn new_claim() -> Self {
        Self::new(TransactionPayload::Claim(ClaimData::default()))
    }

    pub fn new_invocation(script: Script, gas: Fixed8) -> Self {
        Self::new(TransactionPayload::Invocation(InvocationData { script, gas }))
    }

    pub fn tx_type(&self) -> TransactionType {
        self.payload.tx_type()
    }

    /// The claimed inputs, for a claim transaction.
    pub fn claims(&self) -> Option<&[TransactionInput]> {
        match &self.payload {
            TransactionPayload::Claim(data) => Some(&data.claims),
            _ => None,
        }
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex-encoded string.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::Serialization(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from raw bytes.
    ///
    /// The slice must contain exactly one complete transaction with no
    /// trailing data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = NeoReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::Serialization(
                format!("trailing {} bytes after transaction", reader.remaining()),
            ));
        }
        Ok(tx)
    }

    /// Deserialize a transaction from a `NeoReader`.
    pub fn read_from(reader: &mut NeoReader) -> Result<Self, TransactionError> {
        let type_byte = reader
            .read_u8()
            .map_err(|e| TransactionError::reading("type", e))?;
        let tx_type = TransactionType::from_u8(type_byte)?;

        let version = reader
            .read_u8()
            .map_err(|e| TransactionError::reading("version", e))?;

        let payload = TransactionPayload::read_from(tx_type, reader)?;

        let count = reader
            .read_varint()
            .map_err(|e| TransactionError::reading("attribute count", e))?;
        let attributes = read_list(reader, count, TransactionAttribute::read_from)?;

        let count = reader
            .read_varint()
            .map_err(|e| TransactionError::reading("input count", e))?;
        let inputs = read_list(reader, count, TransactionInput::read_from)?;

        let count = reader
            .read_varint()
            .map_err(|e| TransactionError::reading("output count", e))?;
        let outputs = read_list(reader, count, TransactionOutput::read_from)?;

        let count = reader
            .read_varint()
            .map_err(|e| TransactionError::reading("witness count", e))?;
        let witnesses = read_list(reader, count, Witness::read_from)?;

        Ok(Transaction {
            version,
            payload,
            attributes,
            inputs,
            outputs,
            witnesses,
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    fn write_unsigned(&self, writer: &mut NeoWriter) {
        writer.write_u8(self.tx_type().as_u8());
        writer.write_u8(self.version);
        self.payload.write_to(writer);

        writer.write_varint(VarInt::from(self.attributes.len()));
        for attr in &self.attributes {
            attr.write_to(writer);
        }

        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(writer);
        }

        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(writer);
        }
    }

    /// Serialize everything except the witnesses.
    ///
    /// This is the message that witnesses sign.
    pub fn unsigned_bytes(&self) -> Vec<u8> {
        let mut writer = NeoWriter::with_capacity(256);
        self.write_unsigned(&mut writer);
        writer.into_bytes()
    }

    /// Serialize the full transaction, witnesses included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = NeoWriter::with_capacity(512);
        self.write_unsigned(&mut writer);
        writer.write_varint(VarInt::from(self.witnesses.len()));
        for witness in &self.witnesses {
            witness.write_to(&mut writer);
        }
        writer.into_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Size of the full serialization in bytes.
    pub fn size(&self) -> usize {
        self.to_bytes().len()
    }

    // -----------------------------------------------------------------
    // Transaction ID
    // -----------------------------------------------------------------

    /// The transaction id: double SHA-256 of the unsigned form.
    pub fn hash(&self) -> Hash {
        double_hash_h(&self.unsigned_bytes())
    }

    /// The transaction id in display (byte-reversed) hex.
    pub fn tx_id_hex(&self) -> String {
        self.hash().to_string()
    }

    // -----------------------------------------------------------------
    // Witnesses
    // -----------------------------------------------------------------

    pub fn is_signed(&self) -> bool {
        !self.witnesses.is_empty()
    }

    /// Whether a witness for `script_hash` is already attached.
    pub fn contains_witness_for(&self, script_hash: &ScriptHash) -> bool {
        self.witnesses.iter().any(|w| w.script_hash() == *script_hash)
    }

    /// Append a witness unless one for the same account is present.
    ///
    /// # Returns
    /// `true` if the witness was added, `false` if it was a duplicate.
    pub fn attach_witness(&mut self, witness: Witness) -> bool {
        let script_hash = witness.script_hash();
        if self.contains_witness_for(&script_hash) {
            debug!(signer = %script_hash, "witness already attached, skipping");
            return false;
        }
        self.witnesses.push(witness);
        true
    }

    /// Check every witness against the unsigned form.
    ///
    /// Only single-signature witnesses can be checked offline; any other
    /// verification script is reported as an error.
    pub fn verify_witnesses(&self) -> Result<(), TransactionError> {
        let message = self.unsigned_bytes();
        for (i, witness) in self.witnesses.iter().enumerate() {
            if !witness.verify(&message)? {
                return Err(TransactionError::Signing(format!(
                    "witness {} ({}) does not verify",
                    i,
                    witness.script_hash().to_address()
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    /// Multi-line diagnostic dump. Not a wire format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tx {}", self.tx_id_hex())?;
        writeln!(f, "  type: {} (0x{:02x})", self.tx_type(), self.tx_type().as_u8())?;
        writeln!(f, "  version: {}", self.version)?;
        match &self.payload {
            TransactionPayload::Contract => {}
            TransactionPayload::Claim(data) => {
                writeln!(f, "  claims: {}", data.claims.len())?;
                for claim in &data.claims {
                    writeln!(f, "    {}", claim)?;
                }
            }
            TransactionPayload::Invocation(data) => {
                writeln!(f, "  script: {}", data.script)?;
                writeln!(f, "  gas: {}", data.gas)?;
            }
        }
        writeln!(f, "  attributes: {}", self.attributes.len())?;
        for attr in &self.attributes {
            writeln!(f, "    0x{:02x} {}", attr.usage, hex::encode(&attr.data))?;
        }
        writeln!(f, "  inputs: {}", self.inputs.len())?;
        for input in &self.inputs {
            writeln!(f, "    {}", input)?;
        }
        writeln!(f, "  outputs: {}", self.outputs.len())?;
        for output in &self.outputs {
            writeln!(f, "    {}", output)?;
        }
        writeln!(f, "  witnesses: {}", self.witnesses.len())?;
        for witness in &self.witnesses {
            writeln!(f, "    invocation: {}", witness.invocation_script)?;
            writeln!(f, "    verification: {}", witness.verification_script)?;
        }
        Ok(())
    }
}
