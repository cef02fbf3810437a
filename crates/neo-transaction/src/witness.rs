//! Witnesses: the invocation/verification script pair that authorizes
//! spending from one account.

use neo_primitives::util::{NeoReader, NeoWriter};
use neo_script::{Script, ScriptHash};

use crate::TransactionError;

/// An attached witness.
///
/// The verification script identifies the account (its script hash is the
/// account's script hash); the invocation script supplies the arguments
/// that make it succeed, normally a signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    pub invocation_script: Script,
    pub verification_script: Script,
}

impl Witness {
    pub fn new(invocation_script: Script, verification_script: Script) -> Self {
        Witness { invocation_script, verification_script }
    }

    /// The account this witness speaks for.
    pub fn script_hash(&self) -> ScriptHash {
        self.verification_script.hash()
    }

    pub fn read_from(reader: &mut NeoReader) -> Result<Self, TransactionError> {
        let invocation = reader
            .read_var_bytes()
            .map_err(|e| TransactionError::reading("invocation script", e))?;
        let verification = reader
            .read_var_bytes()
            .map_err(|e| TransactionError::reading("verification script", e))?;
        Ok(Witness {
            invocation_script: Script::from_bytes(invocation),
            verification_script: Script::from_bytes(verification),
        })
    }

    /// Check a single-signature witness against `message`.
    ///
    /// # Returns
    /// `Ok(false)` if the signature does not match, or a script error if
    /// either script is not in single-signature form.
    pub fn verify(&self, message: &[u8]) -> Result<bool, TransactionError> {
        let key = self.verification_script.signature_contract_key()?;
        let sig = self.invocation_script.signature_invocation_sig()?;
        Ok(key.verify(message, &sig))
    }

    pub fn write_to(&self, writer: &mut NeoWriter) {
        writer.write_var_bytes(self.invocation_script.to_bytes());
        writer.write_var_bytes(self.verification_script.to_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_witness_roundtrip() {
        let witness = Witness::new(
            Script::from_hex("40aa").unwrap(),
            Script::from_hex("210398b8d209365a197311d1b288424eaea556f6235f5730598dede5647f6a11d99aac").unwrap(),
        );
        let mut w = NeoWriter::new();
        witness.write_to(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(&bytes[..4], &[0x02, 0x40, 0xaa, 0x23]);
        let mut r = NeoReader::new(&bytes);
        assert_eq!(Witness::read_from(&mut r).unwrap(), witness);
        assert_eq!(
            hex::encode(witness.script_hash().as_bytes()),
            "4263d1f1b124778d66d847801fe7cb73dd4bef50"
        );
    }
}
