//! Single-signature witness template.
//!
//! The verification script is `PUSHBYTES33 <compressed key> CHECKSIG` and
//! the invocation script is `PUSHBYTES64 <r || s>`.

use neo_primitives::ec::{PrivateKey, PublicKey, Signature};
use neo_script::{Script, ScriptHash};

use crate::template::WitnessTemplate;
use crate::transaction::Transaction;
use crate::witness::Witness;
use crate::TransactionError;

/// Build the verification script for `key`.
pub fn verification_script(key: &PublicKey) -> Script {
    Script::signature_contract(key)
}

/// Build the invocation script that pushes `sig`.
pub fn invocation_script(sig: &Signature) -> Script {
    Script::signature_invocation(sig)
}

/// Create a signing template for `private_key`.
pub fn unlock(private_key: PrivateKey) -> SignatureTemplate {
    SignatureTemplate { private_key }
}

/// Single-signature template holding the signing key.
pub struct SignatureTemplate {
    private_key: PrivateKey,
}

impl WitnessTemplate for SignatureTemplate {
    /// Sign the unsigned form of `tx` and wrap the signature in a witness.
    ///
    /// The signature is ECDSA P-256 over SHA-256 of the unsigned bytes with
    /// an RFC 6979 nonce, so signing the same transaction twice yields the
    /// same witness.
    fn sign(&self, tx: &Transaction) -> Result<Witness, TransactionError> {
        let message = tx.unsigned_bytes();
        let sig = self
            .private_key
            .sign(&message)
            .map_err(|e| TransactionError::Signing(e.to_string()))?;

        Ok(Witness::new(
            invocation_script(&sig),
            verification_script(&self.private_key.pub_key()),
        ))
    }

    fn script_hash(&self) -> ScriptHash {
        verification_script(&self.private_key.pub_key()).hash()
    }
}
