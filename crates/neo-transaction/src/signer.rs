//! Transaction signing.

use neo_primitives::chainhash::Hash;
use neo_primitives::ec::PrivateKey;
use tracing::debug;

use crate::template::signature;
use crate::template::WitnessTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Sign `tx` with `key` and attach the witness.
///
/// If a witness for the key's account is already attached and still
/// verifies, the transaction is left as is. A witness that no longer
/// matches the unsigned bytes means the transaction changed after signing,
/// which is rejected with `AlreadySigned`.
///
/// # Returns
/// The full serialization (witnesses included) and the transaction id.
pub fn sign(tx: &mut Transaction, key: &PrivateKey) -> Result<(Vec<u8>, Hash), TransactionError> {
    sign_with(tx, &signature::unlock(key.clone()))
}

/// Sign `tx` with any witness template.
pub fn sign_with(
    tx: &mut Transaction,
    template: &dyn WitnessTemplate,
) -> Result<(Vec<u8>, Hash), TransactionError> {
    let signer = template.script_hash();
    if let Some(existing) = tx.witnesses.iter().find(|w| w.script_hash() == signer) {
        if !existing.verify(&tx.unsigned_bytes())? {
            debug!(signer = %signer, "existing witness is stale, transaction changed after signing");
            return Err(TransactionError::AlreadySigned);
        }
        debug!(signer = %signer, "transaction already carries this witness");
    } else {
        let witness = template.sign(tx)?;
        tx.attach_witness(witness);
    }

    let id = tx.hash();
    debug!(tx_id = %id, signer = %signer, witnesses = tx.witnesses.len(), "signed transaction");
    Ok((tx.to_bytes(), id))
}
