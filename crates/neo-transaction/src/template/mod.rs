//! Witness templates.
//!
//! Provides the `WitnessTemplate` trait and a single-signature
//! implementation that produces the invocation/verification script pair
//! for one account.

pub mod signature;

use neo_script::ScriptHash;

use crate::transaction::Transaction;
use crate::witness::Witness;
use crate::TransactionError;

/// Trait for templates that produce witnesses.
///
/// A witness authorizes every input owned by one account, so unlike
/// per-input signing the template sees the whole transaction and returns a
/// single witness for it.
pub trait WitnessTemplate {
    /// Produce a witness for `tx`.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed. Only its unsigned form is
    ///   committed to.
    ///
    /// # Returns
    /// `Ok(Witness)` or a `Signing` error.
    fn sign(&self, tx: &Transaction) -> Result<Witness, TransactionError>;

    /// The account the produced witness speaks for.
    fn script_hash(&self) -> ScriptHash;
}
