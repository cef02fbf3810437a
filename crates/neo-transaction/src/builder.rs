//! Staged transaction construction.
//!
//! `TransactionBuilder` owns a draft transaction. Every operation computes
//! its full result first and only then touches the draft, so an operation
//! that fails (insufficient funds, bad amount) leaves the draft exactly as
//! it was.

use neo_primitives::Fixed8;
use neo_script::{Script, ScriptHash};
use tracing::debug;

use crate::asset::GAS_ASSET_ID;
use crate::attribute::{usage, TransactionAttribute};
use crate::output::TransactionOutput;
use crate::payload::TransactionPayload;
use crate::selection::CoinSelector;
use crate::transaction::Transaction;
use crate::utxo::Utxo;
use crate::TransactionError;

/// Builder for unsigned transactions.
#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// Start a plain transfer.
    pub fn contract() -> Self {
        TransactionBuilder { tx: Transaction::new_contract() }
    }

    /// Start a GAS claim.
    pub fn claim() -> Self {
        TransactionBuilder { tx: Transaction::new_claim() }
    }

    /// Start a contract invocation running `script` with `gas` attached.
    pub fn invocation(script: Script, gas: Fixed8) -> Self {
        TransactionBuilder { tx: Transaction::new_invocation(script, gas) }
    }

    /// Start an invocation that `from` signs even without spending any
    /// inputs.
    ///
    /// A `SCRIPT` attribute names `from` as a required signer and a
    /// `REMARK` attribute carries `nonce`, so two otherwise identical
    /// invocations get distinct ids.
    ///
    /// Both attributes are written as `usage | varint length | data`. Live
    /// nodes read `SCRIPT` as a bare 20-byte hash with no length prefix, so
    /// a transaction built here round-trips through this crate but is not
    /// accepted by such a node.
    pub fn invocation_from(script: Script, gas: Fixed8, from: &ScriptHash, nonce: &[u8]) -> Self {
        let mut builder = Self::invocation(script, gas);
        builder
            .tx
            .attributes
            .push(TransactionAttribute::new(usage::SCRIPT, from.as_bytes().to_vec()));
        builder
            .tx
            .attributes
            .push(TransactionAttribute::new(usage::REMARK, nonce));
        builder
    }

    /// Continue building an existing unsigned transaction.
    pub fn from_transaction(tx: Transaction) -> Result<Self, TransactionError> {
        if tx.is_signed() {
            return Err(TransactionError::AlreadySigned);
        }
        Ok(TransactionBuilder { tx })
    }

    /// Append an attribute.
    pub fn attribute(&mut self, attr: TransactionAttribute) -> &mut Self {
        self.tx.attributes.push(attr);
        self
    }

    /// The draft as built so far.
    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    /// Fund `targets` from `pool`, sending change to `spender`.
    ///
    /// Appends the selected inputs, the targets and any change outputs.
    ///
    /// # Returns
    /// The pool entries that were not spent, in pool order.
    pub fn pay(
        &mut self,
        targets: &[TransactionOutput],
        pool: &[Utxo],
        spender: &ScriptHash,
    ) -> Result<Vec<Utxo>, TransactionError> {
        let selection = CoinSelector::new(*spender).select(targets, pool)?;
        debug!(
            inputs = selection.inputs.len(),
            outputs = selection.outputs.len(),
            "payment funded"
        );
        self.tx.inputs.extend(selection.inputs);
        self.tx.outputs.extend(selection.outputs);
        Ok(selection.unselected)
    }

    /// Claim GAS to cover the GAS targets and fund the rest normally.
    ///
    /// GAS targets are covered from `pool`, and the chosen entries become
    /// the claimed inputs. The remaining targets are then funded from what
    /// the first pass left over and become ordinary inputs. Nothing is
    /// committed unless both passes succeed.
    ///
    /// # Returns
    /// The pool entries used by neither pass.
    pub fn claim_gas(
        &mut self,
        targets: &[TransactionOutput],
        pool: &[Utxo],
        spender: &ScriptHash,
    ) -> Result<Vec<Utxo>, TransactionError> {
        self.require_claim()?;

        let (gas_targets, other_targets): (Vec<TransactionOutput>, Vec<TransactionOutput>) =
            targets.iter().partition(|t| t.asset_id == GAS_ASSET_ID);

        let selector = CoinSelector::new(*spender);
        let claimed = selector.select(&gas_targets, pool)?;
        let funded = selector.select(&other_targets, &claimed.unselected)?;

        debug!(
            claims = claimed.inputs.len(),
            inputs = funded.inputs.len(),
            "claim funded"
        );

        if let TransactionPayload::Claim(data) = &mut self.tx.payload {
            data.claims.extend(claimed.inputs);
        }
        self.tx.outputs.extend(claimed.outputs);
        self.tx.inputs.extend(funded.inputs);
        self.tx.outputs.extend(funded.outputs);
        Ok(funded.unselected)
    }

    /// Claim every entry of `claims` and pay `available` GAS to `claimer`.
    ///
    /// `available` is the unclaimed total the node reported for these
    /// claims. Ordinary inputs and outputs, if any are needed for fees, can
    /// be added afterwards with `pay`.
    pub fn claim_all(
        &mut self,
        available: Fixed8,
        claimer: &ScriptHash,
        claims: &[Utxo],
    ) -> Result<(), TransactionError> {
        self.require_claim()?;
        if claims.is_empty() {
            return Err(TransactionError::InvalidTransaction("nothing to claim".to_string()));
        }
        if !available.is_positive() {
            return Err(TransactionError::InvalidTransaction(format!(
                "claimable amount must be positive, got {}",
                available
            )));
        }

        debug!(claims = claims.len(), available = %available, claimer = %claimer, "claiming all");
        if let TransactionPayload::Claim(data) = &mut self.tx.payload {
            data.claims.extend(claims.iter().map(Utxo::to_input));
        }
        self.tx
            .outputs
            .push(TransactionOutput::new(GAS_ASSET_ID, available, *claimer));
        Ok(())
    }

    /// Check the draft and hand it over for signing.
    ///
    /// A transfer must spend at least one input and a claim must claim at
    /// least one output. An invocation may have neither.
    pub fn build(self) -> Result<Transaction, TransactionError> {
        match &self.tx.payload {
            TransactionPayload::Contract if self.tx.inputs.is_empty() => {
                return Err(TransactionError::InvalidTransaction(
                    "contract transaction has no inputs".to_string(),
                ));
            }
            TransactionPayload::Claim(data) if data.claims.is_empty() => {
                return Err(TransactionError::InvalidTransaction(
                    "claim transaction has no claims".to_string(),
                ));
            }
            _ => {}
        }
        Ok(self.tx)
    }

    fn require_claim(&self) -> Result<(), TransactionError> {
        match self.tx.payload {
            TransactionPayload::Claim(_) => Ok(()),
            _ => Err(TransactionError::InvalidTransaction(format!(
                "cannot claim on a {} transaction",
                self.tx.tx_type()
            ))),
        }
    }
}
