//! Multi-asset coin selection.
//!
//! Targets are grouped by asset in order of first appearance. For each
//! asset the pool is walked in order, taking UTXOs until the running total
//! covers the asset's required amount. Any surplus becomes one change
//! output back to the spender. Everything not taken is handed back so a
//! caller can run a second, independent pass over the rest.
//!
//! Pool entries with a zero or negative value are never selected and do
//! not count towards what is available.

use neo_primitives::chainhash::Hash;
use neo_primitives::Fixed8;
use neo_script::ScriptHash;
use tracing::{debug, trace};

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::utxo::Utxo;
use crate::TransactionError;

/// The outcome of one selection pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Inputs spending the chosen UTXOs, grouped by asset.
    pub inputs: Vec<TransactionInput>,
    /// The targets in their original order, followed by one change output
    /// per asset that had a surplus.
    pub outputs: Vec<TransactionOutput>,
    /// Pool entries that were not chosen, in their original order.
    pub unselected: Vec<Utxo>,
}

/// Selects UTXOs to fund a set of outputs.
///
/// Holds the change destination; `select` is otherwise a pure function of
/// its arguments.
#[derive(Clone, Debug)]
pub struct CoinSelector {
    change_to: ScriptHash,
}

impl CoinSelector {
    /// Create a selector that sends change to `change_to`.
    pub fn new(change_to: ScriptHash) -> Self {
        CoinSelector { change_to }
    }

    /// Fund `targets` from `pool`.
    ///
    /// # Returns
    /// The selection, or an error if any target is not positive, a sum
    /// overflows, or an asset's pool cannot cover its required total. On
    /// error nothing is returned; there is no partial result.
    pub fn select(&self, targets: &[TransactionOutput], pool: &[Utxo]) -> Result<Selection, TransactionError> {
        let mut assets: Vec<(Hash, Fixed8)> = Vec::new();
        for target in targets {
            if !target.value.is_positive() {
                return Err(TransactionError::InvalidTransaction(format!(
                    "output value must be positive, got {}",
                    target.value
                )));
            }
            match assets.iter_mut().find(|(asset, _)| *asset == target.asset_id) {
                Some((_, required)) => {
                    *required = required
                        .checked_add(target.value)
                        .ok_or_else(|| amount_overflow(&target.asset_id))?;
                }
                None => assets.push((target.asset_id, target.value)),
            }
        }

        let mut taken = vec![false; pool.len()];
        let mut inputs = Vec::new();
        let mut change = Vec::new();

        for (asset, required) in &assets {
            let mut selected = Fixed8::ZERO;
            for (i, utxo) in pool.iter().enumerate() {
                if selected >= *required {
                    break;
                }
                if utxo.asset != *asset || !utxo.value.is_positive() {
                    continue;
                }
                selected = selected
                    .checked_add(utxo.value)
                    .ok_or_else(|| amount_overflow(asset))?;
                taken[i] = true;
                inputs.push(utxo.to_input());
                trace!(asset = %asset, utxo = %utxo.to_input(), value = %utxo.value, "selected utxo");
            }

            if selected < *required {
                let available = pool
                    .iter()
                    .filter(|u| u.asset == *asset && u.value.is_positive())
                    .try_fold(Fixed8::ZERO, |acc, u| acc.checked_add(u.value))
                    .ok_or_else(|| amount_overflow(asset))?;
                debug!(asset = %asset, required = %required, available = %available, "insufficient funds");
                return Err(TransactionError::InsufficientFunds {
                    asset: *asset,
                    required: *required,
                    available,
                });
            }

            let surplus = selected - *required;
            debug!(asset = %asset, required = %required, selected = %selected, change = %surplus, "asset funded");
            if surplus.is_positive() {
                change.push(TransactionOutput::new(*asset, surplus, self.change_to));
            }
        }

        let mut outputs = targets.to_vec();
        outputs.extend(change);

        let unselected = pool
            .iter()
            .zip(&taken)
            .filter(|(_, taken)| !**taken)
            .map(|(utxo, _)| utxo.clone())
            .collect();

        Ok(Selection { inputs, outputs, unselected })
    }
}

fn amount_overflow(asset: &Hash) -> TransactionError {
    TransactionError::InvalidTransaction(format!("amount overflow for asset {}", asset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{GAS_ASSET_ID, NEO_ASSET_ID};
    use neo_script::Address;

    const SPENDER: &str = "AMpupnF6QweQXLfCtF4dR45FDdKbTXkLsr";
    const RECIPIENT: &str = "AQawPehRTAR28xuQMXbihHBtdXFxZQtDhd";

    fn utxo(n: u8, asset: Hash, value: i64) -> Utxo {
        Utxo {
            tx_id: Hash::new([n; 32]),
            index: n as u16,
            asset,
            value: Fixed8::from_raw(value),
            address: Address::from_string(SPENDER).unwrap(),
        }
    }

    fn target(asset: Hash, value: i64) -> TransactionOutput {
        let to = Address::from_string(RECIPIENT).unwrap().script_hash;
        TransactionOutput::new(asset, Fixed8::from_raw(value), to)
    }

    fn selector() -> CoinSelector {
        CoinSelector::new(Address::from_string(SPENDER).unwrap().script_hash)
    }

    #[test]
    fn test_exact_cover_has_no_change() {
        let pool = vec![utxo(1, NEO_ASSET_ID, 3), utxo(2, NEO_ASSET_ID, 2)];
        let sel = selector().select(&[target(NEO_ASSET_ID, 5)], &pool).unwrap();
        assert_eq!(sel.inputs.len(), 2);
        assert_eq!(sel.outputs.len(), 1);
        assert!(sel.unselected.is_empty());
    }

    #[test]
    fn test_surplus_becomes_change() {
        let pool = vec![utxo(1, NEO_ASSET_ID, 3), utxo(2, NEO_ASSET_ID, 4), utxo(3, NEO_ASSET_ID, 9)];
        let sel = selector().select(&[target(NEO_ASSET_ID, 5)], &pool).unwrap();
        assert_eq!(sel.inputs, vec![pool[0].to_input(), pool[1].to_input()]);
        assert_eq!(sel.outputs.len(), 2);
        let change = &sel.outputs[1];
        assert_eq!(change.value, Fixed8::from_raw(2));
        assert_eq!(change.script_hash, Address::from_string(SPENDER).unwrap().script_hash);
        assert_eq!(sel.unselected, vec![pool[2].clone()]);
    }

    #[test]
    fn test_insufficient_funds() {
        let pool = vec![utxo(1, NEO_ASSET_ID, 3), utxo(2, GAS_ASSET_ID, 100)];
        let err = selector().select(&[target(NEO_ASSET_ID, 4)], &pool).unwrap_err();
        match err {
            TransactionError::InsufficientFunds { asset, required, available } => {
                assert_eq!(asset, NEO_ASSET_ID);
                assert_eq!(required, Fixed8::from_raw(4));
                assert_eq!(available, Fixed8::from_raw(3));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_multi_asset_change_order() {
        let pool = vec![
            utxo(1, GAS_ASSET_ID, 10),
            utxo(2, NEO_ASSET_ID, 10),
            utxo(3, GAS_ASSET_ID, 10),
        ];
        let targets = [target(NEO_ASSET_ID, 4), target(GAS_ASSET_ID, 15), target(NEO_ASSET_ID, 1)];
        let sel = selector().select(&targets, &pool).unwrap();

        // NEO appears first among targets, so its inputs and change come first.
        assert_eq!(sel.inputs, vec![pool[1].to_input(), pool[0].to_input(), pool[2].to_input()]);
        assert_eq!(&sel.outputs[..3], &targets[..]);
        assert_eq!(sel.outputs[3].asset_id, NEO_ASSET_ID);
        assert_eq!(sel.outputs[3].value, Fixed8::from_raw(5));
        assert_eq!(sel.outputs[4].asset_id, GAS_ASSET_ID);
        assert_eq!(sel.outputs[4].value, Fixed8::from_raw(5));
        assert!(sel.unselected.is_empty());
    }

    #[test]
    fn test_unselected_keeps_other_assets() {
        let pool = vec![utxo(1, GAS_ASSET_ID, 10), utxo(2, NEO_ASSET_ID, 10), utxo(3, GAS_ASSET_ID, 1)];
        let sel = selector().select(&[target(NEO_ASSET_ID, 10)], &pool).unwrap();
        assert_eq!(sel.unselected, vec![pool[0].clone(), pool[2].clone()]);
    }

    #[test]
    fn test_non_positive_pool_entries_skipped() {
        let pool = vec![utxo(1, NEO_ASSET_ID, -5), utxo(2, NEO_ASSET_ID, 0), utxo(3, NEO_ASSET_ID, 10)];
        let sel = selector().select(&[target(NEO_ASSET_ID, 5)], &pool).unwrap();
        assert_eq!(sel.inputs, vec![pool[2].to_input()]);
        assert_eq!(sel.outputs.len(), 2);
        assert_eq!(sel.outputs[1].value, Fixed8::from_raw(5));
        assert_eq!(sel.unselected, vec![pool[0].clone(), pool[1].clone()]);

        let err = selector().select(&[target(NEO_ASSET_ID, 11)], &pool).unwrap_err();
        match err {
            TransactionError::InsufficientFunds { available, .. } => {
                assert_eq!(available, Fixed8::from_raw(10));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_empty_targets() {
        let pool = vec![utxo(1, GAS_ASSET_ID, 10)];
        let sel = selector().select(&[], &pool).unwrap();
        assert!(sel.inputs.is_empty());
        assert!(sel.outputs.is_empty());
        assert_eq!(sel.unselected, pool);
    }

    #[test]
    fn test_rejects_non_positive_target() {
        let pool = vec![utxo(1, NEO_ASSET_ID, 10)];
        assert!(matches!(
            selector().select(&[target(NEO_ASSET_ID, 0)], &pool),
            Err(TransactionError::InvalidTransaction(_))
        ));
        assert!(matches!(
            selector().select(&[target(NEO_ASSET_ID, -1)], &pool),
            Err(TransactionError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_overflowing_targets() {
        let pool = vec![utxo(1, NEO_ASSET_ID, 10)];
        let targets = [target(NEO_ASSET_ID, i64::MAX), target(NEO_ASSET_ID, 1)];
        assert!(matches!(
            selector().select(&targets, &pool),
            Err(TransactionError::InvalidTransaction(_))
        ));
    }
}
