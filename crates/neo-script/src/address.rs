/// Script hashes and NEO addresses.
///
/// A `ScriptHash` is the Hash160 of a verification script and names the
/// account that script guards. An `Address` is the Base58Check encoding of
/// `0x17 || script_hash`.

use std::fmt;
use std::str::FromStr;

use neo_primitives::base58;
use neo_primitives::ec::PublicKey;
use neo_primitives::hash::hash160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::script::Script;
use crate::ScriptError;

/// Address version byte.
pub const ADDRESS_VERSION: u8 = 0x17;

/// Length of a script hash in bytes.
pub const SCRIPT_HASH_LEN: usize = 20;

/// A 20-byte script hash, held in wire order.
///
/// The text form is hex of the byte-reversed hash, as shown by nodes and
/// explorers. Transaction outputs carry the wire order.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScriptHash([u8; SCRIPT_HASH_LEN]);

impl ScriptHash {
    pub const fn new(bytes: [u8; SCRIPT_HASH_LEN]) -> Self {
        ScriptHash(bytes)
    }

    /// Build from 20 wire-order bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ScriptError> {
        let arr: [u8; SCRIPT_HASH_LEN] = bytes
            .try_into()
            .map_err(|_| ScriptError::InvalidScriptHash(format!("expected 20 bytes, got {}", bytes.len())))?;
        Ok(ScriptHash(arr))
    }

    /// Hash a script with SHA-256 then RIPEMD-160.
    pub fn from_script(script: &[u8]) -> Self {
        ScriptHash(hash160(script))
    }

    /// The script hash of the single-signature verification script for `key`.
    pub fn from_public_key(key: &PublicKey) -> Self {
        Script::signature_contract(key).hash()
    }

    /// Parse the display form (reversed hex), optionally `0x`-prefixed.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let mut bytes = hex::decode(stripped)?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SCRIPT_HASH_LEN] {
        &self.0
    }

    pub fn to_address(&self) -> Address {
        Address::from_script_hash(self)
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

impl fmt::Debug for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptHash({})", self)
    }
}

impl FromStr for ScriptHash {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for ScriptHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ScriptHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ScriptHash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A NEO address.
///
/// Holds both the Base58Check string and the script hash it encodes; the
/// two always agree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    /// The human-readable Base58Check address string.
    pub address_string: String,
    /// The script hash the address names.
    pub script_hash: ScriptHash,
}

impl Address {
    /// Parse a Base58Check address string.
    ///
    /// # Returns
    /// An `Address`, or an error: a `Checksum` primitives error for a bad
    /// checksum or a version other than `0x17`, `InvalidAddressLength` for a
    /// payload that is not 20 bytes.
    pub fn from_string(addr: &str) -> Result<Self, ScriptError> {
        let payload = base58::check_decode_version(addr, ADDRESS_VERSION)?;
        if payload.len() != SCRIPT_HASH_LEN {
            return Err(ScriptError::InvalidAddressLength(addr.to_string()));
        }
        Ok(Address {
            address_string: addr.to_string(),
            script_hash: ScriptHash::from_bytes(&payload)?,
        })
    }

    pub fn from_script_hash(hash: &ScriptHash) -> Self {
        Address {
            address_string: base58::check_encode_version(ADDRESS_VERSION, hash.as_bytes()),
            script_hash: *hash,
        }
    }

    /// The address of the single-signature account for `key`.
    pub fn from_public_key(key: &PublicKey) -> Self {
        Self::from_script_hash(&ScriptHash::from_public_key(key))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}

impl FromStr for Address {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.address_string)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_string(&s).map_err(serde::de::Error::custom)
    }
}
