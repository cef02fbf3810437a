/// NeoVM script type and builder.
///
/// A `Script` wraps raw bytecode and provides the emit helpers the SDK
/// needs: minimal data pushes, small-integer pushes, contract calls, and
/// the single-signature verification script that guards an account.

use std::fmt;

use neo_primitives::ec::{PublicKey, Signature};
use neo_primitives::ec::public_key::COMPRESSED_LEN;

use crate::address::ScriptHash;
use crate::chunk::{decode_script, push_data_prefix, ScriptChunk};
use crate::opcodes::*;
use crate::ScriptError;

/// Length of a single-signature verification script: push(33) + key + CHECKSIG.
const SIGNATURE_CONTRACT_LEN: usize = COMPRESSED_LEN + 2;

/// Longest API name SYSCALL accepts.
const MAX_SYSCALL_NAME: usize = 252;

/// A NeoVM script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        Ok(Script(hex::decode(hex_str)?))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create a script from an ASM string as produced by `to_asm`.
    ///
    /// Known mnemonics are emitted as opcodes; APPCALL, TAILCALL and
    /// SYSCALL take the following token as their hex operand; any other
    /// token is treated as hex push data.
    pub fn from_asm(asm: &str) -> Result<Self, ScriptError> {
        let mut script = Script::new();
        let mut tokens = asm.split_whitespace();
        while let Some(token) = tokens.next() {
            match string_to_opcode(token) {
                Some(op @ (APPCALL | TAILCALL | SYSCALL)) => {
                    let operand = tokens.next().ok_or(ScriptError::InvalidOpcodeData)?;
                    let bytes = hex::decode(operand).map_err(|_| ScriptError::InvalidOpcodeData)?;
                    match op {
                        SYSCALL => {
                            let name = String::from_utf8(bytes)
                                .map_err(|_| ScriptError::InvalidOpcodeData)?;
                            script.emit_syscall(&name)?;
                        }
                        _ => {
                            script.emit_app_call(&ScriptHash::from_bytes(&bytes)?, op == TAILCALL);
                        }
                    }
                }
                Some(op) => {
                    script.emit(op);
                }
                None => {
                    let data = hex::decode(token).map_err(|_| ScriptError::InvalidOpcodeData)?;
                    script.append_push_data(&data)?;
                }
            }
        }
        Ok(script)
    }

    /// The single-signature verification script for `key`:
    /// `PUSHBYTES33 <compressed key> CHECKSIG`.
    pub fn signature_contract(key: &PublicKey) -> Self {
        let mut bytes = Vec::with_capacity(SIGNATURE_CONTRACT_LEN);
        bytes.push(PUSHBYTES33);
        bytes.extend_from_slice(&key.to_compressed());
        bytes.push(CHECKSIG);
        Script(bytes)
    }

    /// The invocation script that feeds `sig` to a signature contract:
    /// `PUSHBYTES64 <r || s>`.
    pub fn signature_invocation(sig: &Signature) -> Self {
        let mut bytes = Vec::with_capacity(65);
        bytes.push(PUSHBYTES64);
        bytes.extend_from_slice(&sig.to_bytes());
        Script(bytes)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Convert the script to its ASM representation.
    ///
    /// # Returns
    /// A space-separated ASM string, or an empty string for empty or
    /// malformed scripts.
    pub fn to_asm(&self) -> String {
        match self.chunks() {
            Ok(chunks) => chunks
                .iter()
                .map(ScriptChunk::to_asm_string)
                .collect::<Vec<_>>()
                .join(" "),
            Err(_) => String::new(),
        }
    }

    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The script hash (Hash160) of these bytes.
    pub fn hash(&self) -> ScriptHash {
        ScriptHash::from_script(&self.0)
    }

    // -----------------------------------------------------------------------
    // Script classification
    // -----------------------------------------------------------------------

    /// Check if this is a single-signature verification script.
    pub fn is_signature_contract(&self) -> bool {
        let b = &self.0;
        b.len() == SIGNATURE_CONTRACT_LEN && b[0] == PUSHBYTES33 && b[SIGNATURE_CONTRACT_LEN - 1] == CHECKSIG
    }

    /// Extract the public key from a single-signature verification script.
    pub fn signature_contract_key(&self) -> Result<PublicKey, ScriptError> {
        if !self.is_signature_contract() {
            return Err(ScriptError::NotSignatureContract);
        }
        Ok(PublicKey::from_bytes(&self.0[1..1 + COMPRESSED_LEN])?)
    }

    /// Extract the signature from a single-signature invocation script.
    pub fn signature_invocation_sig(&self) -> Result<Signature, ScriptError> {
        match self.0.split_first() {
            Some((&PUSHBYTES64, sig)) if sig.len() == 64 => Ok(Signature::from_bytes(sig)?),
            _ => Err(ScriptError::InvalidScript(
                "not a single-signature invocation script".to_string(),
            )),
        }
    }

    /// Decode the script into chunks.
    pub fn chunks(&self) -> Result<Vec<ScriptChunk>, ScriptError> {
        decode_script(&self.0)
    }

    // -----------------------------------------------------------------------
    // Builder
    // -----------------------------------------------------------------------

    /// Append a bare opcode.
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.0.push(op);
        self
    }

    /// Append data bytes with the minimal push prefix.
    ///
    /// Direct push for up to 75 bytes, then PUSHDATA1, PUSHDATA2, PUSHDATA4.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<&mut Self, ScriptError> {
        let prefix = push_data_prefix(data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(self)
    }

    /// Push an integer.
    ///
    /// -1 and 0..=16 use their dedicated opcodes; other values are pushed
    /// as minimal little-endian two's-complement bytes.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        match value {
            -1 => self.emit(PUSHM1),
            0 => self.emit(PUSH0),
            1..=16 => self.emit(PUSH1 + (value as u8) - 1),
            _ => {
                let bytes = minimal_le_bytes(value);
                self.0.push(bytes.len() as u8);
                self.0.extend_from_slice(&bytes);
                self
            }
        }
    }

    /// Call another contract by script hash.
    pub fn emit_app_call(&mut self, hash: &ScriptHash, tail_call: bool) -> &mut Self {
        self.emit(if tail_call { TAILCALL } else { APPCALL });
        self.0.extend_from_slice(hash.as_bytes());
        self
    }

    /// Call an interop service by name.
    pub fn emit_syscall(&mut self, api: &str) -> Result<&mut Self, ScriptError> {
        let name = api.as_bytes();
        if name.is_empty() || name.len() > MAX_SYSCALL_NAME {
            return Err(ScriptError::InvalidScript(format!("invalid syscall name '{}'", api)));
        }
        self.emit(SYSCALL);
        self.0.push(name.len() as u8);
        self.0.extend_from_slice(name);
        Ok(self)
    }
}

/// Little-endian two's-complement bytes with redundant sign bytes removed.
fn minimal_le_bytes(value: i64) -> Vec<u8> {
    let mut bytes = value.to_le_bytes().to_vec();
    while bytes.len() > 1 {
        let last = bytes[bytes.len() - 1];
        let next_sign = bytes[bytes.len() - 2] & 0x80;
        if (last == 0x00 && next_sign == 0) || (last == 0xff && next_sign != 0) {
            bytes.pop();
        } else {
            break;
        }
    }
    bytes
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Script {
    /// Display the script as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
