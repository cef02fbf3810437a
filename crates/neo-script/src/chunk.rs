//! Script chunk parsing and encoding.
//!
//! A script chunk is either an opcode or a data push with its associated bytes.
//! This module decodes raw NeoVM bytecode into structured chunks and encodes
//! push data with the correct PUSHDATA prefix.

use crate::opcodes::*;
use crate::ScriptError;

/// A single parsed element of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte. For direct pushes (1-75 bytes), this is the length.
    pub op: u8,
    /// The data payload, if this chunk is a push operation.
    pub data: Option<Vec<u8>>,
}

impl ScriptChunk {
    /// Render the chunk for an ASM dump.
    ///
    /// Data pushes render as hex. Opcodes with an inline operand (APPCALL,
    /// TAILCALL, SYSCALL) render as the name followed by the operand hex.
    pub fn to_asm_string(&self) -> String {
        match self.data {
            Some(ref data) if self.op <= PUSHDATA4 => hex::encode(data),
            Some(ref data) => format!("{} {}", opcode_to_string(self.op), hex::encode(data)),
            None => opcode_to_string(self.op),
        }
    }
}

/// Decode raw script bytes into a vector of `ScriptChunk` values.
///
/// Handles PUSHBYTES1..PUSHBYTES75 (direct push) and PUSHDATA1/2/4
/// (length-prefixed push). APPCALL/TAILCALL carry their 20-byte script
/// hash operand as data, and SYSCALL its 1-byte length-prefixed API name.
/// All other bytes become bare opcode chunks.
///
/// # Returns
/// A vector of parsed chunks, or `DataTooSmall` if a push runs past the end.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let op = bytes[pos];
        pos += 1;

        let length = match op {
            PUSHBYTES1..=PUSHBYTES75 => op as usize,
            PUSHDATA1 => read_len(bytes, &mut pos, 1)?,
            PUSHDATA2 => read_len(bytes, &mut pos, 2)?,
            PUSHDATA4 => read_len(bytes, &mut pos, 4)?,
            APPCALL | TAILCALL => 20,
            SYSCALL => read_len(bytes, &mut pos, 1)?,
            _ => {
                chunks.push(ScriptChunk { op, data: None });
                continue;
            }
        };
        if bytes.len() - pos < length {
            return Err(ScriptError::DataTooSmall);
        }
        let data = bytes[pos..pos + length].to_vec();
        chunks.push(ScriptChunk { op, data: Some(data) });
        pos += length;
    }

    Ok(chunks)
}

/// Read a `width`-byte little-endian length operand.
fn read_len(bytes: &[u8], pos: &mut usize, width: usize) -> Result<usize, ScriptError> {
    if bytes.len() - *pos < width {
        return Err(ScriptError::DataTooSmall);
    }
    let mut buf = [0u8; 4];
    buf[..width].copy_from_slice(&bytes[*pos..*pos + width]);
    *pos += width;
    Ok(u32::from_le_bytes(buf) as usize)
}

/// Compute the push prefix for a data payload of the given length.
///
/// Lengths up to 75 use a single PUSHBYTESn byte; longer data uses the
/// smallest PUSHDATA form that fits.
///
/// # Returns
/// The prefix bytes, or `DataTooBig` if the length exceeds `u32::MAX`.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>, ScriptError> {
    if data_len <= PUSHBYTES75 as usize {
        Ok(vec![data_len as u8])
    } else if data_len <= 0xff {
        Ok(vec![PUSHDATA1, data_len as u8])
    } else if data_len <= 0xffff {
        let mut buf = vec![PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        Ok(buf)
    } else if data_len <= 0xffff_ffff {
        let mut buf = vec![PUSHDATA4];
        buf.extend_from_slice(&(data_len as u32).to_le_bytes());
        Ok(buf)
    } else {
        Err(ScriptError::DataTooBig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_verification_script() {
        let script = hex::decode(
            "210398b8d209365a197311d1b288424eaea556f6235f5730598dede5647f6a11d99aac",
        )
        .unwrap();
        let chunks = decode_script(&script).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].op, 0x21);
        assert_eq!(chunks[0].data.as_ref().map(Vec::len), Some(33));
        assert_eq!(chunks[1], ScriptChunk { op: CHECKSIG, data: None });
    }

    #[test]
    fn test_decode_appcall_operand() {
        let mut script = vec![PUSH0, APPCALL];
        script.extend_from_slice(&[0xab; 20]);
        script.push(RET);
        let chunks = decode_script(&script).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].op, APPCALL);
        assert_eq!(chunks[1].data, Some(vec![0xab; 20]));
        assert_eq!(chunks[2].op, RET);
    }

    #[test]
    fn test_decode_syscall_operand() {
        let mut script = vec![SYSCALL, 4];
        script.extend_from_slice(b"Neo.");
        let chunks = decode_script(&script).unwrap();
        assert_eq!(chunks, vec![ScriptChunk { op: SYSCALL, data: Some(b"Neo.".to_vec()) }]);
        assert_eq!(chunks[0].to_asm_string(), "SYSCALL 4e656f2e");
    }

    #[test]
    fn test_decode_pushdata_forms() {
        let mut script = vec![PUSHDATA1, 76];
        script.extend_from_slice(&[1u8; 76]);
        script.extend_from_slice(&[PUSHDATA2, 0x00, 0x01]);
        script.extend_from_slice(&[2u8; 256]);
        let chunks = decode_script(&script).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].data.as_ref().map(Vec::len), Some(76));
        assert_eq!(chunks[1].op, PUSHDATA2);
        assert_eq!(chunks[1].data.as_ref().map(Vec::len), Some(256));
    }

    #[test]
    fn test_decode_truncated() {
        assert!(decode_script(&[0x05, 0x01, 0x02]).is_err());
        assert!(decode_script(&[PUSHDATA1]).is_err());
        assert!(decode_script(&[PUSHDATA2, 0x01]).is_err());
        assert!(decode_script(&[PUSHDATA4, 0x10, 0, 0, 0, 0x01]).is_err());
        assert!(decode_script(&[APPCALL, 0x01]).is_err());
    }

    #[test]
    fn test_push_data_prefix_boundaries() {
        assert_eq!(push_data_prefix(0).unwrap(), vec![0x00]);
        assert_eq!(push_data_prefix(75).unwrap(), vec![0x4b]);
        assert_eq!(push_data_prefix(76).unwrap(), vec![PUSHDATA1, 76]);
        assert_eq!(push_data_prefix(255).unwrap(), vec![PUSHDATA1, 0xff]);
        assert_eq!(push_data_prefix(256).unwrap(), vec![PUSHDATA2, 0x00, 0x01]);
        assert_eq!(push_data_prefix(0x10000).unwrap(), vec![PUSHDATA4, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn test_chunk_asm() {
        let push = ScriptChunk { op: 0x02, data: Some(vec![0xbe, 0xef]) };
        assert_eq!(push.to_asm_string(), "beef");
        let op = ScriptChunk { op: CHECKSIG, data: None };
        assert_eq!(op.to_asm_string(), "CHECKSIG");
    }
}
