//! Transaction attributes.

use neo_primitives::util::{NeoReader, NeoWriter};

use crate::TransactionError;

/// Attribute usage codes.
pub mod usage {
    pub const CONTRACT_HASH: u8 = 0x00;
    pub const ECDH02: u8 = 0x02;
    pub const ECDH03: u8 = 0x03;
    /// An extra script hash whose witness the transaction must carry.
    pub const SCRIPT: u8 = 0x20;
    pub const VOTE: u8 = 0x30;
    pub const DESCRIPTION_URL: u8 = 0x81;
    pub const DESCRIPTION: u8 = 0x90;
    pub const HASH1: u8 = 0xa1;
    /// Free-form bytes; commonly a nonce that makes otherwise identical
    /// transactions distinct.
    pub const REMARK: u8 = 0xf0;
}

/// A single attribute: `usage(1) | varint-length data`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionAttribute {
    pub usage: u8,
    pub data: Vec<u8>,
}

impl TransactionAttribute {
    pub fn new(usage: u8, data: impl Into<Vec<u8>>) -> Self {
        TransactionAttribute { usage, data: data.into() }
    }

    pub fn read_from(reader: &mut NeoReader) -> Result<Self, TransactionError> {
        let usage = reader
            .read_u8()
            .map_err(|e| TransactionError::reading("attribute usage", e))?;
        let data = reader
            .read_var_bytes()
            .map_err(|e| TransactionError::reading("attribute data", e))?
            .to_vec();
        Ok(TransactionAttribute { usage, data })
    }

    pub fn write_to(&self, writer: &mut NeoWriter) {
        writer.write_u8(self.usage);
        writer.write_var_bytes(&self.data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_encoding() {
        let attr = TransactionAttribute::new(usage::REMARK, b"nonce".to_vec());
        let mut w = NeoWriter::new();
        attr.write_to(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(hex::encode(&bytes), "f0056e6f6e6365");
        let mut r = NeoReader::new(&bytes);
        assert_eq!(TransactionAttribute::read_from(&mut r).unwrap(), attr);
    }

    #[test]
    fn test_attribute_truncated_data() {
        let mut r = NeoReader::new(&[usage::SCRIPT, 0x14, 0x01]);
        assert!(TransactionAttribute::read_from(&mut r).is_err());
    }
}
