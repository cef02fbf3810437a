//! Base58 encoding and decoding with optional checksum support.
//!
//! Provides raw Base58 encode/decode and Base58Check encode/decode (with a
//! double-SHA-256 checksum). Base58Check carries every NEO text encoding
//! that must survive a typo: addresses (version `0x17`) and WIF private
//! keys (version `0x80`).

use crate::PrimitivesError;
use crate::hash::sha256d;

/// Length of the Base58Check checksum suffix in bytes.
const CHECKSUM_LEN: usize = 4;

/// Encode a byte slice to a Base58 string.
///
/// Leading zero bytes are encoded as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for invalid characters.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended.
///
/// # Arguments
/// * `data` - The bytes to encode (typically version byte + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&payload)
}

/// Decode a Base58Check string, verifying the 4-byte checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// The payload without checksum, or `Checksum` when the checksum does not
/// match.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(PrimitivesError::InvalidBase58(
            "data too short for checksum".to_string()
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = sha256d(payload);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(PrimitivesError::Checksum("checksum mismatch".to_string()));
    }
    Ok(payload.to_vec())
}

/// Encode `version || payload` as Base58Check.
///
/// # Arguments
/// * `version` - The leading version byte.
/// * `payload` - The bytes following the version byte.
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode_version(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(version);
    data.extend_from_slice(payload);
    check_encode(&data)
}

/// Decode a Base58Check string and require a specific version byte.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
/// * `version` - The version byte the payload must start with.
///
/// # Returns
/// The payload after the version byte, or `Checksum` on a bad checksum or
/// an unexpected version.
pub fn check_decode_version(s: &str, version: u8) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = check_decode(s)?;
    match decoded.split_first() {
        Some((&v, payload)) if v == version => Ok(payload.to_vec()),
        Some((&v, _)) => Err(PrimitivesError::Checksum(format!(
            "invalid version 0x{:02x}, expected 0x{:02x}",
            v, version
        ))),
        None => Err(PrimitivesError::Checksum("missing version byte".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_empty_string() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base58_single_zero_byte() {
        assert_eq!(encode(&[0]), "1");
        assert_eq!(decode("1").unwrap(), vec![0]);
    }

    #[test]
    fn test_base58_decoded_hash() {
        let input = hex::decode("0123456789ABCDEF").unwrap();
        let encoded = encode(&input);
        assert_eq!(encoded, "C3CPq7c8PY");
        assert_eq!(decode("C3CPq7c8PY").unwrap(), input);
    }

    #[test]
    fn test_base58_leading_zeros() {
        let input = hex::decode("000000287FB4CD").unwrap();
        assert_eq!(encode(&input), "111233QC4");
        assert_eq!(decode("111233QC4").unwrap(), input);
    }

    #[test]
    fn test_base58_decode_invalid_character() {
        assert!(decode("invalid!@#$%").is_err());
        // '0', 'O', 'I' and 'l' are not in the alphabet.
        assert!(decode("0OIl").is_err());
    }

    #[test]
    fn test_base58_check_roundtrip() {
        let payload = hex::decode("174263d1f1b124778d66d847801fe7cb73dd4bef50").unwrap();
        let encoded = check_encode(&payload);
        assert_eq!(encoded, "AMpupnF6QweQXLfCtF4dR45FDdKbTXkLsr");
        assert_eq!(check_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_base58_check_bad_checksum() {
        let payload = vec![0x80, 0x01, 0x02, 0x03];
        let mut encoded = check_encode(&payload);
        let last = encoded.pop().unwrap();
        let replacement = if last == '1' { '2' } else { '1' };
        encoded.push(replacement);
        assert!(matches!(
            check_decode(&encoded),
            Err(PrimitivesError::Checksum(_))
        ));
    }

    #[test]
    fn test_check_decode_version() {
        let hash = hex::decode("4263d1f1b124778d66d847801fe7cb73dd4bef50").unwrap();
        let encoded = check_encode_version(0x17, &hash);
        assert_eq!(check_decode_version(&encoded, 0x17).unwrap(), hash);

        let err = check_decode_version(&encoded, 0x80).unwrap_err();
        assert!(matches!(err, PrimitivesError::Checksum(_)));
        assert!(err.to_string().contains("0x17"));
    }

    #[test]
    fn test_check_decode_too_short() {
        // "1" decodes to a single zero byte, shorter than the checksum.
        assert!(matches!(
            check_decode("1"),
            Err(PrimitivesError::InvalidBase58(_))
        ));
    }
}
