//! Base58 and base58check codecs
//!
//! Base58 uses the Bitcoin alphabet (no `0`, `O`, `I`, `l`). Base58check
//! appends the first four bytes of `SHA256(SHA256(payload))` before encoding.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Number of checksum bytes appended by base58check
pub const CHECKSUM_LENGTH: usize = 4;

/// Codec error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Base58check checksum did not match the payload
    #[error("invalid checksum")]
    InvalidChecksum,

    /// Input is not valid in the requested encoding
    #[error("decode error: {0}")]
    Decode(String),
}

/// SHA-256 digest
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Plain base58 (Bitcoin alphabet)
pub mod base58 {
    use super::CodecError;

    /// Encode bytes. Leading zero bytes become leading `1` characters;
    /// an empty buffer encodes to the empty string.
    pub fn encode(data: &[u8]) -> String {
        bs58::encode(data).into_string()
    }

    /// Decode a base58 string, the exact inverse of [`encode`]
    pub fn decode(s: &str) -> Result<Vec<u8>, CodecError> {
        bs58::decode(s)
            .into_vec()
            .map_err(|e| CodecError::Decode(e.to_string()))
    }
}

/// Base58 with a 4-byte double-SHA256 checksum
pub mod base58check {
    use super::{base58, double_sha256, CodecError, CHECKSUM_LENGTH};

    fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
        let hash = double_sha256(payload);
        let mut out = [0u8; CHECKSUM_LENGTH];
        out.copy_from_slice(&hash[..CHECKSUM_LENGTH]);
        out
    }

    /// Encode `payload || checksum(payload)` as base58
    pub fn encode(payload: &[u8]) -> String {
        let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
        buf.extend_from_slice(payload);
        buf.extend_from_slice(&checksum(payload));
        base58::encode(&buf)
    }

    /// Decode and verify the trailing checksum, returning the payload
    pub fn decode(s: &str) -> Result<Vec<u8>, CodecError> {
        let mut buf = base58::decode(s)?;
        if buf.len() < CHECKSUM_LENGTH {
            return Err(CodecError::InvalidChecksum);
        }
        let split = buf.len() - CHECKSUM_LENGTH;
        let expected = checksum(&buf[..split]);
        let mismatch = buf[split..]
            .iter()
            .zip(expected.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));
        if mismatch != 0 {
            return Err(CodecError::InvalidChecksum);
        }
        buf.truncate(split);
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== base58 ====================

    #[test]
    fn test_base58_empty() {
        assert_eq!(base58::encode(&[]), "");
        assert_eq!(base58::decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base58_leading_zeros() {
        assert_eq!(base58::encode(&[0, 0, 1]), "112");
        assert_eq!(base58::decode("112").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_base58_known_vector() {
        assert_eq!(base58::encode(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(base58::decode("StV1DL6CwTryKyV").unwrap(), b"hello world");
    }

    #[test]
    fn test_base58_rejects_excluded_characters() {
        for bad in ["0abc", "Oabc", "Iabc", "labc"] {
            match base58::decode(bad) {
                Err(CodecError::Decode(_)) => {}
                other => panic!("expected decode error for {bad}, got {other:?}"),
            }
        }
    }

    // ==================== base58check ====================

    #[test]
    fn test_base58check_known_vector() {
        // Bitcoin genesis coinbase address
        let payload = hex::decode("0062e907b15cbf27d5425399ebf6f0fb50ebb88f18").unwrap();
        let encoded = base58check::encode(&payload);
        assert_eq!(encoded, "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        assert_eq!(base58check::decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_base58check_detects_corruption() {
        let encoded = base58check::encode(b"payload");
        let mut chars: Vec<char> = encoded.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == '2' { '3' } else { '2' };
        let corrupted: String = chars.into_iter().collect();
        assert_eq!(
            base58check::decode(&corrupted),
            Err(CodecError::InvalidChecksum)
        );
    }

    #[test]
    fn test_base58check_too_short() {
        let short = base58::encode(&[1, 2, 3]);
        assert_eq!(base58check::decode(&short), Err(CodecError::InvalidChecksum));
    }

    #[test]
    fn test_double_sha256_empty() {
        assert_eq!(
            hex::encode(double_sha256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }
}
