//! Byte encodings accepted and produced across the SDK

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::codec::{base58, base58check, CodecError};

/// Text encoding for byte buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteEncoding {
    /// Plain base58
    #[default]
    Base58,
    /// Base58 with a 4-byte checksum
    Base58Check,
    /// Lowercase hex without prefix
    Hex,
    /// Standard base64 with padding
    Base64,
}

impl ByteEncoding {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ByteEncoding::Base58 => "base58",
            ByteEncoding::Base58Check => "base58check",
            ByteEncoding::Hex => "hex",
            ByteEncoding::Base64 => "base64",
        }
    }
}

impl fmt::Display for ByteEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base58" => Ok(ByteEncoding::Base58),
            "base58check" => Ok(ByteEncoding::Base58Check),
            "hex" => Ok(ByteEncoding::Hex),
            "base64" => Ok(ByteEncoding::Base64),
            other => Err(CodecError::Decode(format!("unknown byte encoding: {other}"))),
        }
    }
}

/// Encode bytes as text
pub fn encode_buffer(data: &[u8], enc: ByteEncoding) -> String {
    match enc {
        ByteEncoding::Base58 => base58::encode(data),
        ByteEncoding::Base58Check => base58check::encode(data),
        ByteEncoding::Hex => hex::encode(data),
        ByteEncoding::Base64 => BASE64.encode(data),
    }
}

/// Decode text produced by [`encode_buffer`]
pub fn decode_to_bytes(s: &str, enc: ByteEncoding) -> Result<Vec<u8>, CodecError> {
    match enc {
        ByteEncoding::Base58 => base58::decode(s),
        ByteEncoding::Base58Check => base58check::decode(s),
        ByteEncoding::Hex => hex::decode(s).map_err(|e| CodecError::Decode(e.to_string())),
        ByteEncoding::Base64 => BASE64
            .decode(s)
            .map_err(|e| CodecError::Decode(e.to_string())),
    }
}

/// Render bytes as lowercase hex.
///
/// With `prefixed`, the result carries `0x` and an empty or single-zero
/// buffer renders as `0x0`.
pub fn to_hex_string(bytes: &[u8], prefixed: bool) -> String {
    let hex = hex::encode(bytes);
    if !prefixed {
        return hex;
    }
    if hex.is_empty() || hex == "00" {
        return "0x0".to_string();
    }
    format!("0x{hex}")
}

/// Parse hex, left-padding odd-length input with a single `0`
pub fn from_hex_string(s: &str) -> Result<Vec<u8>, CodecError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    let decoded = if s.len() % 2 == 1 {
        hex::decode(format!("0{s}"))
    } else {
        hex::decode(s)
    };
    decoded.map_err(|_| CodecError::Decode("cannot parse string as hex".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ByteEncoding; 4] = [
        ByteEncoding::Base58,
        ByteEncoding::Base58Check,
        ByteEncoding::Hex,
        ByteEncoding::Base64,
    ];

    #[test]
    fn test_encoding_names_roundtrip() {
        for enc in ALL {
            assert_eq!(enc.as_str().parse::<ByteEncoding>().unwrap(), enc);
        }
        assert!("utf8".parse::<ByteEncoding>().is_err());
    }

    #[test]
    fn test_encode_decode_every_encoding() {
        let data = [0u8, 0, 0x12, 0xab, 0xff, 0x42];
        for enc in ALL {
            let text = encode_buffer(&data, enc);
            assert_eq!(decode_to_bytes(&text, enc).unwrap(), data, "{enc}");
        }
    }

    #[test]
    fn test_known_renderings() {
        let data = b"mey";
        assert_eq!(encode_buffer(data, ByteEncoding::Hex), "6d6579");
        assert_eq!(encode_buffer(data, ByteEncoding::Base64), "bWV5");
    }

    #[test]
    fn test_malformed_input_is_decode_error() {
        assert!(matches!(
            decode_to_bytes("zz", ByteEncoding::Hex),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode_to_bytes("!!!", ByteEncoding::Base64),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode_to_bytes("0OIl", ByteEncoding::Base58),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn test_hex_string_helpers() {
        assert_eq!(to_hex_string(&[], true), "0x0");
        assert_eq!(to_hex_string(&[0], true), "0x0");
        assert_eq!(to_hex_string(&[1, 0xab], true), "0x01ab");
        assert_eq!(to_hex_string(&[1, 0xab], false), "01ab");

        assert_eq!(from_hex_string("").unwrap(), Vec::<u8>::new());
        assert_eq!(from_hex_string("abc").unwrap(), vec![0x0a, 0xbc]);
        assert!(from_hex_string("xy").is_err());
    }
}
