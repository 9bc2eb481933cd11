//! Account addresses and names
//!
//! An address is either 33 bytes of key material, shown as base58check with
//! the account prefix byte, or a short human-chosen name shown as ASCII.
//! Fixed-width wire fields zero-pad names, so byte input is re-classified
//! after stripping trailing zeros.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

use crate::codec::{base58check, CodecError};
use crate::system_names::{self, SystemNames};

/// Maximum byte length of a user-chosen name
pub const ACCOUNT_NAME_LENGTH: usize = 12;

/// Byte length of a binary address (compressed public key)
pub const ADDRESS_LENGTH: usize = 33;

/// Address parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Base58check decoding failed
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Decoded payload carries the wrong namespace byte
    #[error("invalid address prefix ({0})")]
    InvalidPrefix(u8),

    /// Decoded payload has the wrong size (prefix excluded)
    #[error("invalid address length ({0})")]
    InvalidLength(usize),

    /// String is neither a name nor a decodable address
    #[error("Address \"{input}\" could not be parsed as a base58-check encoded string and is not a valid name: {source}")]
    Parse {
        /// Rejected input
        input: String,
        /// Underlying decode failure
        source: Box<AddressError>,
    },
}

/// Namespace byte placed before base58check payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AddressPrefix {
    /// Account address
    Account = 0x42,
    /// Contract address
    Contract = 0xC0,
    /// Exported private key
    PrivateKey = 0xAA,
}

impl AddressPrefix {
    /// Raw prefix byte
    pub fn byte(self) -> u8 {
        self as u8
    }
}

/// Base58check of `prefix || payload`
pub fn encode_with_prefix(prefix: AddressPrefix, payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + 1);
    buf.push(prefix.byte());
    buf.extend_from_slice(payload);
    base58check::encode(&buf)
}

/// Decode base58check, check the prefix byte and the payload length
pub fn decode_with_prefix(
    prefix: AddressPrefix,
    s: &str,
    expected_len: usize,
) -> Result<Vec<u8>, AddressError> {
    let decoded = base58check::decode(s)?;
    match decoded.first() {
        Some(&byte) if byte == prefix.byte() => {}
        Some(&byte) => return Err(AddressError::InvalidPrefix(byte)),
        None => return Err(AddressError::InvalidLength(0)),
    }
    if decoded.len() != expected_len + 1 {
        return Err(AddressError::InvalidLength(decoded.len() - 1));
    }
    Ok(decoded[1..].to_vec())
}

/// Borrowed view of what an address holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind<'a> {
    /// Key-derived address bytes (prefix excluded)
    Binary(&'a [u8]),
    /// Human-readable name
    Name(&'a str),
}

/// Account address or name.
///
/// Equality and hashing compare the raw bytes only.
#[derive(Clone, Default)]
pub struct Address {
    value: Vec<u8>,
    is_name: bool,
    encoded: OnceLock<String>,
}

fn qualifies_as_name(bytes: &[u8], names: &dyn Fn(&str) -> bool) -> bool {
    bytes.len() <= ACCOUNT_NAME_LENGTH || names(String::from_utf8_lossy(bytes).as_ref())
}

impl Address {
    /// Parse a name or a base58check account address, using the
    /// process-wide system-name list
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        Self::parse_impl(s, &system_names::is_system_name)
    }

    /// Like [`Address::parse`] with an explicit system-name list
    pub fn parse_with(s: &str, names: &SystemNames) -> Result<Self, AddressError> {
        Self::parse_impl(s, &|n: &str| names.contains(n))
    }

    fn parse_impl(s: &str, names: &dyn Fn(&str) -> bool) -> Result<Self, AddressError> {
        if s.len() <= ACCOUNT_NAME_LENGTH || names(s) {
            return Ok(Address {
                value: s.as_bytes().to_vec(),
                is_name: true,
                encoded: OnceLock::from(s.to_string()),
            });
        }

        let value = Self::decode(s).map_err(|e| AddressError::Parse {
            input: s.to_string(),
            source: Box::new(e),
        })?;
        let address = Address {
            value,
            is_name: false,
            encoded: OnceLock::from(s.to_string()),
        };
        Ok(address.rederive(names))
    }

    /// Wrap raw bytes, recovering zero-padded names. Uses the process-wide
    /// system-name list.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_bytes_impl(bytes.into(), &system_names::is_system_name)
    }

    /// Like [`Address::from_bytes`] with an explicit system-name list
    pub fn from_bytes_with(bytes: impl Into<Vec<u8>>, names: &SystemNames) -> Self {
        Self::from_bytes_impl(bytes.into(), &|n: &str| names.contains(n))
    }

    fn from_bytes_impl(value: Vec<u8>, names: &dyn Fn(&str) -> bool) -> Self {
        Address {
            value,
            is_name: false,
            encoded: OnceLock::new(),
        }
        .rederive(names)
    }

    /// Rebuild an address from previously computed fields (bytes, name flag,
    /// text form), e.g. when copying from another address representation
    pub fn from_encoded_parts(value: impl Into<Vec<u8>>, is_name: bool, encoded: String) -> Self {
        let address = Address {
            value: value.into(),
            is_name,
            encoded: OnceLock::from(encoded),
        };
        if is_name {
            address
        } else {
            address.rederive(&system_names::is_system_name)
        }
    }

    /// Strip trailing zero bytes and reclassify as a name if the rest is one
    fn rederive(self, names: &dyn Fn(&str) -> bool) -> Self {
        if self.is_name {
            return self;
        }
        let end = self
            .value
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |i| i + 1);
        let stripped = &self.value[..end];
        if qualifies_as_name(stripped, names) {
            return Address {
                value: stripped.to_vec(),
                is_name: true,
                encoded: OnceLock::new(),
            };
        }
        self
    }

    /// Base58check account string to address bytes (prefix removed)
    pub fn decode(s: &str) -> Result<Vec<u8>, AddressError> {
        decode_with_prefix(AddressPrefix::Account, s, ADDRESS_LENGTH)
    }

    /// Address bytes to base58check account string. Empty input encodes to
    /// the empty string (null address).
    pub fn encode(bytes: &[u8]) -> String {
        if bytes.is_empty() {
            return String::new();
        }
        encode_with_prefix(AddressPrefix::Account, bytes)
    }

    /// True if `name` is on the process-wide system-name list
    pub fn is_system_name(name: &str) -> bool {
        system_names::is_system_name(name)
    }

    /// Replace the process-wide system-name list
    pub fn set_system_names(names: SystemNames) {
        system_names::set_system_names(names);
    }

    /// Raw bytes without prefix
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    /// Byte length
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// True for the null address (no bytes)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// True if this address is a name rather than key material
    pub fn is_name(&self) -> bool {
        self.is_name
    }

    /// Tagged view of the address
    pub fn kind(&self) -> AddressKind<'_> {
        if self.is_name {
            AddressKind::Name(self.encoded())
        } else {
            AddressKind::Binary(&self.value)
        }
    }

    /// Byte-for-byte equality
    pub fn equal(&self, other: &Address) -> bool {
        self.value == other.value
    }

    /// True for names on the process-wide system-name list.
    ///
    /// The list is read at call time, even for addresses built with
    /// [`Address::parse_with`] or [`Address::from_bytes_with`]. Use
    /// [`Address::is_system_address_with`] for those.
    pub fn is_system_address(&self) -> bool {
        self.is_name && Self::is_system_name(self.encoded())
    }

    /// True for names on `names`
    pub fn is_system_address_with(&self, names: &SystemNames) -> bool {
        self.is_name && names.contains(self.encoded())
    }

    /// Text form, computed once
    pub fn encoded(&self) -> &str {
        self.encoded.get_or_init(|| {
            if self.is_name {
                String::from_utf8_lossy(&self.value).into_owned()
            } else {
                Self::encode(&self.value)
            }
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoded())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encoded())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Address::parse(s)
    }
}

impl From<Vec<u8>> for Address {
    fn from(bytes: Vec<u8>) -> Self {
        Address::from_bytes(bytes)
    }
}

impl From<&[u8]> for Address {
    fn from(bytes: &[u8]) -> Self {
        Address::from_bytes(bytes)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Address::from_bytes(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Address {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.encoded())
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Address::parse(&s).map_err(de::Error::custom)
        }
    }
}
