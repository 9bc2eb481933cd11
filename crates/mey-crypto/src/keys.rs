//! secp256k1 key pairs

use std::fmt;

use k256::ecdsa::{SigningKey, VerifyingKey};
use mey_primitives::{decode_with_prefix, encode_with_prefix, Address, AddressPrefix};
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::CryptoError;

/// Byte length of a raw private key
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Byte length of a compressed SEC1 public key
pub const PUBLIC_KEY_LENGTH: usize = 33;

enum KeyMaterial {
    PublicOnly(VerifyingKey),
    Private {
        signing_key: SigningKey,
        verifying_key: VerifyingKey,
    },
}

/// Public key, optionally with its private key.
///
/// Public-only pairs can verify but not sign. Not `Clone`: private key
/// material is never duplicated.
pub struct KeyPair {
    key: KeyMaterial,
}

impl KeyPair {
    /// Fresh random private key
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::random(&mut OsRng))
    }

    /// Pair from a 32-byte private key
    pub fn from_private_key(private_key: &[u8]) -> Result<Self, CryptoError> {
        if private_key.len() != PRIVATE_KEY_LENGTH {
            return Err(CryptoError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_LENGTH,
                private_key.len()
            )));
        }
        let signing_key = SigningKey::from_slice(private_key)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Public-only pair from SEC1 bytes (compressed or uncompressed)
    pub fn from_public_key(public_key: &[u8]) -> Result<Self, CryptoError> {
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(KeyPair {
            key: KeyMaterial::PublicOnly(verifying_key),
        })
    }

    /// Pair from a base58check private key with the `0xAA` prefix
    pub fn from_encoded_private_key(encoded: &str) -> Result<Self, CryptoError> {
        let mut raw = decode_with_prefix(AddressPrefix::PrivateKey, encoded, PRIVATE_KEY_LENGTH)?;
        let pair = Self::from_private_key(&raw);
        raw.zeroize();
        pair
    }

    /// Pair from an existing signing key
    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        let verifying_key = *signing_key.verifying_key();
        KeyPair {
            key: KeyMaterial::Private {
                signing_key,
                verifying_key,
            },
        }
    }

    /// True if this pair can sign
    pub fn has_private_key(&self) -> bool {
        matches!(self.key, KeyMaterial::Private { .. })
    }

    /// Verifying half
    pub fn verifying_key(&self) -> &VerifyingKey {
        match &self.key {
            KeyMaterial::PublicOnly(vk) => vk,
            KeyMaterial::Private { verifying_key, .. } => verifying_key,
        }
    }

    /// Signing half, if present
    pub fn signing_key(&self) -> Option<&SigningKey> {
        match &self.key {
            KeyMaterial::PublicOnly(_) => None,
            KeyMaterial::Private { signing_key, .. } => Some(signing_key),
        }
    }

    /// Compressed SEC1 public key (33 bytes)
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    /// Account address of the public key
    pub fn address(&self) -> Address {
        Address::from_bytes(self.public_key_bytes())
    }

    /// Private key as base58check with the `0xAA` prefix
    pub fn encode_private_key(&self) -> Result<String, CryptoError> {
        let signing_key = self.signing_key().ok_or(CryptoError::MissingPrivateKey)?;
        let mut raw: [u8; PRIVATE_KEY_LENGTH] = signing_key.to_bytes().into();
        let encoded = encode_with_prefix(AddressPrefix::PrivateKey, &raw);
        raw.zeroize();
        Ok(encoded)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address())
            .field("has_private_key", &self.has_private_key())
            .finish()
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.verifying_key() == other.verifying_key()
    }
}

impl Eq for KeyPair {}
