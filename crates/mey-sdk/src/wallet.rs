//! Wallet and account management

use mey_crypto::{
    sign_message, sign_transaction, verify_tx_signature, KeyPair, TxHasher, PRIVATE_KEY_LENGTH,
};
use mey_primitives::{Address, ByteEncoding};
use zeroize::Zeroize;

use crate::SdkError;

/// Wallet for managing a private key and signing
///
/// Note: Clone is intentionally not implemented to prevent accidental key duplication.
/// Use `from_private_key` to create a new wallet with the same key if needed.
pub struct Wallet {
    key: KeyPair,
    address: Address,
}

impl Wallet {
    /// Create a new random wallet
    pub fn new_random() -> Self {
        Self::from_key_pair(KeyPair::generate())
    }

    fn from_key_pair(key: KeyPair) -> Self {
        let address = key.address();
        Self { key, address }
    }

    /// Create a wallet from a 32-byte private key
    pub fn from_private_key(key: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Self, SdkError> {
        let key = KeyPair::from_private_key(key)
            .map_err(|e| SdkError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self::from_key_pair(key))
    }

    /// Create a wallet from a hex-encoded private key
    ///
    /// Accepts both with and without "0x" prefix.
    pub fn from_private_key_hex(hex: &str) -> Result<Self, SdkError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let mut bytes = hex::decode(hex)?;
        if bytes.len() != PRIVATE_KEY_LENGTH {
            bytes.zeroize();
            return Err(SdkError::InvalidPrivateKey(format!(
                "Expected {} bytes, got {}",
                PRIVATE_KEY_LENGTH,
                bytes.len()
            )));
        }

        let mut key = [0u8; PRIVATE_KEY_LENGTH];
        key.copy_from_slice(&bytes);
        bytes.zeroize();

        let result = Self::from_private_key(&key);
        key.zeroize();
        result
    }

    /// Create a wallet from a base58check private key (`0xAA` prefix)
    pub fn from_encoded_private_key(encoded: &str) -> Result<Self, SdkError> {
        let key = KeyPair::from_encoded_private_key(encoded)
            .map_err(|e| SdkError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self::from_key_pair(key))
    }

    /// Export the private key as base58check
    pub fn export_private_key(&self) -> Result<String, SdkError> {
        Ok(self.key.encode_private_key()?)
    }

    /// Get the wallet's address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Get the wallet's key pair
    pub fn key_pair(&self) -> &KeyPair {
        &self.key
    }

    /// Compressed public key
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.key.public_key_bytes()
    }

    /// Sign a precomputed hash, DER signature rendered in `enc`
    pub fn sign_hash(&self, hash: &[u8], enc: ByteEncoding) -> Result<String, SdkError> {
        Ok(sign_message(hash, &self.key, enc)?)
    }

    /// Sign the unsigned canonical hash of `tx`
    pub fn sign_transaction<T: TxHasher + ?Sized>(
        &self,
        tx: &T,
        enc: ByteEncoding,
    ) -> Result<String, SdkError> {
        Ok(sign_transaction(tx, &self.key, enc)?)
    }

    /// Check a transaction signature against this wallet's key
    pub fn verify_transaction<T: TxHasher + ?Sized>(
        &self,
        tx: &T,
        signature: &str,
        enc: ByteEncoding,
    ) -> Result<bool, SdkError> {
        Ok(verify_tx_signature(tx, &self.key, signature, enc)?)
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
