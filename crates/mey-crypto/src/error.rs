//! Cryptographic errors

use mey_primitives::{AddressError, CodecError};
use thiserror::Error;

/// Cryptographic operation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Signing failed
    #[error("signing failed: {0}")]
    SigningFailed(String),

    /// Signature text or DER bytes could not be decoded
    #[error("could not decode signature: {0}")]
    SignatureDecode(String),

    /// Operation needs a private key but the pair is public-only
    #[error("key pair has no private key")]
    MissingPrivateKey,

    /// Private key bytes are not a valid secp256k1 scalar
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Public key bytes are not a valid SEC1 point
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Encoded private key has a bad prefix, length or checksum
    #[error("invalid encoded private key: {0}")]
    EncodedPrivateKey(#[from] AddressError),

    /// Byte encoding error outside signature decoding
    #[error(transparent)]
    Codec(#[from] CodecError),
}
