//! SDK error types

use mey_crypto::CryptoError;
use mey_primitives::{AddressError, AmountError, CodecError, PrimitiveError};
use thiserror::Error;

/// SDK error type
#[derive(Debug, Error)]
pub enum SdkError {
    /// Amount, address or encoding error
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),

    /// Key or signature error
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Invalid private key input
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Invalid hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl From<hex::FromHexError> for SdkError {
    fn from(e: hex::FromHexError) -> Self {
        SdkError::InvalidHex(e.to_string())
    }
}

impl From<toml::de::Error> for SdkError {
    fn from(e: toml::de::Error) -> Self {
        SdkError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for SdkError {
    fn from(e: toml::ser::Error) -> Self {
        SdkError::Config(e.to_string())
    }
}

impl From<AmountError> for SdkError {
    fn from(e: AmountError) -> Self {
        SdkError::Primitive(e.into())
    }
}

impl From<AddressError> for SdkError {
    fn from(e: AddressError) -> Self {
        SdkError::Primitive(e.into())
    }
}

impl From<CodecError> for SdkError {
    fn from(e: CodecError) -> Self {
        SdkError::Primitive(e.into())
    }
}
