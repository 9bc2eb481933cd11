//! # mey-crypto
//!
//! Cryptographic primitives for the MeyCoin SDK.
//!
//! - secp256k1 key pairs and private key export
//! - Transaction hash collaborator trait
//! - DER signing and verification over transaction hashes

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod hash;
mod keys;
mod signature;

pub use error::CryptoError;
pub use hash::{double_sha256, hash_transaction, sha256, TxHasher};
pub use keys::{KeyPair, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};
pub use signature::{
    sign_message, sign_message_der, sign_transaction, verify_signature, verify_signature_der,
    verify_tx_signature,
};
