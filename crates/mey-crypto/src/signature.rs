//! ECDSA signing pipeline (secp256k1, DER envelopes)

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::Signature;
use mey_primitives::{decode_to_bytes, encode_buffer, ByteEncoding};

use crate::{CryptoError, KeyPair, TxHasher};

/// Sign a precomputed hash and return the DER-encoded signature
pub fn sign_message_der(msg_hash: &[u8], key: &KeyPair) -> Result<Vec<u8>, CryptoError> {
    let signing_key = key.signing_key().ok_or(CryptoError::MissingPrivateKey)?;
    let signature: Signature = signing_key
        .sign_prehash(msg_hash)
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

/// Sign a precomputed hash, rendering the DER signature in `enc`
/// (base64 by convention)
pub fn sign_message(
    msg_hash: &[u8],
    key: &KeyPair,
    enc: ByteEncoding,
) -> Result<String, CryptoError> {
    let der = sign_message_der(msg_hash, key)?;
    Ok(encode_buffer(&der, enc))
}

/// Sign the unsigned canonical hash of `tx`
pub fn sign_transaction<T: TxHasher + ?Sized>(
    tx: &T,
    key: &KeyPair,
    enc: ByteEncoding,
) -> Result<String, CryptoError> {
    sign_message(&tx.hash(false), key, enc)
}

/// Verify a DER signature over `msg`. Malformed DER is an error, not `false`.
///
/// High-S signatures are accepted: they are normalized before checking.
pub fn verify_signature_der(msg: &[u8], key: &KeyPair, der: &[u8]) -> Result<bool, CryptoError> {
    let signature =
        Signature::from_der(der).map_err(|e| CryptoError::SignatureDecode(e.to_string()))?;
    // k256 only verifies low-S
    let signature = signature.normalize_s().unwrap_or(signature);
    Ok(key.verifying_key().verify_prehash(msg, &signature).is_ok())
}

/// Verify an encoded DER signature over `msg`
pub fn verify_signature(
    msg: &[u8],
    key: &KeyPair,
    signature: &str,
    enc: ByteEncoding,
) -> Result<bool, CryptoError> {
    let der = decode_to_bytes(signature, enc)
        .map_err(|e| CryptoError::SignatureDecode(e.to_string()))?;
    verify_signature_der(msg, key, &der)
}

/// Verify a signature against the unsigned canonical hash of `tx`
pub fn verify_tx_signature<T: TxHasher + ?Sized>(
    tx: &T,
    key: &KeyPair,
    signature: &str,
    enc: ByteEncoding,
) -> Result<bool, CryptoError> {
    verify_signature(&tx.hash(false), key, signature, enc)
}
