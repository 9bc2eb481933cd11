//! Transaction hash collaborator
//!
//! Field canonicalization lives with the transaction type. This crate only
//! needs the resulting digest bytes.

use mey_primitives::{encode_buffer, ByteEncoding};

pub use mey_primitives::codec::{double_sha256, sha256};

/// A transaction that can produce its canonical hash
pub trait TxHasher {
    /// Canonical hash bytes. `include_signature` selects whether the
    /// signature field takes part; signing always uses `false`.
    fn hash(&self, include_signature: bool) -> Vec<u8>;
}

impl<T: TxHasher + ?Sized> TxHasher for &T {
    fn hash(&self, include_signature: bool) -> Vec<u8> {
        (**self).hash(include_signature)
    }
}

/// Unsigned transaction hash rendered in `enc`
pub fn hash_transaction<T: TxHasher + ?Sized>(tx: &T, enc: ByteEncoding) -> String {
    encode_buffer(&tx.hash(false), enc)
}
