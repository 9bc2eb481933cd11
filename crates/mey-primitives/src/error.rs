//! Common error types for primitives

use thiserror::Error;

use crate::address::AddressError;
use crate::amount::AmountError;
use crate::codec::CodecError;

/// Primitive operation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// Amount error
    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    /// Address error
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    /// Codec error
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}
