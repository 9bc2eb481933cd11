//! # mey-primitives
//!
//! Value types for the MeyCoin SDK.
//!
//! This crate provides the amounts, addresses and byte encodings that
//! every other SDK crate builds on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod encoding;
pub mod system_names;

mod address;
mod amount;
mod error;
mod unit;

pub use address::{
    decode_with_prefix, encode_with_prefix, Address, AddressError, AddressKind, AddressPrefix,
    ACCOUNT_NAME_LENGTH, ADDRESS_LENGTH,
};
pub use amount::{Amount, AmountArg, AmountError};
pub use codec::CodecError;
pub use encoding::{decode_to_bytes, encode_buffer, from_hex_string, to_hex_string, ByteEncoding};
pub use error::PrimitiveError;
pub use system_names::{is_system_name, set_system_names, system_names, SystemNames};
pub use unit::{Unit, DEFAULT_NETWORK_UNIT, DEFAULT_USER_UNIT};

/// Arbitrary-precision integer used for amounts
pub use num_bigint::BigInt;
