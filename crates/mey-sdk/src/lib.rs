//! # mey-sdk
//!
//! Rust SDK for the MeyCoin blockchain.
//!
//! ## Features
//!
//! - **Wallet**: Account management and transaction signing
//! - **Retry**: Stepped exponential backoff and long polling for
//!   eventually consistent queries
//! - **SdkConfig**: TOML configuration for system names and timing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use mey_sdk::{long_polling, Amount, Wallet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let wallet = Wallet::new_random();
//!     println!("Address: {}", wallet.address());
//!
//!     let fee = Amount::new("0.5 mey")?;
//!     println!("Fee: {} ({})", fee, fee.to_json());
//!
//!     // Wait until a (mock) query reports inclusion
//!     let height = long_polling(
//!         || async { Ok::<_, std::io::Error>(Some(42u64)) },
//!         |block| block.is_some(),
//!         Duration::from_millis(500),
//!         Duration::from_secs(5),
//!     )
//!     .await?;
//!     println!("Included at {:?}", height);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
pub mod retry;
mod wallet;

pub use config::SdkConfig;
pub use error::SdkError;
pub use retry::{
    backoff_interval_step, format_elapsed, long_polling, long_polling_with_config,
    retry_if_error_match, retry_if_error_match_with_config, wait_for, PollError, PollingConfig,
    RetryConfig, RetryError,
};
pub use wallet::Wallet;

// Re-export the value layer for convenience
pub use mey_crypto::{KeyPair, TxHasher};
pub use mey_primitives::{Address, AddressKind, Amount, ByteEncoding, SystemNames, Unit};
