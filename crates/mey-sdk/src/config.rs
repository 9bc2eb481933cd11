//! SDK configuration
//!
//! Loaded from TOML. Every field is optional and falls back to its default.
//!
//! ```toml
//! system_names = ["mey.system", "mey.name"]
//!
//! [retry]
//! timeout_ms = 30000
//! base_interval_ms = 500
//!
//! [polling]
//! interval_ms = 1000
//! timeout_ms = 60000
//! ```

use std::path::Path;

use mey_primitives::system_names::DEFAULT_SYSTEM_NAMES;
use mey_primitives::{set_system_names, SystemNames};
use serde::{Deserialize, Serialize};

use crate::retry::{PollingConfig, RetryConfig};
use crate::SdkError;

/// SDK configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Reserved names accepted as addresses regardless of length
    pub system_names: Vec<String>,
    /// Retry timing
    pub retry: RetryConfig,
    /// Long polling timing
    pub polling: PollingConfig,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            system_names: DEFAULT_SYSTEM_NAMES.iter().map(|s| s.to_string()).collect(),
            retry: RetryConfig::default(),
            polling: PollingConfig::default(),
        }
    }
}

impl SdkConfig {
    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, SdkError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, SdkError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Allow-list as an explicit value, for `Address::parse_with`
    pub fn system_names(&self) -> SystemNames {
        SystemNames::new(self.system_names.iter().cloned())
    }

    /// Install process-wide settings. Call once at startup, before any
    /// address is constructed.
    pub fn apply(&self) {
        tracing::debug!(
            system_names = ?self.system_names,
            "applying sdk configuration"
        );
        set_system_names(self.system_names());
    }
}
