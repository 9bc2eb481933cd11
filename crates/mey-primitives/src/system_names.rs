//! Reserved names of built-in ledger subsystems
//!
//! The process-wide list is configuration: set it once at startup, before
//! addresses are constructed. Addresses built earlier keep the
//! classification they were given.

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Names that address built-in contracts, regardless of their length
pub const DEFAULT_SYSTEM_NAMES: [&str; 4] = ["mey.system", "mey.name", "mey.enterprise", "mey.vault"];

/// Allow-list of system names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemNames(Vec<String>);

impl SystemNames {
    /// Build a list from any collection of names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SystemNames(names.into_iter().map(Into::into).collect())
    }

    /// True if `name` is on the list
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SystemNames {
    fn default() -> Self {
        SystemNames::new(DEFAULT_SYSTEM_NAMES)
    }
}

fn registry() -> &'static RwLock<SystemNames> {
    static REGISTRY: OnceLock<RwLock<SystemNames>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(SystemNames::default()))
}

/// Snapshot of the process-wide list
pub fn system_names() -> SystemNames {
    registry().read().clone()
}

/// Replace the process-wide list (last writer wins)
pub fn set_system_names(names: SystemNames) {
    *registry().write() = names;
}

/// True if `name` is on the process-wide list
pub fn is_system_name(name: &str) -> bool {
    registry().read().contains(name)
}
