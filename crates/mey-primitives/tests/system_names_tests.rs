//! Process-wide system name list
//!
//! Kept in its own test binary: it mutates global state.

use mey_primitives::{is_system_name, set_system_names, system_names, Address, SystemNames};

#[test]
fn test_replace_global_system_names() {
    let previous = system_names();
    assert!(is_system_name("mey.enterprise"));

    set_system_names(SystemNames::new(["chain.registry"]));
    assert!(is_system_name("chain.registry"));
    assert!(!Address::is_system_name("mey.enterprise"));
    assert!(Address::parse("chain.registry").unwrap().is_name());
    assert!(Address::parse("mey.enterprise").is_err());

    // Still a name by length, but no longer a system address
    let vault = Address::parse("mey.vault").unwrap();
    assert!(vault.is_name());
    assert!(!vault.is_system_address());

    set_system_names(previous);
    assert!(Address::parse("mey.enterprise").unwrap().is_system_address());
}
