// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Registry inspection.

use std::path::Path;

use crate::{
    core::registry::{FileRegistry, RegistryEntry},
    utils::color::{Color, DebugColor},
    Result,
};

/// Prints the entries recorded for a network, optionally only those of one contract.
pub fn show(
    dir: impl AsRef<Path>,
    network_id: u64,
    contract: Option<&str>,
) -> Result<Vec<RegistryEntry>> {
    let registry = FileRegistry::new(dir.as_ref());
    let entries: Vec<_> = registry
        .entries(network_id)?
        .into_iter()
        .filter(|entry| contract.map_or(true, |name| entry.contract_name == name))
        .collect();

    if entries.is_empty() {
        greyln!("no deployments recorded for network {network_id}");
    }
    for entry in &entries {
        match entry.transaction_hash {
            Some(tx_hash) => greyln!(
                "{}: {} (tx {})",
                entry.contract_name.lavender(),
                entry.address.debug_mint(),
                tx_hash.debug_grey()
            ),
            None => greyln!(
                "{}: {}",
                entry.contract_name.lavender(),
                entry.address.debug_mint()
            ),
        }
    }
    Ok(entries)
}

/// The most recently recorded address of a contract on a network.
pub fn latest(
    dir: impl AsRef<Path>,
    network_id: u64,
    contract: &str,
) -> Result<Option<RegistryEntry>> {
    Ok(FileRegistry::new(dir.as_ref()).find_last(network_id, contract)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy::primitives::address;

    use super::*;

    const ENTRIES: &str = r#"[
        {"contractName": "VASMApp", "address": "0x00000000000000000000000000000000000000a1"},
        {"contractName": "Token", "address": "0x00000000000000000000000000000000000000b1"},
        {"contractName": "VASMApp", "address": "0x00000000000000000000000000000000000000a2"}
    ]"#;

    #[test]
    fn show_filters_by_contract() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1337.json"), ENTRIES).unwrap();

        assert_eq!(show(dir.path(), 1337, None).unwrap().len(), 3);
        assert_eq!(show(dir.path(), 1337, Some("VASMApp")).unwrap().len(), 2);
        assert!(show(dir.path(), 1, None).unwrap().is_empty());
    }

    #[test]
    fn latest_picks_last_entry() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1337.json"), ENTRIES).unwrap();

        let entry = latest(dir.path(), 1337, "VASMApp").unwrap().unwrap();
        assert_eq!(
            entry.address,
            address!("0x00000000000000000000000000000000000000a2")
        );
    }
}
