// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment registry.
//!
//! Deployed instances are recorded per network in `<dir>/<network id>.json`, each file holding a
//! JSON array of entries in the order they were appended. This is the layout written by
//! `truffle-deploy-registry`, so existing registries can be appended to directly.

use std::{fs, io::Write, path::PathBuf};

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::{
    core::{deployment::Instance, network::NetworkId},
    utils::{color::DebugColor, create_dir_if_dne},
};

/// Directory the registry lives in when nothing else is configured.
pub const DEFAULT_REGISTRY_DIR: &str = "networks";

/// Persists deployed instances for a network.
#[allow(async_fn_in_trait)]
pub trait Registry {
    /// Whether deployments to this network are rehearsals that must not be recorded.
    fn is_dry_run(&self, network: &NetworkId) -> bool {
        network.is_dry_run()
    }

    async fn append(&self, network: &NetworkId, instance: &Instance) -> Result<(), RegistryError>;
}

/// A recorded deployment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    pub contract_name: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
    /// Fields written by other tools, kept as-is when the file is rewritten.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&Instance> for RegistryEntry {
    fn from(instance: &Instance) -> Self {
        Self {
            contract_name: instance.contract_name.clone(),
            address: instance.address,
            transaction_hash: Some(instance.tx_hash),
            extra: Map::new(),
        }
    }
}

/// Registry stored as one JSON file per network id.
#[derive(Clone, Debug)]
pub struct FileRegistry {
    dir: PathBuf,
}

impl FileRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, network_id: u64) -> PathBuf {
        self.dir.join(format!("{network_id}.json"))
    }

    /// All entries recorded for a network, oldest first. A network with no file has no entries.
    pub fn entries(&self, network_id: u64) -> Result<Vec<RegistryEntry>, RegistryError> {
        let path = self.path(network_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(|source| RegistryError::Malformed { path, source })
    }

    /// The most recent entry recorded for a contract on a network.
    pub fn find_last(
        &self,
        network_id: u64,
        contract_name: &str,
    ) -> Result<Option<RegistryEntry>, RegistryError> {
        Ok(self
            .entries(network_id)?
            .into_iter()
            .rev()
            .find(|entry| entry.contract_name == contract_name))
    }

    /// Replaces the network's file in one rename, so an interrupted write leaves the old file.
    fn write(&self, network_id: u64, entries: &[RegistryEntry]) -> Result<(), RegistryError> {
        create_dir_if_dne(&self.dir)?;
        let mut contents = serde_json::to_string_pretty(entries)?;
        contents.push('\n');

        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(contents.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(self.path(network_id)).map_err(|err| err.error)?;
        Ok(())
    }
}

impl Registry for FileRegistry {
    async fn append(&self, network: &NetworkId, instance: &Instance) -> Result<(), RegistryError> {
        let mut entries = self.entries(network.id)?;
        entries.push(instance.into());
        self.write(network.id, &entries)?;
        debug!(@grey,
            "recorded {} at {} in {}",
            instance.contract_name,
            instance.address.debug_lavender(),
            self.path(network.id).display()
        );
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed registry file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
