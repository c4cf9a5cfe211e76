// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Target network identification.

use std::fmt;

use alloy::providers::Provider;

/// Network names used for rehearsal runs whose deployments are never recorded.
const DRY_RUN_NAMES: &[&str] = &["test", "coverage", "soliditycoverage"];

/// Suffix given to forked copies of a live network during a dry run.
const FORK_SUFFIX: &str = "-fork";

/// A deployment target: the configured network name plus the id its node reports.
///
/// The name decides whether a run is a dry run; the numeric id partitions the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NetworkId {
    pub name: String,
    pub id: u64,
}

impl NetworkId {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Names the network and asks the node for its chain id.
    pub async fn resolve(
        name: impl Into<String>,
        provider: &impl Provider,
    ) -> Result<Self, NetworkError> {
        let id = provider.get_chain_id().await?;
        Ok(Self::new(name, id))
    }

    pub fn is_dry_run(&self) -> bool {
        is_dry_run_name(&self.name)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Whether deployments to the named network are rehearsals that should not be persisted.
pub fn is_dry_run_name(name: &str) -> bool {
    DRY_RUN_NAMES.contains(&name) || name.ends_with(FORK_SUFFIX)
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("failed to resolve network id: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}
