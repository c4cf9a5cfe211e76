// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    artifact::ArtifactError, deployment::DeploymentError, manifest::ManifestError,
    migration::MigrationError, network::NetworkError, registry::RegistryError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Manifest(#[from] ManifestError),
    #[error("{0}")]
    Migration(#[from] MigrationError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Registry(#[from] RegistryError),
}
