// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::providers::{Provider, WalletProvider};
use typed_builder::TypedBuilder;

use crate::{
    core::{
        artifact::{self, ArtifactRef, DEFAULT_ARTIFACTS_DIR},
        deployment::{print_gas_estimate, Deployer, DeploymentConfig, Instance, ProviderDeployer},
        manifest::TomlMigrations,
        migration::{self, DEFAULT_ARTIFACTS},
        network::NetworkId,
        registry::{FileRegistry, DEFAULT_REGISTRY_DIR},
    },
    utils::color::{Color, DebugColor},
    Result,
};

/// Everything a migration needs besides the provider.
#[derive(Debug, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct MigrateConfig {
    /// Network name, deciding whether the run is recorded.
    pub network: String,
    /// Chain id of the provider, when the caller already knows it.
    #[builder(default)]
    pub chain_id: Option<u64>,
    #[builder(default = DEFAULT_ARTIFACTS_DIR.into())]
    pub artifacts_dir: PathBuf,
    #[builder(default = DEFAULT_REGISTRY_DIR.into())]
    pub registry_dir: PathBuf,
    /// Contract names in deployment order.
    #[builder(default = DEFAULT_ARTIFACTS.iter().map(ToString::to_string).collect())]
    pub artifacts: Vec<String>,
    #[builder(default)]
    pub deployment: DeploymentConfig,
    /// Only estimate gas; nothing is sent or recorded.
    #[builder(default)]
    pub estimate_gas: bool,
}

impl MigrateConfig {
    /// Configuration taken from a `Migrations.toml` section.
    pub fn from_manifest(
        network: impl Into<String>,
        manifest: TomlMigrations,
        max_fee_per_gas_wei: Option<u128>,
    ) -> Self {
        Self::builder()
            .network(network)
            .artifacts_dir(manifest.artifacts_dir)
            .registry_dir(manifest.registry_dir)
            .artifacts(manifest.artifacts)
            .deployment(DeploymentConfig {
                max_fee_per_gas_wei,
                constructor_args: manifest.constructor_args,
            })
            .build()
    }
}

/// Deploys the configured artifacts and records them for the provider's network.
pub async fn migrate(
    config: MigrateConfig,
    provider: impl Provider + WalletProvider,
) -> Result<Vec<Instance>> {
    let artifacts = artifact::load_all(&config.artifacts_dir, &config.artifacts)?;
    let network = match config.chain_id {
        Some(id) => NetworkId::new(config.network, id),
        None => NetworkId::resolve(config.network, &provider).await?,
    };
    let deployer = ProviderDeployer::new(provider, config.deployment);

    if config.estimate_gas {
        for artifact in &artifacts {
            let estimate = deployer.estimate(artifact).await?;
            print_gas_estimate(artifact.name(), &estimate);
        }
        return Ok(Vec::new());
    }

    let registry = FileRegistry::new(config.registry_dir);
    deploy_and_report(&artifacts, &network, &deployer, &registry).await
}

/// Runs the migration and prints where each contract landed.
async fn deploy_and_report(
    artifacts: &[ArtifactRef],
    network: &NetworkId,
    deployer: &impl Deployer,
    registry: &FileRegistry,
) -> Result<Vec<Instance>> {
    let instances = migration::run(artifacts, network, deployer, registry).await?;

    for instance in &instances {
        greyln!(
            "{}: {}",
            instance.contract_name.lavender(),
            instance.address.debug_mint()
        );
    }
    if network.is_dry_run() {
        mintln!(
            "deployed {} contract(s) to {network}; dry run, registry left untouched",
            instances.len()
        );
    } else {
        mintln!(
            "deployed {} contract(s) to {network}; recorded in {}",
            instances.len(),
            registry.path(network.id).display()
        );
    }
    Ok(instances)
}
