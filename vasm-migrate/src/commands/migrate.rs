// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use vasm_tools::{
    core::manifest::{self, FILENAME},
    ops::{self, MigrateConfig},
};

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    error::VasmMigrateResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the target network. Deployments to `test`, `coverage` and `*-fork` networks are not
    /// recorded in the registry.
    #[arg(short, long)]
    network: String,
    /// Migrations manifest; defaults apply when the file does not exist.
    #[arg(long, default_value = FILENAME)]
    manifest: PathBuf,
    /// Directory containing compiled contract artifacts. Overrides the manifest.
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,
    /// Directory of the deployment registry. Overrides the manifest.
    #[arg(long)]
    registry_dir: Option<PathBuf>,
    /// Contract to deploy, repeated for several contracts in deployment order. Overrides the
    /// manifest.
    #[arg(long = "artifact", value_name = "NAME")]
    artifacts: Vec<String>,
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

impl Args {
    fn config(&self) -> eyre::Result<MigrateConfig> {
        let manifest = manifest::load_or_default(&self.manifest)?;
        let mut config = MigrateConfig::from_manifest(
            self.network.clone(),
            manifest.migrations,
            self.auth.get_max_fee_per_gas_wei()?,
        );
        if let Some(dir) = &self.artifacts_dir {
            config.artifacts_dir = dir.clone();
        }
        if let Some(dir) = &self.registry_dir {
            config.registry_dir = dir.clone();
        }
        if !self.artifacts.is_empty() {
            config.artifacts = self.artifacts.clone();
        }
        config.estimate_gas = self.estimate_gas;
        Ok(config)
    }
}

pub async fn exec(args: Args) -> VasmMigrateResult {
    let mut config = args.config()?;
    let (provider, chain_id) = args.provider.build_provider_with_wallet(&args.auth).await?;
    config.chain_id = Some(chain_id);
    ops::migrate(config, provider).await?;
    Ok(())
}
