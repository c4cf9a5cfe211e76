// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use vasm_tools::ops;

use crate::{common_args::RegistryArgs, error::VasmMigrateResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Numeric network (chain) id the registry file is named after.
    #[arg(long)]
    network_id: u64,
    /// Only list deployments of this contract.
    #[arg(long)]
    contract: Option<String>,

    #[command(flatten)]
    registry: RegistryArgs,
}

pub fn exec(args: Args) -> VasmMigrateResult {
    ops::registry::show(
        &args.registry.registry_dir,
        args.network_id,
        args.contract.as_deref(),
    )?;
    Ok(())
}
