// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::eyre;
use vasm_tools::ops;

use crate::{common_args::RegistryArgs, error::VasmMigrateResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Numeric network (chain) id the registry file is named after.
    #[arg(long)]
    network_id: u64,
    /// Contract name as recorded in the registry.
    #[arg(long)]
    contract: String,

    #[command(flatten)]
    registry: RegistryArgs,
}

pub fn exec(args: Args) -> VasmMigrateResult {
    let entry = ops::registry::latest(
        &args.registry.registry_dir,
        args.network_id,
        &args.contract,
    )?
    .ok_or_else(|| {
        eyre!(
            "no deployment of {} recorded for network {}",
            args.contract,
            args.network_id
        )
    })?;
    println!("{}", entry.address);
    Ok(())
}
