// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::VasmMigrateResult;

mod migrate;
mod registry;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the configured artifacts and record them in the registry
    #[clap(visible_alias = "m")]
    Migrate(migrate::Args),
    /// Inspect the deployment registry
    #[command(subcommand)]
    Registry(registry::Command),
}

pub async fn exec(cmd: Command) -> VasmMigrateResult {
    match cmd {
        Command::Migrate(args) => migrate::exec(args).await,
        Command::Registry(command) => registry::exec(command),
    }
}
