// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::VasmMigrateResult;

mod latest;
mod show;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Lists the deployments recorded for a network.
    #[command(visible_alias = "s")]
    Show(show::Args),
    /// Prints the most recently recorded address of a contract.
    #[command(visible_alias = "l")]
    Latest(latest::Args),
}

pub fn exec(cmd: Command) -> VasmMigrateResult {
    match cmd {
        Command::Show(args) => show::exec(args),
        Command::Latest(args) => latest::exec(args),
    }
}
