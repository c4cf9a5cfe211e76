// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! None of these are specific to VASM contracts, but [`vasm-tools`](crate) uses them to report on
//! deployments and registry contents.

use std::{fs, path::Path};

use alloy::primitives::U256;
use color::Color;

pub mod color;

/// Pretty-prints an amount of gas.
pub fn format_gas(gas: u128) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

/// Pretty-prints a fee given in wei as ETH.
pub fn format_fee(fee: U256) -> String {
    // gwei first so the remainder fits in a u64
    let Ok(gwei): Result<u64, _> = (fee / U256::from(1_000_000_000u64)).try_into() else {
        return "???".red();
    };
    let eth = gwei as f64 / 1e9;
    let text = format!("{eth:.6} ETH");
    if eth <= 0.005 {
        text.mint()
    } else if eth <= 0.05 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Check if a directory exists, creating it (and its parents) if not.
pub fn create_dir_if_dne(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
