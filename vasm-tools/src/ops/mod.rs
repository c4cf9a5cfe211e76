// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! User-facing operations built on [`core`](crate::core).

pub use migrate::{migrate, MigrateConfig};

pub mod registry;

mod migrate;
