// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! `Migrations.toml` manifest definitions.
//!
//! The manifest is optional. Without one, the built-in artifact list is deployed from
//! [`DEFAULT_ARTIFACTS_DIR`] and recorded in [`DEFAULT_REGISTRY_DIR`].

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};

use crate::core::{
    artifact::DEFAULT_ARTIFACTS_DIR, migration::DEFAULT_ARTIFACTS, registry::DEFAULT_REGISTRY_DIR,
};

/// Filename for the migrations manifest
pub const FILENAME: &str = "Migrations.toml";

#[derive(Debug, Default, Deserialize)]
pub struct MigrationsManifest {
    #[serde(default)]
    pub migrations: TomlMigrations,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TomlMigrations {
    pub artifacts_dir: PathBuf,
    pub registry_dir: PathBuf,
    /// Deployment order.
    pub artifacts: Vec<String>,
    pub constructor_args: HashMap<String, Vec<String>>,
}

impl Default for TomlMigrations {
    fn default() -> Self {
        Self {
            artifacts_dir: DEFAULT_ARTIFACTS_DIR.into(),
            registry_dir: DEFAULT_REGISTRY_DIR.into(),
            artifacts: DEFAULT_ARTIFACTS.iter().map(ToString::to_string).collect(),
            constructor_args: HashMap::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing {FILENAME}")]
    Missing,
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    if !path.as_ref().exists() {
        return Err(ManifestError::Missing);
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}

/// Loads the manifest at `path`, falling back to the defaults if there is none.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<MigrationsManifest, ManifestError> {
    match load(path) {
        Err(ManifestError::Missing) => Ok(MigrationsManifest::default()),
        other => other,
    }
}
