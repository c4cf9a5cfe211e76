// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts are the JSON files a Solidity toolchain writes per contract (`build/contracts` for
//! Truffle, `artifacts/` for Hardhat). Only the name, ABI and creation bytecode are read.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

/// Directory compiled artifacts are read from when nothing else is configured.
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// A compiled contract eligible for deployment.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtifactRef {
    name: String,
    abi: JsonAbi,
    bytecode: Bytes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    contract_name: String,
    #[serde(default)]
    abi: JsonAbi,
    bytecode: Bytes,
}

impl ArtifactRef {
    pub fn new(name: impl Into<String>, abi: JsonAbi, bytecode: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            abi,
            bytecode: bytecode.into(),
        }
    }

    /// Reads `<dir>/<name>.json`.
    pub fn load(dir: impl AsRef<Path>, name: &str) -> Result<Self, ArtifactError> {
        let path = artifact_path(dir, name);
        if !path.exists() {
            return Err(ArtifactError::Missing {
                name: name.to_string(),
                path,
            });
        }
        let contents = fs::read_to_string(&path)?;
        let file: ArtifactFile =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Malformed {
                path: path.clone(),
                source,
            })?;
        if file.contract_name != name {
            return Err(ArtifactError::NameMismatch {
                expected: name.to_string(),
                found: file.contract_name,
            });
        }
        debug!(@grey, "loaded artifact {name} from {}", path.display());
        Ok(Self {
            name: file.contract_name,
            abi: file.abi,
            bytecode: file.bytecode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Creation bytecode, without constructor arguments.
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }
}

/// Loads every named artifact, keeping the given order.
///
/// Fails on the first artifact that cannot be loaded, so nothing is deployed from a partial list.
pub fn load_all<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    names: impl IntoIterator<Item = S>,
) -> Result<Vec<ArtifactRef>, ArtifactError> {
    let dir = dir.as_ref();
    names
        .into_iter()
        .map(|name| ArtifactRef::load(dir, name.as_ref()))
        .collect()
}

pub fn artifact_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{name}.json"))
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing artifact {name} (expected at {})", .path.display())]
    Missing { name: String, path: PathBuf },
    #[error("malformed artifact {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact name mismatch: expected {expected}, found {found}")]
    NameMismatch { expected: String, found: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(dir: &Path, file: &str, body: &str) {
        fs::write(dir.join(format!("{file}.json")), body).unwrap();
    }

    #[test]
    fn loads_truffle_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "VASMApp",
            r#"{
                "contractName": "VASMApp",
                "abi": [],
                "bytecode": "0x6080604052",
                "deployedBytecode": "0x6080",
                "networks": {}
            }"#,
        );

        let artifact = ArtifactRef::load(dir.path(), "VASMApp").unwrap();
        assert_eq!(artifact.name(), "VASMApp");
        assert_eq!(artifact.bytecode().to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
        assert!(artifact.abi().constructor().is_none());
    }

    #[test]
    fn missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArtifactRef::load(dir.path(), "VASMApp").unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { name, .. } if name == "VASMApp"));
    }

    #[test]
    fn malformed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "VASMApp", "{ not json");
        let err = ArtifactRef::load(dir.path(), "VASMApp").unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn name_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "VASMApp",
            r#"{"contractName": "Other", "abi": [], "bytecode": "0x00"}"#,
        );
        let err = ArtifactRef::load(dir.path(), "VASMApp").unwrap_err();
        assert!(matches!(err, ArtifactError::NameMismatch { found, .. } if found == "Other"));
    }

    #[test]
    fn load_all_keeps_order_and_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["B", "A"] {
            write_artifact(
                dir.path(),
                name,
                &format!(r#"{{"contractName": "{name}", "abi": [], "bytecode": "0x00"}}"#),
            );
        }

        let names: Vec<_> = load_all(dir.path(), ["B", "A"])
            .unwrap()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, ["B", "A"]);

        let err = load_all(dir.path(), ["B", "C", "A"]).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { name, .. } if name == "C"));
    }
}
