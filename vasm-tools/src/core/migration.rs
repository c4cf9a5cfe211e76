// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy-and-register orchestration.
//!
//! A migration deploys an ordered list of artifacts one at a time and records each new instance
//! in the registry unless the target is a dry-run network. The first failure aborts the run:
//! instances already deployed stay deployed, and later artifacts are never attempted.

use alloy::primitives::Address;

use crate::{
    core::{
        artifact::ArtifactRef,
        deployment::{Deployer, DeploymentError, Instance},
        network::NetworkId,
        registry::{Registry, RegistryError},
    },
    utils::color::DebugColor,
};

/// Artifacts deployed by a migration, in deployment order.
pub const DEFAULT_ARTIFACTS: &[&str] = &["VASMApp"];

/// Deploys every artifact in order, registering each instance as soon as it exists.
///
/// Returns the deployed instances in the same order as `artifacts`.
pub async fn run(
    artifacts: &[ArtifactRef],
    network: &NetworkId,
    deployer: &impl Deployer,
    registry: &impl Registry,
) -> Result<Vec<Instance>, MigrationError> {
    let mut instances = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        info!(@grey, "deploying {} to {network}", artifact.name());
        let instance =
            deployer
                .deploy(artifact)
                .await
                .map_err(|source| MigrationError::Deploy {
                    contract: artifact.name().to_string(),
                    source,
                })?;
        info!(@grey,
            "deployed {} at address: {}",
            instance.contract_name,
            instance.address.debug_lavender()
        );
        info!(@grey, "deployment tx hash: {}", instance.tx_hash.debug_lavender());

        if registry.is_dry_run(network) {
            debug!(@grey, "dry run on {network}, not recording {}", instance.contract_name);
        } else {
            registry
                .append(network, &instance)
                .await
                .map_err(|source| MigrationError::Register {
                    contract: instance.contract_name.clone(),
                    address: instance.address,
                    source,
                })?;
            debug!(@grey, "recorded {} for network {}", instance.contract_name, network.id);
        }
        instances.push(instance);
    }
    Ok(instances)
}

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to deploy {contract}: {source}")]
    Deploy {
        contract: String,
        source: DeploymentError,
    },
    #[error("deployed {contract} at {} but failed to record it: {source}", .address.debug_red())]
    Register {
        contract: String,
        address: Address,
        source: RegistryError,
    },
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use alloy::{
        json_abi::JsonAbi,
        primitives::{Address, TxHash},
    };

    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Call {
        Deploy(String),
        Append(String, u64),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct MockDeployer {
        log: Log,
        fail_on: Option<&'static str>,
    }

    impl Deployer for MockDeployer {
        async fn deploy(&self, artifact: &ArtifactRef) -> Result<Instance, DeploymentError> {
            let mut log = self.log.borrow_mut();
            log.push(Call::Deploy(artifact.name().to_string()));
            if self.fail_on == Some(artifact.name()) {
                return Err(DeploymentError::Reverted {
                    tx_hash: TxHash::ZERO,
                });
            }
            let nonce = log.len() as u8;
            Ok(Instance {
                contract_name: artifact.name().to_string(),
                address: Address::with_last_byte(nonce),
                tx_hash: TxHash::with_last_byte(nonce),
            })
        }
    }

    struct MockRegistry {
        log: Log,
        fail_on: Option<&'static str>,
    }

    impl Registry for MockRegistry {
        async fn append(
            &self,
            network: &NetworkId,
            instance: &Instance,
        ) -> Result<(), RegistryError> {
            self.log.borrow_mut().push(Call::Append(
                instance.contract_name.clone(),
                network.id,
            ));
            if self.fail_on == Some(instance.contract_name.as_str()) {
                return Err(RegistryError::Io(std::io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    fn artifacts(names: &[&str]) -> Vec<ArtifactRef> {
        names
            .iter()
            .map(|name| ArtifactRef::new(*name, JsonAbi::default(), vec![0x00u8]))
            .collect()
    }

    fn mocks(
        deploy_fails_on: Option<&'static str>,
        append_fails_on: Option<&'static str>,
    ) -> (Log, MockDeployer, MockRegistry) {
        let log = Log::default();
        let deployer = MockDeployer {
            log: log.clone(),
            fail_on: deploy_fails_on,
        };
        let registry = MockRegistry {
            log: log.clone(),
            fail_on: append_fails_on,
        };
        (log, deployer, registry)
    }

    fn deploy(name: &str) -> Call {
        Call::Deploy(name.to_string())
    }

    fn append(name: &str, id: u64) -> Call {
        Call::Append(name.to_string(), id)
    }

    #[tokio::test]
    async fn deploys_and_registers_in_order() {
        let (log, deployer, registry) = mocks(None, None);
        let network = NetworkId::new("development", 1337);

        let instances = run(&artifacts(&["A", "B", "C"]), &network, &deployer, &registry)
            .await
            .unwrap();

        assert_eq!(
            *log.borrow(),
            [
                deploy("A"),
                append("A", 1337),
                deploy("B"),
                append("B", 1337),
                deploy("C"),
                append("C", 1337),
            ]
        );
        let names: Vec<_> = instances.iter().map(|i| i.contract_name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn dry_run_never_registers() {
        for name in ["test", "coverage", "mainnet-fork"] {
            let (log, deployer, registry) = mocks(None, None);
            let network = NetworkId::new(name, 1);

            run(&artifacts(&["A", "B"]), &network, &deployer, &registry)
                .await
                .unwrap();

            assert_eq!(*log.borrow(), [deploy("A"), deploy("B")]);
        }
    }

    #[tokio::test]
    async fn deploy_failure_stops_the_run() {
        let (log, deployer, registry) = mocks(Some("B"), None);
        let network = NetworkId::new("development", 1337);

        let err = run(&artifacts(&["A", "B", "C"]), &network, &deployer, &registry)
            .await
            .unwrap_err();

        assert!(matches!(err, MigrationError::Deploy { ref contract, .. } if contract == "B"));
        assert_eq!(
            *log.borrow(),
            [deploy("A"), append("A", 1337), deploy("B")]
        );
    }

    #[tokio::test]
    async fn first_deploy_failure_attempts_nothing_else() {
        let (log, deployer, registry) = mocks(Some("A"), None);
        let network = NetworkId::new("development", 1337);

        assert!(run(&artifacts(&["A", "B"]), &network, &deployer, &registry)
            .await
            .is_err());
        assert_eq!(*log.borrow(), [deploy("A")]);
    }

    #[tokio::test]
    async fn register_failure_stops_the_run() {
        let (log, deployer, registry) = mocks(None, Some("A"));
        let network = NetworkId::new("development", 1337);

        let err = run(&artifacts(&["A", "B"]), &network, &deployer, &registry)
            .await
            .unwrap_err();

        assert!(matches!(err, MigrationError::Register { ref contract, .. } if contract == "A"));
        assert_eq!(*log.borrow(), [deploy("A"), append("A", 1337)]);
    }

    #[tokio::test]
    async fn empty_list_does_nothing() {
        let (log, deployer, registry) = mocks(None, None);
        let network = NetworkId::new("development", 1337);

        let instances = run(&[], &network, &deployer, &registry).await.unwrap();

        assert!(instances.is_empty());
        assert!(log.borrow().is_empty());
    }

    #[tokio::test]
    async fn rerun_deploys_again() {
        let (log, deployer, registry) = mocks(None, None);
        let network = NetworkId::new("development", 1337);
        let list = artifacts(&["A"]);

        run(&list, &network, &deployer, &registry).await.unwrap();
        run(&list, &network, &deployer, &registry).await.unwrap();

        assert_eq!(
            *log.borrow(),
            [
                deploy("A"),
                append("A", 1337),
                deploy("A"),
                append("A", 1337),
            ]
        );
    }

    #[test]
    fn default_artifact_list() {
        assert_eq!(DEFAULT_ARTIFACTS, ["VASMApp"]);
    }
}
