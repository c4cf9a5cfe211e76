// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::collections::HashMap;

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::Constructor,
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
    rpc::types::TransactionReceipt,
};

use crate::{
    core::artifact::ArtifactRef,
    utils::{
        color::{Color, DebugColor},
        format_fee, format_gas,
    },
};
use request::{DeploymentRequest, GasEstimate};

pub mod request;

/// A deployed, addressable occurrence of an artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub contract_name: String,
    pub address: Address,
    pub tx_hash: TxHash,
}

/// Turns an artifact into an on-chain instance.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    async fn deploy(&self, artifact: &ArtifactRef) -> Result<Instance, DeploymentError>;
}

#[derive(Debug, Default)]
pub struct DeploymentConfig {
    /// Overrides the node's gas price.
    pub max_fee_per_gas_wei: Option<u128>,
    /// Constructor arguments by contract name, in declaration order.
    pub constructor_args: HashMap<String, Vec<String>>,
}

/// Deploys artifacts through an alloy provider, signing with its default signer.
#[derive(Debug)]
pub struct ProviderDeployer<P> {
    provider: P,
    config: DeploymentConfig,
}

impl<P: Provider + WalletProvider> ProviderDeployer<P> {
    pub fn new(provider: P, config: DeploymentConfig) -> Self {
        Self { provider, config }
    }

    /// Estimates the deployment without sending it.
    pub async fn estimate(&self, artifact: &ArtifactRef) -> Result<GasEstimate, DeploymentError> {
        let req = self.request(artifact)?;
        req.estimate(&self.provider).await
    }

    fn request(&self, artifact: &ArtifactRef) -> Result<DeploymentRequest, DeploymentError> {
        let args = self
            .config
            .constructor_args
            .get(artifact.name())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let init_code = init_code(artifact, args)?;
        Ok(DeploymentRequest::new(
            self.provider.default_signer_address(),
            init_code,
            self.config.max_fee_per_gas_wei,
        ))
    }
}

impl<P: Provider + WalletProvider> Deployer for ProviderDeployer<P> {
    async fn deploy(&self, artifact: &ArtifactRef) -> Result<Instance, DeploymentError> {
        let req = self.request(artifact)?;
        let from_address = self.provider.default_signer_address();
        debug!(@grey, "sender address: {}", from_address.debug_lavender());

        let estimate = req.estimate(&self.provider).await?;
        debug!(@grey,
            "estimated {} at {} wei per gas",
            format_gas(estimate.gas.into()),
            estimate.max_fee_per_gas
        );

        // check balance early
        let balance = self
            .provider
            .get_balance(from_address)
            .await
            .map_err(|_| DeploymentError::FailedToGetBalance)?;
        let cost = estimate.max_cost();
        if balance < cost {
            return Err(DeploymentError::NotEnoughFunds {
                from_address,
                balance,
                cost,
            });
        }

        let receipt = req.exec(estimate, &self.provider).await?;
        debug!(@grey, "gas used: {}", format_gas(receipt.gas_used.into()));
        instance_from_receipt(artifact.name(), &receipt)
    }
}

/// The instance a mined deployment transaction created.
pub fn instance_from_receipt(
    contract_name: &str,
    receipt: &TransactionReceipt,
) -> Result<Instance, DeploymentError> {
    let tx_hash = receipt.transaction_hash;
    if !receipt.status() {
        return Err(DeploymentError::Reverted { tx_hash });
    }
    let address = receipt
        .contract_address
        .ok_or(DeploymentError::NoContractAddress { tx_hash })?;
    Ok(Instance {
        contract_name: contract_name.to_string(),
        address,
        tx_hash,
    })
}

/// Creation bytecode followed by the ABI-encoded constructor arguments.
pub fn init_code(artifact: &ArtifactRef, args: &[String]) -> Result<Vec<u8>, DeploymentError> {
    if artifact.bytecode().is_empty() {
        return Err(DeploymentError::EmptyBytecode(artifact.name().to_string()));
    }
    let mut code = artifact.bytecode().to_vec();
    match artifact.abi().constructor() {
        Some(constructor) => code.extend(encode_constructor_args(constructor, args)?),
        None if !args.is_empty() => {
            return Err(DeploymentError::InvalidConstructor(format!(
                "{} has no constructor but {} arguments were given",
                artifact.name(),
                args.len()
            )))
        }
        None => {}
    }
    Ok(code)
}

fn encode_constructor_args(
    constructor: &Constructor,
    args: &[String],
) -> Result<Vec<u8>, DeploymentError> {
    if args.len() != constructor.inputs.len() {
        return Err(DeploymentError::InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {}; got {})",
            constructor.inputs.len(),
            args.len(),
        )));
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param.resolve().map_err(|err| {
            DeploymentError::InvalidConstructor(format!(
                "could not resolve constructor arg {param}: {err}"
            ))
        })?;
        let value = ty.coerce_str(arg).map_err(|err| {
            DeploymentError::InvalidConstructor(format!(
                "could not parse constructor arg {param}: {err}"
            ))
        })?;
        values.push(value);
    }

    constructor
        .abi_encode_input_raw(&values)
        .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))
}

/// Prints what deploying an artifact would cost.
pub fn print_gas_estimate(name: &str, estimate: &GasEstimate) {
    greyln!(
        "{name}: deployment estimated to use {} at {} wei per gas, costing up to {}",
        format_gas(estimate.gas.into()),
        estimate.max_fee_per_gas,
        format_fee(estimate.max_cost())
    );
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("deploy tx {} failed to complete", .tx_hash.debug_red())]
    FailedToComplete { tx_hash: TxHash },
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to deploy\n\
         balance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .cost).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        cost: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
    #[error("artifact {0} has no creation bytecode")]
    EmptyBytecode(String),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}
