//! Implementations of the various deploy scripts

use std::sync::Arc;

use ethers::{
    abi::{Address, Contract},
    middleware::contract::ContractFactory,
    providers::Middleware,
    types::Bytes,
    utils::hex::FromHex,
};
use tracing::{info, warn};

use crate::{
    cli::{DeployAllArgs, DeployArgs, VersionArgs},
    constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
    types::DeployContract,
    utils::{parse_addr_from_deployments_file, read_version, write_deployed_address},
};

/// Deploy a single contract, recording its address and reading back its
/// version
pub async fn deploy_contract(
    args: DeployArgs,
    client: Arc<impl Middleware>,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    deploy_and_verify(args.contract, client, deployments_path).await
}

/// Deploy every contract selected by the given tags, in declaration order
pub async fn deploy_all(
    args: DeployAllArgs,
    client: Arc<impl Middleware>,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    for contract in DeployContract::ALL {
        if contract.matches_tags(&args.tags) {
            deploy_and_verify(contract, client.clone(), deployments_path).await?;
        }
    }

    Ok(())
}

/// Read back the `version()` of a previously deployed contract, resolving
/// its address from the deployments file
pub async fn check_version(
    args: VersionArgs,
    client: Arc<impl Middleware>,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let address =
        parse_addr_from_deployments_file(deployments_path, args.contract.deployments_key())?;

    log_version_read(read_version(address, client).await);

    Ok(())
}

/// Run one deployment unit: submit the deployment, record the address, then
/// attempt the version read.
///
/// A deployment error is fatal for the unit. The version read is diagnostic
/// only and never fails the run.
async fn deploy_and_verify(
    contract: DeployContract,
    client: Arc<impl Middleware>,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let address = submit_deployment(contract, client.clone()).await?;

    info!("✅ {} deployed at: {:#x}", contract.name(), address);

    write_deployed_address(deployments_path, contract.deployments_key(), address)?;

    log_version_read(read_version(address, client).await);

    Ok(())
}

/// Submit exactly one deployment transaction for the contract's compiled
/// artifact, with empty constructor arguments, returning the deployed
/// address
async fn submit_deployment(
    contract: DeployContract,
    client: Arc<impl Middleware>,
) -> Result<Address, ScriptError> {
    // Get contract ABI and bytecode
    let abi: Contract = serde_json::from_str(contract.abi())
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = Bytes::from_hex(contract.bytecode())
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let factory = ContractFactory::new(abi, bytecode, client);

    // Deploy the contract
    let deployed_contract = factory
        .deploy(())
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    Ok(deployed_contract.address())
}

/// Log the outcome of a version read, success and failure both.
///
/// The read is best-effort, a failure is surfaced as a warning and
/// discarded.
fn log_version_read(outcome: Result<String, ScriptError>) {
    match outcome {
        Ok(version) => info!("ℹ️ version(): {version}"),
        Err(e) => warn!("version() read failed: {e}"),
    }
}
