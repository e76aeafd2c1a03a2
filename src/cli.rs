//! Definitions of CLI arguments and commands for deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{check_version, deploy_all, deploy_contract},
    constants::{DEFAULT_DEPLOYMENTS_PATH, DEFAULT_RPC_URL},
    errors::ScriptError,
    types::DeployContract,
};

/// Deploy and verify the FHE telemetry contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the file in which deployed contract addresses are recorded
    #[arg(long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy script subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a single contract
    Deploy(DeployArgs),
    /// Deploy all contracts, optionally filtered by tag
    DeployAll(DeployAllArgs),
    /// Read back the version of a previously deployed contract
    Version(VersionArgs),
}

impl Command {
    /// Dispatch the subcommand to its implementation
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy_contract(args, client, deployments_path).await,
            Command::DeployAll(args) => deploy_all(args, client, deployments_path).await,
            Command::Version(args) => check_version(args, client, deployments_path).await,
        }
    }
}

/// Deploy a single contract from its compiled artifact, with empty
/// constructor arguments.
///
/// After a successful deployment, the contract's `version()` accessor is
/// read back on a best-effort basis for confirmation logging.
#[derive(Args)]
pub struct DeployArgs {
    /// The contract to deploy
    #[arg(short, long)]
    pub contract: DeployContract,
}

/// Deploy all contracts whose tags match the requested tags, in declaration
/// order.
///
/// The deployment steps are independent of one another, the first fatal
/// deployment error aborts the remainder of the run.
#[derive(Args)]
pub struct DeployAllArgs {
    /// Tags selecting which deployment steps to run, all steps run when
    /// no tags are given
    #[arg(short, long)]
    pub tags: Vec<String>,
}

/// Read the `version()` accessor of a previously deployed contract,
/// resolving its address from the deployments file
#[derive(Args)]
pub struct VersionArgs {
    /// The contract whose version to read
    #[arg(short, long)]
    pub contract: DeployContract,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};
    use crate::types::DeployContract;

    #[test]
    fn test_parse_deploy() {
        let cli = Cli::try_parse_from([
            "fhe-telemetry-scripts",
            "--priv-key",
            "0xkey",
            "--rpc-url",
            "http://localhost:8547",
            "deploy",
            "--contract",
            "speeding-flag",
        ])
        .unwrap();

        assert_eq!(cli.rpc_url, "http://localhost:8547");
        assert_eq!(cli.deployments_path, "deployments.json");
        match cli.command {
            Command::Deploy(args) => assert_eq!(args.contract, DeployContract::SpeedingFlag),
            _ => panic!("parsed wrong subcommand"),
        }
    }

    #[test]
    fn test_parse_deploy_all_tags() {
        let cli = Cli::try_parse_from([
            "fhe-telemetry-scripts",
            "-p",
            "0xkey",
            "deploy-all",
            "--tags",
            "FHEWeightTrend",
            "--tags",
            "SpeedingFlag",
        ])
        .unwrap();

        match cli.command {
            Command::DeployAll(args) => {
                assert_eq!(args.tags, vec!["FHEWeightTrend", "SpeedingFlag"])
            }
            _ => panic!("parsed wrong subcommand"),
        }
    }
}
