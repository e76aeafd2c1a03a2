//! Type definitions used throughout the deploy scripts

use std::fmt::{self, Display};

use clap::ValueEnum;

use crate::constants::{
    FHE_WEIGHT_TREND_ABI, FHE_WEIGHT_TREND_BYTECODE, FHE_WEIGHT_TREND_CONTRACT_KEY,
    SPEEDING_FLAG_ABI, SPEEDING_FLAG_BYTECODE, SPEEDING_FLAG_CONTRACT_KEY,
};

/// The contracts that can be deployed by these scripts
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeployContract {
    /// The confidential weight trend contract
    FheWeightTrend,
    /// The confidential speeding flag contract
    SpeedingFlag,
}

impl DeployContract {
    /// All deployable contracts, in declaration order
    pub const ALL: [DeployContract; 2] =
        [DeployContract::FheWeightTrend, DeployContract::SpeedingFlag];

    /// The contract name as it appears in the Solidity source
    pub fn name(&self) -> &'static str {
        match self {
            DeployContract::FheWeightTrend => "FHEWeightTrend",
            DeployContract::SpeedingFlag => "SpeedingFlag",
        }
    }

    /// The fully-qualified artifact name, pairing the source file path with
    /// the contract name to disambiguate the compiled artifact
    pub fn qualified_name(&self) -> &'static str {
        match self {
            DeployContract::FheWeightTrend => "contracts/FHEWeightTrend.sol:FHEWeightTrend",
            DeployContract::SpeedingFlag => "contracts/SpeedingFlag.sol:SpeedingFlag",
        }
    }

    /// The stable identifier of this deployment step
    pub fn step_id(&self) -> &'static str {
        match self {
            DeployContract::FheWeightTrend => "deploy_FHEWeightTrend",
            DeployContract::SpeedingFlag => "deploy_SpeedingFlag",
        }
    }

    /// The tags with which an orchestrator can select this deployment step
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            DeployContract::FheWeightTrend => &["FHEWeightTrend"],
            DeployContract::SpeedingFlag => &["SpeedingFlag"],
        }
    }

    /// Whether this deployment step is selected by the given tags.
    ///
    /// An empty tag list selects every step.
    pub fn matches_tags(&self, tags: &[String]) -> bool {
        tags.is_empty() || self.tags().iter().any(|t| tags.iter().any(|query| query == t))
    }

    /// The key under which this contract's address is recorded in the deployments file
    pub fn deployments_key(&self) -> &'static str {
        match self {
            DeployContract::FheWeightTrend => FHE_WEIGHT_TREND_CONTRACT_KEY,
            DeployContract::SpeedingFlag => SPEEDING_FLAG_CONTRACT_KEY,
        }
    }

    /// The JSON ABI of the compiled contract artifact
    pub fn abi(&self) -> &'static str {
        match self {
            DeployContract::FheWeightTrend => FHE_WEIGHT_TREND_ABI,
            DeployContract::SpeedingFlag => SPEEDING_FLAG_ABI,
        }
    }

    /// The hex-encoded creation bytecode of the compiled contract artifact
    pub fn bytecode(&self) -> &'static str {
        match self {
            DeployContract::FheWeightTrend => FHE_WEIGHT_TREND_BYTECODE,
            DeployContract::SpeedingFlag => SPEEDING_FLAG_BYTECODE,
        }
    }
}

impl Display for DeployContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployContract::FheWeightTrend => write!(f, "fhe-weight-trend"),
            DeployContract::SpeedingFlag => write!(f, "speeding-flag"),
        }
    }
}

#[cfg(test)]
mod tests {
    use ethers::{abi::Contract, types::Bytes, utils::hex::FromHex};

    use super::DeployContract;

    #[test]
    fn test_artifacts_parse() {
        for contract in DeployContract::ALL {
            let abi: Contract = serde_json::from_str(contract.abi()).unwrap();
            // Both contracts expose the accessor used for post-deploy verification
            assert!(abi.function("version").is_ok());

            let bytecode = Bytes::from_hex(contract.bytecode()).unwrap();
            assert!(!bytecode.is_empty());
        }
    }

    #[test]
    fn test_constructors_take_no_args() {
        for contract in DeployContract::ALL {
            let abi: Contract = serde_json::from_str(contract.abi()).unwrap();
            let constructor = abi.constructor.as_ref().unwrap();
            assert!(constructor.inputs.is_empty());
        }
    }

    #[test]
    fn test_step_identity() {
        assert_eq!(
            DeployContract::FheWeightTrend.step_id(),
            "deploy_FHEWeightTrend"
        );
        assert_eq!(DeployContract::SpeedingFlag.step_id(), "deploy_SpeedingFlag");

        // Step ids, deployments keys, and qualified names must not collide
        // across contracts
        let [a, b] = DeployContract::ALL;
        assert_ne!(a.step_id(), b.step_id());
        assert_ne!(a.deployments_key(), b.deployments_key());
        assert_ne!(a.qualified_name(), b.qualified_name());
    }

    #[test]
    fn test_tag_selection() {
        let no_tags: Vec<String> = vec![];
        let speeding = vec!["SpeedingFlag".to_string()];
        let unknown = vec!["Darkpool".to_string()];

        for contract in DeployContract::ALL {
            assert!(contract.matches_tags(&no_tags));
        }
        assert!(DeployContract::SpeedingFlag.matches_tags(&speeding));
        assert!(!DeployContract::FheWeightTrend.matches_tags(&speeding));
        assert!(!DeployContract::SpeedingFlag.matches_tags(&unknown));
    }
}
