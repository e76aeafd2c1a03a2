//! Constants used in the deploy scripts

/// The ABI of the FHEWeightTrend contract
///
/// Compiled from `contracts/FHEWeightTrend.sol`
pub const FHE_WEIGHT_TREND_ABI: &str = include_str!("../artifacts/FHEWeightTrend.abi");

/// The creation bytecode of the FHEWeightTrend contract
///
/// Compiled from `contracts/FHEWeightTrend.sol`
pub const FHE_WEIGHT_TREND_BYTECODE: &str = include_str!("../artifacts/FHEWeightTrend.bin");

/// The ABI of the SpeedingFlag contract
///
/// Compiled from `contracts/SpeedingFlag.sol`
pub const SPEEDING_FLAG_ABI: &str = include_str!("../artifacts/SpeedingFlag.abi");

/// The creation bytecode of the SpeedingFlag contract
///
/// Compiled from `contracts/SpeedingFlag.sol`
pub const SPEEDING_FLAG_BYTECODE: &str = include_str!("../artifacts/SpeedingFlag.bin");

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 0;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The FHEWeightTrend contract key in the `deployments.json` file
pub const FHE_WEIGHT_TREND_CONTRACT_KEY: &str = "fhe_weight_trend_contract";

/// The SpeedingFlag contract key in the `deployments.json` file
pub const SPEEDING_FLAG_CONTRACT_KEY: &str = "speeding_flag_contract";

/// The default path of the `deployments.json` file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default RPC URL, pointing at a local devnet node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";
