//! Definitions of Solidity interfaces called during deployment

use ethers::contract::abigen;

abigen!(
    VersionedContract,
    r#"[
        function version() external view returns (string memory)
    ]"#,
);
