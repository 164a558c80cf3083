//! Constants used in the deploy scripts

use alloy::primitives::{address, Address, U256};

/// Default RPC endpoint
pub const DEFAULT_RPC: &str = "https://rpc.sepolia.org";

/// Address of the already deployed CryptoDevs NFT contract
pub const CRYPTODEVS_NFT_CONTRACT_ADDRESS: Address =
    address!("d4b5bb27b6b21285d1e9e1a5f40a0ed7a01c1f19");

/// Name of the marketplace contract artifact
pub const FAKE_NFT_MARKETPLACE_CONTRACT: &str = "FakeNFTMarketplace";

/// Name of the DAO contract artifact
pub const CRYPTODEVS_DAO_CONTRACT: &str = "CryptoDevsDAO";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// File recording the deployed contract addresses
pub const DEPLOYED_ADDRESSES_FILE: &str = "deployed.json";

/// Initial treasury funding attached to the DAO deployment, 0.1 ether in wei
pub const DAO_INITIAL_FUNDING_WEI: U256 = U256::from_limbs([100_000_000_000_000_000, 0, 0, 0]);

#[cfg(test)]
mod tests {
    use alloy::primitives::utils::parse_ether;

    use super::*;

    #[test]
    fn dao_funding_is_a_tenth_of_an_ether() {
        assert_eq!(DAO_INITIAL_FUNDING_WEI, parse_ether("0.1").unwrap());
    }
}
