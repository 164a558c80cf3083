use alloy::primitives::{Address, U256};

use crate::{
    errors::ScriptError,
    tx::{
        abi::{ICryptoDevsDAO, IFakeNFTMarketplace},
        client::RpcProvider,
    },
};

/// Get the fake NFT price advertised by the marketplace
pub async fn get_nft_price(
    contract_address: Address,
    client: RpcProvider,
) -> Result<U256, ScriptError> {
    // Build our contract
    let contract = IFakeNFTMarketplace::new(contract_address, client);

    // Read the smart contract
    let price = contract
        .getPrice()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(price._0)
}

/// Get the number of proposals created on the DAO
pub async fn get_num_proposals(
    contract_address: Address,
    client: RpcProvider,
) -> Result<U256, ScriptError> {
    // Build our contract
    let contract = ICryptoDevsDAO::new(contract_address, client);

    // Read the smart contract
    let num_proposals = contract
        .numProposals()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(num_proposals._0)
}
