use alloy::{
    primitives::{Address, U256},
    sol_types::SolValue,
};
use tracing::info;

use crate::{
    artifacts::read_artifact_bytecode,
    cli::DeployContractsArgs,
    constants::{
        CRYPTODEVS_DAO_CONTRACT, CRYPTODEVS_NFT_CONTRACT_ADDRESS, DAO_INITIAL_FUNDING_WEI,
        DEFAULT_ARTIFACTS_DIR, DEPLOYED_ADDRESSES_FILE, FAKE_NFT_MARKETPLACE_CONTRACT,
    },
    deploy::deploy_contract,
    errors::ScriptError,
    output_writer::{read_output_file, write_output_file, OutputKeys},
    tx::{
        client::RpcProvider,
        reader::{get_nft_price, get_num_proposals},
    },
};

/// Output file key for the marketplace deployment
const MARKETPLACE_OUTPUT_KEY: &str = "fake-nft-marketplace";

/// Output file key for the DAO deployment
const DAO_OUTPUT_KEY: &str = "cryptodevs-dao";

/// Deploy the marketplace, then the DAO wired to it
pub async fn deploy_contracts(
    args: DeployContractsArgs,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    let artifacts_dir = args
        .artifacts_dir
        .unwrap_or_else(|| DEFAULT_ARTIFACTS_DIR.to_string());

    // Resolve the CryptoDevs NFT contract address
    let nft_address = match args.nft_contract {
        Some(raw) => raw.parse::<Address>().map_err(|e| {
            ScriptError::ContractDeployment(format!("invalid NFT contract address: {e}"))
        })?,
        None => CRYPTODEVS_NFT_CONTRACT_ADDRESS,
    };

    // Deploy the marketplace, no constructor arguments, no value
    let marketplace_code = read_artifact_bytecode(&artifacts_dir, FAKE_NFT_MARKETPLACE_CONTRACT)?;
    let marketplace_address = deploy_contract(
        FAKE_NFT_MARKETPLACE_CONTRACT,
        marketplace_code,
        U256::ZERO,
        client.clone(),
    )
    .await?;

    println!("FakeNFTMarketplace deployed to: {marketplace_address}");
    write_output_file(
        DEPLOYED_ADDRESSES_FILE,
        OutputKeys::Deployment {
            key: MARKETPLACE_OUTPUT_KEY,
        },
        marketplace_address,
    )?;

    // Deploy the DAO, wired to the marketplace and the NFT contract, with
    // its initial treasury funding attached
    let dao_bytecode = read_artifact_bytecode(&artifacts_dir, CRYPTODEVS_DAO_CONTRACT)?;
    let dao_code = dao_deploy_code(dao_bytecode, marketplace_address, nft_address);
    let dao_address = deploy_contract(
        CRYPTODEVS_DAO_CONTRACT,
        dao_code,
        DAO_INITIAL_FUNDING_WEI,
        client.clone(),
    )
    .await?;

    println!("CryptoDevsDAO deployed to: {dao_address}");
    write_output_file(
        DEPLOYED_ADDRESSES_FILE,
        OutputKeys::Deployment {
            key: DAO_OUTPUT_KEY,
        },
        dao_address,
    )?;

    // Post-deploy sanity reads
    let nft_price = get_nft_price(marketplace_address, client.clone()).await?;
    info!("Marketplace NFT price: {} wei", nft_price);
    let num_proposals = get_num_proposals(dao_address, client).await?;
    info!("DAO proposal count: {}", num_proposals);

    Ok(())
}

/// Print the addresses recorded by a previous deployment
pub fn show_deployments() -> Result<(), ScriptError> {
    let marketplace = read_output_file(
        DEPLOYED_ADDRESSES_FILE,
        OutputKeys::Deployment {
            key: MARKETPLACE_OUTPUT_KEY,
        },
    )?;
    let dao = read_output_file(
        DEPLOYED_ADDRESSES_FILE,
        OutputKeys::Deployment {
            key: DAO_OUTPUT_KEY,
        },
    )?;

    println!("FakeNFTMarketplace deployed to: {marketplace}");
    println!("CryptoDevsDAO deployed to: {dao}");

    Ok(())
}

/// Builds the DAO deployment code: creation bytecode followed by the
/// ABI-encoded constructor arguments (marketplace address, NFT address)
fn dao_deploy_code(bytecode: Vec<u8>, marketplace: Address, nft_contract: Address) -> Vec<u8> {
    let mut deploy_code = bytecode;
    deploy_code.extend((marketplace, nft_contract).abi_encode_params());
    deploy_code
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn dao_constructor_receives_marketplace_first() {
        let bytecode = vec![0x60, 0x80, 0x60, 0x40];
        let marketplace = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let nft_contract = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

        let code = dao_deploy_code(bytecode.clone(), marketplace, nft_contract);

        // Two static arguments, one 32 byte word each
        assert_eq!(code.len(), bytecode.len() + 64);
        assert_eq!(&code[..bytecode.len()], &bytecode[..]);

        let first_word = &code[bytecode.len()..bytecode.len() + 32];
        assert_eq!(&first_word[..12], &[0u8; 12]);
        assert_eq!(&first_word[12..], marketplace.as_slice());

        let second_word = &code[bytecode.len() + 32..];
        assert_eq!(&second_word[..12], &[0u8; 12]);
        assert_eq!(&second_word[12..], nft_contract.as_slice());
    }
}
