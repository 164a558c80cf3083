//! Single contract deployment over RPC.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    providers::{Provider, WalletProvider},
    rpc::types::eth::TransactionRequest,
};
use tracing::{info, warn};

use crate::{errors::ScriptError, tx::client::RpcProvider};

/// Deploys the given creation code, attaching `value` to the deployment
/// transaction, and returns the deployed contract address once the
/// transaction is included.
pub async fn deploy_contract(
    name: &str,
    deploy_code: Vec<u8>,
    value: U256,
    client: RpcProvider,
) -> Result<Address, ScriptError> {
    // Predict the contract address from the deployer nonce
    let predicted_address = predict_contract_address(&client).await?;

    // Build the deployment tx
    let tx_request = TransactionRequest::default()
        .with_deploy_code(Bytes::from(deploy_code))
        .with_value(value);

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!("Pending {} deployment... {}", name, pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let deployed_address = receipt
        .contract_address
        .ok_or(ScriptError::ContractDeployment(format!(
            "no contract address in receipt for {name}"
        )))?;
    if deployed_address != predicted_address {
        warn!(
            "{} deployed to {} instead of predicted {}",
            name, deployed_address, predicted_address
        );
    }
    info!(
        "{} deployment done on block: {}",
        name,
        receipt.block_number.unwrap_or_default()
    );

    Ok(deployed_address)
}

/// Predict the CREATE address of the next deployment from the signer nonce
async fn predict_contract_address(client: &RpcProvider) -> Result<Address, ScriptError> {
    // Get signer
    let signer = client.default_signer_address();

    // Get the signer nonce
    let signer_nonce = client
        .get_transaction_count(signer)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;

    Ok(signer.create(signer_nonce))
}
