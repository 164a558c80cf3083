//! Definitions of CLI arguments and commands for deploy scripts

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy_contracts, show_deployments},
    errors::ScriptError,
    tx::client::RpcProvider,
};

/// Scripts for deploying the CryptoDevs DAO contracts
#[derive(Parser)]
pub struct Cli {
    /// Network RPC URL, overriding the RPC_URL env var
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the marketplace and the DAO
    DeployContracts(DeployContractsArgs),
    /// Print the previously deployed addresses
    ShowDeployments,
}

impl Command {
    /// Run the command
    pub async fn run(self, client: RpcProvider) -> Result<(), ScriptError> {
        match self {
            Command::DeployContracts(args) => {
                info!("Deploying contracts...");
                deploy_contracts(args, client).await?;

                Ok(())
            }
            Command::ShowDeployments => show_deployments(),
        }
    }
}

/// Deploy contracts
#[derive(Args)]
pub struct DeployContractsArgs {
    /// Address of the CryptoDevs NFT contract, overriding the built-in one
    #[arg(short, long)]
    pub nft_contract: Option<String>,

    /// Directory holding the compiled contract artifacts
    #[arg(short, long)]
    pub artifacts_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_deploy_contracts_args() {
        let cli = Cli::parse_from([
            "scripts",
            "--rpc-url",
            "http://localhost:8545",
            "deploy-contracts",
            "--nft-contract",
            "0x0000000000000000000000000000000000000001",
            "--artifacts-dir",
            "out",
        ]);

        assert_eq!(cli.rpc_url.as_deref(), Some("http://localhost:8545"));
        match cli.command {
            Command::DeployContracts(args) => {
                assert_eq!(
                    args.nft_contract.as_deref(),
                    Some("0x0000000000000000000000000000000000000001")
                );
                assert_eq!(args.artifacts_dir.as_deref(), Some("out"));
            }
            _ => panic!("expected deploy-contracts"),
        }
    }

    #[test]
    fn parses_show_deployments() {
        let cli = Cli::parse_from(["scripts", "show-deployments"]);
        assert!(matches!(cli.command, Command::ShowDeployments));
    }
}
