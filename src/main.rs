use clap::Parser;
use cryptodevs_dao_scripts::{
    cli::Cli, constants::DEFAULT_RPC, errors::ScriptError, tx::client::create_rpc_provider,
};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli { rpc_url, command } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    // Resolve the RPC endpoint: flag, then env, then default
    let rpc_url = rpc_url
        .or_else(|| std::env::var("RPC_URL").ok())
        .unwrap_or_else(|| DEFAULT_RPC.to_string());

    // Build our RPC client with signer
    let client = create_rpc_provider(&rpc_url).await?;

    command.run(client).await
}
