//! Deploy an ERC-20 token.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    amount::parse_amount,
    config::{ArtifactArgs, RpcArgs, SignerArgs},
    deployer::{TokenParams, deploy_token},
    logging,
};

#[derive(Parser)]
#[command(about = "Deploy an ERC-20 token")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,

    /// Artifact of the token contract
    #[arg(long, default_value = "Token")]
    contract: String,

    #[arg(long)]
    name: String,

    #[arg(long)]
    symbol: String,

    /// Initial supply in whole tokens, minted to the deployer
    #[arg(long, default_value = "1000000")]
    supply: String,

    /// Decimals of the token, used to scale the supply
    #[arg(long, default_value_t = 18)]
    decimals: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let provider = cli.signer.provider(&cli.rpc)?;
    let artifact = cli.artifacts.store().load(&cli.contract)?;
    let params = TokenParams {
        name: cli.name,
        symbol: cli.symbol.clone(),
        initial_supply: parse_amount(&cli.supply, cli.decimals)?,
    };
    let addr = deploy_token(&provider, &artifact, params).await?;
    println!("{} ({}) deployed at {addr}", artifact.name, cli.symbol);
    Ok(())
}
