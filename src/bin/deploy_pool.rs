//! Deploy a liquidity pool contract over a token pair.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    config::{AddressArgs, ArtifactArgs, RpcArgs, SignerArgs},
    deployer::deploy_pool,
    logging,
};

#[derive(Parser)]
#[command(about = "Deploy a liquidity pool for two tokens")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Artifact of the pool contract
    #[arg(long, default_value = "LiquidityPool")]
    contract: String,

    /// First token (address or address book name)
    token_a: String,

    /// Second token (address or address book name)
    token_b: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let book = cli.addresses.load()?;
    let token_a = book.resolve(&cli.token_a)?;
    let token_b = book.resolve(&cli.token_b)?;

    let provider = cli.signer.provider(&cli.rpc)?;
    let artifact = cli.artifacts.store().load(&cli.contract)?;
    let addr = deploy_pool(&provider, &artifact, token_a, token_b).await?;
    println!("{} for {token_a}/{token_b} deployed at {addr}", artifact.name);
    Ok(())
}
