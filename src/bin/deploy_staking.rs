//! Deploy a staking pool paying rewards in a second token.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    addresses,
    config::{AddressArgs, ArtifactArgs, RpcArgs, SignerArgs},
    deployer::deploy_staking,
    logging,
};

#[derive(Parser)]
#[command(about = "Deploy a staking pool")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Artifact of the staking contract
    #[arg(long, default_value = "StakingRewards")]
    contract: String,

    /// Token users stake (address or address book name)
    #[arg(long, default_value = addresses::TOKEN)]
    staking_token: String,

    /// Token rewards are paid in (address or address book name)
    #[arg(long, default_value = addresses::REWARD_TOKEN)]
    rewards_token: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let book = cli.addresses.load()?;
    let staking_token = book.resolve(&cli.staking_token)?;
    let rewards_token = book.resolve(&cli.rewards_token)?;

    let provider = cli.signer.provider(&cli.rpc)?;
    let artifact = cli.artifacts.store().load(&cli.contract)?;
    let addr = deploy_staking(&provider, &artifact, staking_token, rewards_token).await?;
    println!("{} deployed at {addr}", artifact.name);
    println!("  staking token: {staking_token}");
    println!("  rewards token: {rewards_token}");
    Ok(())
}
