//! Print the staking position of an account.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    IStakingPool, addresses,
    amount::format_amount,
    balance::token_decimals,
    config::{AddressArgs, RpcArgs},
    logging,
    staking::position,
};

#[derive(Parser)]
#[command(about = "Staked amount and pending rewards of an account")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Staking pool (address or address book name)
    #[arg(long, default_value = addresses::STAKING)]
    pool: String,

    /// Account (address or address book name)
    account: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let book = cli.addresses.load()?;
    let pool = book.resolve(&cli.pool)?;
    let account = book.resolve(&cli.account)?;
    let provider = cli.rpc.read_provider();

    let pos = position(&provider, pool, account).await?;
    let contract = IStakingPool::new(pool, &provider);
    let staked_decimals = token_decimals(&provider, contract.stakingToken().call().await?).await;
    let reward_decimals = token_decimals(&provider, contract.rewardsToken().call().await?).await;

    println!("{pos}");
    println!("  staked: {}", format_amount(pos.staked, staked_decimals)?);
    println!("  earned: {}", format_amount(pos.earned, reward_decimals)?);
    Ok(())
}
