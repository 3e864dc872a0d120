//! Stake into, withdraw from, or claim rewards of a staking pool.

use std::process::ExitCode;

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use clap::{Parser, Subcommand};
use contract_scripts::{
    IStakingPool, addresses,
    amount::parse_amount,
    balance::token_decimals,
    config::{AddressArgs, RpcArgs, SignerArgs},
    logging, staking,
};

#[derive(Parser)]
#[command(about = "Staking pool actions")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Staking pool (address or address book name)
    #[arg(long, default_value = addresses::STAKING)]
    pool: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Approve and stake an amount of the staking token
    Stake { amount: String },
    /// Withdraw an amount of staked tokens
    Withdraw { amount: String },
    /// Claim accrued rewards
    Claim,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = cli.addresses.load()?.resolve(&cli.pool)?;
    let provider = cli.signer.provider(&cli.rpc)?;

    match cli.action {
        Action::Stake { amount } => {
            let amount = staked_amount(&provider, pool, &amount).await?;
            for report in staking::stake(&provider, pool, amount).await? {
                println!("{report}");
            }
        }
        Action::Withdraw { amount } => {
            let amount = staked_amount(&provider, pool, &amount).await?;
            println!("{}", staking::withdraw(&provider, pool, amount).await?);
        }
        Action::Claim => println!("{}", staking::claim_rewards(&provider, pool).await?),
    }
    Ok(())
}

/// Scale a whole-token amount by the decimals of the pool's staking token
async fn staked_amount<P: Provider>(
    provider: &P,
    pool: Address,
    amount: &str,
) -> anyhow::Result<U256> {
    let token = IStakingPool::new(pool, provider).stakingToken().call().await?;
    Ok(parse_amount(amount, token_decimals(provider, token).await)?)
}
