//! Add liquidity to a token pair through a Uniswap V2 style router.

use std::process::ExitCode;

use alloy::providers::WalletProvider;
use clap::Parser;
use contract_scripts::{
    addresses,
    amount::parse_amount,
    balance::token_decimals,
    config::{AddressArgs, RpcArgs, SignerArgs},
    liquidity::{LiquidityParams, add_liquidity},
    logging,
};

#[derive(Parser)]
#[command(about = "Add liquidity to a pair")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Router (address or address book name)
    #[arg(long, default_value = addresses::ROUTER)]
    router: String,

    /// Slippage tolerance in basis points
    #[arg(long, default_value_t = 50)]
    slippage_bps: u16,

    /// Deadline, in seconds after the latest block
    #[arg(long, default_value_t = 1200)]
    deadline: u64,

    /// Receiver of the LP tokens, defaults to the sender
    #[arg(long)]
    to: Option<String>,

    token_a: String,
    /// Amount of token A in whole tokens
    amount_a: String,
    token_b: String,
    /// Amount of token B in whole tokens
    amount_b: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let book = cli.addresses.load()?;
    let router = book.resolve(&cli.router)?;
    let token_a = book.resolve(&cli.token_a)?;
    let token_b = book.resolve(&cli.token_b)?;
    let provider = cli.signer.provider(&cli.rpc)?;
    let to = match &cli.to {
        Some(to) => book.resolve(to)?,
        None => provider.default_signer_address(),
    };

    let params = LiquidityParams {
        token_a,
        token_b,
        amount_a: parse_amount(&cli.amount_a, token_decimals(&provider, token_a).await)?,
        amount_b: parse_amount(&cli.amount_b, token_decimals(&provider, token_b).await)?,
        slippage_bps: cli.slippage_bps,
        to,
        deadline_secs: cli.deadline,
    };
    print!("{}", add_liquidity(&provider, router, params).await?);
    Ok(())
}
