//! Transfer ERC-20 tokens to an account.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use contract_scripts::{
    addresses,
    amount::parse_amount,
    balance::{token_balance, token_decimals},
    config::{AddressArgs, RpcArgs, SignerArgs},
    logging,
    transfer::send_token,
};

#[derive(Parser)]
#[command(about = "Transfer ERC-20 tokens")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Token (address or address book name)
    #[arg(long, default_value = addresses::TOKEN)]
    token: String,

    /// Recipient (address or address book name)
    to: String,

    /// Amount in whole tokens, e.g. `12.5`
    amount: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let book = cli.addresses.load()?;
    let token = book.resolve(&cli.token)?;
    let to = book.resolve(&cli.to)?;
    let provider = cli.signer.provider(&cli.rpc)?;

    let decimals = token_decimals(&provider, token).await;
    let amount = parse_amount(&cli.amount, decimals)
        .with_context(|| format!("invalid amount `{}`", cli.amount))?;
    println!("{}", send_token(&provider, token, to, amount).await?);
    println!("{}", token_balance(&provider, token, to).await?);
    Ok(())
}
