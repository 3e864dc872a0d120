//! Send native coin to an account.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    amount::parse_amount,
    balance::DEFAULT_DECIMALS,
    config::{AddressArgs, RpcArgs, SignerArgs},
    logging,
    transfer::send_native,
};

#[derive(Parser)]
#[command(about = "Send native coin")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Recipient (address or address book name)
    to: String,

    /// Amount in ETH, e.g. `0.5`
    amount: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let to = cli.addresses.load()?.resolve(&cli.to)?;
    let amount = parse_amount(&cli.amount, DEFAULT_DECIMALS)?;
    let provider = cli.signer.provider(&cli.rpc)?;
    println!("{}", send_native(&provider, to, amount).await?);
    Ok(())
}
