//! Print ERC-20 balances of one or more accounts.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    addresses,
    balance::{token_balance, token_info},
    config::{AddressArgs, RpcArgs},
    logging,
};

#[derive(Parser)]
#[command(about = "ERC-20 balance of accounts")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Token (address or address book name)
    #[arg(long, default_value = addresses::TOKEN)]
    token: String,

    /// Accounts to check (addresses or address book names)
    #[arg(required = true)]
    accounts: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let book = cli.addresses.load()?;
    let token = book.resolve(&cli.token)?;
    let provider = cli.rpc.read_provider();

    println!("{}", token_info(&provider, token).await?);
    for account in &cli.accounts {
        let holder = book.resolve(account)?;
        println!("{}", token_balance(&provider, token, holder).await?);
    }
    Ok(())
}
