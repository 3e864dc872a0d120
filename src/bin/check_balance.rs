//! Print the native coin balance of an account.

use std::process::ExitCode;

use alloy::primitives::utils::format_ether;
use clap::Parser;
use contract_scripts::{
    balance::native_balance,
    config::{AddressArgs, RpcArgs},
    logging,
};

#[derive(Parser)]
#[command(about = "Native coin balance of an account")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Account (address or address book name)
    account: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let account = cli.addresses.load()?.resolve(&cli.account)?;
    let provider = cli.rpc.read_provider();
    let wei = native_balance(&provider, account).await?;
    println!("{account}: {} ETH ({wei} wei)", format_ether(wei));
    Ok(())
}
