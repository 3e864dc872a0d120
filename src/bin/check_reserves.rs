//! Print the reserves of an AMM pair.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    addresses,
    config::{AddressArgs, RpcArgs},
    liquidity::reserves,
    logging,
};

#[derive(Parser)]
#[command(about = "Reserves of a token pair")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Pair (address or address book name)
    #[arg(default_value = addresses::PAIR)]
    pair: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pair = cli.addresses.load()?.resolve(&cli.pair)?;
    let provider = cli.rpc.read_provider();
    println!("{}", reserves(&provider, pair).await?);
    Ok(())
}
