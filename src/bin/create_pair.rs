//! Create an AMM pair through a Uniswap V2 style factory.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    addresses,
    config::{AddressArgs, RpcArgs, SignerArgs},
    liquidity::create_pair,
    logging,
};

#[derive(Parser)]
#[command(about = "Create a token pair through the factory")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Factory (address or address book name)
    #[arg(long, default_value = addresses::FACTORY)]
    factory: String,

    token_a: String,

    token_b: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let book = cli.addresses.load()?;
    let factory = book.resolve(&cli.factory)?;
    let token_a = book.resolve(&cli.token_a)?;
    let token_b = book.resolve(&cli.token_b)?;

    let provider = cli.signer.provider(&cli.rpc)?;
    let pair = create_pair(&provider, factory, token_a, token_b).await?;
    println!("pair {token_a}/{token_b} created at {pair}");
    Ok(())
}
