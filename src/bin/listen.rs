//! Print contract events as they arrive, or replay them from history.

use std::{fmt::Display, process::ExitCode};

use alloy::{eips::BlockNumberOrTag, primitives::Address, rpc::types::Log, sol_types::SolEvent};
use clap::{Parser, ValueEnum};
use contract_scripts::{
    IERC20, IStakingPool, IUniswapV2Factory, IUniswapV2Pair, addresses,
    config::{AddressArgs, RpcArgs, WsArgs, parse_block},
    listener::{listen, past_events},
    logging,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Event {
    Transfer,
    Approval,
    Staked,
    Withdrawn,
    RewardPaid,
    PairCreated,
    Mint,
    Sync,
}

#[derive(Parser)]
#[command(about = "Print contract events")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    ws: WsArgs,
    #[command(flatten)]
    addresses: AddressArgs,

    /// Event to print
    #[arg(long, value_enum, default_value_t = Event::Transfer)]
    event: Event,

    /// Emitting contract (address or address book name)
    #[arg(long, default_value = addresses::TOKEN)]
    contract: String,

    /// First block of a `--history` query; live subscriptions start at the chain head
    #[arg(long, value_parser = parse_block, default_value = "latest")]
    from_block: BlockNumberOrTag,

    /// Query past logs over HTTP up to this block instead of subscribing
    #[arg(long, value_parser = parse_block)]
    history: Option<BlockNumberOrTag>,

    /// Stop after this many events
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let contract = cli.addresses.load()?.resolve(&cli.contract)?;
    match cli.event {
        Event::Transfer => print_events::<IERC20::Transfer>(&cli, contract).await,
        Event::Approval => print_events::<IERC20::Approval>(&cli, contract).await,
        Event::Staked => print_events::<IStakingPool::Staked>(&cli, contract).await,
        Event::Withdrawn => print_events::<IStakingPool::Withdrawn>(&cli, contract).await,
        Event::RewardPaid => print_events::<IStakingPool::RewardPaid>(&cli, contract).await,
        Event::PairCreated => print_events::<IUniswapV2Factory::PairCreated>(&cli, contract).await,
        Event::Mint => print_events::<IUniswapV2Pair::Mint>(&cli, contract).await,
        Event::Sync => print_events::<IUniswapV2Pair::Sync>(&cli, contract).await,
    }
}

fn print_log<E: Display>(log: &Log<E>) {
    let block = log.block_number.map_or_else(|| "pending".to_string(), |b| b.to_string());
    let tx = log
        .transaction_hash
        .map_or_else(|| "?".to_string(), |h| h.to_string());
    println!("[block {block}] {} (tx {tx})", log.data());
}

async fn print_events<E: SolEvent + Display>(cli: &Cli, contract: Address) -> anyhow::Result<()> {
    if let Some(to_block) = cli.history {
        let provider = cli.rpc.read_provider();
        let logs = past_events::<_, E>(&provider, contract, cli.from_block, to_block).await?;
        let shown = cli.limit.unwrap_or(logs.len());
        logs.iter().take(shown).for_each(print_log);
        println!("{} event(s)", shown.min(logs.len()));
        return Ok(());
    }

    let pubsub = cli.ws.pubsub_provider().await?;
    let seen = listen::<E, _>(&pubsub, contract, cli.from_block, cli.limit, print_log).await?;
    println!("{seen} event(s)");
    Ok(())
}
