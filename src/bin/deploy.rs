//! Deploy any compiled artifact, constructor arguments given as plain strings.

use std::process::ExitCode;

use clap::Parser;
use contract_scripts::{
    config::{ArtifactArgs, RpcArgs, SignerArgs},
    deployer::deploy_artifact_strs,
    logging,
};

#[derive(Parser)]
#[command(about = "Deploy a contract from its compiled artifact")]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    #[command(flatten)]
    signer: SignerArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,

    /// Contract name (resolved in the artifacts directory) or path to an artifact JSON
    contract: String,

    /// Constructor arguments, in declaration order
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    contract_scripts::exit_code(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let provider = cli.signer.provider(&cli.rpc)?;
    let artifact = cli.artifacts.store().load(&cli.contract)?;
    let addr = deploy_artifact_strs(&provider, &artifact, &cli.args).await?;
    println!("{} deployed at {addr}", artifact.name);
    Ok(())
}
