//! Contract scripts: deployment, balance checks, transfers and event listeners.
//!
//! Every binary under `src/bin` runs the same linear flow on top of this crate:
//! connect to a node, resolve a signer, attach to (or deploy) a contract, submit a
//! transaction or read state, report the result.

use std::process::ExitCode;

mod sol_types;

pub mod addresses;
pub mod amount;
pub mod artifact;
pub mod balance;
pub mod config;
pub mod deployer;
pub mod liquidity;
pub mod listener;
pub mod logging;
pub mod provider;
pub mod report;
pub mod staking;
pub mod transfer;

#[cfg(test)]
mod fixtures;

pub use sol_types::*;

/// Result of a call into a contract or of a plain transaction.
pub type ContractResult<T> = Result<T, alloy::contract::Error>;

/// Log the error a script ended with (if any) and map it to the process exit code.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Spawn a local test blockchain. Returns a WalletProvider funded by Anvil's first account.
#[cfg(test)]
pub(crate) fn init_test_chain() -> provider::TestSigningProvider {
    // this provider wraps both the test chain instance (exit on drop), and the wallet provider
    alloy::providers::ProviderBuilder::new().connect_anvil_with_wallet()
}
