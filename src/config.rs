//! Command line and environment configuration shared by the scripts
//!
//! Every script flattens the groups it needs into its own `clap::Parser`.

use std::path::PathBuf;

use alloy::{eips::BlockNumberOrTag, transports::http::reqwest::Url};
use clap::Args;

use crate::{
    addresses::{AddressBook, AddressBookError},
    artifact::ArtifactStore,
    provider::{
        PubSubProvider, PubSubProviderConfig, ReadProvider, SignerSource, SigningProvider,
        build_provider, build_read_provider,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no signer configured: set MNEMONIC (with ACCOUNT_INDEX) or PRIVATE_KEY")]
    MissingSigner,
    #[error("both MNEMONIC and PRIVATE_KEY are set, keep only one")]
    AmbiguousSigner,
}

#[derive(Debug, Clone, Args)]
pub struct RpcArgs {
    /// HTTP JSON-RPC endpoint of the node
    #[arg(long, env = "RPC_URL", default_value = "http://127.0.0.1:8545")]
    pub rpc_url: Url,
}

impl RpcArgs {
    pub fn read_provider(&self) -> ReadProvider {
        build_read_provider(self.rpc_url.clone())
    }
}

#[derive(Debug, Clone, Args)]
pub struct WsArgs {
    /// WebSocket JSON-RPC endpoint of the node
    #[arg(long, env = "WS_URL", default_value = "ws://127.0.0.1:8545")]
    pub ws_url: Url,
}

impl WsArgs {
    pub async fn pubsub_provider(&self) -> anyhow::Result<PubSubProvider> {
        PubSubProvider::new(PubSubProviderConfig::new(self.ws_url.clone())).await
    }
}

#[derive(Clone, Args)]
pub struct SignerArgs {
    /// BIP-39 mnemonic of the sending wallet
    #[arg(long, env = "MNEMONIC", hide_env_values = true)]
    pub mnemonic: Option<String>,

    /// Account index derived from the mnemonic
    #[arg(long, env = "ACCOUNT_INDEX", default_value_t = 0)]
    pub account_index: u32,

    /// Hex-encoded private key of the sending account
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

impl SignerArgs {
    pub fn source(&self) -> Result<SignerSource, ConfigError> {
        match (&self.mnemonic, &self.private_key) {
            (Some(_), Some(_)) => Err(ConfigError::AmbiguousSigner),
            (Some(phrase), None) => Ok(SignerSource::Mnemonic {
                phrase: phrase.clone(),
                index: self.account_index,
            }),
            (None, Some(key)) => Ok(SignerSource::PrivateKey(key.clone())),
            (None, None) => Err(ConfigError::MissingSigner),
        }
    }

    /// Provider signing with the configured account
    pub fn provider(&self, rpc: &RpcArgs) -> anyhow::Result<SigningProvider> {
        Ok(build_provider(&self.source()?, rpc.rpc_url.clone())?)
    }
}

#[derive(Debug, Clone, Args)]
pub struct AddressArgs {
    /// JSON file mapping contract names to addresses
    #[arg(long, env = "ADDRESS_BOOK", default_value = "addresses.json")]
    pub address_book: PathBuf,
}

impl AddressArgs {
    pub fn load(&self) -> Result<AddressBook, AddressBookError> {
        AddressBook::load(&self.address_book)
    }
}

#[derive(Debug, Clone, Args)]
pub struct ArtifactArgs {
    /// Directory holding compiled artifacts as `<Name>.sol/<Name>.json`
    #[arg(long, env = "ARTIFACTS_DIR", default_value = "artifacts/contracts")]
    pub artifacts: PathBuf,
}

impl ArtifactArgs {
    pub fn store(&self) -> ArtifactStore {
        ArtifactStore::new(&self.artifacts)
    }
}

/// Block argument: a decimal or `0x` number, or a tag such as `latest` or `earliest`
pub fn parse_block(s: &str) -> Result<BlockNumberOrTag, String> {
    if let Ok(number) = s.parse::<u64>() {
        return Ok(BlockNumberOrTag::Number(number));
    }
    s.parse::<BlockNumberOrTag>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        rpc: RpcArgs,
        #[command(flatten)]
        signer: SignerArgs,
        #[command(flatten)]
        addresses: AddressArgs,
        #[arg(long, value_parser = parse_block, default_value = "latest")]
        from_block: BlockNumberOrTag,
    }

    #[test]
    fn flags_parse_into_groups() {
        let cli = Cli::try_parse_from([
            "script",
            "--rpc-url",
            "http://node:8545",
            "--private-key",
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            "--address-book",
            "deployments/local.json",
            "--from-block",
            "120",
        ])
        .unwrap();
        assert_eq!(cli.rpc.rpc_url.as_str(), "http://node:8545/");
        assert!(matches!(
            cli.signer.source().unwrap(),
            SignerSource::PrivateKey(_)
        ));
        assert_eq!(cli.addresses.address_book, PathBuf::from("deployments/local.json"));
        assert_eq!(cli.from_block, BlockNumberOrTag::Number(120));
    }

    #[test]
    fn signer_needs_exactly_one_secret() {
        let mut signer = SignerArgs {
            mnemonic: None,
            account_index: 4,
            private_key: None,
        };
        assert!(matches!(signer.source(), Err(ConfigError::MissingSigner)));

        signer.mnemonic =
            Some("test test test test test test test test test test test junk".into());
        assert!(matches!(
            signer.source().unwrap(),
            SignerSource::Mnemonic { index: 4, .. }
        ));

        signer.private_key = Some("0x01".into());
        assert!(matches!(signer.source(), Err(ConfigError::AmbiguousSigner)));
    }

    #[test]
    fn block_arguments() {
        assert_eq!(parse_block("0").unwrap(), BlockNumberOrTag::Number(0));
        assert_eq!(parse_block("0x10").unwrap(), BlockNumberOrTag::Number(16));
        assert_eq!(parse_block("earliest").unwrap(), BlockNumberOrTag::Earliest);
        assert!(parse_block("yesterday").is_err());
    }
}
