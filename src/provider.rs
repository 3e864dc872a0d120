//! Node connections for the scripts
//!
//! Sending scripts get a [`SigningProvider`]: the recommended fillers plus a local wallet.
//! Queries use a [`ReadProvider`], and listeners a WebSocket [`PubSubProvider`].

use std::{fmt, ops::Deref, time::Duration};

use alloy::{
    eips::BlockNumberOrTag,
    network::{Ethereum, EthereumWallet},
    primitives::Address,
    providers::{
        Provider, ProviderBuilder, RootProvider,
        fillers::{FillProvider, JoinFill, WalletFiller},
        utils::JoinedRecommendedFillers,
    },
    rpc::types::{Filter, Log},
    signers::local::{LocalSignerError, MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    sol_types::SolEvent,
    transports::{http::reqwest::Url, ws::WsConnect},
};
use futures::{Stream, StreamExt};
use tracing::error;

/// HTTP connection that fills nonce, gas and chain id, then signs locally
pub type SigningProvider = FillProvider<
    JoinFill<JoinedRecommendedFillers, WalletFiller<EthereumWallet>>,
    RootProvider,
    Ethereum,
>;

/// Connection without a wallet. Also the inner type of [`PubSubProvider`]
pub type ReadProvider = FillProvider<JoinedRecommendedFillers, RootProvider, Ethereum>;

/// [`SigningProvider`] on a throwaway Anvil node, which lives as long as the provider
#[cfg(test)]
pub type TestSigningProvider = FillProvider<
    JoinFill<JoinedRecommendedFillers, WalletFiller<EthereumWallet>>,
    alloy::providers::layers::AnvilProvider<RootProvider>,
    Ethereum,
>;

/// Where the transaction signer comes from.
#[derive(Clone)]
pub enum SignerSource {
    Mnemonic { phrase: String, index: u32 },
    PrivateKey(String),
}

impl fmt::Debug for SignerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mnemonic { index, .. } => f
                .debug_struct("Mnemonic")
                .field("phrase", &"<redacted>")
                .field("index", index)
                .finish(),
            Self::PrivateKey(_) => f.debug_tuple("PrivateKey").field(&"<redacted>").finish(),
        }
    }
}

impl SignerSource {
    pub fn build(&self) -> Result<PrivateKeySigner, LocalSignerError> {
        match self {
            Self::Mnemonic { phrase, index } => build_signer(phrase.clone(), *index),
            Self::PrivateKey(key) => key.trim().parse(),
        }
    }
}

/// Derive account `account_index` of a BIP-39 English mnemonic along `m/44'/60'/0'/0/`
pub fn build_signer(
    mnemonic: String,
    account_index: u32,
) -> Result<PrivateKeySigner, LocalSignerError> {
    MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .index(account_index)?
        .build()
}

/// Connect to `url` signing with the account from `source`
pub fn build_provider(
    source: &SignerSource,
    url: Url,
) -> Result<SigningProvider, LocalSignerError> {
    let signer = source.build()?;
    tracing::debug!(signer = %signer.address(), %url, "connecting");
    let wallet = EthereumWallet::from(signer);
    Ok(ProviderBuilder::new().wallet(wallet).connect_http(url))
}

/// Provider without a wallet, for scripts that only read chain state
pub fn build_read_provider(url: Url) -> ReadProvider {
    tracing::debug!(%url, "connecting (read only)");
    ProviderBuilder::new().connect_http(url)
}

/// WebSocket endpoint plus reconnect policy
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct PubSubProviderConfig {
    pub url: Url,
    pub max_retries: u32,
    pub retry_interval: Duration,
}

impl PubSubProviderConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            max_retries: 12,
            retry_interval: Duration::from_secs(5),
        }
    }
}

/// WebSocket connection for log subscriptions. Dropping it closes the socket
pub struct PubSubProvider {
    inner: ReadProvider,
}

impl Deref for PubSubProvider {
    type Target = ReadProvider;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PubSubProvider {
    pub async fn new(cfg: PubSubProviderConfig) -> anyhow::Result<Self> {
        tracing::debug!(url = %cfg.url, retries = cfg.max_retries, "connecting (websocket)");
        let ws = WsConnect::new(cfg.url)
            .with_max_retries(cfg.max_retries)
            .with_retry_interval(cfg.retry_interval);
        let inner = ProviderBuilder::new()
            .connect_pubsub_with(ws)
            .await
            .inspect_err(|err| error!(?err, "websocket connection failed"))?;
        Ok(Self { inner })
    }

    /// Subscribe to `E` logs emitted by `contract`.
    ///
    /// Only logs that decode and validate as `E` are yielded. The others are logged and dropped.
    pub async fn event_stream<E: SolEvent>(
        &self,
        contract: Address,
        from_block: BlockNumberOrTag,
    ) -> anyhow::Result<impl Stream<Item = Log<E>> + Send + use<E>> {
        let filter = Filter::new()
            .address(contract)
            .event(E::SIGNATURE)
            .from_block(from_block);

        let subscription = self
            .inner
            .subscribe_logs(&filter)
            .await
            .inspect_err(|err| error!(?err, %contract, "log subscription failed"))?;

        let decoded = subscription.into_stream().filter_map(|log| async move {
            match log.log_decode_validate::<E>() {
                Ok(event) => Some(event),
                Err(err) => {
                    error!(%err, event = E::SIGNATURE, "dropping undecodable log");
                    None
                }
            }
        });

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use alloy::{primitives::address, providers::WalletProvider};

    use super::*;

    const ANVIL_MNEMONIC: &str = "test test test test test test test test test test test junk";

    #[test]
    fn mnemonic_derives_standard_accounts() {
        let signer = build_signer(ANVIL_MNEMONIC.to_string(), 0).unwrap();
        assert_eq!(
            signer.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        let signer = build_signer(ANVIL_MNEMONIC.to_string(), 1).unwrap();
        assert_eq!(
            signer.address(),
            address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
    }

    #[test]
    fn private_key_and_mnemonic_agree() {
        let from_key = SignerSource::PrivateKey(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string(),
        );
        let from_phrase = SignerSource::Mnemonic {
            phrase: ANVIL_MNEMONIC.to_string(),
            index: 0,
        };
        assert_eq!(
            from_key.build().unwrap().address(),
            from_phrase.build().unwrap().address()
        );
        assert!(SignerSource::PrivateKey("0x1234".into()).build().is_err());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let source = SignerSource::Mnemonic {
            phrase: ANVIL_MNEMONIC.to_string(),
            index: 3,
        };
        let debug = format!("{source:?}");
        assert!(!debug.contains("junk"), "{debug}");
        assert!(debug.contains("index: 3"));
    }

    #[tokio::test]
    async fn wallet_provider_signs_for_source() {
        let provider = build_provider(
            &SignerSource::Mnemonic {
                phrase: ANVIL_MNEMONIC.to_string(),
                index: 2,
            },
            "http://127.0.0.1:8545".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(
            provider.default_signer_address(),
            build_signer(ANVIL_MNEMONIC.to_string(), 2).unwrap().address()
        );
    }
}
