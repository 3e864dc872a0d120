//! Contract deployment helpers
use alloy::{
    contract::RawCallBuilder,
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
    providers::Provider,
};

use crate::{
    artifact::{Artifact, ArtifactError},
    report::{Reverted, TxReport},
};

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    Reverted(#[from] Reverted),
    #[error("a pool needs two distinct tokens, got {0} twice")]
    SameToken(Address),
}

pub type DeployResult<T> = Result<T, DeployError>;

/// Deploy a contract (with logging). A mined but reverted creation is an error.
pub(crate) async fn deploy<P: Provider>(
    name: &str,
    tx: RawCallBuilder<P>,
) -> DeployResult<Address> {
    tracing::info!("deploying {name}");
    let pending_tx = tx.send().await?;
    let tx_hash = *pending_tx.tx_hash();
    tracing::info!(%tx_hash, "waiting for tx to be mined");

    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(alloy::contract::Error::from)?;
    tracing::info!(%receipt.gas_used, %tx_hash, "tx mined");
    TxReport::from_receipt(name, &receipt).ensure_success()?;
    let addr = receipt
        .contract_address
        .ok_or(alloy::contract::Error::ContractNotDeployed)?;

    tracing::info!("deployed {name} at {addr:#x}");
    Ok(addr)
}

/// Deploy a compiled artifact with already typed constructor arguments
pub async fn deploy_artifact<P: Provider>(
    provider: &P,
    artifact: &Artifact,
    args: &[DynSolValue],
) -> DeployResult<Address> {
    let encoded = artifact.encode_constructor(args)?;
    let code = artifact.deploy_code(&encoded)?;
    let tx = RawCallBuilder::new_raw_deploy(provider, code);
    deploy(&artifact.name, tx).await
}

/// Deploy a compiled artifact with constructor arguments as typed on a command line
pub async fn deploy_artifact_strs<P: Provider, S: AsRef<str>>(
    provider: &P,
    artifact: &Artifact,
    args: &[S],
) -> DeployResult<Address> {
    let encoded = artifact.encode_constructor_strs(args)?;
    let code = artifact.deploy_code(&encoded)?;
    let tx = RawCallBuilder::new_raw_deploy(provider, code);
    deploy(&artifact.name, tx).await
}

#[derive(Debug, Clone)]
pub struct TokenParams {
    pub name: String,
    pub symbol: String,
    /// In raw units, already scaled by the token decimals.
    pub initial_supply: U256,
}

/// Deploy an ERC-20 token: `constructor(string name, string symbol, uint256 initialSupply)`
pub async fn deploy_token<P: Provider>(
    provider: &P,
    artifact: &Artifact,
    params: TokenParams,
) -> DeployResult<Address> {
    let args = [
        DynSolValue::String(params.name),
        DynSolValue::String(params.symbol),
        DynSolValue::Uint(params.initial_supply, 256),
    ];
    deploy_artifact(provider, artifact, &args).await
}

/// Deploy a staking pool: `constructor(address stakingToken, address rewardsToken)`
pub async fn deploy_staking<P: Provider>(
    provider: &P,
    artifact: &Artifact,
    staking_token: Address,
    rewards_token: Address,
) -> DeployResult<Address> {
    let args = [
        DynSolValue::Address(staking_token),
        DynSolValue::Address(rewards_token),
    ];
    deploy_artifact(provider, artifact, &args).await
}

/// Deploy a liquidity pool over a token pair: `constructor(address tokenA, address tokenB)`
pub async fn deploy_pool<P: Provider>(
    provider: &P,
    artifact: &Artifact,
    token_a: Address,
    token_b: Address,
) -> DeployResult<Address> {
    if token_a == token_b {
        return Err(DeployError::SameToken(token_a));
    }
    let args = [DynSolValue::Address(token_a), DynSolValue::Address(token_b)];
    deploy_artifact(provider, artifact, &args).await
}

#[cfg(test)]
mod tests {
    use alloy::{primitives::Address, providers::Provider};

    use super::*;
    use crate::{IERC20, fixtures};

    #[tokio::test]
    async fn test_artifact_deployment() {
        let provider = crate::init_test_chain();
        let addr = deploy_artifact(&provider, &fixtures::stop_artifact(), &[])
            .await
            .unwrap();
        let code = provider.get_code_at(addr).await.unwrap();
        assert_eq!(code.as_ref(), &[0x00]);
    }

    #[tokio::test]
    async fn test_token_deployment() {
        let provider = crate::init_test_chain();
        let params = TokenParams {
            name: "Gold".into(),
            symbol: "GLD".into(),
            initial_supply: U256::from(1_000_000),
        };
        let addr = deploy_token(&provider, &fixtures::token_artifact(), params)
            .await
            .unwrap();
        assert_eq!(
            provider.get_code_at(addr).await.unwrap(),
            fixtures::CONSTANT_RUNTIME
        );

        // the stand-in answers every call with 18
        let token = IERC20::new(addr, &provider);
        assert_eq!(token.totalSupply().call().await.unwrap(), U256::from(18));
    }

    #[tokio::test]
    async fn test_staking_and_pool_deployment() {
        let provider = crate::init_test_chain();
        let a = deploy_artifact(&provider, &fixtures::stop_artifact(), &[])
            .await
            .unwrap();
        let b = deploy_artifact(&provider, &fixtures::stop_artifact(), &[])
            .await
            .unwrap();
        assert_ne!(a, b);

        let staking = deploy_staking(
            &provider,
            &fixtures::pair_constructor_artifact("StakingRewards"),
            a,
            b,
        )
        .await
        .unwrap();
        let pool = deploy_pool(
            &provider,
            &fixtures::pair_constructor_artifact("LiquidityPool"),
            a,
            b,
        )
        .await
        .unwrap();
        assert_ne!(staking, pool);

        let same = deploy_pool(
            &provider,
            &fixtures::pair_constructor_artifact("LiquidityPool"),
            a,
            a,
        )
        .await;
        assert!(matches!(same, Err(DeployError::SameToken(t)) if t == a));
    }

    #[tokio::test]
    async fn test_reverted_constructor_is_an_error() {
        let provider = crate::init_test_chain();
        // fixed gas skips estimation, so the creation is mined with status 0
        let tx = RawCallBuilder::new_raw_deploy(&provider, fixtures::REVERT_INIT).gas(100_000);
        let res = deploy("Reverting", tx).await;
        assert!(matches!(res, Err(DeployError::Reverted(_))), "{res:?}");
    }

    #[tokio::test]
    async fn test_constructor_mismatch_sends_nothing() {
        let provider = crate::init_test_chain();
        let before = provider.get_block_number().await.unwrap();
        let res = deploy_artifact_strs(&provider, &fixtures::token_artifact(), &["Gold"]).await;
        assert!(matches!(
            res,
            Err(DeployError::Artifact(ArtifactError::Arity { .. }))
        ));
        assert_eq!(provider.get_block_number().await.unwrap(), before);

        let res = deploy_artifact_strs(
            &provider,
            &fixtures::pair_constructor_artifact("StakingRewards"),
            &[Address::ZERO.to_string(), Address::ZERO.to_string()],
        )
        .await;
        assert!(res.is_ok());
    }
}
