//! Staking pool interaction: stake, withdraw, claim, position

use std::fmt;

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};

use crate::{
    ContractResult, IERC20, IStakingPool,
    report::{TxReport, confirm},
    transfer::TransferError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingPosition {
    pub pool: Address,
    pub account: Address,
    pub staked: U256,
    pub earned: U256,
    pub total_staked: U256,
}

impl fmt::Display for StakingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in pool {}: staked={} earned={} (pool total {})",
            self.account, self.pool, self.staked, self.earned, self.total_staked
        )
    }
}

/// Approve the pool for its staking token, then stake `amount` (raw units)
pub async fn stake<P: Provider>(
    provider: &P,
    pool: Address,
    amount: U256,
) -> Result<Vec<TxReport>, TransferError> {
    let contract = IStakingPool::new(pool, provider);
    let staking_token = contract.stakingToken().call().await?;
    tracing::info!(%pool, %staking_token, %amount, "staking");

    let pending_tx = IERC20::new(staking_token, provider)
        .approve(pool, amount)
        .send()
        .await?;
    let approval = TxReport::from_receipt("approve", &confirm("approve", pending_tx).await?)
        .ensure_success()?;

    let pending_tx = contract.stake(amount).send().await?;
    let staked =
        TxReport::from_receipt("stake", &confirm("stake", pending_tx).await?).ensure_success()?;
    Ok(vec![approval, staked])
}

pub async fn withdraw<P: Provider>(
    provider: &P,
    pool: Address,
    amount: U256,
) -> Result<TxReport, TransferError> {
    tracing::info!(%pool, %amount, "withdrawing stake");
    let pending_tx = IStakingPool::new(pool, provider)
        .withdraw(amount)
        .send()
        .await?;
    let receipt = confirm("withdraw", pending_tx).await?;
    Ok(TxReport::from_receipt("withdraw", &receipt).ensure_success()?)
}

pub async fn claim_rewards<P: Provider>(
    provider: &P,
    pool: Address,
) -> Result<TxReport, TransferError> {
    tracing::info!(%pool, "claiming rewards");
    let pending_tx = IStakingPool::new(pool, provider).getReward().send().await?;
    Ok(TxReport::from_receipt("claim", &confirm("claim", pending_tx).await?).ensure_success()?)
}

pub async fn position<P: Provider>(
    provider: &P,
    pool: Address,
    account: Address,
) -> ContractResult<StakingPosition> {
    let contract = IStakingPool::new(pool, provider);
    Ok(StakingPosition {
        pool,
        account,
        staked: contract.balanceOf(account).call().await?,
        earned: contract.earned(account).call().await?,
        total_staked: contract.totalSupply().call().await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        deployer::deploy_artifact,
        fixtures::{self, random_address},
    };

    #[tokio::test]
    async fn test_position_reads_pool_views() {
        let provider = crate::init_test_chain();
        let pool = deploy_artifact(&provider, &fixtures::constant_artifact(), &[])
            .await
            .unwrap();
        let account = random_address();
        let pos = position(&provider, pool, account).await.unwrap();
        assert_eq!(pos.staked, U256::from(18));
        assert_eq!(pos.earned, U256::from(18));
        assert_eq!(pos.total_staked, U256::from(18));
        assert!(pos.to_string().starts_with(&account.to_string()));
    }

    #[tokio::test]
    async fn test_stake_approves_then_stakes() {
        let provider = crate::init_test_chain();
        // stakingToken() on the stand-in is 0x…12, an account without code
        let pool = deploy_artifact(&provider, &fixtures::constant_artifact(), &[])
            .await
            .unwrap();
        let reports = stake(&provider, pool, U256::from(500)).await.unwrap();
        let labels: Vec<_> = reports.iter().map(|tx| tx.label.as_str()).collect();
        assert_eq!(labels, ["approve", "stake"]);
        assert!(reports.iter().all(|tx| tx.success));
        assert!(reports[0].block_number < reports[1].block_number);
    }

    #[tokio::test]
    async fn test_stake_against_non_contract_fails() {
        let provider = crate::init_test_chain();
        assert!(matches!(
            stake(&provider, random_address(), U256::from(1)).await,
            Err(TransferError::Contract(_))
        ));
    }

    #[tokio::test]
    async fn test_claim_and_withdraw_are_mined() {
        let provider = crate::init_test_chain();
        let pool = deploy_artifact(&provider, &fixtures::stop_artifact(), &[])
            .await
            .unwrap();
        assert!(claim_rewards(&provider, pool).await.unwrap().success);
        assert_eq!(
            withdraw(&provider, pool, U256::from(3)).await.unwrap().label,
            "withdraw"
        );
    }
}
