//! AMM pair creation, liquidity provision and reserve queries (Uniswap V2 interface)

use std::fmt;

use alloy::{
    eips::BlockNumberOrTag,
    primitives::{Address, U256},
    providers::Provider,
};

use crate::{
    ContractResult, IERC20, IUniswapV2Factory, IUniswapV2Pair, IUniswapV2Router02,
    report::{Reverted, TxReport, confirm},
};

pub const MAX_BPS: u16 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum LiquidityError {
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    Reverted(#[from] Reverted),
    #[error("pair already exists at {0}")]
    PairExists(Address),
    #[error("a pair needs two distinct tokens, got {0} twice")]
    IdenticalTokens(Address),
    #[error("slippage of {0} bps exceeds 100%")]
    Slippage(u16),
    #[error("node returned no latest block")]
    NoLatestBlock,
}

impl From<alloy::transports::TransportError> for LiquidityError {
    fn from(err: alloy::transports::TransportError) -> Self {
        Self::Contract(err.into())
    }
}

/// Lower bound accepted for `amount` under a slippage tolerance in basis points
pub fn min_amount(amount: U256, slippage_bps: u16) -> Result<U256, LiquidityError> {
    if slippage_bps > MAX_BPS {
        return Err(LiquidityError::Slippage(slippage_bps));
    }
    let keep = U256::from(MAX_BPS - slippage_bps);
    let max = U256::from(MAX_BPS);
    // split to stay clear of overflow for amounts near U256::MAX
    Ok(amount / max * keep + amount % max * keep / max)
}

/// Create the pair for `(token_a, token_b)` through `factory` and return its address
pub async fn create_pair<P: Provider>(
    provider: &P,
    factory: Address,
    token_a: Address,
    token_b: Address,
) -> Result<Address, LiquidityError> {
    if token_a == token_b {
        return Err(LiquidityError::IdenticalTokens(token_a));
    }
    let contract = IUniswapV2Factory::new(factory, provider);
    let existing = contract.getPair(token_a, token_b).call().await?;
    if existing != Address::ZERO {
        return Err(LiquidityError::PairExists(existing));
    }

    tracing::info!(%factory, %token_a, %token_b, "creating pair");
    let pending_tx = contract.createPair(token_a, token_b).send().await?;
    TxReport::from_receipt("createPair", &confirm("createPair", pending_tx).await?)
        .ensure_success()?;

    let pair = contract.getPair(token_a, token_b).call().await?;
    tracing::info!("created pair at {pair:#x}");
    Ok(pair)
}

#[derive(Debug, Clone)]
pub struct LiquidityParams {
    pub token_a: Address,
    pub token_b: Address,
    pub amount_a: U256,
    pub amount_b: U256,
    pub slippage_bps: u16,
    /// Receiver of the LP tokens.
    pub to: Address,
    /// Seconds after the latest block's timestamp.
    pub deadline_secs: u64,
}

#[derive(Debug, Clone)]
pub struct LiquidityReport {
    pub amount_a: U256,
    pub amount_b: U256,
    pub liquidity: U256,
    pub txs: Vec<TxReport>,
}

impl fmt::Display for LiquidityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "added liquidity: amountA={} amountB={} lp={}",
            self.amount_a, self.amount_b, self.liquidity
        )?;
        for tx in &self.txs {
            writeln!(f, "  {tx}")?;
        }
        Ok(())
    }
}

async fn deadline<P: Provider>(provider: &P, secs: u64) -> Result<U256, LiquidityError> {
    let block = provider
        .get_block_by_number(BlockNumberOrTag::Latest)
        .await?
        .ok_or(LiquidityError::NoLatestBlock)?;
    Ok(U256::from(block.header.timestamp.saturating_add(secs)))
}

async fn approve<P: Provider>(
    provider: &P,
    token: Address,
    spender: Address,
    amount: U256,
) -> Result<TxReport, LiquidityError> {
    let pending_tx = IERC20::new(token, provider)
        .approve(spender, amount)
        .send()
        .await?;
    Ok(TxReport::from_receipt("approve", &confirm("approve", pending_tx).await?).ensure_success()?)
}

/// Approve `router` for both tokens and call `addLiquidity`
pub async fn add_liquidity<P: Provider>(
    provider: &P,
    router: Address,
    params: LiquidityParams,
) -> Result<LiquidityReport, LiquidityError> {
    if params.token_a == params.token_b {
        return Err(LiquidityError::IdenticalTokens(params.token_a));
    }
    let amount_a_min = min_amount(params.amount_a, params.slippage_bps)?;
    let amount_b_min = min_amount(params.amount_b, params.slippage_bps)?;

    let mut txs = vec![
        approve(provider, params.token_a, router, params.amount_a).await?,
        approve(provider, params.token_b, router, params.amount_b).await?,
    ];

    let deadline = deadline(provider, params.deadline_secs).await?;
    let contract = IUniswapV2Router02::new(router, provider);
    let call = contract.addLiquidity(
        params.token_a,
        params.token_b,
        params.amount_a,
        params.amount_b,
        amount_a_min,
        amount_b_min,
        params.to,
        deadline,
    );
    // dry run first: returns what the router will take and mint
    let expected = call.call().await?;
    tracing::info!(
        %router, amount_a = %expected.amountA, amount_b = %expected.amountB,
        liquidity = %expected.liquidity, "adding liquidity"
    );

    let pending_tx = call.send().await?;
    txs.push(
        TxReport::from_receipt("addLiquidity", &confirm("addLiquidity", pending_tx).await?)
            .ensure_success()?,
    );
    Ok(LiquidityReport {
        amount_a: expected.amountA,
        amount_b: expected.amountB,
        liquidity: expected.liquidity,
        txs,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReserves {
    pub pair: Address,
    pub token0: Address,
    pub token1: Address,
    pub reserve0: U256,
    pub reserve1: U256,
    pub block_timestamp_last: u32,
}

impl fmt::Display for PairReserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pair {}: {} reserve0={} / {} reserve1={} (updated at {})",
            self.pair,
            self.token0,
            self.reserve0,
            self.token1,
            self.reserve1,
            self.block_timestamp_last
        )
    }
}

pub async fn reserves<P: Provider>(provider: &P, pair: Address) -> ContractResult<PairReserves> {
    let contract = IUniswapV2Pair::new(pair, provider);
    let token0 = contract.token0().call().await?;
    let token1 = contract.token1().call().await?;
    let r = contract.getReserves().call().await?;
    Ok(PairReserves {
        pair,
        token0,
        token1,
        reserve0: U256::from(r.reserve0),
        reserve1: U256::from(r.reserve1),
        block_timestamp_last: r.blockTimestampLast,
    })
}
