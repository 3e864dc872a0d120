//! Read-only balance and token state queries

use std::fmt;

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};

use crate::{ContractResult, IERC20, amount::format_amount};

/// Decimals assumed for tokens that do not implement the optional `decimals()`.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Native coin balance in wei
pub async fn native_balance<P: Provider>(provider: &P, account: Address) -> ContractResult<U256> {
    Ok(provider.get_balance(account).await?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    pub token: Address,
    pub holder: Address,
    pub symbol: Option<String>,
    pub decimals: u8,
    pub raw: U256,
}

impl TokenBalance {
    pub fn formatted(&self) -> String {
        format_amount(self.raw, self.decimals).unwrap_or_else(|_| self.raw.to_string())
    }
}

impl fmt::Display for TokenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol.as_deref().unwrap_or("tokens");
        write!(f, "{} holds {} {symbol}", self.holder, self.formatted())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub token: Address,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: u8,
    pub total_supply: U256,
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supply = format_amount(self.total_supply, self.decimals)
            .unwrap_or_else(|_| self.total_supply.to_string());
        write!(
            f,
            "{} ({}) at {}: decimals={} supply={supply}",
            self.name.as_deref().unwrap_or("?"),
            self.symbol.as_deref().unwrap_or("?"),
            self.token,
            self.decimals,
        )
    }
}

/// `decimals()`, falling back to [`DEFAULT_DECIMALS`] for tokens without it
pub async fn token_decimals<P: Provider>(provider: &P, token: Address) -> u8 {
    match IERC20::new(token, provider).decimals().call().await {
        Ok(decimals) => decimals,
        Err(err) => {
            tracing::warn!(%token, %err, "decimals() unavailable, assuming {DEFAULT_DECIMALS}");
            DEFAULT_DECIMALS
        }
    }
}

async fn token_symbol<P: Provider>(provider: &P, token: Address) -> Option<String> {
    IERC20::new(token, provider).symbol().call().await.ok()
}

pub async fn token_balance<P: Provider>(
    provider: &P,
    token: Address,
    holder: Address,
) -> ContractResult<TokenBalance> {
    let raw = IERC20::new(token, provider).balanceOf(holder).call().await?;
    Ok(TokenBalance {
        token,
        holder,
        symbol: token_symbol(provider, token).await,
        decimals: token_decimals(provider, token).await,
        raw,
    })
}

pub async fn token_info<P: Provider>(provider: &P, token: Address) -> ContractResult<TokenInfo> {
    let contract = IERC20::new(token, provider);
    let total_supply = contract.totalSupply().call().await?;
    Ok(TokenInfo {
        token,
        name: contract.name().call().await.ok(),
        symbol: token_symbol(provider, token).await,
        decimals: token_decimals(provider, token).await,
        total_supply,
    })
}
