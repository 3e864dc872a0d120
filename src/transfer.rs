//! Native coin and ERC-20 transfers

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};

use crate::{
    IERC20,
    report::{Reverted, TxReport, confirm},
};

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    Reverted(#[from] Reverted),
}

/// Send `amount` wei of the native coin to `to`
pub async fn send_native<P: Provider>(
    provider: &P,
    to: Address,
    amount: U256,
) -> Result<TxReport, TransferError> {
    let tx = TransactionRequest::default().with_to(to).with_value(amount);
    tracing::info!(%to, %amount, "sending native transfer");
    let pending_tx = provider
        .send_transaction(tx)
        .await
        .map_err(alloy::contract::Error::from)?;
    let receipt = confirm("native transfer", pending_tx).await?;
    Ok(TxReport::from_receipt("native transfer", &receipt).ensure_success()?)
}

/// Call ERC-20 `transfer(to, amount)` with `amount` in raw token units
pub async fn send_token<P: Provider>(
    provider: &P,
    token: Address,
    to: Address,
    amount: U256,
) -> Result<TxReport, TransferError> {
    let contract = IERC20::new(token, provider);
    tracing::info!(%token, %to, %amount, "sending token transfer");
    let pending_tx = contract.transfer(to, amount).send().await?;
    let receipt = confirm("token transfer", pending_tx).await?;
    Ok(TxReport::from_receipt("token transfer", &receipt).ensure_success()?)
}
