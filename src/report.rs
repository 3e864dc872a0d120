//! Transaction outcome reporting

use std::fmt;

use alloy::{
    network::Ethereum, primitives::TxHash, providers::PendingTransactionBuilder,
    rpc::types::TransactionReceipt,
};

use crate::ContractResult;

/// A mined transaction that did not succeed.
#[derive(Debug, thiserror::Error)]
#[error("{label}: transaction {tx_hash} reverted")]
pub struct Reverted {
    pub label: String,
    pub tx_hash: TxHash,
}

/// What a script prints once its transaction is mined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReport {
    pub label: String,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub success: bool,
}

impl TxReport {
    pub fn from_receipt(label: &str, receipt: &TransactionReceipt) -> Self {
        Self {
            label: label.to_string(),
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            success: receipt.status(),
        }
    }

    pub fn ensure_success(self) -> Result<Self, Reverted> {
        if self.success {
            Ok(self)
        } else {
            Err(Reverted {
                label: self.label,
                tx_hash: self.tx_hash,
            })
        }
    }
}

impl fmt::Display for TxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "ok" } else { "reverted" };
        write!(f, "{}: {status} tx={}", self.label, self.tx_hash)?;
        if let Some(block) = self.block_number {
            write!(f, " block={block}")?;
        }
        write!(f, " gas={}", self.gas_used)
    }
}

/// Wait for a sent transaction to be mined (with logging)
pub async fn confirm(
    label: &str,
    pending_tx: PendingTransactionBuilder<Ethereum>,
) -> ContractResult<TransactionReceipt> {
    let tx_hash = *pending_tx.tx_hash();
    tracing::info!(%tx_hash, "{label}: waiting for tx to be mined");

    let receipt = pending_tx.get_receipt().await?;
    tracing::info!(%receipt.gas_used, %tx_hash, success = receipt.status(), "tx mined");
    Ok(receipt)
}
