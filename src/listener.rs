//! Event listeners: live subscriptions over pubsub and one-shot historical queries

use std::pin::pin;

use alloy::{
    eips::BlockNumberOrTag,
    primitives::Address,
    providers::Provider,
    rpc::types::{Filter, Log},
    sol_types::SolEvent,
};
use futures::StreamExt;

use crate::{ContractResult, provider::PubSubProvider};

/// Subscribe to `E` on `contract` and hand every decoded log to `on_event`.
///
/// Returns once `limit` logs were seen (never, without a limit) or the subscription closed,
/// with the number of logs seen.
pub async fn listen<E, F>(
    provider: &PubSubProvider,
    contract: Address,
    from_block: BlockNumberOrTag,
    limit: Option<usize>,
    mut on_event: F,
) -> anyhow::Result<usize>
where
    E: SolEvent,
    F: FnMut(&Log<E>),
{
    let events = provider.event_stream::<E>(contract, from_block).await?;
    let mut events = pin!(events.take(limit.unwrap_or(usize::MAX)));
    tracing::info!(%contract, event = E::SIGNATURE, "listening");

    let mut seen = 0;
    while let Some(log) = events.next().await {
        seen += 1;
        on_event(&log);
    }
    tracing::info!(seen, "event stream ended");
    Ok(seen)
}

/// `eth_getLogs` for `E` on `contract` within `[from_block, to_block]`
pub async fn past_events<P, E>(
    provider: &P,
    contract: Address,
    from_block: BlockNumberOrTag,
    to_block: BlockNumberOrTag,
) -> ContractResult<Vec<Log<E>>>
where
    P: Provider,
    E: SolEvent,
{
    let filter = Filter::new()
        .address(contract)
        .event(E::SIGNATURE)
        .from_block(from_block)
        .to_block(to_block);

    let logs = provider.get_logs(&filter).await?;
    let decoded = logs
        .iter()
        .map(|log| log.log_decode_validate::<E>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| alloy::contract::Error::AbiError(err.into()))?;
    Ok(decoded)
}
