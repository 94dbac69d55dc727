use crate::prelude::*;

use std::time::Duration;

/// Submits the valid recipients of `draft` as one `batchPay` transaction.
///
/// Refuses, before anything is broadcast, when no sender is configured,
/// when the node is on another chain, or when nothing valid is left to pay.
pub async fn submit_batch<C: BatchPayContract>(
    contract: &C,
    parameters: &BatchPayParameters,
    draft: &PaymentDraft,
) -> Result<TxHash, ContractError> {
    let Some(sender) = *parameters.sender() else {
        return Err(ContractError::WalletNotConnected);
    };

    let expected = *parameters.chain();
    let actual_chain_id = contract.chain_id().await?;
    if actual_chain_id != expected.chain_id() {
        return Err(ContractError::WrongNetwork {
            expected,
            actual_chain_id,
        });
    }

    let Some(call) = draft.batch_call()? else {
        return Err(ContractError::NoValidRecipients);
    };

    let tx_hash = contract.send_batch(sender, &call).await?;
    info!("Submitted batch transaction {tx_hash}");
    Ok(tx_hash)
}

/// Polls for the receipt of `tx_hash` until it is mined or `max_polls`
/// attempts have passed.
pub async fn wait_for_confirmation<C: BatchPayContract>(
    contract: &C,
    tx_hash: &TxHash,
    poll_interval: Duration,
    max_polls: usize,
) -> Result<u64, ContractError> {
    for attempt in 1..=max_polls {
        match contract.transaction_status(tx_hash).await? {
            Some(TransactionStatus::Confirmed { block_number }) => {
                info!("Transaction {tx_hash} confirmed in block {block_number}");
                return Ok(block_number);
            }
            Some(TransactionStatus::Reverted { block_number }) => {
                error!("Transaction {tx_hash} reverted in block {block_number}");
                return Err(ContractError::TransactionReverted { tx_hash: *tx_hash });
            }
            None => {
                debug!("Transaction {tx_hash} pending (poll {attempt}/{max_polls})");
                if attempt < max_polls {
                    tokio::time::sleep(poll_interval).await;
                }
            }
        }
    }
    Err(ContractError::ConfirmationTimedOut {
        tx_hash: *tx_hash,
        attempts: max_polls,
    })
}

/// Fetches the payer's history in the order the contract stores it.
pub async fn fetch_history<C: BatchPayContract>(
    contract: &C,
    payer: EthAccountId,
) -> Result<Vec<PaymentBatch>, ContractError> {
    let batches = contract.payment_history(payer).await?;
    info!("Fetched {} past batches for {payer}", batches.len());
    Ok(batches)
}
