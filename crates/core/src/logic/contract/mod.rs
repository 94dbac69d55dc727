mod json_rpc;
mod submit;

pub use json_rpc::*;
pub use submit::*;

use crate::prelude::*;

/// Node side of a deployed `BatchPay` contract.
///
/// Signing is left to the node (or the wallet behind it): `send_batch` asks
/// it to sign and broadcast on behalf of `from`.
#[allow(async_fn_in_trait)]
pub trait BatchPayContract {
    /// Chain id the node is currently connected to.
    async fn chain_id(&self) -> Result<u64, ContractError>;

    /// Broadcasts `batchPay` with `call.value()` attached.
    async fn send_batch(&self, from: EthAccountId, call: &BatchPayCall) -> Result<TxHash, ContractError>;

    /// `None` while the transaction is still pending.
    async fn transaction_status(
        &self,
        tx_hash: &TxHash,
    ) -> Result<Option<TransactionStatus>, ContractError>;

    /// Batches previously sent by `payer`, in contract storage order.
    async fn payment_history(&self, payer: EthAccountId) -> Result<Vec<PaymentBatch>, ContractError>;
}
