use crate::prelude::*;

use std::time::Duration;

pub const DEFAULT_RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_RECEIPT_POLLS: usize = 90;

/// Everything needed to talk to a deployed `BatchPay` contract.
#[derive(Debug, Clone, Getters, Builder)]
pub struct BatchPayParameters {
    /// JSON-RPC endpoint of the node.
    #[getset(get = "pub")]
    rpc_url: Url,

    #[getset(get = "pub")]
    #[builder(default)]
    chain: Chain,

    #[getset(get = "pub")]
    contract_address: EthAccountId,

    /// Account the node signs for. `None` means no wallet is connected.
    #[getset(get = "pub")]
    sender: Option<EthAccountId>,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_RECEIPT_POLL_INTERVAL)]
    receipt_poll_interval: Duration,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_MAX_RECEIPT_POLLS)]
    max_receipt_polls: usize,
}
