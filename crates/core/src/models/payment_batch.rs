use crate::prelude::*;

/// A batch previously settled by the contract, as returned by
/// `getPaymentHistory`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Builder)]
pub struct PaymentBatch {
    #[getset(get = "pub")]
    recipients: Vec<EthAccountId>,

    #[getset(get = "pub")]
    amounts: Vec<U256>,

    #[getset(get = "pub")]
    names: Vec<String>,

    /// Unix seconds of the block that included the batch.
    #[getset(get_copy = "pub")]
    timestamp: u64,
}
