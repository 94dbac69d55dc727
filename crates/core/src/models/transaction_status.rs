/// Outcome of a mined transaction, from its receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Confirmed { block_number: u64 },
    Reverted { block_number: u64 },
}
