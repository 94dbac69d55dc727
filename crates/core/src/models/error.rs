use crate::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Contract error {0}")]
    Contract(#[from] ContractError),

    #[error("ABI error {0}")]
    Abi(#[from] AbiError),

    #[error("Invalid address {0}")]
    InvalidAddress(#[from] InvalidAddress),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Ethereum address: {bad_value}")]
pub struct InvalidAddress {
    pub bad_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown chain `{bad_value}`, expected one of: base, base-sepolia")]
pub struct UnknownChain {
    pub bad_value: String,
}

/// Failure to scale a decimal string into a fixed-point integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("`{bad_value}` is not a plain decimal number")]
    NotADecimal { bad_value: String },

    #[error("`{bad_value}` has more than {decimals} fractional digits")]
    TooManyDecimals { bad_value: String, decimals: usize },

    #[error("`{bad_value}` does not fit in 256 bits")]
    Overflow { bad_value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
    #[error("Read of 32 bytes at offset {offset} is out of bounds (data length {len})")]
    OutOfBounds { offset: usize, len: usize },

    #[error("Offset arithmetic overflowed at offset {offset}")]
    OffsetOverflow { offset: usize },

    #[error("Value at offset {offset} does not fit the target integer type")]
    ValueTooLarge { offset: usize },

    #[error("Word at offset {offset} is not a left padded address")]
    DirtyAddress { offset: usize },

    #[error("String at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("Return data is not valid hex: {underlying}")]
    InvalidHex { underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("Wallet not connected, no sender account configured")]
    WalletNotConnected,

    #[error("Wrong network, expected {expected} (chain id {}), node reports chain id {actual_chain_id}", expected.chain_id())]
    WrongNetwork { expected: Chain, actual_chain_id: u64 },

    #[error("No valid recipients to pay")]
    NoValidRecipients,

    #[error("Request `{method}` failed: {underlying}")]
    Transport { method: String, underlying: String },

    #[error("Node rejected `{method}` with code {code}: {message}")]
    Rejected {
        method: String,
        code: i64,
        message: String,
    },

    #[error("Unexpected response to `{method}`: {underlying}")]
    UnexpectedResponse { method: String, underlying: String },

    #[error("Transaction {tx_hash} reverted")]
    TransactionReverted { tx_hash: TxHash },

    #[error("Transaction {tx_hash} not confirmed after {attempts} receipt polls")]
    ConfirmationTimedOut { tx_hash: TxHash, attempts: usize },

    #[error("ABI error {0}")]
    Abi(#[from] AbiError),

    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddress),
}
