use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("RPC url invalid {bad_value}")]
    RpcUrlInvalid { bad_value: String },

    #[error(transparent)]
    UnknownChain(#[from] UnknownChain),

    #[error("Contract address invalid: {0}")]
    ContractAddressInvalid(InvalidAddress),

    #[error("Sender address invalid: {0}")]
    SenderAddressInvalid(InvalidAddress),

    #[error("Account address invalid: {0}")]
    AccountAddressInvalid(InvalidAddress),

    #[error("Entry `{bad_value}` must be `address,name,amount`")]
    EntryMalformed { bad_value: String },

    #[error("Give a recipients file with --file or at least one --entry")]
    NoRecipientsGiven,

    #[error("Row numbers start at 1")]
    RowNumberMustBePositive,

    #[error("Max polls cannot be zero")]
    MaxPollsCannotBeZero,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("Core error: {0}")]
    CoreError(#[from] Error),

    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    #[error("Invalid log level set with `RUST_LOG`, got: {bad_value}")]
    InvalidLogLevel { bad_value: String },

    #[error("Failed to install logger: {underlying}")]
    LoggerInstall { underlying: String },

    #[error("Cannot remove row {row}, the batch has {len} rows")]
    NoSuchRow { row: usize, len: usize },

    #[error("Failed to write {path}: {underlying}")]
    WriteFailed { path: String, underlying: String },

    #[error("Failed to serialize output: {underlying}")]
    Serialize { underlying: String },
}
